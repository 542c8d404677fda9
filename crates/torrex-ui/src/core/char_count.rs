//! Remaining-character counter for bounded text inputs.

/// Maximum length of descriptions and comments.
pub const MAX_TEXT_LEN: usize = 160;
/// Remaining count below which the counter turns into a warning.
pub const WARN_BELOW: i64 = 20;

/// Counter state for one text value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharCount {
    /// Characters left before the limit; negative when over.
    pub remaining: i64,
}

impl CharCount {
    /// Count a text value in UTF-16 units, matching the browser `maxlength` rule.
    #[must_use]
    pub fn of(text: &str) -> Self {
        let used = i64::try_from(text.encode_utf16().count()).unwrap_or(i64::MAX);
        let max = i64::try_from(MAX_TEXT_LEN).unwrap_or(i64::MAX);
        Self {
            remaining: max.saturating_sub(used),
        }
    }

    /// Whether the warning colour applies.
    #[must_use]
    pub const fn is_warning(self) -> bool {
        self.remaining < WARN_BELOW
    }

    /// Whether the text exceeds the limit.
    #[must_use]
    pub const fn is_over(self) -> bool {
        self.remaining < 0
    }

    /// CSS colour for the counter.
    #[must_use]
    pub const fn color(self) -> &'static str {
        if self.is_warning() { "red" } else { "inherit" }
    }
}
