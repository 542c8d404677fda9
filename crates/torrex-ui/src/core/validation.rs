//! Client-side form validation.
//!
//! # Design
//! - Validation runs before any request; a failure never reaches the network.
//! - Errors are typed and localized at the edge through the translation bundle.

use crate::core::char_count::{CharCount, MAX_TEXT_LEN};
use crate::i18n::TranslationBundle;
use std::fmt;
use thiserror::Error;

/// Form fields referenced by validation errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    /// Torrent title.
    Title,
    /// Torrent description.
    Description,
    /// Torrent size.
    Size,
    /// Username.
    Username,
    /// Email address.
    Email,
    /// Password.
    Password,
    /// Comment text.
    Text,
}

impl FormField {
    const fn key(self) -> &'static str {
        match self {
            Self::Title => "fields.title",
            Self::Description => "fields.description",
            Self::Size => "fields.size",
            Self::Username => "fields.username",
            Self::Email => "fields.email",
            Self::Password => "fields.password",
            Self::Text => "fields.text",
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Size => "size",
            Self::Username => "username",
            Self::Email => "email",
            Self::Password => "password",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Validation failures detected before submitting a form.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FormError {
    /// A mandatory field was left empty.
    #[error("{0} is required")]
    Required(FormField),
    /// A bounded field exceeds its limit.
    #[error("{field} exceeds {max} characters")]
    TooLong {
        /// Offending field.
        field: FormField,
        /// Maximum accepted length.
        max: usize,
    },
    /// A numeric field did not parse as a non-negative number.
    #[error("{0} must be a non-negative number")]
    InvalidNumber(FormField),
    /// Comment rating outside 1..=5.
    #[error("rating must be between 1 and 5")]
    RatingRange,
    /// Period statistics need both bounds.
    #[error("both dates are required")]
    DatesRequired,
    /// User search needs a username.
    #[error("a username is required")]
    UsernameRequired,
}

impl FormError {
    /// Localized message for the alert channel.
    #[must_use]
    pub fn message(&self, bundle: &TranslationBundle) -> String {
        let field_label = |field: FormField| bundle.text(field.key(), field.name());
        match self {
            Self::Required(field) => {
                bundle.fill("validation.required", &[("field", &field_label(*field))])
            }
            Self::TooLong { field, max } => bundle.fill(
                "validation.too_long",
                &[("field", &field_label(*field)), ("max", &max.to_string())],
            ),
            Self::InvalidNumber(field) => bundle.fill(
                "validation.invalid_number",
                &[("field", &field_label(*field))],
            ),
            Self::RatingRange => bundle.text("validation.rating_range", "rating"),
            Self::DatesRequired => bundle.text("validation.dates_required", "dates"),
            Self::UsernameRequired => bundle.text("validation.username_required", "username"),
        }
    }
}

/// Trim a mandatory field, rejecting blank input.
pub fn required(field: FormField, value: &str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormError::Required(field));
    }
    Ok(trimmed.to_string())
}

/// Trim an optional field, mapping blank input to `None`.
#[must_use]
pub fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Reject text over the shared length limit.
pub fn bounded(field: FormField, value: &str) -> Result<(), FormError> {
    if CharCount::of(value).is_over() {
        return Err(FormError::TooLong {
            field,
            max: MAX_TEXT_LEN,
        });
    }
    Ok(())
}

/// Parse a mandatory non-negative number.
pub fn non_negative_number(field: FormField, value: &str) -> Result<f64, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormError::Required(field));
    }
    let parsed = trimmed
        .parse::<f64>()
        .map_err(|_| FormError::InvalidNumber(field))?;
    if !parsed.is_finite() || parsed < 0.0 {
        return Err(FormError::InvalidNumber(field));
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LocaleCode;

    #[test]
    fn required_trims_and_rejects_blank() {
        assert_eq!(required(FormField::Title, "  Ubuntu "), Ok("Ubuntu".into()));
        assert_eq!(
            required(FormField::Title, "   "),
            Err(FormError::Required(FormField::Title))
        );
        assert_eq!(optional("  "), None);
        assert_eq!(optional(" x "), Some("x".into()));
    }

    #[test]
    fn numbers_must_be_finite_and_non_negative() {
        assert_eq!(non_negative_number(FormField::Size, " 700.5 "), Ok(700.5));
        assert_eq!(
            non_negative_number(FormField::Size, "-1"),
            Err(FormError::InvalidNumber(FormField::Size))
        );
        assert_eq!(
            non_negative_number(FormField::Size, "big"),
            Err(FormError::InvalidNumber(FormField::Size))
        );
        assert_eq!(
            non_negative_number(FormField::Size, "inf"),
            Err(FormError::InvalidNumber(FormField::Size))
        );
    }

    #[test]
    fn bounded_text_respects_limit() {
        assert!(bounded(FormField::Text, &"a".repeat(160)).is_ok());
        assert_eq!(
            bounded(FormField::Text, &"a".repeat(161)),
            Err(FormError::TooLong {
                field: FormField::Text,
                max: 160
            })
        );
    }

    #[test]
    fn messages_are_localized() {
        let italian = TranslationBundle::new(LocaleCode::It);
        assert_eq!(
            FormError::Required(FormField::Title).message(&italian),
            "Il campo Titolo è obbligatorio"
        );
        let english = TranslationBundle::new(LocaleCode::En);
        assert_eq!(
            FormError::TooLong {
                field: FormField::Description,
                max: 160
            }
            .message(&english),
            "Description exceeds 160 characters"
        );
        assert_eq!(
            FormError::DatesRequired.to_string(),
            "both dates are required"
        );
    }
}
