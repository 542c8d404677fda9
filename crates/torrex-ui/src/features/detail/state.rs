//! Comment form state for the detail page.

use crate::core::char_count::MAX_TEXT_LEN;
use crate::core::format::RATING_SCALE;
use crate::core::validation::{FormError, FormField, bounded, required};
use std::rc::Rc;
use torrex_api_models::CommentRequest;
use yew::functional::Reducible;

/// `maxlength` of the comment textarea.
pub const COMMENT_MAX_LEN: usize = MAX_TEXT_LEN;

/// Mutable comment form state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommentForm {
    /// Comment text, at most 160 characters.
    pub text: String,
    /// Rating between 1 and 5.
    pub rating: u8,
}

impl Default for CommentForm {
    fn default() -> Self {
        Self {
            text: String::new(),
            rating: 1,
        }
    }
}

impl CommentForm {
    /// Validate and build the comment request for a torrent.
    pub fn to_request(&self, torrent_id: &str) -> Result<CommentRequest, FormError> {
        if !(1..=RATING_SCALE).contains(&self.rating) {
            return Err(FormError::RatingRange);
        }
        let text = required(FormField::Text, &self.text)?;
        bounded(FormField::Text, &text)?;
        Ok(CommentRequest {
            torrent_id: torrent_id.to_string(),
            text,
            rating: self.rating,
        })
    }
}

/// Parse the rating select value, defaulting to one star.
#[must_use]
pub fn parse_rating(value: &str) -> u8 {
    value
        .parse::<u8>()
        .ok()
        .filter(|rating| (1..=RATING_SCALE).contains(rating))
        .unwrap_or(1)
}

/// Reload generation for the detail page; each dispatch bumps the latest value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reloads(pub u32);

impl Reducible for Reloads {
    type Action = ();

    fn reduce(self: Rc<Self>, (): ()) -> Rc<Self> {
        Rc::new(Self(self.0.wrapping_add(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_comment_builds_request() {
        let form = CommentForm {
            text: " Ottimo ".into(),
            rating: 4,
        };
        let request = form.to_request("t1").expect("valid");
        assert_eq!(request.torrent_id, "t1");
        assert_eq!(request.text, "Ottimo");
        assert_eq!(request.rating, 4);
    }

    #[test]
    fn rating_must_be_in_range() {
        let form = CommentForm {
            text: "ok".into(),
            rating: 0,
        };
        assert_eq!(form.to_request("t1"), Err(FormError::RatingRange));
        assert_eq!(parse_rating("7"), 1);
        assert_eq!(parse_rating("3"), 3);
    }

    #[test]
    fn empty_or_long_text_is_rejected() {
        let empty = CommentForm::default();
        assert_eq!(
            empty.to_request("t1"),
            Err(FormError::Required(FormField::Text))
        );
        let long = CommentForm {
            text: "x".repeat(200),
            rating: 5,
        };
        assert!(matches!(
            long.to_request("t1"),
            Err(FormError::TooLong { .. })
        ));
    }

    #[test]
    fn textarea_limit_matches_validation() {
        let at_limit = CommentForm {
            text: "x".repeat(COMMENT_MAX_LEN),
            rating: 3,
        };
        assert!(at_limit.to_request("t1").is_ok());
        let over = CommentForm {
            text: "x".repeat(COMMENT_MAX_LEN + 1),
            rating: 3,
        };
        assert!(over.to_request("t1").is_err());
    }

    #[test]
    fn back_to_back_reloads_both_count() {
        let start = Rc::new(Reloads::default());
        let first = Rc::clone(&start).reduce(());
        let second = Rc::clone(&first).reduce(());
        assert_eq!(start.0, 0);
        assert_eq!(second.0, 2);
    }
}
