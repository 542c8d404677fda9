//! Upload form state.
//!
//! # Design
//! - Keep form inputs as strings for lossless editing.
//! - Convert to the API request only on submit.

use crate::core::validation::{
    FormError, FormField, bounded, non_negative_number, required,
};
use crate::features::upload::logic::split_images;
use torrex_api_models::UploadRequest;

/// Mutable upload form state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadForm {
    /// Torrent title.
    pub title: String,
    /// Description, at most 160 characters.
    pub description: String,
    /// Size in MB, as typed.
    pub size: String,
    /// Selected category wire values.
    pub categories: Vec<String>,
    /// Comma-separated image URLs.
    pub images: String,
}

impl UploadForm {
    /// Add or remove a category from the selection.
    pub fn toggle_category(&mut self, value: &str) {
        if let Some(index) = self.categories.iter().position(|item| item == value) {
            self.categories.remove(index);
        } else {
            self.categories.push(value.to_string());
        }
    }

    /// Validate and build the upload request.
    pub fn to_request(&self) -> Result<UploadRequest, FormError> {
        let title = required(FormField::Title, &self.title)?;
        let description = required(FormField::Description, &self.description)?;
        bounded(FormField::Description, &description)?;
        let size = non_negative_number(FormField::Size, &self.size)?;
        Ok(UploadRequest {
            title,
            description,
            size,
            categories: self.categories.clone(),
            images: split_images(&self.images),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> UploadForm {
        UploadForm {
            title: "Ubuntu 24.04".into(),
            description: "Desktop ISO".into(),
            size: "5800".into(),
            categories: vec!["Software".into()],
            images: "https://a/1.png, https://a/2.png,".into(),
        }
    }

    #[test]
    fn valid_form_builds_request() {
        let request = filled().to_request().expect("valid");
        assert_eq!(request.title, "Ubuntu 24.04");
        assert!((request.size - 5800.0).abs() < f64::EPSILON);
        assert_eq!(request.categories, vec!["Software".to_string()]);
        assert_eq!(
            request.images,
            vec!["https://a/1.png".to_string(), "https://a/2.png".to_string()]
        );
    }

    #[test]
    fn invalid_size_is_rejected() {
        let form = UploadForm {
            size: "abc".into(),
            ..filled()
        };
        assert_eq!(
            form.to_request(),
            Err(FormError::InvalidNumber(FormField::Size))
        );
    }

    #[test]
    fn long_description_is_rejected() {
        let form = UploadForm {
            description: "d".repeat(161),
            ..filled()
        };
        assert!(matches!(
            form.to_request(),
            Err(FormError::TooLong {
                field: FormField::Description,
                ..
            })
        ));
    }

    #[test]
    fn toggling_categories_is_idempotent_per_pair() {
        let mut form = UploadForm::default();
        form.toggle_category("Film");
        form.toggle_category("Film");
        assert!(form.categories.is_empty());
    }
}
