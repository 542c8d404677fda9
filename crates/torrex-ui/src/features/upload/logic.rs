//! Upload parsing helpers.

/// Split a comma-separated URL list, trimming entries and dropping empties.
#[must_use]
pub fn split_images(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::split_images;

    #[test]
    fn blank_input_yields_no_images() {
        assert!(split_images("").is_empty());
        assert!(split_images(" , ,").is_empty());
    }

    #[test]
    fn entries_are_trimmed() {
        assert_eq!(
            split_images(" a.png ,b.png"),
            vec!["a.png".to_string(), "b.png".to_string()]
        );
    }
}
