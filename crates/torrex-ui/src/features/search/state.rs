//! Search feature state.
//!
//! # Design
//! - Keep form inputs as strings for lossless editing.
//! - Remember the last submitted request so admin actions can re-run it.
//! - `results` stays `None` until the first search completes.

use crate::core::validation::optional;
use torrex_api_models::{SearchRequest, SortField, SortOrder, TorrentRecord};

/// Mutable search form state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchForm {
    /// Title filter.
    pub title: String,
    /// Description filter.
    pub description: String,
    /// Selected category wire values.
    pub categories: Vec<String>,
    /// Lower bound on the upload date (`yyyy-mm-dd`).
    pub date_from: String,
    /// Upper bound on the upload date (`yyyy-mm-dd`).
    pub date_to: String,
    /// Sort field.
    pub sort_by: SortField,
    /// Sort order.
    pub order: SortOrder,
}

impl SearchForm {
    /// Add or remove a category from the selection.
    pub fn toggle_category(&mut self, value: &str) {
        if let Some(index) = self.categories.iter().position(|item| item == value) {
            self.categories.remove(index);
        } else {
            self.categories.push(value.to_string());
        }
    }

    /// Build the request body, omitting empty filters.
    #[must_use]
    pub fn to_request(&self) -> SearchRequest {
        SearchRequest {
            title: optional(&self.title),
            description: optional(&self.description),
            categories: self.categories.clone(),
            date_from: optional(&self.date_from),
            date_to: optional(&self.date_to),
            sort_by: Some(self.sort_by),
            order: Some(self.order),
        }
    }
}

/// Search slice held in the app store.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchState {
    /// Last submitted request, re-run after an admin deletion.
    pub last_request: Option<SearchRequest>,
    /// Results of the last accepted search.
    pub results: Option<Vec<TorrentRecord>>,
}

impl SearchState {
    /// Drop a torrent from the cached results.
    pub fn remove(&mut self, torrent_id: &str) {
        if let Some(results) = self.results.as_mut() {
            results.retain(|record| record.id != torrent_id);
        }
    }
}

/// Parse the sort field select value.
#[must_use]
pub fn parse_sort_field(value: &str) -> SortField {
    match value {
        "size" => SortField::Size,
        _ => SortField::UploadDate,
    }
}

/// Parse the order select value.
#[must_use]
pub fn parse_sort_order(value: &str) -> SortOrder {
    match value {
        "asc" => SortOrder::Asc,
        _ => SortOrder::Desc,
    }
}

/// Select value for a sort field.
#[must_use]
pub const fn sort_field_value(field: SortField) -> &'static str {
    match field {
        SortField::UploadDate => "upload_date",
        SortField::Size => "size",
    }
}

/// Select value for a sort order.
#[must_use]
pub const fn sort_order_value(order: SortOrder) -> &'static str {
    match order {
        SortOrder::Asc => "asc",
        SortOrder::Desc => "desc",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_filters_are_omitted() {
        let form = SearchForm {
            title: "  ".into(),
            description: String::new(),
            date_from: "2024-01-01".into(),
            ..SearchForm::default()
        };
        let request = form.to_request();
        assert_eq!(request.title, None);
        assert_eq!(request.description, None);
        assert_eq!(request.date_from.as_deref(), Some("2024-01-01"));
        assert_eq!(request.date_to, None);
        assert!(request.categories.is_empty());
        assert_eq!(request.sort_by, Some(SortField::UploadDate));
        assert_eq!(request.order, Some(SortOrder::Desc));
    }

    #[test]
    fn toggling_categories_adds_then_removes() {
        let mut form = SearchForm::default();
        form.toggle_category("Film");
        form.toggle_category("Musica");
        form.toggle_category("Film");
        assert_eq!(form.categories, vec!["Musica".to_string()]);
    }

    #[test]
    fn sort_values_round_trip_through_selects() {
        for field in [SortField::UploadDate, SortField::Size] {
            assert_eq!(parse_sort_field(sort_field_value(field)), field);
        }
        for order in [SortOrder::Asc, SortOrder::Desc] {
            assert_eq!(parse_sort_order(sort_order_value(order)), order);
        }
        assert_eq!(parse_sort_field("bogus"), SortField::UploadDate);
    }

    #[test]
    fn remove_drops_matching_result() {
        let mut state = SearchState {
            last_request: None,
            results: Some(vec![
                TorrentRecord {
                    id: "a".into(),
                    ..TorrentRecord::default()
                },
                TorrentRecord {
                    id: "b".into(),
                    ..TorrentRecord::default()
                },
            ]),
        };
        state.remove("a");
        let ids: Vec<_> = state
            .results
            .unwrap_or_default()
            .into_iter()
            .map(|record| record.id)
            .collect();
        assert_eq!(ids, vec!["b".to_string()]);
    }
}
