//! Search result view models.
//!
//! # Design
//! - Rendering is a pure function of the records and the session role.
//! - An empty list yields the placeholder, never an empty container.

use crate::core::format::{date_label, join_categories, rating_label, size_label};
use crate::i18n::TranslationBundle;
use torrex_api_models::TorrentRecord;

/// One card in the search results grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TorrentCard {
    /// Torrent identifier.
    pub id: String,
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// First image URL, if any.
    pub image: Option<String>,
    /// Size in GB.
    pub size: String,
    /// Upload date.
    pub date: String,
    /// Comma-joined categories.
    pub categories: String,
    /// Average rating or the N/A placeholder.
    pub rating: String,
    /// Whether the admin delete button is shown.
    pub can_delete: bool,
}

impl TorrentCard {
    /// Build a card from a backend record.
    #[must_use]
    pub fn from_record(record: &TorrentRecord, is_admin: bool, na: &str) -> Self {
        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            description: record.description.clone(),
            image: record.images.first().cloned(),
            size: size_label(record.size),
            date: date_label(record.upload_date.as_deref()),
            categories: join_categories(&record.categories),
            rating: rating_label(record.average_rating, na),
            can_delete: is_admin,
        }
    }
}

/// What the results area shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchResultsView {
    /// No search has completed yet.
    Idle,
    /// The search returned nothing.
    Empty(String),
    /// Result cards.
    Cards(Vec<TorrentCard>),
}

/// Build the results view for the current search state.
#[must_use]
pub fn build_results(
    results: Option<&[TorrentRecord]>,
    is_admin: bool,
    bundle: &TranslationBundle,
) -> SearchResultsView {
    match results {
        None => SearchResultsView::Idle,
        Some([]) => SearchResultsView::Empty(bundle.text("search.empty", "Nessun torrent trovato.")),
        Some(records) => {
            let na = bundle.text("common.na", "N/A");
            SearchResultsView::Cards(
                records
                    .iter()
                    .map(|record| TorrentCard::from_record(record, is_admin, &na))
                    .collect(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LocaleCode;

    fn record() -> TorrentRecord {
        TorrentRecord {
            id: "t1".into(),
            title: "Ubuntu".into(),
            description: "ISO".into(),
            size: 2048.0,
            categories: vec!["Software".into(), "Altro".into()],
            images: vec!["a.png".into(), "b.png".into()],
            upload_date: Some("Tue, 15 Oct 2024 10:00:00 GMT".into()),
            average_rating: None,
            ..TorrentRecord::default()
        }
    }

    #[test]
    fn empty_results_render_placeholder() {
        let bundle = TranslationBundle::new(LocaleCode::It);
        assert_eq!(
            build_results(Some(&[]), false, &bundle),
            SearchResultsView::Empty("Nessun torrent trovato.".into())
        );
        assert_eq!(build_results(None, false, &bundle), SearchResultsView::Idle);
    }

    #[test]
    fn cards_format_record_fields() {
        let bundle = TranslationBundle::new(LocaleCode::It);
        let records = vec![record()];
        let SearchResultsView::Cards(cards) = build_results(Some(&records), false, &bundle) else {
            panic!("expected cards");
        };
        let card = &cards[0];
        assert_eq!(card.image.as_deref(), Some("a.png"));
        assert_eq!(card.size, "2.00 GB");
        assert_eq!(card.date, "15/10/2024");
        assert_eq!(card.categories, "Software, Altro");
        assert_eq!(card.rating, "N/A");
        assert!(!card.can_delete);
    }

    #[test]
    fn admin_cards_offer_delete() {
        let card = TorrentCard::from_record(
            &TorrentRecord {
                images: Vec::new(),
                average_rating: Some(4.0),
                ..record()
            },
            true,
            "N/A",
        );
        assert!(card.can_delete);
        assert_eq!(card.image, None);
        assert_eq!(card.rating, "4.0");
    }
}
