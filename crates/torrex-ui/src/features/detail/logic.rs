//! Torrent detail view model.
//!
//! # Design
//! - Build everything the page shows from one record plus the session.
//! - Session-dependent controls are modelled as explicit variants, not flags in markup.

use crate::core::format::{
    RATING_SCALE, date_label, join_categories, rating_label, rating_stars, size_label,
};
use crate::core::session::SessionState;
use crate::i18n::TranslationBundle;
use crate::services::response::{ApiError, alert_text};
use torrex_api_models::{Comment, TorrentRecord};

/// Download control shown under the metadata.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DownloadAccess {
    /// Download button.
    Button,
    /// Prompt linking to the login form.
    LoginPrompt,
}

/// One rendered comment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommentItem {
    /// Comment identifier.
    pub id: String,
    /// Author identifier.
    pub author: String,
    /// Formatted date.
    pub date: String,
    /// Filled and empty stars.
    pub stars: String,
    /// Comment body.
    pub text: String,
    /// Whether the admin delete button is shown.
    pub can_delete: bool,
}

/// Comment list section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommentThread {
    /// Placeholder when there are no comments.
    Empty(String),
    /// Rendered comments.
    Items(Vec<CommentItem>),
}

/// Everything the detail page renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailView {
    /// Torrent identifier.
    pub id: String,
    /// Title.
    pub title: String,
    /// Image URLs.
    pub images: Vec<String>,
    /// Description.
    pub description: String,
    /// Size in GB.
    pub size: String,
    /// Comma-joined categories.
    pub categories: String,
    /// Upload date.
    pub upload_date: String,
    /// Download counter.
    pub downloads: String,
    /// Average rating or N/A.
    pub rating: String,
    /// Whether the admin delete button is shown.
    pub can_delete: bool,
    /// Download control.
    pub download: DownloadAccess,
    /// `Commenti (n)` heading.
    pub comments_heading: String,
    /// Comment list.
    pub thread: CommentThread,
    /// Whether the comment form is shown instead of a login prompt.
    pub comment_form: bool,
}

fn comment_item(comment: &Comment, is_admin: bool) -> CommentItem {
    CommentItem {
        id: comment.id.clone(),
        author: comment.user_id.clone(),
        date: date_label(comment.date.as_deref()),
        stars: rating_stars(comment.rating),
        text: comment.text.clone(),
        can_delete: is_admin,
    }
}

/// Build the detail view for a record.
#[must_use]
pub fn build_detail(
    record: &TorrentRecord,
    session: &SessionState,
    bundle: &TranslationBundle,
) -> DetailView {
    let is_admin = session.is_administrator();
    let authenticated = session.is_authenticated();
    let comments = record.comments.as_deref().unwrap_or_default();
    let thread = if comments.is_empty() {
        CommentThread::Empty(bundle.text("detail.no_comments", "Nessun commento"))
    } else {
        CommentThread::Items(
            comments
                .iter()
                .map(|comment| comment_item(comment, is_admin))
                .collect(),
        )
    };
    DetailView {
        id: record.id.clone(),
        title: record.title.clone(),
        images: record.images.clone(),
        description: record.description.clone(),
        size: size_label(record.size),
        categories: join_categories(&record.categories),
        upload_date: date_label(record.upload_date.as_deref()),
        downloads: record.download_count.to_string(),
        rating: rating_label(record.average_rating, &bundle.text("common.na", "N/A")),
        can_delete: is_admin,
        download: if authenticated {
            DownloadAccess::Button
        } else {
            DownloadAccess::LoginPrompt
        },
        comments_heading: bundle.fill(
            "detail.comments",
            &[("count", &comments.len().to_string())],
        ),
        thread,
        comment_form: authenticated,
    }
}

/// Options for the rating select, from one to five stars.
#[must_use]
pub fn rating_options(bundle: &TranslationBundle) -> Vec<(u8, String)> {
    (1..=RATING_SCALE)
        .map(|count| {
            let label = if count == 1 {
                bundle.text("detail.rating_one", "★ (1 Stella)")
            } else {
                bundle.fill(
                    "detail.rating_many",
                    &[
                        ("stars", &"★".repeat(usize::from(count))),
                        ("count", &count.to_string()),
                    ],
                )
            };
            (count, label)
        })
        .collect()
}

/// Alert text for a failed detail load.
#[must_use]
pub fn load_error_text(bundle: &TranslationBundle, err: &ApiError) -> String {
    let prefix = bundle.text("detail.load_error", "Errore nel caricamento dei dettagli");
    match err {
        ApiError::NotFound => format!(
            "{prefix}: {}",
            bundle.text("detail.not_found", "torrent non trovato")
        ),
        other => alert_text(&prefix, other, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::Role;
    use crate::i18n::LocaleCode;

    fn italian() -> TranslationBundle {
        TranslationBundle::new(LocaleCode::It)
    }

    fn record(comments: Option<Vec<Comment>>) -> TorrentRecord {
        TorrentRecord {
            id: "t1".into(),
            title: "Ubuntu".into(),
            size: 512.0,
            download_count: 12,
            average_rating: Some(4.5),
            comments,
            ..TorrentRecord::default()
        }
    }

    #[test]
    fn zero_comments_render_heading_and_placeholder() {
        let anonymous = SessionState::default();
        for comments in [None, Some(Vec::new())] {
            let view = build_detail(&record(comments), &anonymous, &italian());
            assert_eq!(view.comments_heading, "Commenti (0)");
            assert_eq!(
                view.thread,
                CommentThread::Empty("Nessun commento".into())
            );
        }
    }

    #[test]
    fn anonymous_visitors_get_login_prompts() {
        let view = build_detail(&record(None), &SessionState::default(), &italian());
        assert_eq!(view.download, DownloadAccess::LoginPrompt);
        assert!(!view.comment_form);
        assert!(!view.can_delete);
        assert_eq!(view.size, "0.50 GB");
        assert_eq!(view.downloads, "12");
        assert_eq!(view.rating, "4.5");
    }

    #[test]
    fn admins_can_delete_comments() {
        let mut session = SessionState::default();
        session.set_session("root", Role::Administrator);
        let comment = Comment {
            id: "c1".into(),
            user_id: "u9".into(),
            text: "bello".into(),
            rating: 3,
            date: Some("2024-10-15T08:00:00Z".into()),
            ..Comment::default()
        };
        let view = build_detail(&record(Some(vec![comment])), &session, &italian());
        assert_eq!(view.comments_heading, "Commenti (1)");
        assert_eq!(view.download, DownloadAccess::Button);
        assert!(view.comment_form);
        let CommentThread::Items(items) = view.thread else {
            panic!("expected comments");
        };
        assert_eq!(items[0].stars, "★★★☆☆");
        assert_eq!(items[0].date, "15/10/2024");
        assert!(items[0].can_delete);
    }

    #[test]
    fn rating_options_cover_scale() {
        let options = rating_options(&italian());
        assert_eq!(options.len(), 5);
        assert_eq!(options[0].1, "★ (1 Stella)");
        assert_eq!(options[2].1, "★★★ (3 Stelle)");
    }

    #[test]
    fn not_found_has_readable_alert() {
        assert_eq!(
            load_error_text(&italian(), &ApiError::NotFound),
            "Errore nel caricamento dei dettagli: torrent non trovato"
        );
    }
}
