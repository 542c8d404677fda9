#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
//! Shared HTTP DTOs for the Torrex indexing API.
//!
//! The backend serializes MongoDB documents, so identifiers arrive under
//! `_id` and most fields are optional on the wire. Every list and counter
//! defaults when absent so partially populated documents still decode.

use serde::{Deserialize, Serialize};

pub mod endpoints;

/// Error payload returned alongside non-2xx responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    /// Human-readable failure message.
    #[serde(default)]
    pub error: Option<String>,
}

/// Response of `GET /api/user/status`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserStatus {
    /// Whether the backend holds an active session for this client.
    pub logged_in: bool,
    /// Username bound to the session.
    #[serde(default)]
    pub username: Option<String>,
    /// Raw role string (`admin` or `user`).
    #[serde(default)]
    pub role: Option<String>,
    /// Backend user identifier.
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Credentials submitted to `POST /api/login`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Username or email address.
    pub username: String,
    /// Plain password.
    pub password: String,
}

/// Account details submitted to `POST /api/register`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    /// Desired username.
    pub username: String,
    /// Contact email address.
    pub email: String,
    /// Plain password.
    pub password: String,
    /// Optional code granting the administrator role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_code: Option<String>,
}

/// Identity returned by login and registration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    /// Authenticated username.
    pub username: String,
    /// Raw role string.
    pub role: String,
}

/// Sort key accepted by the search endpoint.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    /// Order by upload timestamp.
    #[default]
    UploadDate,
    /// Order by declared size.
    Size,
}

/// Sort direction accepted by the search endpoint.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Ascending order.
    Asc,
    /// Descending order.
    #[default]
    Desc,
}

/// Filters submitted to `POST /api/search`. Unset filters are omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchRequest {
    /// Case-insensitive title pattern.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Case-insensitive description pattern.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Categories of which at least one must match.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    /// Inclusive lower bound on the upload date (ISO 8601).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    /// Inclusive upper bound on the upload date (ISO 8601).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
    /// Sort key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortField>,
    /// Sort direction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
}

/// Comment attached to a torrent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    /// Comment identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Torrent the comment belongs to.
    #[serde(default)]
    pub torrent_id: Option<String>,
    /// Author identifier.
    #[serde(default)]
    pub user_id: String,
    /// Comment body (at most 160 characters).
    #[serde(default)]
    pub text: String,
    /// Star rating between 1 and 5.
    #[serde(default)]
    pub rating: u8,
    /// Creation timestamp as emitted by the backend.
    #[serde(default)]
    pub date: Option<String>,
}

/// Indexed torrent record, as returned by search, detail, and statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TorrentRecord {
    /// Torrent identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Short description.
    #[serde(default)]
    pub description: String,
    /// Declared size in megabytes.
    #[serde(default)]
    pub size: f64,
    /// Category labels.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Image URLs, first one used as the cover.
    #[serde(default)]
    pub images: Vec<String>,
    /// Uploader identifier.
    #[serde(default)]
    pub uploader_id: Option<String>,
    /// Upload timestamp as emitted by the backend.
    #[serde(default)]
    pub upload_date: Option<String>,
    /// Number of recorded downloads.
    #[serde(default)]
    pub download_count: u64,
    /// Average comment rating, absent when never rated.
    #[serde(default)]
    pub average_rating: Option<f64>,
    /// Comment thread, only present on the detail endpoint.
    #[serde(default)]
    pub comments: Option<Vec<Comment>>,
}

/// Payload of `POST /api/torrent`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UploadRequest {
    /// Display title.
    pub title: String,
    /// Short description (at most 160 characters).
    pub description: String,
    /// Declared size in megabytes.
    pub size: f64,
    /// Category labels.
    pub categories: Vec<String>,
    /// Image URLs.
    pub images: Vec<String>,
}

/// Response of `POST /api/torrent`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadResponse {
    /// Identifier assigned to the new torrent.
    #[serde(default)]
    pub torrent_id: Option<String>,
}

/// Response of `GET /api/torrent/:id/download`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DownloadResponse {
    /// Backend status message.
    #[serde(default)]
    pub message: Option<String>,
}

/// Payload of `POST /api/comment`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommentRequest {
    /// Torrent being commented.
    pub torrent_id: String,
    /// Comment body.
    pub text: String,
    /// Star rating between 1 and 5.
    pub rating: u8,
}

/// Aggregate counters shown at the top of the admin dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneralStats {
    /// Indexed torrents.
    #[serde(default)]
    pub total_torrents: u64,
    /// Registered users.
    #[serde(default)]
    pub total_users: u64,
    /// Stored comments.
    #[serde(default)]
    pub total_comments: u64,
    /// Downloads across all torrents.
    #[serde(default)]
    pub total_downloads: u64,
    /// Torrents uploaded in the last seven days.
    #[serde(default)]
    pub new_torrents_week: u64,
}

/// Per-category aggregate for the last week.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WeeklyCategoryStat {
    /// Category label.
    #[serde(rename = "_id")]
    pub category: String,
    /// Torrents added this week.
    #[serde(default)]
    pub new_torrents_count: u64,
    /// Downloads of those torrents.
    #[serde(default)]
    pub total_downloads: u64,
    /// Average rating of those torrents.
    #[serde(default)]
    pub avg_rating: Option<f64>,
}

/// Per-category aggregate over the whole catalogue.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CategoryStat {
    /// Category label.
    #[serde(rename = "_id")]
    pub category: String,
    /// Torrents in the category.
    #[serde(default)]
    pub total_torrents: u64,
    /// Downloads in the category.
    #[serde(default)]
    pub total_downloads: u64,
    /// Average rating in the category.
    #[serde(default)]
    pub avg_rating: Option<f64>,
}

/// Response of `GET /api/admin/stats`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AdminStats {
    /// Aggregate counters.
    #[serde(default)]
    pub general_stats: GeneralStats,
    /// Most downloaded torrents.
    #[serde(default)]
    pub by_downloads: Vec<TorrentRecord>,
    /// Best rated torrents.
    #[serde(default)]
    pub by_rating: Vec<TorrentRecord>,
    /// New torrents per category over the last week.
    #[serde(default)]
    pub weekly_by_category: Vec<WeeklyCategoryStat>,
    /// Category popularity over the whole catalogue.
    #[serde(default)]
    pub categories_overall: Vec<CategoryStat>,
}

/// Payload of `POST /api/admin/stats/period`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PeriodStatsRequest {
    /// First day of the range (`YYYY-MM-DD`).
    pub date_from: String,
    /// Last day of the range (`YYYY-MM-DD`).
    pub date_to: String,
}

/// Date range echoed back by the period statistics endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatsPeriod {
    /// Range start.
    #[serde(default)]
    pub from: Option<String>,
    /// Range end.
    #[serde(default)]
    pub to: Option<String>,
}

/// Per-category aggregate inside a custom date range.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PeriodCategoryStat {
    /// Category label.
    #[serde(rename = "_id")]
    pub category: String,
    /// Torrents uploaded in the range.
    #[serde(default)]
    pub torrents_count: u64,
    /// Downloads of those torrents.
    #[serde(default)]
    pub total_downloads: u64,
    /// Average rating of those torrents.
    #[serde(default)]
    pub avg_rating: Option<f64>,
}

/// Response of `POST /api/admin/stats/period`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PeriodStats {
    /// Effective range.
    #[serde(default)]
    pub period: StatsPeriod,
    /// Category breakdown in the range.
    #[serde(default)]
    pub categories_in_period: Vec<PeriodCategoryStat>,
    /// Most downloaded torrents in the range.
    #[serde(default)]
    pub popular_in_period: Vec<TorrentRecord>,
}

/// Payload of `POST /api/admin/search-users`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSearchRequest {
    /// Case-insensitive username pattern.
    pub username: String,
}

/// User record returned by the admin user search.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRecord {
    /// User identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Username.
    #[serde(default)]
    pub username: String,
    /// Email address.
    #[serde(default)]
    pub email: String,
    /// Raw role string.
    #[serde(default)]
    pub role: String,
    /// Registration timestamp as emitted by the backend.
    #[serde(default)]
    pub registration_date: Option<String>,
    /// Whether the account is banned.
    #[serde(default)]
    pub is_banned: bool,
}

/// Payload of `POST /api/admin/ban-user`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BanUserRequest {
    /// User to ban.
    pub user_id: String,
}

/// Payload of `POST /api/admin/delete-torrent`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteTorrentRequest {
    /// Torrent to delete together with its comments.
    pub torrent_id: String,
}

/// Payload of `POST /api/admin/delete-comment`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteCommentRequest {
    /// Comment to delete.
    pub comment_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn search_request_omits_unset_filters() {
        let request = SearchRequest {
            title: Some("ubuntu".into()),
            sort_by: Some(SortField::Size),
            order: Some(SortOrder::Desc),
            ..SearchRequest::default()
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({"title": "ubuntu", "sort_by": "size", "order": "desc"})
        );
    }

    #[test]
    fn torrent_record_tolerates_sparse_documents() {
        let record: TorrentRecord = serde_json::from_value(json!({
            "_id": "65f0",
            "title": "Debian",
            "size": 2048,
            "average_rating": 0
        }))
        .unwrap();
        assert_eq!(record.id, "65f0");
        assert!(record.categories.is_empty());
        assert_eq!(record.download_count, 0);
        assert_eq!(record.average_rating, Some(0.0));
        assert!(record.comments.is_none());
    }

    #[test]
    fn admin_stats_default_missing_sections() {
        let stats: AdminStats = serde_json::from_value(json!({
            "by_downloads": [{"_id": "a", "title": "A", "download_count": 9}]
        }))
        .unwrap();
        assert_eq!(stats.general_stats, GeneralStats::default());
        assert_eq!(stats.by_downloads.len(), 1);
        assert!(stats.weekly_by_category.is_empty());
    }

    #[test]
    fn register_request_skips_missing_admin_code() {
        let request = RegisterRequest {
            username: "bob".into(),
            email: "bob@example.com".into(),
            password: "pw".into(),
            admin_code: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("admin_code").is_none());
    }

    #[test]
    fn category_stats_read_mongo_group_key() {
        let stat: WeeklyCategoryStat = serde_json::from_value(json!({
            "_id": "Film",
            "new_torrents_count": 3,
            "total_downloads": 12,
            "avg_rating": null
        }))
        .unwrap();
        assert_eq!(stat.category, "Film");
        assert_eq!(stat.avg_rating, None);
    }
}
