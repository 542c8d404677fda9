//! Relative paths of the backend endpoints consumed by the client.

/// Session status check.
pub const USER_STATUS: &str = "/api/user/status";
/// Torrent search.
pub const SEARCH: &str = "/api/search";
/// Torrent upload.
pub const UPLOAD: &str = "/api/torrent";
/// Login.
pub const LOGIN: &str = "/api/login";
/// Registration.
pub const REGISTER: &str = "/api/register";
/// Logout.
pub const LOGOUT: &str = "/api/logout";
/// Add a comment.
pub const COMMENT: &str = "/api/comment";
/// Admin dashboard statistics.
pub const ADMIN_STATS: &str = "/api/admin/stats";
/// Admin statistics for a custom date range.
pub const ADMIN_PERIOD_STATS: &str = "/api/admin/stats/period";
/// Admin user search.
pub const ADMIN_SEARCH_USERS: &str = "/api/admin/search-users";
/// Admin ban.
pub const ADMIN_BAN_USER: &str = "/api/admin/ban-user";
/// Admin torrent deletion.
pub const ADMIN_DELETE_TORRENT: &str = "/api/admin/delete-torrent";
/// Admin comment deletion.
pub const ADMIN_DELETE_COMMENT: &str = "/api/admin/delete-comment";

/// Detail path for a torrent, with the identifier percent-encoded.
#[must_use]
pub fn torrent_detail(id: &str) -> String {
    format!("/api/torrent/{}", urlencoding::encode(id))
}

/// Download path for a torrent, with the identifier percent-encoded.
#[must_use]
pub fn torrent_download(id: &str) -> String {
    format!("/api/torrent/{}/download", urlencoding::encode(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_paths_embed_identifier() {
        assert_eq!(torrent_detail("65f0a1"), "/api/torrent/65f0a1");
        assert_eq!(torrent_download("65f0a1"), "/api/torrent/65f0a1/download");
    }

    #[test]
    fn detail_paths_escape_separators() {
        assert_eq!(torrent_detail("a/b"), "/api/torrent/a%2Fb");
    }
}
