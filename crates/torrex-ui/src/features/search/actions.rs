//! Torrent card actions.
//!
//! # Design
//! - Capture user intent separate from rendering.
//! - Actions are UI-only and never perform side effects.

/// Actions emitted by torrent cards and the detail header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TorrentAction {
    /// Open the detail page.
    View(String),
    /// Delete the torrent (administrators only).
    Delete(String),
    /// Request the torrent download.
    Download(String),
}

impl TorrentAction {
    /// Identifier of the targeted torrent.
    #[must_use]
    pub fn torrent_id(&self) -> &str {
        match self {
            Self::View(id) | Self::Delete(id) | Self::Download(id) => id,
        }
    }
}
