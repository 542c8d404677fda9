//! UI-only view types shared across components.

pub use torrex_api_models::{
    AdminStats, AuthResponse, CategoryStat, Comment, GeneralStats, PeriodCategoryStat,
    PeriodStats, SearchRequest, SortField, SortOrder, TorrentRecord, UserRecord, UserStatus,
    WeeklyCategoryStat,
};

/// Toast variants used across the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Informational toast.
    Info,
    /// Success toast.
    Success,
}

/// Toast payload used by the host and app state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic toast identifier.
    pub id: u64,
    /// Display message for the toast.
    pub message: String,
    /// Severity classification.
    pub kind: ToastKind,
}

/// Torrent category: translation key and the value stored by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Category {
    /// Key under `categories.` in the translation bundle.
    pub key: &'static str,
    /// Wire value sent in search and upload requests.
    pub value: &'static str,
}

/// Fixed category list offered by the search and upload forms.
pub const CATEGORIES: [Category; 7] = [
    Category {
        key: "film",
        value: "Film",
    },
    Category {
        key: "series",
        value: "Serie TV",
    },
    Category {
        key: "music",
        value: "Musica",
    },
    Category {
        key: "games",
        value: "Giochi",
    },
    Category {
        key: "software",
        value: "Software",
    },
    Category {
        key: "books",
        value: "Libri",
    },
    Category {
        key: "other",
        value: "Altro",
    },
];
