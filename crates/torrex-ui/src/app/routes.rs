//! Routing definitions for the Torrex UI.
use crate::core::router::{AuthForm, Page};
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/upload")]
    Upload,
    #[at("/admin")]
    Admin,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/torrents/:id")]
    TorrentDetail { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Page requested by this URL; unknown paths fall back to home.
    pub(crate) fn page(&self) -> Page {
        match self {
            Self::Home | Self::NotFound => Page::Home,
            Self::Upload => Page::Upload,
            Self::Admin => Page::Admin,
            Self::Login => Page::Auth(AuthForm::Login),
            Self::Register => Page::Auth(AuthForm::Register),
            Self::TorrentDetail { id } => Page::TorrentDetail(id.clone()),
        }
    }

    /// URL mirroring a page.
    pub(crate) fn for_page(page: &Page) -> Self {
        match page {
            Page::Home => Self::Home,
            Page::Upload => Self::Upload,
            Page::Admin => Self::Admin,
            Page::Auth(AuthForm::Login) => Self::Login,
            Page::Auth(AuthForm::Register) => Self::Register,
            Page::TorrentDetail(id) => Self::TorrentDetail { id: id.clone() },
        }
    }
}
