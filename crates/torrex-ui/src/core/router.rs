//! Page registry with mutual exclusion and authorization guards.
//!
//! # Design
//! - Exactly one page is current; visibility is a pure function of that value.
//! - Guards never fail loudly: unauthorized targets fall back to a safe page.
//! - The URL is a projection of the current page, never the source of truth.

use crate::core::session::SessionState;

/// Which auth form the auth page shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthForm {
    /// Sign-in form.
    Login,
    /// Registration form.
    Register,
}

/// A navigable page.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Page {
    /// Search form and results.
    #[default]
    Home,
    /// Upload form (requires a session).
    Upload,
    /// Statistics and moderation (requires an administrator).
    Admin,
    /// Login or registration.
    Auth(AuthForm),
    /// Detail view for one torrent.
    TorrentDetail(String),
}

/// Page kinds, ignoring per-page parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    /// Home page.
    Home,
    /// Upload page.
    Upload,
    /// Admin page.
    Admin,
    /// Auth page.
    Auth,
    /// Torrent detail page.
    TorrentDetail,
}

impl PageKind {
    /// Every registered page kind.
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::Upload,
        Self::Admin,
        Self::Auth,
        Self::TorrentDetail,
    ];
}

impl Page {
    /// Kind of this page.
    #[must_use]
    pub const fn kind(&self) -> PageKind {
        match self {
            Self::Home => PageKind::Home,
            Self::Upload => PageKind::Upload,
            Self::Admin => PageKind::Admin,
            Self::Auth(_) => PageKind::Auth,
            Self::TorrentDetail(_) => PageKind::TorrentDetail,
        }
    }
}

/// Outcome of applying the guards to a requested page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
    /// Page that will actually be shown.
    pub target: Page,
    /// Whether a guard replaced the requested page.
    pub redirected: bool,
}

/// Apply authorization guards to a requested page.
#[must_use]
pub fn guard(requested: Page, session: &SessionState) -> Navigation {
    let fallback = match requested {
        Page::Upload if !session.is_authenticated() => Some(Page::Auth(AuthForm::Login)),
        Page::Admin if !session.is_administrator() => Some(Page::Home),
        _ => None,
    };
    match fallback {
        Some(target) => Navigation {
            target,
            redirected: true,
        },
        None => Navigation {
            target: requested,
            redirected: false,
        },
    }
}

/// Current page holder.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewRouter {
    current: Page,
}

impl ViewRouter {
    /// Show `page` and hide every other page.
    pub fn navigate(&mut self, page: Page) {
        self.current = page;
    }

    /// Navigate through the guards, returning the applied navigation.
    pub fn navigate_guarded(&mut self, page: Page, session: &SessionState) -> Navigation {
        let navigation = guard(page, session);
        self.navigate(navigation.target.clone());
        navigation
    }

    /// Open the upload page, or the login form without a session.
    pub fn open_upload(&mut self, session: &SessionState) -> Navigation {
        self.navigate_guarded(Page::Upload, session)
    }

    /// Open the admin panel, or home without administrator rights.
    pub fn open_admin_panel(&mut self, session: &SessionState) -> Navigation {
        self.navigate_guarded(Page::Admin, session)
    }

    /// Open the auth page with the login form.
    pub fn open_login(&mut self) {
        self.navigate(Page::Auth(AuthForm::Login));
    }

    /// Open the auth page with the registration form.
    pub fn open_register(&mut self) {
        self.navigate(Page::Auth(AuthForm::Register));
    }

    /// Open the detail page for a torrent.
    pub fn open_torrent(&mut self, id: impl Into<String>) {
        self.navigate(Page::TorrentDetail(id.into()));
    }

    /// Current page.
    #[must_use]
    pub const fn current(&self) -> &Page {
        &self.current
    }

    /// Whether a page kind is currently visible.
    #[must_use]
    pub fn is_visible(&self, kind: PageKind) -> bool {
        self.current.kind() == kind
    }

    /// Page kinds currently visible.
    #[must_use]
    pub fn visible_pages(&self) -> Vec<PageKind> {
        PageKind::ALL
            .into_iter()
            .filter(|kind| self.is_visible(*kind))
            .collect()
    }
}

/// Reconciliation step between the address bar and the current page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UrlSync {
    /// Address bar and store agree.
    Idle,
    /// The address bar moved: route this page through the guards.
    Apply(Page),
    /// The store moved: write this page to the address bar.
    Push(Page),
}

/// Remembers the last address-bar page so URL and store moves can be told apart.
///
/// While the session check is pending nothing is reconciled. A store move made
/// during that window claims the address bar once the check resolves; otherwise
/// the URL (a deep link) wins.
#[derive(Clone, Debug, Default)]
pub struct UrlTracker {
    last_url: Option<Page>,
}

impl UrlTracker {
    /// Decide what to reconcile for the current URL page and store page.
    pub fn step(&mut self, url: &Page, store: &Page, pending: bool) -> UrlSync {
        if pending {
            if *store != Page::default() {
                self.last_url = Some(url.clone());
            }
            return UrlSync::Idle;
        }
        if self.last_url.as_ref() != Some(url) {
            self.last_url = Some(url.clone());
            return UrlSync::Apply(url.clone());
        }
        if store == url {
            return UrlSync::Idle;
        }
        self.last_url = Some(store.clone());
        UrlSync::Push(store.clone())
    }

    /// Record that the address bar was rewritten to `page`.
    pub fn settle(&mut self, page: Page) {
        self.last_url = Some(page);
    }
}
