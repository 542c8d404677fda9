//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - Use small, focused slices so reducers stay predictable.
//! - Reducers are plain functions over `AppStore`; components only dispatch them.

use crate::core::requests::{RequestKind, RequestToken, RequestTokens};
use crate::core::router::{Navigation, Page, PageKind, ViewRouter};
use crate::core::session::SessionState;
use crate::features::admin::state::AdminState;
use crate::features::search::state::SearchState;
use crate::models::{Toast, ToastKind};
use std::collections::BTreeMap;
use torrex_api_models::{
    AdminStats, AuthResponse, PeriodStats, SearchRequest, TorrentRecord, UserRecord, UserStatus,
};
use yewdux::store::Store;

/// Maximum number of toasts kept on screen.
pub const MAX_TOASTS: usize = 4;
/// Lifetime of a toast before it dismisses itself.
pub const TOAST_TTL_MS: u32 = 4000;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub struct AppStore {
    /// Authenticated identity.
    pub session: SessionState,
    /// Current page.
    pub router: ViewRouter,
    /// Last fetched detail record.
    pub viewed: Option<TorrentRecord>,
    /// Search form results.
    pub search: SearchState,
    /// Admin dashboard data.
    pub admin: AdminState,
    /// Per-family request generations.
    pub requests: RequestTokens,
    /// Transient notices.
    pub toasts: ToastSlice,
}

/// Toast queue with a monotonic id source.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastSlice {
    /// Visible toasts, oldest first.
    pub items: Vec<Toast>,
    next_id: u64,
}

/// Navigate through the guards, dropping detail state when leaving the detail page.
pub fn navigate_to(store: &mut AppStore, page: Page) -> Navigation {
    let navigation = crate::core::router::guard(page, &store.session);
    let leaving_detail = match (store.router.current(), &navigation.target) {
        (Page::TorrentDetail(from), Page::TorrentDetail(to)) => from != to,
        (Page::TorrentDetail(_), _) => true,
        _ => false,
    };
    if leaving_detail {
        store.requests.invalidate(RequestKind::Detail);
        store.viewed = None;
    }
    if navigation.target.kind() != PageKind::Admin && store.router.is_visible(PageKind::Admin) {
        store.requests.invalidate(RequestKind::AdminStats);
        store.requests.invalidate(RequestKind::PeriodStats);
    }
    store.router.navigate(navigation.target.clone());
    navigation
}

/// Apply a successful login or registration and go home.
pub fn apply_login(store: &mut AppStore, response: &AuthResponse) {
    store.session.apply_auth(response);
    navigate_to(store, Page::Home);
}

/// Apply the backend status check, re-guarding the current page.
pub fn apply_status(store: &mut AppStore, status: &UserStatus) {
    store.session.apply_status(status);
    let current = store.router.current().clone();
    navigate_to(store, current);
}

/// Finish the startup check when the status request failed.
pub fn finish_status_check(store: &mut AppStore) {
    store.session.mark_checked();
    let current = store.router.current().clone();
    navigate_to(store, current);
}

/// Clear the session after a successful logout and go home.
pub fn apply_logout(store: &mut AppStore) {
    store.session.clear_session();
    store.admin = AdminState::default();
    for kind in [
        RequestKind::AdminStats,
        RequestKind::PeriodStats,
        RequestKind::UserSearch,
    ] {
        store.requests.invalidate(kind);
    }
    navigate_to(store, Page::Home);
}

/// Record a search submission and issue its token.
pub fn begin_search(store: &mut AppStore, request: SearchRequest) -> RequestToken {
    store.search.last_request = Some(request);
    store.requests.issue(RequestKind::Search)
}

/// Apply search results if the token is still current.
pub fn apply_search_results(
    store: &mut AppStore,
    token: RequestToken,
    results: Vec<TorrentRecord>,
) -> bool {
    if !store.requests.is_current(token) {
        return false;
    }
    store.search.results = Some(results);
    true
}

/// Issue a detail token for a fresh fetch.
pub fn begin_detail(store: &mut AppStore) -> RequestToken {
    store.requests.issue(RequestKind::Detail)
}

/// Apply a fetched detail record if the token is still current.
pub fn apply_detail(store: &mut AppStore, token: RequestToken, record: TorrentRecord) -> bool {
    if !store.requests.is_current(token) {
        return false;
    }
    store.viewed = Some(record);
    true
}

/// Apply dashboard statistics if the token is still current.
pub fn apply_admin_stats(store: &mut AppStore, token: RequestToken, stats: AdminStats) -> bool {
    if !store.requests.is_current(token) {
        return false;
    }
    store.admin.stats = Some(stats);
    true
}

/// Apply period statistics if the token is still current.
pub fn apply_period_stats(store: &mut AppStore, token: RequestToken, stats: PeriodStats) -> bool {
    if !store.requests.is_current(token) {
        return false;
    }
    store.admin.period = Some(stats);
    true
}

/// Record a user search submission and issue its token.
pub fn begin_user_search(store: &mut AppStore, username: &str) -> RequestToken {
    store.admin.last_user_query = Some(username.to_string());
    store.requests.issue(RequestKind::UserSearch)
}

/// Apply user search results if the token is still current.
pub fn apply_user_results(
    store: &mut AppStore,
    token: RequestToken,
    users: Vec<UserRecord>,
) -> bool {
    if !store.requests.is_current(token) {
        return false;
    }
    store.admin.users = Some(users);
    true
}

/// Queue a toast, evicting the oldest beyond [`MAX_TOASTS`].
pub fn push_toast(store: &mut AppStore, kind: ToastKind, message: impl Into<String>) -> u64 {
    let slice = &mut store.toasts;
    slice.next_id += 1;
    let id = slice.next_id;
    slice.items.push(Toast {
        id,
        message: message.into(),
        kind,
    });
    if slice.items.len() > MAX_TOASTS {
        let drain = slice.items.len() - MAX_TOASTS;
        slice.items.drain(0..drain);
    }
    id
}

/// Remove a toast by id.
pub fn dismiss_toast(store: &mut AppStore, id: u64) {
    store.toasts.items.retain(|toast| toast.id != id);
}

/// Dismissal handles keyed by toast id.
///
/// Each toast gets exactly one handle for its lifetime; handles for toasts that
/// left the list are dropped, which cancels browser timers.
#[derive(Debug)]
pub struct ToastTimers<H> {
    handles: BTreeMap<u64, H>,
}

impl<H> Default for ToastTimers<H> {
    fn default() -> Self {
        Self {
            handles: BTreeMap::new(),
        }
    }
}

impl<H> ToastTimers<H> {
    /// Start handles for new toasts and drop those of departed ones.
    pub fn sync(&mut self, toasts: &[Toast], mut start: impl FnMut(u64) -> H) {
        self.handles
            .retain(|id, _| toasts.iter().any(|toast| toast.id == *id));
        for toast in toasts {
            self.handles
                .entry(toast.id)
                .or_insert_with(|| start(toast.id));
        }
    }

    /// Ids with a live handle.
    #[must_use]
    pub fn ids(&self) -> Vec<u64> {
        self.handles.keys().copied().collect()
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn app_dispatch() -> yewdux::prelude::Dispatch<AppStore> {
    yewdux::prelude::Dispatch::<AppStore>::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::router::AuthForm;
    use crate::core::session::Role;

    fn admin_store() -> AppStore {
        let mut store = AppStore::default();
        apply_login(
            &mut store,
            &AuthResponse {
                username: "alice".into(),
                role: "admin".into(),
            },
        );
        store
    }

    #[test]
    fn login_sets_session_and_goes_home() {
        let mut store = AppStore::default();
        store.router.open_login();
        apply_login(
            &mut store,
            &AuthResponse {
                username: "alice".into(),
                role: "admin".into(),
            },
        );
        assert!(store.session.is_administrator());
        assert_eq!(store.router.current(), &Page::Home);
    }

    #[test]
    fn logout_clears_admin_data_and_redirects_home() {
        let mut store = admin_store();
        navigate_to(&mut store, Page::Admin);
        store.admin.stats = Some(AdminStats::default());
        apply_logout(&mut store);
        assert!(!store.session.is_authenticated());
        assert_eq!(store.admin, AdminState::default());
        assert_eq!(store.router.current(), &Page::Home);
    }

    #[test]
    fn superseded_search_response_is_discarded() {
        let mut store = AppStore::default();
        let stale = begin_search(&mut store, SearchRequest::default());
        let fresh = begin_search(
            &mut store,
            SearchRequest {
                title: Some("ubuntu".into()),
                ..SearchRequest::default()
            },
        );
        let newer = vec![TorrentRecord {
            id: "new".into(),
            ..TorrentRecord::default()
        }];
        assert!(apply_search_results(&mut store, fresh, newer.clone()));
        assert!(!apply_search_results(&mut store, stale, Vec::new()));
        assert_eq!(store.search.results, Some(newer));
        assert_eq!(
            store
                .search
                .last_request
                .as_ref()
                .and_then(|request| request.title.as_deref()),
            Some("ubuntu")
        );
    }

    #[test]
    fn leaving_detail_discards_in_flight_detail() {
        let mut store = AppStore::default();
        navigate_to(&mut store, Page::TorrentDetail("t1".into()));
        let token = begin_detail(&mut store);
        navigate_to(&mut store, Page::Home);
        assert!(!apply_detail(&mut store, token, TorrentRecord::default()));
        assert_eq!(store.viewed, None);
    }

    #[test]
    fn switching_detail_target_discards_previous_record() {
        let mut store = AppStore::default();
        navigate_to(&mut store, Page::TorrentDetail("t1".into()));
        let token = begin_detail(&mut store);
        assert!(apply_detail(
            &mut store,
            token,
            TorrentRecord {
                id: "t1".into(),
                ..TorrentRecord::default()
            }
        ));
        navigate_to(&mut store, Page::TorrentDetail("t2".into()));
        assert_eq!(store.viewed, None);
        assert!(!store.requests.is_current(token));
    }

    #[test]
    fn status_check_re_guards_deep_link() {
        let mut store = AppStore::default();
        store.router.navigate(Page::Admin);
        apply_status(
            &mut store,
            &UserStatus {
                logged_in: true,
                username: Some("bob".into()),
                role: Some("user".into()),
                user_id: Some("u2".into()),
            },
        );
        assert_eq!(store.router.current(), &Page::Home);

        let mut anonymous = AppStore::default();
        anonymous.router.navigate(Page::Upload);
        finish_status_check(&mut anonymous);
        assert_eq!(
            anonymous.router.current(),
            &Page::Auth(AuthForm::Login)
        );
        assert!(!anonymous.session.is_pending());
    }

    #[test]
    fn admin_keeps_admin_page_after_status() {
        let mut store = AppStore::default();
        store.session.set_session("alice", Role::Administrator);
        navigate_to(&mut store, Page::Admin);
        apply_status(
            &mut store,
            &UserStatus {
                logged_in: true,
                username: Some("alice".into()),
                role: Some("admin".into()),
                user_id: Some("u1".into()),
            },
        );
        assert_eq!(store.router.current(), &Page::Admin);
    }

    #[test]
    fn toasts_are_capped_and_dismissable() {
        let mut store = AppStore::default();
        let ids: Vec<u64> = (0..6)
            .map(|n| push_toast(&mut store, ToastKind::Success, format!("t{n}")))
            .collect();
        assert_eq!(store.toasts.items.len(), MAX_TOASTS);
        assert_eq!(store.toasts.items[0].id, ids[2]);
        dismiss_toast(&mut store, ids[5]);
        assert!(store.toasts.items.iter().all(|toast| toast.id != ids[5]));
    }

    #[test]
    fn toast_timers_start_once_per_toast() {
        let mut store = AppStore::default();
        let mut timers = ToastTimers::default();
        let mut started = Vec::new();
        let first = push_toast(&mut store, ToastKind::Success, "saved");
        timers.sync(&store.toasts.items, |id| started.push(id));
        let second = push_toast(&mut store, ToastKind::Info, "queued");
        timers.sync(&store.toasts.items, |id| started.push(id));
        assert_eq!(started, vec![first, second]);

        dismiss_toast(&mut store, first);
        timers.sync(&store.toasts.items, |id| started.push(id));
        assert_eq!(timers.ids(), vec![second]);
        assert_eq!(started.len(), 2);
    }

    #[test]
    fn stale_admin_responses_are_ignored_after_leaving() {
        let mut store = admin_store();
        navigate_to(&mut store, Page::Admin);
        let token = store.requests.issue(RequestKind::AdminStats);
        navigate_to(&mut store, Page::Home);
        assert!(!apply_admin_stats(&mut store, token, AdminStats::default()));
        assert_eq!(store.admin.stats, None);
    }
}
