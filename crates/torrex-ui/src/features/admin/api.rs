//! API helpers for the admin dashboard.
//!
//! # Design
//! - Keep HTTP calls localized to the feature layer.
//! - Every request is token-checked before its response reaches the store.

use crate::app::notify;
use crate::core::requests::RequestKind;
use crate::core::store::{
    app_dispatch, apply_admin_stats, apply_period_stats, apply_user_results, begin_user_search,
};
use crate::features::admin::actions::UserAction;
use crate::i18n::TranslationBundle;
use crate::services::api::ApiClient;
use crate::services::response::{ApiError, alert_text};
use std::rc::Rc;
use torrex_api_models::{PeriodStatsRequest, UserSearchRequest};

fn alert_if_current(bundle: &TranslationBundle, key: &str, current: bool, err: &ApiError) {
    if current {
        notify::alert_failure(&alert_text(&bundle.text(key, "Errore"), err, ""));
    }
}

/// Fetch the dashboard statistics.
pub(crate) fn load_stats(client: Rc<ApiClient>, bundle: TranslationBundle) {
    let dispatch = app_dispatch();
    let mut issued = None;
    dispatch.reduce_mut(|store| issued = Some(store.requests.issue(RequestKind::AdminStats)));
    let Some(token) = issued else {
        return;
    };
    yew::platform::spawn_local(async move {
        match client.admin_stats().await {
            Ok(stats) => {
                dispatch.reduce_mut(|store| {
                    apply_admin_stats(store, token, stats.clone());
                });
            }
            Err(err) => alert_if_current(
                &bundle,
                "admin.stats_error",
                dispatch.get().requests.is_current(token),
                &err,
            ),
        }
    });
}

/// Fetch statistics for a custom period.
pub(crate) fn load_period(client: Rc<ApiClient>, bundle: TranslationBundle, request: PeriodStatsRequest) {
    let dispatch = app_dispatch();
    let mut issued = None;
    dispatch.reduce_mut(|store| issued = Some(store.requests.issue(RequestKind::PeriodStats)));
    let Some(token) = issued else {
        return;
    };
    yew::platform::spawn_local(async move {
        match client.period_stats(&request).await {
            Ok(stats) => {
                dispatch.reduce_mut(|store| {
                    apply_period_stats(store, token, stats.clone());
                });
            }
            Err(err) => alert_if_current(
                &bundle,
                "admin.custom_error",
                dispatch.get().requests.is_current(token),
                &err,
            ),
        }
    });
}

/// Search users by username.
pub(crate) fn search_users(
    client: Rc<ApiClient>,
    bundle: TranslationBundle,
    request: UserSearchRequest,
) {
    let dispatch = app_dispatch();
    let mut issued = None;
    dispatch.reduce_mut(|store| issued = Some(begin_user_search(store, &request.username)));
    let Some(token) = issued else {
        return;
    };
    yew::platform::spawn_local(async move {
        match client.search_users(&request).await {
            Ok(users) => {
                dispatch.reduce_mut(|store| {
                    apply_user_results(store, token, users.clone());
                });
            }
            Err(err) => alert_if_current(
                &bundle,
                "admin.users_error",
                dispatch.get().requests.is_current(token),
                &err,
            ),
        }
    });
}

/// Confirm and execute a moderation action, then refresh the user list.
pub(crate) fn run_user_action(action: UserAction, client: Rc<ApiClient>, bundle: TranslationBundle) {
    if !notify::confirm(&action.confirm_text(&bundle)) {
        return;
    }
    yew::platform::spawn_local(async move {
        let outcome = match &action {
            UserAction::Ban { id, .. } => client.ban_user(id).await,
        };
        match outcome {
            Ok(()) => {
                notify::success(action.success_text(&bundle));
                let last = app_dispatch().get().admin.last_user_query.clone();
                if let Some(username) = last {
                    search_users(client, bundle, UserSearchRequest { username });
                }
            }
            Err(err) => notify::alert_failure(&alert_text(
                &bundle.text("admin.action_error", "Errore"),
                &err,
                "",
            )),
        }
    });
}
