//! API helpers for search and torrent card actions.
//!
//! # Design
//! - Keep HTTP calls localized to the feature layer.
//! - Responses only reach the store through token-checked reducers.

use crate::app::notify;
use crate::core::router::{AuthForm, Page};
use crate::core::store::{apply_search_results, app_dispatch, begin_search, navigate_to};
use crate::features::search::actions::TorrentAction;
use crate::i18n::TranslationBundle;
use crate::services::api::ApiClient;
use crate::services::response::alert_text;
use std::rc::Rc;
use torrex_api_models::SearchRequest;

/// Issue a search and apply its results unless a newer search superseded it.
pub(crate) fn spawn_search(client: Rc<ApiClient>, bundle: TranslationBundle, request: SearchRequest) {
    let dispatch = app_dispatch();
    let mut issued = None;
    dispatch.reduce_mut(|store| issued = Some(begin_search(store, request.clone())));
    let Some(token) = issued else {
        return;
    };
    yew::platform::spawn_local(async move {
        match client.search(&request).await {
            Ok(results) => {
                dispatch.reduce_mut(|store| {
                    apply_search_results(store, token, results.clone());
                });
            }
            Err(err) => {
                if dispatch.get().requests.is_current(token) {
                    notify::alert_failure(&alert_text(
                        &bundle.text("search.error", "Errore nella ricerca"),
                        &err,
                        "",
                    ));
                }
            }
        }
    });
}

/// Re-run the last submitted search, if any.
pub(crate) fn rerun_search(client: Rc<ApiClient>, bundle: TranslationBundle) {
    let last = app_dispatch().get().search.last_request.clone();
    if let Some(request) = last {
        spawn_search(client, bundle, request);
    }
}

/// Execute a torrent card or detail header action.
pub(crate) fn run_torrent_action(
    action: TorrentAction,
    client: Rc<ApiClient>,
    bundle: TranslationBundle,
) {
    let dispatch = app_dispatch();
    match action {
        TorrentAction::View(id) => {
            dispatch.reduce_mut(|store| {
                navigate_to(store, Page::TorrentDetail(id.clone()));
            });
        }
        TorrentAction::Delete(id) => {
            if !notify::confirm(&bundle.text("admin.confirm_delete_torrent", "")) {
                return;
            }
            yew::platform::spawn_local(async move {
                match client.delete_torrent(&id).await {
                    Ok(()) => {
                        notify::success(bundle.text("admin.delete_torrent_success", ""));
                        let mut viewing = false;
                        dispatch.reduce_mut(|store| {
                            store.search.remove(&id);
                            viewing = matches!(
                                store.router.current(),
                                Page::TorrentDetail(current) if *current == id
                            );
                            if viewing {
                                navigate_to(store, Page::Home);
                            }
                        });
                        if !viewing {
                            rerun_search(client, bundle);
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
        TorrentAction::Download(id) => {
            if !dispatch.get().session.is_authenticated() {
                dispatch.reduce_mut(|store| {
                    navigate_to(store, Page::Auth(AuthForm::Login));
                });
                return;
            }
            yew::platform::spawn_local(async move {
                match client.download(&id).await {
                    Ok(_) => notify::info(bundle.text("detail.download_started", "")),
                    Err(err) => notify::alert_failure(&alert_text(
                        &bundle.text("detail.download_error", "Errore nel download"),
                        &err,
                        "",
                    )),
                }
            });
        }
    }
}
