//! Application root: contexts, routing, and the startup session check.

use crate::components::shell::AppShell;
use crate::components::toast::ToastHost;
use crate::core::router::{Page, UrlSync, UrlTracker};
use crate::core::session::NavVisibility;
use crate::core::store::{
    AppStore, app_dispatch, apply_logout, apply_status, dismiss_toast, finish_status_check,
    navigate_to,
};
use crate::features::admin::view::AdminPage;
use crate::features::auth::view::AuthPage;
use crate::features::detail::view::DetailPage;
use crate::features::search::view::SearchPage;
use crate::features::upload::view::UploadPage;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode, TranslationBundle};
use crate::services::api::ApiClient;
use gloo::console;
use preferences::{api_base_url, load_locale, persist_locale};
pub(crate) use routes::Route;
use std::rc::Rc;
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

pub(crate) mod notify;
mod preferences;
mod routes;

/// HTTP client shared with every page through context.
///
/// Built once at boot; the backend session lives in cookies, so the client
/// carries no auth state of its own.
#[derive(Clone)]
pub(crate) struct ApiCtx {
    pub client: Rc<ApiClient>,
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}

/// Root component: contexts, router, shell, and toasts.
#[function_component(TorrexApp)]
pub fn torrex_app() -> Html {
    let locale = use_state(load_locale);
    let api_ctx = use_memo(
        |_| ApiCtx {
            client: Rc::new(ApiClient::new(api_base_url())),
        },
        (),
    );
    let bundle = {
        let locale = *locale;
        use_memo(move |_| TranslationBundle::new(locale), locale)
    };
    let session = use_selector(|store: &AppStore| store.session.clone());
    let active = use_selector(|store: &AppStore| store.router.current().kind());
    let toasts = use_selector(|store: &AppStore| store.toasts.items.clone());

    {
        let api_ctx = api_ctx.clone();
        use_effect_with_deps(
            move |_| {
                let client = api_ctx.client.clone();
                yew::platform::spawn_local(async move {
                    match client.user_status().await {
                        Ok(status) => {
                            console::log!("session status", status.logged_in);
                            app_dispatch().reduce_mut(|store| apply_status(store, &status));
                        }
                        Err(err) => {
                            console::error!("session status check failed", err.to_string());
                            app_dispatch().reduce_mut(|store| finish_status_check(store));
                        }
                    }
                });
                || ()
            },
            (),
        );
    }
    {
        let locale = *locale;
        use_effect_with_deps(
            move |locale| {
                persist_locale(*locale);
                || ()
            },
            locale,
        );
    }

    let nav = NavVisibility::derive(&session, &bundle);

    let on_navigate = Callback::from(|page: Page| {
        app_dispatch().reduce_mut(|store| {
            navigate_to(store, page.clone());
        });
    });

    let on_logout = {
        let api_ctx = api_ctx.clone();
        let bundle = bundle.clone();
        Callback::from(move |()| {
            let client = api_ctx.client.clone();
            let failed = bundle.text("nav.logout_failed", "Logout fallito");
            yew::platform::spawn_local(async move {
                match client.logout().await {
                    Ok(()) => app_dispatch().reduce_mut(|store| apply_logout(store)),
                    Err(err) => console::error!(failed, err.to_string()),
                }
            });
        })
    };

    let on_dismiss = Callback::from(|id: u64| {
        app_dispatch().reduce_mut(|store| dismiss_toast(store, id));
    });

    let locale_selector = {
        let locale = locale.clone();
        let onchange = Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(next) = LocaleCode::from_lang_tag(&select.value()) {
                locale.set(next);
            }
        });
        html! {
            <select class="locale-select" aria-label="Language" {onchange}>
                {for LocaleCode::all().iter().map(|lc| html! {
                    <option value={lc.code()} selected={*lc == *locale}>{lc.label()}</option>
                })}
            </select>
        }
    };

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
                <BrowserRouter>
                    <RouteSync />
                    <AppShell
                        nav={nav}
                        active={*active}
                        on_navigate={on_navigate}
                        on_logout={on_logout}
                        locale_selector={locale_selector}
                    >
                        <PageHost />
                    </AppShell>
                    <ToastHost toasts={(*toasts).clone()} on_dismiss={on_dismiss} />
                </BrowserRouter>
            </ContextProvider<TranslationBundle>>
        </ContextProvider<ApiCtx>>
    }
}

/// Keeps the address bar and the store's current page in step.
///
/// URL changes are applied through the guards (redirects replace the entry);
/// store-driven navigation pushes a new entry.
#[function_component(RouteSync)]
fn route_sync() -> Html {
    let route = use_route::<Route>().unwrap_or(Route::Home);
    let navigator = use_navigator();
    let pending = use_selector(|store: &AppStore| store.session.is_pending());
    let page = use_selector(|store: &AppStore| store.router.current().clone());
    let tracker = use_mut_ref(UrlTracker::default);

    use_effect_with_deps(
        move |(route, page, pending): &(Route, Page, bool)| {
            let step = tracker.borrow_mut().step(&route.page(), page, *pending);
            match step {
                UrlSync::Idle => {}
                UrlSync::Apply(requested) => {
                    let mut applied = None;
                    app_dispatch().reduce_mut(|store| {
                        applied = Some(navigate_to(store, requested.clone()));
                    });
                    if let Some(navigation) = applied.filter(|navigation| navigation.redirected) {
                        if let Some(navigator) = &navigator {
                            navigator.replace(&Route::for_page(&navigation.target));
                        }
                        tracker.borrow_mut().settle(navigation.target);
                    }
                }
                UrlSync::Push(target) => {
                    if let Some(navigator) = &navigator {
                        navigator.push(&Route::for_page(&target));
                    }
                }
            }
            || ()
        },
        (route, (*page).clone(), *pending),
    );

    html! {}
}

/// Renders the store's current page.
#[function_component(PageHost)]
fn page_host() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let page = use_selector(|store: &AppStore| store.router.current().clone());
    let pending = use_selector(|store: &AppStore| store.session.is_pending());
    let route = use_route::<Route>().unwrap_or(Route::Home);

    // Deep links to guarded pages wait for the status check.
    if *pending && route != Route::Home {
        return html! { <p class="muted">{bundle.text("common.loading", "")}</p> };
    }

    match (*page).clone() {
        Page::Home => html! { <SearchPage /> },
        Page::Upload => html! { <UploadPage /> },
        Page::Admin => html! { <AdminPage /> },
        Page::Auth(form) => html! { <AuthPage {form} /> },
        Page::TorrentDetail(id) => html! { <DetailPage {id} /> },
    }
}

/// Mount the app into `#root`, or the document body when it is missing.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<TorrexApp>::with_root(root).render();
    } else {
        yew::Renderer::<TorrexApp>::new().render();
    }
}
