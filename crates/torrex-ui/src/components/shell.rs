//! Top navigation bar and page frame.
//!
//! # Design
//! - Link visibility comes from `NavVisibility`; the shell never inspects the session.
//! - Links emit pages; guards are applied by the store reducers.

use crate::core::router::{AuthForm, Page, PageKind};
use crate::core::session::NavVisibility;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub children: Children,
    pub nav: NavVisibility,
    pub active: PageKind,
    pub on_navigate: Callback<Page>,
    pub on_logout: Callback<()>,
    pub locale_selector: Html,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");
    let nav = &props.nav;

    let link = |page: Page, label: String, shown: bool| -> Html {
        if !shown {
            return html! {};
        }
        let active = page.kind() == props.active;
        let on_navigate = props.on_navigate.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(page.clone());
        });
        html! {
            <a href="#" class={classes!("nav-item", active.then_some("active"))} {onclick}>{label}</a>
        }
    };

    let on_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_logout.emit(());
        })
    };

    html! {
        <div class="app-shell">
            <header class="topbar">
                <strong class="brand">{t("nav.brand")}</strong>
                <nav>
                    {link(Page::Home, t("nav.home"), true)}
                    {link(Page::Upload, t("nav.upload"), nav.upload)}
                    {link(Page::Admin, t("nav.admin"), nav.admin_panel)}
                    {link(Page::Auth(AuthForm::Login), t("nav.login"), nav.login)}
                    {link(Page::Auth(AuthForm::Register), t("nav.register"), nav.register)}
                    {if nav.logout {
                        html! { <a href="#" class="nav-item" onclick={on_logout}>{t("nav.logout")}</a> }
                    } else {
                        html! {}
                    }}
                </nav>
                <div class="top-actions">
                    {nav.user_info.clone().map(|info| html! {
                        <span id="user-info" class="muted">{info}</span>
                    }).unwrap_or_default()}
                    {props.locale_selector.clone()}
                </div>
            </header>
            <main>
                {for props.children.iter()}
            </main>
        </div>
    }
}
