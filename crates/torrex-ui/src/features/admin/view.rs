//! Admin dashboard page.
//!
//! # Design
//! - Statistics load once per visit; leaving the page drops in-flight responses.
//! - Lists render from the store so a ban refreshes the visible results.

use crate::app::ApiCtx;
use crate::app::notify;
use crate::components::atoms::EmptyState;
use crate::core::store::AppStore;
use crate::features::admin::actions::UserAction;
use crate::features::admin::api::{load_period, load_stats, run_user_action, search_users};
use crate::features::admin::logic::{
    BanControl, PeriodView, StatRows, StatsSection, StatsView, UserCard, UserResultsView,
    build_period, build_stats, build_users,
};
use crate::features::admin::state::{PeriodForm, build_user_search};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[function_component(AdminPage)]
pub(crate) fn admin_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");
    let api_ctx = use_context::<ApiCtx>();
    let admin = use_selector(|store: &AppStore| store.admin.clone());
    let period_form = use_state(PeriodForm::default);
    let username = use_state(String::new);

    {
        let api_ctx = api_ctx.clone();
        let bundle = bundle.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(api_ctx) = api_ctx {
                    load_stats(api_ctx.client.clone(), bundle);
                }
                || ()
            },
            (),
        );
    }

    let Some(api_ctx) = api_ctx else {
        return html! { <EmptyState title={t("common.missing_context")} /> };
    };

    let on_period = {
        let api_ctx = api_ctx.clone();
        let bundle = bundle.clone();
        let period_form = period_form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match period_form.to_request() {
                Ok(request) => load_period(api_ctx.client.clone(), bundle.clone(), request),
                Err(err) => notify::alert_invalid(&err.message(&bundle)),
            }
        })
    };

    let on_user_search = {
        let api_ctx = api_ctx.clone();
        let bundle = bundle.clone();
        let username = username.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match build_user_search(username.trim()) {
                Ok(request) => search_users(api_ctx.client.clone(), bundle.clone(), request),
                Err(err) => notify::alert_invalid(&err.message(&bundle)),
            }
        })
    };

    let on_user_action = {
        let api_ctx = api_ctx.clone();
        let bundle = bundle.clone();
        Callback::from(move |action: UserAction| {
            run_user_action(action, api_ctx.client.clone(), bundle.clone());
        })
    };

    let date_input = |update: fn(&mut PeriodForm, String)| {
        let period_form = period_form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*period_form).clone();
            update(&mut next, input.value());
            period_form.set(next);
        })
    };
    let on_username = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let stats = admin.stats.as_ref().map(|stats| build_stats(stats, &bundle));
    let period = admin.period.as_ref().map(|stats| build_period(stats, &bundle));
    let users = admin.users.as_deref().map(|users| build_users(users, &bundle));

    html! {
        <section id="admin-page" class="page">
            <h2>{t("admin.heading")}</h2>
            {stats.map_or_else(
                || html! { <p class="muted">{t("common.loading")}</p> },
                |view| render_stats(&view),
            )}
            <div class="panel">
                <h3>{t("admin.custom_heading")}</h3>
                <form id="period-form" onsubmit={on_period}>
                    <label>{t("admin.date_from")}
                        <input type="date" value={period_form.date_from.clone()}
                            oninput={date_input(|form, value| form.date_from = value)} />
                    </label>
                    <label>{t("admin.date_to")}
                        <input type="date" value={period_form.date_to.clone()}
                            oninput={date_input(|form, value| form.date_to = value)} />
                    </label>
                    <button type="submit" class="primary">{t("admin.custom_submit")}</button>
                </form>
                {period.map(|view| render_period(&view)).unwrap_or_default()}
            </div>
            <div class="panel">
                <h3>{t("admin.users_heading")}</h3>
                <form id="user-search-form" onsubmit={on_user_search}>
                    <input type="text" value={(*username).clone()} oninput={on_username} />
                    <button type="submit" class="primary">{t("admin.users_submit")}</button>
                </form>
                {users.map(|view| render_users(view, &bundle, &on_user_action)).unwrap_or_default()}
            </div>
        </section>
    }
}

fn render_stats(view: &StatsView) -> Html {
    html! {
        <>
            <div class="panel">
                <h3>{view.general_heading.clone()}</h3>
                <div class="stat-cards">
                    {for view.general.iter().map(|card| html! {
                        <div class="stat-card">
                            <span class="stat-value">{card.value.clone()}</span>
                            <span class="stat-label">{card.label.clone()}</span>
                        </div>
                    })}
                </div>
            </div>
            {for view.sections.iter().map(render_section)}
        </>
    }
}

fn render_period(view: &PeriodView) -> Html {
    html! {
        <div class="period-results">
            <h4>{view.heading.clone()}</h4>
            {render_section(&view.categories)}
            {render_section(&view.popular)}
        </div>
    }
}

fn render_section(section: &StatsSection) -> Html {
    let body = match &section.rows {
        StatRows::Empty(message) => html! { <EmptyState title={message.clone()} /> },
        StatRows::Rows(rows) => html! {
            <ol class="stat-rows">
                {for rows.iter().map(|row| html! {
                    <li class="stat-row">
                        {row.rank.map(|rank| html! { <span class="rank">{format!("{rank}.")}</span> }).unwrap_or_default()}
                        <span class="label">{row.label.clone()}</span>
                        <span class="value">{row.value.clone()}</span>
                        {for row.extras.iter().map(|extra| html! { <span class="extra">{extra.clone()}</span> })}
                    </li>
                })}
            </ol>
        },
    };
    html! {
        <div class="panel">
            <h3>{section.heading.clone()}</h3>
            {body}
        </div>
    }
}

fn render_users(
    view: UserResultsView,
    bundle: &TranslationBundle,
    on_action: &Callback<UserAction>,
) -> Html {
    match view {
        UserResultsView::Empty(message) => html! { <EmptyState title={message} /> },
        UserResultsView::Users(cards) => html! {
            <div class="user-results">
                <h4>{bundle.text("admin.users_results", "")}</h4>
                {for cards.into_iter().map(|card| render_user(card, bundle, on_action))}
            </div>
        },
    }
}

fn render_user(card: UserCard, bundle: &TranslationBundle, on_action: &Callback<UserAction>) -> Html {
    let field = |key: &str, value: &str| {
        html! {
            <p><strong>{bundle.text(key, "")}</strong>{" "}{value.to_string()}</p>
        }
    };
    let ban = match &card.ban {
        BanControl::Button => {
            let on_action = on_action.clone();
            let action = UserAction::Ban {
                id: card.id.clone(),
                username: card.username.clone(),
            };
            let onclick = Callback::from(move |_: MouseEvent| on_action.emit(action.clone()));
            html! { <button class="danger" {onclick}>{bundle.text("admin.ban", "")}</button> }
        }
        BanControl::AlreadyBanned(label) => html! { <span class="muted">{label.clone()}</span> },
    };

    html! {
        <div class="user-card">
            {field("admin.user_username", &card.username)}
            {field("admin.user_email", &card.email)}
            {field("admin.user_role", &card.role)}
            {field("admin.user_registered", &card.registered)}
            {field("admin.user_status", &card.status)}
            {ban}
        </div>
    }
}
