//! Home page: search form and result cards.
//!
//! # Design
//! - Form edits stay local; only submitted requests reach the store.
//! - Results render from the store so admin deletions update every view.

use crate::app::ApiCtx;
use crate::components::atoms::EmptyState;
use crate::core::store::AppStore;
use crate::features::search::actions::TorrentAction;
use crate::features::search::api::{run_torrent_action, spawn_search};
use crate::features::search::logic::{SearchResultsView, TorrentCard, build_results};
use crate::features::search::state::{
    SearchForm, parse_sort_field, parse_sort_order, sort_field_value, sort_order_value,
};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use crate::models::{CATEGORIES, SortField, SortOrder};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[function_component(SearchPage)]
pub(crate) fn search_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");
    let api_ctx = use_context::<ApiCtx>();
    let results = use_selector(|store: &AppStore| store.search.results.clone());
    let is_admin = use_selector(|store: &AppStore| store.session.is_administrator());
    let form = use_state(SearchForm::default);

    let Some(api_ctx) = api_ctx else {
        return html! { <EmptyState title={t("common.missing_context")} /> };
    };

    let on_submit = {
        let form = form.clone();
        let api_ctx = api_ctx.clone();
        let bundle = bundle.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            spawn_search(api_ctx.client.clone(), bundle.clone(), form.to_request());
        })
    };

    let on_action = {
        let api_ctx = api_ctx.clone();
        let bundle = bundle.clone();
        Callback::from(move |action: TorrentAction| {
            run_torrent_action(action, api_ctx.client.clone(), bundle.clone());
        })
    };

    let text_input = |update: fn(&mut SearchForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            update(&mut next, input.value());
            form.set(next);
        })
    };

    let on_sort = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.sort_by = parse_sort_field(&select.value());
            form.set(next);
        })
    };
    let on_order = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.order = parse_sort_order(&select.value());
            form.set(next);
        })
    };

    let categories = CATEGORIES.iter().map(|category| {
        let checked = form.categories.iter().any(|value| value == category.value);
        let onchange = {
            let form = form.clone();
            let value = category.value;
            Callback::from(move |_: Event| {
                let mut next = (*form).clone();
                next.toggle_category(value);
                form.set(next);
            })
        };
        html! {
            <label class="checkbox">
                <input type="checkbox" value={category.value} {checked} {onchange} />
                {bundle.text(&format!("categories.{}", category.key), category.value)}
            </label>
        }
    });

    let view = build_results(results.as_deref(), *is_admin, &bundle);

    html! {
        <section id="search-page" class="page">
            <h2>{t("search.heading")}</h2>
            <form id="search-form" onsubmit={on_submit}>
                <label>{t("search.title")}
                    <input type="text" value={form.title.clone()}
                        oninput={text_input(|form, value| form.title = value)} />
                </label>
                <label>{t("search.description")}
                    <input type="text" value={form.description.clone()}
                        oninput={text_input(|form, value| form.description = value)} />
                </label>
                <fieldset>
                    <legend>{t("search.categories")}</legend>
                    {for categories}
                </fieldset>
                <label>{t("search.date_from")}
                    <input type="date" value={form.date_from.clone()}
                        oninput={text_input(|form, value| form.date_from = value)} />
                </label>
                <label>{t("search.date_to")}
                    <input type="date" value={form.date_to.clone()}
                        oninput={text_input(|form, value| form.date_to = value)} />
                </label>
                <label>{t("search.sort_by")}
                    <select onchange={on_sort}>
                        <option value={sort_field_value(SortField::UploadDate)}
                            selected={form.sort_by == SortField::UploadDate}>{t("search.sort_date")}</option>
                        <option value={sort_field_value(SortField::Size)}
                            selected={form.sort_by == SortField::Size}>{t("search.sort_size")}</option>
                    </select>
                </label>
                <label>{t("search.order")}
                    <select onchange={on_order}>
                        <option value={sort_order_value(SortOrder::Desc)}
                            selected={form.order == SortOrder::Desc}>{t("search.order_desc")}</option>
                        <option value={sort_order_value(SortOrder::Asc)}
                            selected={form.order == SortOrder::Asc}>{t("search.order_asc")}</option>
                    </select>
                </label>
                <button type="submit" class="primary">{t("search.submit")}</button>
            </form>
            <div id="search-results" class="results-grid">
                {render_results(view, &bundle, &on_action)}
            </div>
        </section>
    }
}

fn render_results(
    view: SearchResultsView,
    bundle: &TranslationBundle,
    on_action: &Callback<TorrentAction>,
) -> Html {
    match view {
        SearchResultsView::Idle => html! {},
        SearchResultsView::Empty(message) => html! { <EmptyState title={message} /> },
        SearchResultsView::Cards(cards) => html! {
            {for cards.into_iter().map(|card| render_card(card, bundle, on_action))}
        },
    }
}

fn render_card(card: TorrentCard, bundle: &TranslationBundle, on_action: &Callback<TorrentAction>) -> Html {
    let emit = |action: TorrentAction| {
        let on_action = on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(action.clone()))
    };
    let image = card.image.as_ref().map_or_else(
        || html! { <div class="no-image">{bundle.text("common.no_image", "Nessuna immagine")}</div> },
        |src| html! { <img src={src.clone()} alt={card.title.clone()} /> },
    );

    html! {
        <article class="torrent-card">
            {image}
            <h3>{card.title.clone()}</h3>
            <p>{card.description.clone()}</p>
            <ul class="meta">
                <li><strong>{bundle.text("detail.size", "")}</strong>{" "}{card.size.clone()}</li>
                <li><strong>{bundle.text("detail.upload_date", "")}</strong>{" "}{card.date.clone()}</li>
                <li><strong>{bundle.text("detail.categories", "")}</strong>{" "}{card.categories.clone()}</li>
                <li><strong>{bundle.text("detail.rating", "")}</strong>{" "}{card.rating.clone()}</li>
            </ul>
            <div class="actions">
                <button class="primary" onclick={emit(TorrentAction::View(card.id.clone()))}>
                    {bundle.text("common.view", "Visualizza")}
                </button>
                {if card.can_delete {
                    html! {
                        <button class="danger" onclick={emit(TorrentAction::Delete(card.id.clone()))}>
                            {bundle.text("common.delete", "Elimina")}
                        </button>
                    }
                } else {
                    html! {}
                }}
            </div>
        </article>
    }
}
