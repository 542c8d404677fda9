//! Upload page.
//!
//! # Design
//! - The page is reachable only with a session; the router enforces it.
//! - On success the form resets and the user returns home.

use crate::app::ApiCtx;
use crate::app::notify;
use crate::components::atoms::EmptyState;
use crate::components::char_counter::CharCounter;
use crate::core::router::Page;
use crate::core::store::{app_dispatch, navigate_to};
use crate::features::upload::state::UploadForm;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use crate::models::CATEGORIES;
use crate::services::response::alert_text;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[function_component(UploadPage)]
pub(crate) fn upload_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");
    let api_ctx = use_context::<ApiCtx>();
    let form = use_state(UploadForm::default);
    let busy = use_state(|| false);

    let Some(api_ctx) = api_ctx else {
        return html! { <EmptyState title={t("common.missing_context")} /> };
    };

    let on_submit = {
        let form = form.clone();
        let busy = busy.clone();
        let bundle = bundle.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = match form.to_request() {
                Ok(request) => request,
                Err(err) => {
                    notify::alert_invalid(&err.message(&bundle));
                    return;
                }
            };
            busy.set(true);
            let client = api_ctx.client.clone();
            let form = form.clone();
            let busy = busy.clone();
            let bundle = bundle.clone();
            yew::platform::spawn_local(async move {
                match client.upload(&request).await {
                    Ok(_) => {
                        notify::success(bundle.text("upload.success", ""));
                        form.set(UploadForm::default());
                        app_dispatch().reduce_mut(|store| {
                            navigate_to(store, Page::Home);
                        });
                    }
                    Err(err) => notify::alert_failure(&alert_text(
                        &bundle.text("upload.error", "Errore nel caricamento"),
                        &err,
                        "",
                    )),
                }
                busy.set(false);
            });
        })
    };

    let text_input = |update: fn(&mut UploadForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            update(&mut next, input.value());
            form.set(next);
        })
    };

    let on_description = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.description = area.value();
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

    html! {
        <section id="upload-page" class="page">
            <h2>{t("upload.heading")}</h2>
            <form id="upload-form" onsubmit={on_submit}>
                <label>{t("upload.title")}
                    <input type="text" value={form.title.clone()}
                        oninput={text_input(|form, value| form.title = value)} />
                </label>
                <label>{t("upload.description")}
                    <textarea value={form.description.clone()} oninput={on_description} />
                </label>
                <CharCounter text={form.description.clone()} label={t("upload.remaining")} />
                <label>{t("upload.size")}
                    <input type="number" min="0" step="any" value={form.size.clone()}
                        oninput={text_input(|form, value| form.size = value)} />
                </label>
                <fieldset>
                    <legend>{t("upload.categories")}</legend>
                    {for categories}
                </fieldset>
                <label>{t("upload.images")}
                    <input type="text" value={form.images.clone()}
                        oninput={text_input(|form, value| form.images = value)} />
                </label>
                <button type="submit" class="primary" disabled={*busy}>{t("upload.submit")}</button>
            </form>
        </section>
    }
}
