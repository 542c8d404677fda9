//! Torrent detail page.
//!
//! # Design
//! - Fetch on entry and after every comment change; the store keeps only the viewed record.
//! - Late responses for another torrent are dropped by the detail token.
//! - A failed load alerts and returns home.

use crate::app::ApiCtx;
use crate::app::notify;
use crate::components::atoms::EmptyState;
use crate::components::char_counter::CharCounter;
use crate::core::router::{AuthForm, Page};
use crate::core::store::{AppStore, app_dispatch, apply_detail, begin_detail, navigate_to};
use crate::features::detail::actions::CommentAction;
use crate::features::detail::logic::{
    CommentItem, CommentThread, DetailView, DownloadAccess, build_detail, load_error_text,
    rating_options,
};
use crate::features::detail::state::{COMMENT_MAX_LEN, CommentForm, Reloads, parse_rating};
use crate::features::search::actions::TorrentAction;
use crate::features::search::api::run_torrent_action;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use crate::services::response::alert_text;
use web_sys::{HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub(crate) struct DetailPageProps {
    pub id: String,
}

#[function_component(DetailPage)]
pub(crate) fn detail_page(props: &DetailPageProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");
    let api_ctx = use_context::<ApiCtx>();
    let viewed = use_selector(|store: &AppStore| store.viewed.clone());
    let session = use_selector(|store: &AppStore| store.session.clone());
    let reload = use_reducer(Reloads::default);
    let comment = use_state(CommentForm::default);

    {
        let api_ctx = api_ctx.clone();
        let bundle = bundle.clone();
        use_effect_with_deps(
            move |(id, _): &(String, u32)| {
                if let Some(api_ctx) = api_ctx {
                    load_detail(&api_ctx, bundle, id.clone());
                }
                || ()
            },
            (props.id.clone(), reload.0),
        );
    }

    let Some(api_ctx) = api_ctx else {
        return html! { <EmptyState title={t("common.missing_context")} /> };
    };

    let record = (*viewed).as_ref().filter(|record| record.id == props.id);
    let Some(record) = record else {
        return html! {
            <section id="detail-page" class="page">
                <p class="muted">{t("common.loading")}</p>
            </section>
        };
    };
    let view = build_detail(record, &session, &bundle);

    let on_torrent_action = {
        let api_ctx = api_ctx.clone();
        let bundle = bundle.clone();
        Callback::from(move |action: TorrentAction| {
            run_torrent_action(action, api_ctx.client.clone(), bundle.clone());
        })
    };

    let on_comment_action = {
        let api_ctx = api_ctx.clone();
        let bundle = bundle.clone();
        let reload = reload.dispatcher();
        Callback::from(move |action: CommentAction| match action {
            CommentAction::Delete(comment_id) => {
                if !notify::confirm(&bundle.text("admin.confirm_delete_comment", "")) {
                    return;
                }
                let client = api_ctx.client.clone();
                let bundle = bundle.clone();
                let reload = reload.clone();
                yew::platform::spawn_local(async move {
                    match client.delete_comment(&comment_id).await {
                        Ok(()) => {
                            notify::success(bundle.text("admin.delete_comment_success", ""));
                            reload.dispatch(());
                        }
                        Err(err) => notify::alert_failure(&alert_text(
                            &bundle.text("admin.action_error", "Errore"),
                            &err,
                            "",
                        )),
                    }
                });
            }
        })
    };

    let on_comment_submit = {
        let api_ctx = api_ctx.clone();
        let bundle = bundle.clone();
        let comment = comment.clone();
        let reload = reload.dispatcher();
        let torrent_id = view.id.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = match comment.to_request(&torrent_id) {
                Ok(request) => request,
                Err(err) => {
                    notify::alert_invalid(&err.message(&bundle));
                    return;
                }
            };
            let client = api_ctx.client.clone();
            let bundle = bundle.clone();
            let comment = comment.clone();
            let reload = reload.clone();
            yew::platform::spawn_local(async move {
                match client.add_comment(&request).await {
                    Ok(()) => {
                        notify::success(bundle.text("detail.comment_added", ""));
                        comment.set(CommentForm::default());
                        reload.dispatch(());
                    }
                    Err(err) => notify::alert_failure(&alert_text(
                        &bundle.text("detail.comment_error", "Errore nell'aggiunta del commento"),
                        &err,
                        "",
                    )),
                }
            });
        })
    };

    html! {
        <section id="detail-page" class="page">
            {render_header(&view, &bundle, &on_torrent_action)}
            <div class="comments">
                <h3>{view.comments_heading.clone()}</h3>
                {render_thread(&view.thread, &bundle, &on_comment_action)}
                {if view.comment_form {
                    render_comment_form(&comment, &bundle, on_comment_submit)
                } else {
                    html! { <p class="muted">{login_link(t("detail.login_to_comment"))}</p> }
                }}
            </div>
        </section>
    }
}

fn load_detail(api_ctx: &ApiCtx, bundle: TranslationBundle, id: String) {
    let dispatch = app_dispatch();
    let mut issued = None;
    dispatch.reduce_mut(|store| issued = Some(begin_detail(store)));
    let Some(token) = issued else {
        return;
    };
    let client = api_ctx.client.clone();
    yew::platform::spawn_local(async move {
        match client.torrent_detail(&id).await {
            Ok(record) => {
                dispatch.reduce_mut(|store| {
                    apply_detail(store, token, record.clone());
                });
            }
            Err(err) => {
                if dispatch.get().requests.is_current(token) {
                    notify::alert_failure(&load_error_text(&bundle, &err));
                    dispatch.reduce_mut(|store| {
                        navigate_to(store, Page::Home);
                    });
                }
            }
        }
    });
}

fn login_link(label: String) -> Html {
    let onclick = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        app_dispatch().reduce_mut(|store| {
            navigate_to(store, Page::Auth(AuthForm::Login));
        });
    });
    html! { <a href="#" {onclick}>{label}</a> }
}

fn render_header(
    view: &DetailView,
    bundle: &TranslationBundle,
    on_action: &Callback<TorrentAction>,
) -> Html {
    let emit = |action: TorrentAction| {
        let on_action = on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(action.clone()))
    };
    let gallery = if view.images.is_empty() {
        html! { <p class="muted">{bundle.text("detail.no_images", "")}</p> }
    } else {
        html! {
            <div class="gallery">
                {for view.images.iter().map(|src| html! { <img src={src.clone()} alt={view.title.clone()} /> })}
            </div>
        }
    };
    let meta = [
        ("detail.description", &view.description),
        ("detail.size", &view.size),
        ("detail.categories", &view.categories),
        ("detail.upload_date", &view.upload_date),
        ("detail.downloads", &view.downloads),
        ("detail.rating", &view.rating),
    ];

    html! {
        <header class="detail-header">
            <h2>{view.title.clone()}</h2>
            {if view.can_delete {
                html! {
                    <button class="danger" onclick={emit(TorrentAction::Delete(view.id.clone()))}>
                        {bundle.text("detail.delete", "")}
                    </button>
                }
            } else {
                html! {}
            }}
            {gallery}
            <dl class="meta">
                {for meta.iter().map(|(key, value)| html! {
                    <>
                        <dt>{bundle.text(key, "")}</dt>
                        <dd>{(*value).clone()}</dd>
                    </>
                })}
            </dl>
            {match view.download {
                DownloadAccess::Button => html! {
                    <button class="primary" onclick={emit(TorrentAction::Download(view.id.clone()))}>
                        {bundle.text("detail.download", "")}
                    </button>
                },
                DownloadAccess::LoginPrompt => html! {
                    <p class="muted">{login_link(bundle.text("detail.login_to_download", ""))}</p>
                },
            }}
        </header>
    }
}

fn render_thread(
    thread: &CommentThread,
    bundle: &TranslationBundle,
    on_action: &Callback<CommentAction>,
) -> Html {
    match thread {
        CommentThread::Empty(message) => html! { <EmptyState title={message.clone()} /> },
        CommentThread::Items(items) => html! {
            <ul class="comment-list">
                {for items.iter().map(|item| render_comment(item, bundle, on_action))}
            </ul>
        },
    }
}

fn render_comment(
    item: &CommentItem,
    bundle: &TranslationBundle,
    on_action: &Callback<CommentAction>,
) -> Html {
    let on_delete = {
        let on_action = on_action.clone();
        let id = item.id.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(CommentAction::Delete(id.clone())))
    };
    html! {
        <li class="comment">
            <div class="comment-meta">
                <strong>{item.author.clone()}</strong>
                <span class="muted">{item.date.clone()}</span>
                <span class="stars">{item.stars.clone()}</span>
            </div>
            <p>{item.text.clone()}</p>
            {if item.can_delete {
                html! {
                    <button class="danger" onclick={on_delete}>{bundle.text("common.delete", "Elimina")}</button>
                }
            } else {
                html! {}
            }}
        </li>
    }
}

fn render_comment_form(
    comment: &UseStateHandle<CommentForm>,
    bundle: &TranslationBundle,
    onsubmit: Callback<SubmitEvent>,
) -> Html {
    let on_rating = {
        let comment = comment.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*comment).clone();
            next.rating = parse_rating(&select.value());
            comment.set(next);
        })
    };
    let on_text = {
        let comment = comment.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*comment).clone();
            next.text = area.value();
            comment.set(next);
        })
    };
    let rating = comment.rating;

    html! {
        <form id="comment-form" {onsubmit}>
            <h4>{bundle.text("detail.add_comment", "")}</h4>
            <label>{bundle.text("detail.rating_label", "")}
                <select onchange={on_rating}>
                    {for rating_options(bundle).into_iter().map(|(value, label)| html! {
                        <option value={value.to_string()} selected={value == rating}>{label}</option>
                    })}
                </select>
            </label>
            <textarea
                placeholder={bundle.text("detail.comment_placeholder", "")}
                maxlength={COMMENT_MAX_LEN.to_string()}
                value={comment.text.clone()}
                oninput={on_text}
            />
            <CharCounter text={comment.text.clone()} label={bundle.text("detail.remaining", "")} />
            <button type="submit" class="primary">{bundle.text("detail.send_comment", "")}</button>
        </form>
    }
}
