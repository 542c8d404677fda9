//! Login and registration page.
//!
//! # Design
//! - One page hosts both forms; the current form comes from the route.
//! - Validation failures alert before any request is sent.

use crate::app::ApiCtx;
use crate::app::notify;
use crate::components::atoms::EmptyState;
use crate::core::router::{AuthForm, Page};
use crate::core::store::{app_dispatch, apply_login, apply_status, navigate_to};
use crate::core::validation::FormError;
use crate::features::auth::api::{AuthSubmission, authenticate, refresh_status};
use crate::features::auth::logic::failure_message;
use crate::features::auth::state::{LoginForm, RegisterForm};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use gloo::console;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct AuthPageProps {
    pub form: AuthForm,
}

#[function_component(AuthPage)]
pub(crate) fn auth_page(props: &AuthPageProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str| bundle.text(key, "");
    let api_ctx = use_context::<ApiCtx>();
    let login = use_state(LoginForm::default);
    let register = use_state(RegisterForm::default);
    let busy = use_state(|| false);

    let Some(api_ctx) = api_ctx else {
        return html! { <EmptyState title={t("common.missing_context")} /> };
    };

    let submit = {
        let bundle = bundle.clone();
        let busy = busy.clone();
        move |form: AuthForm, built: Result<AuthSubmission, FormError>| {
            let submission = match built {
                Ok(submission) => submission,
                Err(err) => {
                    notify::alert_invalid(&err.message(&bundle));
                    return;
                }
            };
            busy.set(true);
            let client = api_ctx.client.clone();
            let bundle = bundle.clone();
            let busy = busy.clone();
            yew::platform::spawn_local(async move {
                match authenticate(&client, &submission).await {
                    Ok(response) => {
                        app_dispatch().reduce_mut(|store| apply_login(store, &response));
                        match refresh_status(&client).await {
                            Ok(status) => {
                                app_dispatch().reduce_mut(|store| apply_status(store, &status));
                            }
                            Err(err) => console::error!("status refresh failed", err.to_string()),
                        }
                    }
                    Err(err) => notify::alert_failure(&failure_message(&bundle, form, &err)),
                }
                busy.set(false);
            });
        }
    };

    let switch_to = |target: AuthForm| {
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            app_dispatch().reduce_mut(|store| {
                navigate_to(store, Page::Auth(target));
            });
        })
    };

    match props.form {
        AuthForm::Login => {
            let on_submit = {
                let login = login.clone();
                let submit = submit.clone();
                Callback::from(move |e: SubmitEvent| {
                    e.prevent_default();
                    submit(AuthForm::Login, login.to_request().map(AuthSubmission::Login));
                })
            };
            html! {
                <section id="auth-page" class="page auth">
                    <h2>{t("auth.login_heading")}</h2>
                    <form id="login-form" onsubmit={on_submit}>
                        <label>{t("auth.username")}
                            <input type="text" autocomplete="username" value={login.username.clone()}
                                oninput={edit(&login, |form, value| form.username = value)} />
                        </label>
                        <label>{t("auth.password")}
                            <input type="password" autocomplete="current-password" value={login.password.clone()}
                                oninput={edit(&login, |form, value| form.password = value)} />
                        </label>
                        <button type="submit" class="primary" disabled={*busy}>{t("auth.login_submit")}</button>
                    </form>
                    <a href="#" onclick={switch_to(AuthForm::Register)}>{t("auth.to_register")}</a>
                </section>
            }
        }
        AuthForm::Register => {
            let on_submit = {
                let register = register.clone();
                Callback::from(move |e: SubmitEvent| {
                    e.prevent_default();
                    submit(
                        AuthForm::Register,
                        register.to_request().map(AuthSubmission::Register),
                    );
                })
            };
            html! {
                <section id="auth-page" class="page auth">
                    <h2>{t("auth.register_heading")}</h2>
                    <form id="register-form" onsubmit={on_submit}>
                        <label>{t("fields.username")}
                            <input type="text" autocomplete="username" value={register.username.clone()}
                                oninput={edit(&register, |form, value| form.username = value)} />
                        </label>
                        <label>{t("auth.email")}
                            <input type="email" autocomplete="email" value={register.email.clone()}
                                oninput={edit(&register, |form, value| form.email = value)} />
                        </label>
                        <label>{t("auth.password")}
                            <input type="password" autocomplete="new-password" value={register.password.clone()}
                                oninput={edit(&register, |form, value| form.password = value)} />
                        </label>
                        <label>{t("auth.admin_code")}
                            <input type="password" value={register.admin_code.clone()}
                                oninput={edit(&register, |form, value| form.admin_code = value)} />
                        </label>
                        <button type="submit" class="primary" disabled={*busy}>{t("auth.register_submit")}</button>
                    </form>
                    <a href="#" onclick={switch_to(AuthForm::Login)}>{t("auth.to_login")}</a>
                </section>
            }
        }
    }
}

fn edit<F: Clone + 'static>(state: &UseStateHandle<F>, update: fn(&mut F, String)) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*state).clone();
        update(&mut next, input.value());
        state.set(next);
    })
}
