//! Auth failure messaging.

use crate::core::router::AuthForm;
use crate::i18n::TranslationBundle;
use crate::services::response::{ApiError, alert_text};

/// Alert text for a failed login or registration.
#[must_use]
pub fn failure_message(bundle: &TranslationBundle, form: AuthForm, err: &ApiError) -> String {
    let (prefix, fallback) = match form {
        AuthForm::Login => (
            bundle.text("auth.login_failed", "Login fallito"),
            bundle.text("auth.login_fallback", "Credenziali non valide"),
        ),
        AuthForm::Register => (
            bundle.text("auth.register_failed", "Registrazione fallita"),
            bundle.text("auth.register_fallback", "Errore sconosciuto"),
        ),
    };
    alert_text(&prefix, err, &fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LocaleCode;

    #[test]
    fn login_without_server_message_uses_fallback() {
        let bundle = TranslationBundle::new(LocaleCode::It);
        let err = ApiError::Server {
            status: 401,
            message: None,
        };
        assert_eq!(
            failure_message(&bundle, AuthForm::Login, &err),
            "Login fallito: Credenziali non valide"
        );
        assert_eq!(
            failure_message(&bundle, AuthForm::Register, &err),
            "Registrazione fallita: Errore sconosciuto"
        );
    }

    #[test]
    fn server_message_is_shown_verbatim() {
        let bundle = TranslationBundle::new(LocaleCode::It);
        let err = ApiError::Server {
            status: 400,
            message: Some("Username già esistente".into()),
        };
        assert_eq!(
            failure_message(&bundle, AuthForm::Register, &err),
            "Registrazione fallita: Username già esistente"
        );
    }
}
