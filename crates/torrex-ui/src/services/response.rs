//! Response decoding and the API error type.
//!
//! # Design
//! - Decoding works on `(status, body)` pairs so it stays testable off the browser.
//! - Non-2xx bodies are mined for the backend `error` field and shown verbatim.
//! - Failures are terminal; nothing here retries.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use torrex_api_models::{ErrorBody, TorrentRecord};

/// Failure of a single API call.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The response body was not the expected JSON.
    #[error("invalid response: {0}")]
    Decode(String),
    /// The backend answered with a non-2xx status.
    #[error("{}", server_text(.status, .message))]
    Server {
        /// HTTP status code.
        status: u16,
        /// Backend `error` field, when present.
        message: Option<String>,
    },
    /// The backend answered with an empty record.
    #[error("not found")]
    NotFound,
}

fn server_text(status: &u16, message: &Option<String>) -> String {
    message
        .clone()
        .unwrap_or_else(|| format!("HTTP {status}"))
}

impl ApiError {
    /// Message for the alert channel; `fallback` replaces a missing server message.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Server { message: None, .. } if !fallback.is_empty() => fallback.to_string(),
            other => other.to_string(),
        }
    }
}

/// Compose `"<prefix>: <message>"` for a failed action.
#[must_use]
pub fn alert_text(prefix: &str, err: &ApiError, fallback: &str) -> String {
    format!("{prefix}: {}", err.user_message(fallback))
}

const fn is_success(status: u16) -> bool {
    status >= 200 && status < 300
}

fn server_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error)
        .filter(|message| !message.trim().is_empty());
    ApiError::Server { status, message }
}

/// Decode a JSON success payload.
pub fn decode_body<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !is_success(status) {
        return Err(server_error(status, body));
    }
    serde_json::from_str(body).map_err(|err| ApiError::Decode(err.to_string()))
}

/// Accept any success status, ignoring the payload.
pub fn decode_empty(status: u16, body: &str) -> Result<(), ApiError> {
    if is_success(status) {
        Ok(())
    } else {
        Err(server_error(status, body))
    }
}

/// Decode a torrent detail, mapping an empty object to [`ApiError::NotFound`].
pub fn decode_detail(status: u16, body: &str) -> Result<TorrentRecord, ApiError> {
    let value: Value = decode_body(status, body)?;
    if value.as_object().is_some_and(serde_json::Map::is_empty) {
        return Err(ApiError::NotFound);
    }
    serde_json::from_value(value).map_err(|err| ApiError::Decode(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use torrex_api_models::AuthResponse;

    #[test]
    fn success_bodies_decode() {
        let auth: AuthResponse =
            decode_body(200, r#"{"username":"alice","role":"admin"}"#).expect("decodes");
        assert_eq!(auth.username, "alice");
        assert_eq!(auth.role, "admin");
    }

    #[test]
    fn server_errors_carry_backend_message() {
        let err = decode_body::<AuthResponse>(401, r#"{"error":"Credenziali errate"}"#)
            .expect_err("401 fails");
        assert_eq!(
            err,
            ApiError::Server {
                status: 401,
                message: Some("Credenziali errate".into())
            }
        );
        assert_eq!(
            alert_text("Login fallito", &err, "Credenziali non valide"),
            "Login fallito: Credenziali errate"
        );
    }

    #[test]
    fn missing_server_message_uses_fallback() {
        let err = decode_empty(500, "<html>").expect_err("500 fails");
        assert_eq!(
            alert_text("Login fallito", &err, "Credenziali non valide"),
            "Login fallito: Credenziali non valide"
        );
        assert_eq!(alert_text("Errore", &err, ""), "Errore: HTTP 500");
    }

    #[test]
    fn malformed_success_is_a_decode_error() {
        let err = decode_body::<AuthResponse>(200, "not json").expect_err("fails");
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn empty_detail_is_not_found() {
        assert_eq!(decode_detail(200, "{}"), Err(ApiError::NotFound));
        let record = decode_detail(200, r#"{"_id":"t1","title":"Ubuntu","comments":[]}"#)
            .expect("detail decodes");
        assert_eq!(record.id, "t1");
        assert_eq!(record.comments.map(|c| c.len()), Some(0));
    }

    #[test]
    fn empty_success_ignores_body() {
        assert_eq!(decode_empty(200, ""), Ok(()));
        assert_eq!(decode_empty(204, "{}"), Ok(()));
    }
}
