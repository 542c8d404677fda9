//! API helpers for login and registration.
//!
//! # Design
//! - Keep HTTP calls localized to the feature layer.
//! - A successful sign-in is followed by a status query that fills in the user id.

use crate::services::api::ApiClient;
use crate::services::response::ApiError;
use torrex_api_models::{AuthResponse, LoginRequest, RegisterRequest, UserStatus};

/// Validated submission of either auth form.
#[derive(Clone, Debug)]
pub(crate) enum AuthSubmission {
    Login(LoginRequest),
    Register(RegisterRequest),
}

/// Sign in or register.
pub(crate) async fn authenticate(
    client: &ApiClient,
    submission: &AuthSubmission,
) -> Result<AuthResponse, ApiError> {
    match submission {
        AuthSubmission::Login(request) => client.login(request).await,
        AuthSubmission::Register(request) => client.register(request).await,
    }
}

/// Query the session the backend now holds for this browser.
pub(crate) async fn refresh_status(client: &ApiClient) -> Result<UserStatus, ApiError> {
    client.user_status().await
}
