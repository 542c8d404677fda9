//! Session state holder shared across the UI.
//!
//! # Design
//! - Keep the session as plain data so reducers can set/clear it without side effects.
//! - Session lifetime belongs to the backend; the client never expires it on its own.
//! - Visibility of navigation controls is derived, never stored.

use crate::i18n::TranslationBundle;
use torrex_api_models::{AuthResponse, UserStatus};

/// Role reported by the backend for the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Role {
    /// Administrator (`admin` on the wire).
    Administrator,
    /// Any other role, kept verbatim for display.
    Ordinary(String),
}

impl Role {
    /// Wire value for administrators.
    pub const ADMIN: &'static str = "admin";

    /// Interpret a raw role string.
    #[must_use]
    pub fn from_wire(raw: &str) -> Self {
        if raw == Self::ADMIN {
            Self::Administrator
        } else {
            Self::Ordinary(raw.to_string())
        }
    }

    /// Raw role string as shown to the user.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Administrator => Self::ADMIN,
            Self::Ordinary(raw) => raw,
        }
    }
}

/// Authenticated identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    /// Username shown in the navigation bar.
    pub username: String,
    /// Role used for authorization checks.
    pub role: Role,
    /// Backend identifier, only known after a status check.
    pub user_id: Option<String>,
}

/// Client-side belief about the current session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    current: Option<Session>,
    checked: bool,
}

impl SessionState {
    /// Store a freshly authenticated identity.
    pub fn set_session(&mut self, username: impl Into<String>, role: Role) {
        self.current = Some(Session {
            username: username.into(),
            role,
            user_id: None,
        });
        self.checked = true;
    }

    /// Store the identity returned by login or registration.
    pub fn apply_auth(&mut self, response: &AuthResponse) {
        self.set_session(response.username.clone(), Role::from_wire(&response.role));
    }

    /// Apply the backend status check, populating or clearing the session.
    pub fn apply_status(&mut self, status: &UserStatus) {
        self.checked = true;
        match (&status.username, status.logged_in) {
            (Some(username), true) => {
                self.current = Some(Session {
                    username: username.clone(),
                    role: Role::from_wire(status.role.as_deref().unwrap_or_default()),
                    user_id: status.user_id.clone(),
                });
            }
            _ => self.current = None,
        }
    }

    /// Mark the startup check as finished without touching the session.
    pub const fn mark_checked(&mut self) {
        self.checked = true;
    }

    /// Forget the current identity.
    pub fn clear_session(&mut self) {
        self.current = None;
        self.checked = true;
    }

    /// Whether an identity is present.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Whether the identity holds the administrator role.
    #[must_use]
    pub fn is_administrator(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|session| session.role == Role::Administrator)
    }

    /// Whether the startup status check is still outstanding.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        !self.checked
    }

    /// Current identity, if any.
    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        self.current.as_ref()
    }
}

/// Visibility of the navigation controls for a given session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavVisibility {
    /// Login link.
    pub login: bool,
    /// Registration link.
    pub register: bool,
    /// Logout link.
    pub logout: bool,
    /// Upload link.
    pub upload: bool,
    /// Admin panel link.
    pub admin_panel: bool,
    /// Greeting shown next to the links.
    pub user_info: Option<String>,
}

impl NavVisibility {
    /// Derive visibility from the session.
    #[must_use]
    pub fn derive(state: &SessionState, bundle: &TranslationBundle) -> Self {
        match state.session() {
            Some(session) => Self {
                login: false,
                register: false,
                logout: true,
                upload: true,
                admin_panel: session.role == Role::Administrator,
                user_info: Some(bundle.fill(
                    "nav.welcome",
                    &[
                        ("username", &session.username),
                        ("role", session.role.as_str()),
                    ],
                )),
            },
            None => Self {
                login: true,
                register: true,
                logout: false,
                upload: false,
                admin_panel: false,
                user_info: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{LocaleCode, TranslationBundle};

    fn italian() -> TranslationBundle {
        TranslationBundle::new(LocaleCode::It)
    }

    #[test]
    fn admin_login_shows_admin_link_and_greeting() {
        let mut state = SessionState::default();
        state.apply_auth(&AuthResponse {
            username: "alice".into(),
            role: "admin".into(),
        });
        let nav = NavVisibility::derive(&state, &italian());
        assert!(!nav.login);
        assert!(!nav.register);
        assert!(nav.logout);
        assert!(nav.upload);
        assert!(nav.admin_panel);
        assert_eq!(nav.user_info.as_deref(), Some("Benvenuto, alice (admin)"));
    }

    #[test]
    fn ordinary_login_hides_admin_link() {
        let mut state = SessionState::default();
        state.set_session("bob", Role::from_wire("user"));
        let nav = NavVisibility::derive(&state, &italian());
        assert!(nav.upload);
        assert!(!nav.admin_panel);
        assert_eq!(nav.user_info.as_deref(), Some("Benvenuto, bob (user)"));
    }

    #[test]
    fn logout_reverts_to_anonymous_visibility() {
        let anonymous = NavVisibility::derive(&SessionState::default(), &italian());
        for role in ["admin", "user"] {
            let mut state = SessionState::default();
            state.set_session("carol", Role::from_wire(role));
            state.clear_session();
            assert_eq!(NavVisibility::derive(&state, &italian()), anonymous);
        }
        assert!(anonymous.login && anonymous.register);
        assert!(!anonymous.logout && !anonymous.upload && !anonymous.admin_panel);
        assert!(anonymous.user_info.is_none());
    }

    #[test]
    fn status_check_restores_or_clears() {
        let mut state = SessionState::default();
        assert!(state.is_pending());
        state.apply_status(&UserStatus {
            logged_in: true,
            username: Some("dave".into()),
            role: Some("admin".into()),
            user_id: Some("u1".into()),
        });
        assert!(!state.is_pending());
        assert!(state.is_administrator());
        assert_eq!(
            state.session().and_then(|s| s.user_id.as_deref()),
            Some("u1")
        );

        state.apply_status(&UserStatus::default());
        assert!(!state.is_authenticated());
    }

    #[test]
    fn unknown_roles_are_ordinary() {
        assert_eq!(
            Role::from_wire("moderator"),
            Role::Ordinary("moderator".into())
        );
        assert_eq!(Role::from_wire("admin").as_str(), "admin");
    }
}
