//! Admin moderation actions.
//!
//! # Design
//! - Capture user intent separate from rendering.
//! - Every destructive action carries its own confirmation text.

use crate::i18n::TranslationBundle;

/// Actions emitted by user search results.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserAction {
    /// Ban a user.
    Ban {
        /// User identifier.
        id: String,
        /// Username, quoted in the confirmation.
        username: String,
    },
}

impl UserAction {
    /// Confirmation prompt shown before the request.
    #[must_use]
    pub fn confirm_text(&self, bundle: &TranslationBundle) -> String {
        match self {
            Self::Ban { username, .. } => {
                bundle.fill("admin.confirm_ban", &[("username", username)])
            }
        }
    }

    /// Notice shown after the request succeeds.
    #[must_use]
    pub fn success_text(&self, bundle: &TranslationBundle) -> String {
        match self {
            Self::Ban { username, .. } => {
                bundle.fill("admin.ban_success", &[("username", username)])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LocaleCode;

    #[test]
    fn ban_prompts_name_the_user() {
        let bundle = TranslationBundle::new(LocaleCode::It);
        let action = UserAction::Ban {
            id: "u1".into(),
            username: "eve".into(),
        };
        assert_eq!(
            action.confirm_text(&bundle),
            "Sei sicuro di voler bannare l'utente \"eve\"?"
        );
        assert_eq!(
            action.success_text(&bundle),
            "Utente \"eve\" bannato con successo"
        );
    }
}
