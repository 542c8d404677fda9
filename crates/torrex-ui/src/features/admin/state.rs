//! Admin dashboard state.
//!
//! # Design
//! - Hold the last fetched statistics and user results; nothing is cached across sessions.
//! - Remember the last user query so a ban can re-run it.

use crate::core::validation::FormError;
use torrex_api_models::{AdminStats, PeriodStats, PeriodStatsRequest, UserRecord, UserSearchRequest};

/// Admin slice held in the app store.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdminState {
    /// Dashboard statistics.
    pub stats: Option<AdminStats>,
    /// Custom period statistics.
    pub period: Option<PeriodStats>,
    /// Last user search results.
    pub users: Option<Vec<UserRecord>>,
    /// Username of the last user search.
    pub last_user_query: Option<String>,
}

/// Mutable period form state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PeriodForm {
    /// Start date (`yyyy-mm-dd`).
    pub date_from: String,
    /// End date (`yyyy-mm-dd`).
    pub date_to: String,
}

impl PeriodForm {
    /// Build the period request; both dates are mandatory.
    pub fn to_request(&self) -> Result<PeriodStatsRequest, FormError> {
        let date_from = self.date_from.trim();
        let date_to = self.date_to.trim();
        if date_from.is_empty() || date_to.is_empty() {
            return Err(FormError::DatesRequired);
        }
        Ok(PeriodStatsRequest {
            date_from: date_from.to_string(),
            date_to: date_to.to_string(),
        })
    }
}

/// Build the user search request; the username is mandatory.
pub fn build_user_search(username: &str) -> Result<UserSearchRequest, FormError> {
    if username.is_empty() {
        return Err(FormError::UsernameRequired);
    }
    Ok(UserSearchRequest {
        username: username.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_requires_both_dates() {
        let form = PeriodForm {
            date_from: "2024-01-01".into(),
            date_to: String::new(),
        };
        assert_eq!(form.to_request(), Err(FormError::DatesRequired));
        let complete = PeriodForm {
            date_to: "2024-01-31".into(),
            ..form
        };
        assert_eq!(
            complete.to_request(),
            Ok(PeriodStatsRequest {
                date_from: "2024-01-01".into(),
                date_to: "2024-01-31".into(),
            })
        );
    }

    #[test]
    fn user_search_requires_username() {
        assert_eq!(build_user_search(""), Err(FormError::UsernameRequired));
        assert_eq!(
            build_user_search("ali").map(|request| request.username),
            Ok("ali".to_string())
        );
    }
}
