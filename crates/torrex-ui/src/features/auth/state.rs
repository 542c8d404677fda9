//! Login and registration form state.

use crate::core::validation::{FormError, FormField, optional, required};
use torrex_api_models::{LoginRequest, RegisterRequest};

/// Mutable login form state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    /// Username or email.
    pub username: String,
    /// Password.
    pub password: String,
}

impl LoginForm {
    /// Build the login request.
    pub fn to_request(&self) -> Result<LoginRequest, FormError> {
        Ok(LoginRequest {
            username: required(FormField::Username, &self.username)?,
            password: non_blank(FormField::Password, &self.password)?,
        })
    }
}

/// Mutable registration form state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    /// Desired username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Password.
    pub password: String,
    /// Optional code granting the admin role.
    pub admin_code: String,
}

impl RegisterForm {
    /// Build the registration request.
    pub fn to_request(&self) -> Result<RegisterRequest, FormError> {
        Ok(RegisterRequest {
            username: required(FormField::Username, &self.username)?,
            email: required(FormField::Email, &self.email)?,
            password: non_blank(FormField::Password, &self.password)?,
            admin_code: optional(&self.admin_code),
        })
    }
}

// Passwords are sent untrimmed.
fn non_blank(field: FormField, value: &str) -> Result<String, FormError> {
    if value.is_empty() {
        return Err(FormError::Required(field));
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_requires_both_fields() {
        let form = LoginForm {
            username: "alice".into(),
            password: String::new(),
        };
        assert_eq!(
            form.to_request(),
            Err(FormError::Required(FormField::Password))
        );
    }

    #[test]
    fn login_keeps_password_verbatim() {
        let form = LoginForm {
            username: " alice ".into(),
            password: " x ".into(),
        };
        let request = form.to_request().expect("valid");
        assert_eq!(request.username, "alice");
        assert_eq!(request.password, " x ");
    }

    #[test]
    fn register_omits_blank_admin_code() {
        let form = RegisterForm {
            username: "bob".into(),
            email: "bob@example.com".into(),
            password: "secret".into(),
            admin_code: "   ".into(),
        };
        let request = form.to_request().expect("valid");
        assert_eq!(request.admin_code, None);

        let with_code = RegisterForm {
            admin_code: "ADMIN".into(),
            ..form
        };
        assert_eq!(
            with_code.to_request().expect("valid").admin_code.as_deref(),
            Some("ADMIN")
        );
    }

    #[test]
    fn register_requires_email() {
        let form = RegisterForm {
            username: "bob".into(),
            password: "secret".into(),
            ..RegisterForm::default()
        };
        assert_eq!(form.to_request(), Err(FormError::Required(FormField::Email)));
    }
}
