//! Mock Authentication
//!
//! Checks login input against the seed credential list.

use thiserror::Error;

use crate::models::{Credential, Session};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Password is required")]
    PasswordRequired,
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("An error occurred during login. Please try again.")]
    Storage,
}

fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

pub fn validate_email(email: &str) -> Result<(), LoginError> {
    let email = email.trim();
    if email.is_empty() {
        Err(LoginError::EmailRequired)
    } else if !looks_like_email(email) {
        Err(LoginError::EmailInvalid)
    } else {
        Ok(())
    }
}

pub fn validate_password(password: &str) -> Result<(), LoginError> {
    if password.is_empty() {
        Err(LoginError::PasswordRequired)
    } else {
        Ok(())
    }
}

/// Per-field validation results, so every bad field is reported at once
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<LoginError>,
    pub password: Option<LoginError>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

pub fn field_errors(email: &str, password: &str) -> FieldErrors {
    FieldErrors {
        email: validate_email(email).err(),
        password: validate_password(password).err(),
    }
}

/// Field-level checks run before looking up the credential
pub fn validate_login(email: &str, password: &str) -> Result<(), LoginError> {
    validate_email(email)?;
    validate_password(password)
}

/// Find the credential matching `email` and `password` exactly.
pub fn authenticate(credentials: &[Credential], email: &str, password: &str) -> Result<Session, LoginError> {
    validate_login(email, password)?;
    let email = email.trim();
    credentials
        .iter()
        .find(|c| c.email == email && c.password == password)
        .map(Credential::to_session)
        .ok_or(LoginError::InvalidCredentials)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn credentials() -> Vec<Credential> {
        vec![
            Credential {
                id: 1,
                email: "admin@example.com".to_string(),
                password: "Admin@123".to_string(),
                name: "Admin User".to_string(),
                role: Role::Editor,
            },
            Credential {
                id: 2,
                email: "viewer@example.com".to_string(),
                password: "Viewer@123".to_string(),
                name: "Viewer User".to_string(),
                role: Role::Viewer,
            },
        ]
    }

    #[test]
    fn test_authenticate_editor() {
        let session = authenticate(&credentials(), "admin@example.com", "Admin@123").unwrap();
        assert_eq!(session.id, 1);
        assert_eq!(session.role, Role::Editor);
    }

    #[test]
    fn test_wrong_password() {
        assert_eq!(
            authenticate(&credentials(), "admin@example.com", "admin@123"),
            Err(LoginError::InvalidCredentials)
        );
        assert_eq!(
            authenticate(&credentials(), "nobody@example.com", "Admin@123"),
            Err(LoginError::InvalidCredentials)
        );
    }

    #[test]
    fn test_field_validation() {
        assert_eq!(validate_login("", "x"), Err(LoginError::EmailRequired));
        assert_eq!(validate_login("not-an-email", "x"), Err(LoginError::EmailInvalid));
        assert_eq!(validate_login("a@b", "x"), Err(LoginError::EmailInvalid));
        assert_eq!(validate_login("a b@c.d", "x"), Err(LoginError::EmailInvalid));
        assert_eq!(validate_login("a@b.c", ""), Err(LoginError::PasswordRequired));
        assert_eq!(validate_login("a@b.c", "x"), Ok(()));
    }

    #[test]
    fn test_field_errors_reports_both_fields() {
        let errors = field_errors("not-an-email", "");
        assert_eq!(errors.email, Some(LoginError::EmailInvalid));
        assert_eq!(errors.password, Some(LoginError::PasswordRequired));
        assert!(!errors.is_empty());

        let errors = field_errors("", "secret");
        assert_eq!(errors.email, Some(LoginError::EmailRequired));
        assert_eq!(errors.password, None);

        assert!(field_errors("admin@example.com", "Admin@123").is_empty());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(LoginError::InvalidCredentials.to_string(), "Invalid email or password");
    }
}
