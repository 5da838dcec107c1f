//! Input validation for the service layer.

use crate::error::{Error, Result};

/// Minimum accepted password length, matching the signup contract.
pub const MIN_PASSWORD_LENGTH: usize = 5;

/// Validates that a username is present and non-blank.
pub fn validate_username(username: &str) -> Result<()> {
    if username.trim().is_empty() {
        return Err(Error::Validation("Username is required".to_string()));
    }
    Ok(())
}

/// Validates email format.
///
/// Structural checks only: exactly one `@` with a non-empty local part and a
/// dot-containing domain.
pub fn validate_email(email: &str) -> Result<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(Error::Validation("Email is required".to_string()));
    }

    if email.len() > 254 {
        return Err(Error::Validation(
            "Email address is too long (max 254 characters)".to_string(),
        ));
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return Err(Error::Validation("Valid email is required".to_string()));
    }

    let (local_part, domain) = (parts[0], parts[1]);
    if local_part.is_empty() || domain.is_empty() {
        return Err(Error::Validation("Valid email is required".to_string()));
    }

    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(Error::Validation("Valid email is required".to_string()));
    }

    if email.contains(char::is_whitespace) {
        return Err(Error::Validation("Valid email is required".to_string()));
    }

    Ok(())
}

/// Validates password strength for signup.
pub fn validate_password(password: &str) -> Result<()> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(Error::Validation(format!(
            "Password must be at least {} characters long",
            MIN_PASSWORD_LENGTH
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_username_rejects_blank() {
        assert!(validate_username("").is_err());
        assert!(validate_username("   ").is_err());
        assert!(validate_username("alice").is_ok());
    }

    #[test]
    fn test_validate_email_accepts_normal_addresses() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("first.last@sub.domain.org").is_ok());
    }

    #[test]
    fn test_validate_email_rejects_malformed() {
        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("user@").is_err());
        assert!(validate_email("user@nodot").is_err());
        assert!(validate_email("a@b@c.com").is_err());
        assert!(validate_email("user name@example.com").is_err());
    }

    #[test]
    fn test_validate_password_length() {
        assert!(validate_password("1234").is_err());
        assert!(validate_password("12345").is_ok());
    }
}
