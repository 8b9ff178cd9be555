//! Registration field validation.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::CoreError;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 6;

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Deliberately loose: something@something.tld. Real deliverability
    // checking is out of scope.
    RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex is valid"))
}

/// Validate the email shape against the basic pattern.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if email_regex().is_match(email) {
        Ok(())
    } else {
        Err(CoreError::Validation("Invalid email address".into()))
    }
}

/// Validate password length against [`MIN_PASSWORD_LEN`].
pub fn validate_password(password: &str) -> Result<(), CoreError> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(CoreError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate all registration fields: none empty, email well-formed,
/// password long enough.
pub fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
) -> Result<(), CoreError> {
    if username.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
        return Err(CoreError::Validation("All fields are required".into()));
    }
    validate_email(email)?;
    validate_password(password)
}
