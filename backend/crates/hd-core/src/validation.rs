//! Required-field constraints for identity input.
//!
//! Every check returns a [`CoreError::Validation`] keyed to the offending
//! field so the HTTP layer can report it without further mapping.

use crate::{CoreError, Result as CoreErrorResult};

pub const MAX_USERNAME_LENGTH: usize = 150;
pub const MAX_EMAIL_LENGTH: usize = 254;
pub const MAX_NAME_LENGTH: usize = 150;

pub const REQUIRED_MESSAGE: &str = "This field is required.";

/// Username: non-blank, bounded, letters/digits and `@ . + - _` only
#[track_caller]
pub fn validate_username(username: &str) -> CoreErrorResult<()> {
    if username.trim().is_empty() {
        return Err(CoreError::validation("username", REQUIRED_MESSAGE));
    }

    if username.chars().count() > MAX_USERNAME_LENGTH {
        return Err(CoreError::validation(
            "username",
            format!(
                "Ensure this field has no more than {} characters.",
                MAX_USERNAME_LENGTH
            ),
        ));
    }

    let valid = username
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'));
    if !valid {
        return Err(CoreError::validation(
            "username",
            "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters.",
        ));
    }

    Ok(())
}

/// Email: non-blank, bounded, `local@domain.tld` shaped
#[track_caller]
pub fn validate_email(email: &str) -> CoreErrorResult<()> {
    if email.trim().is_empty() {
        return Err(CoreError::validation("email", REQUIRED_MESSAGE));
    }

    if email.chars().count() > MAX_EMAIL_LENGTH {
        return Err(CoreError::validation(
            "email",
            format!(
                "Ensure this field has no more than {} characters.",
                MAX_EMAIL_LENGTH
            ),
        ));
    }

    if !is_email_shaped(email) {
        return Err(CoreError::validation("email", "Enter a valid email address."));
    }

    Ok(())
}

/// First/last name: optional, only bounded in length
#[track_caller]
pub fn validate_name(field: &str, value: &str) -> CoreErrorResult<()> {
    if value.chars().count() > MAX_NAME_LENGTH {
        return Err(CoreError::validation(
            field,
            format!(
                "Ensure this field has no more than {} characters.",
                MAX_NAME_LENGTH
            ),
        ));
    }
    Ok(())
}

fn is_email_shaped(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.rsplit_once('@') else {
        return false;
    };

    if local.is_empty() || local.contains('@') || domain.is_empty() {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}
