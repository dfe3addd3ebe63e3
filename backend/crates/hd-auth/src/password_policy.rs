//! Password strength rules applied at registration.
//!
//! Violations come back as `hd_core::CoreError::Validation` keyed to the
//! `password` field so they surface the same way as other field errors.

use hd_core::{CoreError, Result as CoreErrorResult};

/// Lowercased; compared against the lowercased candidate.
const COMMON_PASSWORDS: &[&str] = &[
    "00000000",
    "11111111",
    "12345678",
    "123456789",
    "1234567890",
    "1q2w3e4r",
    "abc12345",
    "abcd1234",
    "admin123",
    "asdfghjkl",
    "baseball",
    "dragon123",
    "football",
    "iloveyou",
    "letmein1",
    "monkey123",
    "passw0rd",
    "password",
    "password1",
    "password12",
    "password123",
    "princess",
    "qwerty12",
    "qwerty123",
    "qwertyuiop",
    "starwars",
    "sunshine",
    "superman",
    "trustno1",
    "welcome1",
    "whatever",
    "zaq12wsx",
];

/// Attributes shorter than this are too short to be meaningfully "similar"
const MIN_SIMILARITY_LENGTH: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub max_length: usize,
    pub require_letter: bool,
    pub require_digit: bool,
    pub require_symbol: bool,
    pub reject_numeric: bool,
    pub reject_common: bool,
    pub reject_similar: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,
            max_length: 128,
            require_letter: false,
            require_digit: false,
            require_symbol: false,
            reject_numeric: true,
            reject_common: true,
            reject_similar: true,
        }
    }
}

/// Account attributes a password must not resemble
#[derive(Debug, Clone, Copy, Default)]
pub struct UserAttributes<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
}

impl PasswordPolicy {
    /// Check `password` for the account described by `attributes`.
    /// Returns the first violation found.
    #[track_caller]
    pub fn check(&self, password: &str, attributes: &UserAttributes<'_>) -> CoreErrorResult<()> {
        let lowered = password.to_lowercase();

        if self.reject_similar {
            let named = [
                (attributes.username, "username"),
                (attributes.first_name, "first name"),
                (attributes.last_name, "last name"),
            ];
            for (value, label) in named {
                if is_similar(&lowered, value) {
                    return Err(violation(&format!(
                        "The password is too similar to the {label}."
                    )));
                }
            }

            let email = attributes.email;
            let local_part = email.split('@').next().unwrap_or_default();
            if is_similar(&lowered, email) || is_similar(&lowered, local_part) {
                return Err(violation("The password is too similar to the email address."));
            }
        }

        let length = password.chars().count();
        if length < self.min_length {
            return Err(violation(&format!(
                "This password is too short. It must contain at least {} characters.",
                self.min_length
            )));
        }
        if length > self.max_length {
            return Err(violation(&format!(
                "This password is too long. It must contain at most {} characters.",
                self.max_length
            )));
        }

        if self.reject_common && COMMON_PASSWORDS.contains(&lowered.trim()) {
            return Err(violation("This password is too common."));
        }

        if self.reject_numeric && password.chars().all(|c| c.is_ascii_digit()) {
            return Err(violation("This password is entirely numeric."));
        }

        if self.require_letter && !password.chars().any(char::is_alphabetic) {
            return Err(violation("This password must contain at least one letter."));
        }
        if self.require_digit && !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(violation("This password must contain at least one digit."));
        }
        if self.require_symbol && password.chars().all(char::is_alphanumeric) {
            return Err(violation("This password must contain at least one symbol."));
        }

        Ok(())
    }
}

fn is_similar(lowered_password: &str, attribute: &str) -> bool {
    let attribute = attribute.to_lowercase();
    if lowered_password.is_empty() || attribute.chars().count() < MIN_SIMILARITY_LENGTH {
        return false;
    }
    lowered_password.contains(&attribute) || attribute.contains(lowered_password)
}

#[track_caller]
fn violation(message: &str) -> CoreError {
    CoreError::validation("password", message)
}
