//! Registration input and its pure (store-free) validation.

use crate::error::PASSWORD_MISMATCH_MESSAGE;

use hd_auth::{PasswordPolicy, UserAttributes};
use hd_core::validation::{REQUIRED_MESSAGE, validate_email, validate_name, validate_username};
use hd_core::{CoreError, Result as CoreErrorResult, Role};

use std::str::FromStr;

/// Candidate registration as submitted by a client
#[derive(Debug, Clone, Default)]
pub struct RegistrationRequest {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub password2: Option<String>,
    pub role: Option<String>,
}

/// Registration that passed every check not requiring the store.
/// The confirmation field is gone and the role is parsed.
pub struct ValidatedRegistration {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub role: Option<Role>,
}

impl std::fmt::Debug for ValidatedRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatedRegistration")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

impl RegistrationRequest {
    /// Field constraints, then password policy, then confirmation match.
    /// Stops at the first failure.
    #[track_caller]
    pub fn validate(self, policy: &PasswordPolicy) -> CoreErrorResult<ValidatedRegistration> {
        let username = self.username.trim().to_string();
        let email = self.email.trim().to_string();
        let first_name = self.first_name.trim().to_string();
        let last_name = self.last_name.trim().to_string();

        validate_username(&username)?;
        validate_email(&email)?;
        validate_name("first_name", &first_name)?;
        validate_name("last_name", &last_name)?;
        let role = self.role.as_deref().map(Role::from_str).transpose()?;

        if self.password.is_empty() {
            return Err(CoreError::validation("password", REQUIRED_MESSAGE));
        }
        policy.check(
            &self.password,
            &UserAttributes {
                username: &username,
                email: &email,
                first_name: &first_name,
                last_name: &last_name,
            },
        )?;

        let Some(confirmation) = self.password2 else {
            return Err(CoreError::validation("password2", REQUIRED_MESSAGE));
        };
        if confirmation != self.password {
            return Err(CoreError::validation("password", PASSWORD_MISMATCH_MESSAGE));
        }

        Ok(ValidatedRegistration {
            username,
            email,
            first_name,
            last_name,
            password: self.password,
            role,
        })
    }
}
