use hd_auth::AuthError;
use hd_core::{CoreError, ErrorLocation};
use hd_db::DbError;

use std::panic::Location;

use thiserror::Error;
use uuid::Uuid;

pub const DUPLICATE_EMAIL_MESSAGE: &str = "A user with that email already exists.";
pub const DUPLICATE_USERNAME_MESSAGE: &str = "A user with that username already exists.";
pub const PASSWORD_MISMATCH_MESSAGE: &str = "Password fields didn't match.";

#[derive(Error, Debug)]
pub enum AccountError {
    /// User-correctable input problem keyed to one request field
    #[error("Validation error on '{field}': {message} {location}")]
    Validation {
        field: String,
        message: String,
        location: ErrorLocation,
    },

    /// The store rejected a write on a unique column after validation passed
    #[error("Duplicate value for '{field}' {location}")]
    Duplicate {
        field: String,
        location: ErrorLocation,
    },

    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Account is inactive {location}")]
    InactiveAccount { location: ErrorLocation },

    #[error("User not found: {user_id} {location}")]
    NotFound {
        user_id: Uuid,
        location: ErrorLocation,
    },

    #[error("Auth error: {source} {location}")]
    Auth {
        #[source]
        source: AuthError,
        location: ErrorLocation,
    },

    #[error("Database error: {source} {location}")]
    Db {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },
}

impl AccountError {
    #[track_caller]
    pub fn validation<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Field a client should highlight, if the error is keyed to one
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } | Self::Duplicate { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl From<CoreError> for AccountError {
    #[track_caller]
    fn from(err: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match err {
            CoreError::Validation { field, message, .. } => Self::Validation {
                field,
                message,
                location,
            },
            CoreError::InvalidRole { value, .. } => Self::Validation {
                field: "role".to_string(),
                message: format!("\"{value}\" is not a valid choice."),
                location,
            },
        }
    }
}

impl From<DbError> for AccountError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match source.violated_field() {
            Some(field) => Self::Duplicate {
                field: field.to_string(),
                location,
            },
            None => Self::Db { source, location },
        }
    }
}

impl From<sqlx::Error> for AccountError {
    #[track_caller]
    fn from(err: sqlx::Error) -> Self {
        DbError::from(err).into()
    }
}

impl From<AuthError> for AccountError {
    #[track_caller]
    fn from(source: AuthError) -> Self {
        Self::Auth {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AccountError>;
