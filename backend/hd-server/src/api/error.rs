//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses
//! with appropriate HTTP status codes.

use hd_accounts::AccountError;
use hd_auth::AuthError;
use hd_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

const INVALID_CREDENTIALS_MESSAGE: &str = "No active account found with the given credentials";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "VALIDATION_ERROR", "DUPLICATE")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if the error is keyed to a request field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Unique value already taken (400)
    #[error("Duplicate: {message} {location}")]
    Duplicate {
        message: String,
        field: String,
        location: ErrorLocation,
    },

    /// Missing, invalid or rejected credentials (401)
    #[error("Unauthorized ({code}): {message} {location}")]
    Unauthorized {
        code: String,
        message: String,
        location: ErrorLocation,
    },

    /// Login throttled (429)
    #[error("Too many requests: {message} {location}")]
    TooManyRequests {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn invalid_credentials() -> Self {
        ApiError::Unauthorized {
            code: "INVALID_CREDENTIALS".into(),
            message: INVALID_CREDENTIALS_MESSAGE.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        if matches!(self, ApiError::Internal { .. }) {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let (status, body) = match self {
            ApiError::NotFound { message, .. } => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "NOT_FOUND".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Validation { message, field, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "VALIDATION_ERROR".into(),
                    message,
                    field,
                },
            ),
            ApiError::Duplicate { message, field, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "DUPLICATE".into(),
                    message,
                    field: Some(field),
                },
            ),
            ApiError::Unauthorized { code, message, .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code,
                    message,
                    field: None,
                },
            ),
            ApiError::TooManyRequests { message, .. } => (
                StatusCode::TOO_MANY_REQUESTS,
                ApiErrorBody {
                    code: "RATE_LIMITED".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::BadRequest { message, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "BAD_REQUEST".into(),
                    message,
                    field: None,
                },
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Malformed or mistyped JSON bodies
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest {
            message: rejection.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            AuthError::RateLimitExceeded { window_secs, .. } => ApiError::TooManyRequests {
                message: format!("Too many login attempts. Try again within {window_secs} seconds."),
                location,
            },
            e if e.is_credential_error() => ApiError::Unauthorized {
                code: e.error_code().into(),
                message: credential_message(&e).into(),
                location,
            },
            e => {
                log::error!("Auth failure: {}", e);
                ApiError::Internal {
                    message: "Authentication service failed".into(),
                    location,
                }
            }
        }
    }
}

impl From<AccountError> for ApiError {
    #[track_caller]
    fn from(e: AccountError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            AccountError::Validation { field, message, .. } => ApiError::Validation {
                message,
                field: Some(field),
                location,
            },
            AccountError::Duplicate { field, .. } => ApiError::Duplicate {
                message: format!("A user with that {field} already exists."),
                field,
                location,
            },
            AccountError::InvalidCredentials { .. } | AccountError::InactiveAccount { .. } => {
                ApiError::Unauthorized {
                    code: "INVALID_CREDENTIALS".into(),
                    message: INVALID_CREDENTIALS_MESSAGE.into(),
                    location,
                }
            }
            AccountError::NotFound { user_id, .. } => ApiError::NotFound {
                message: format!("User {} not found", user_id),
                location,
            },
            AccountError::Auth { source, .. } => source.into(),
            AccountError::Db { source, .. } => source.into(),
        }
    }
}

impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        // Don't expose internal database details to clients
        log::error!("Database error: {}", e);
        match e.violated_field() {
            Some(field) => ApiError::Duplicate {
                message: format!("A user with that {field} already exists."),
                field: field.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            None => ApiError::Internal {
                message: "Database operation failed".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

fn credential_message(e: &AuthError) -> &'static str {
    match e {
        AuthError::MissingHeader { .. } => "Authentication credentials were not provided.",
        AuthError::TokenExpired { .. } => "Token is expired",
        _ => "Given token not valid for any token type",
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
