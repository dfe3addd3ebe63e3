//! Axum extractor for bearer-token authentication

use crate::{ApiError, AppState};

use hd_accounts::AccountError;
use hd_auth::{JwtValidator, TokenType};
use hd_core::User;

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

/// The active user behind a valid `Authorization: Bearer <access token>`
pub struct AuthenticatedUser(pub User);

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok());

            let token = JwtValidator::bearer_token(header)?;
            let claims = state.sessions.validator().validate(token, TokenType::Access)?;
            let user_id = claims.user_id()?;

            let user = state
                .accounts
                .find_active_user(user_id)
                .await
                .map_err(session_user_error)?;

            log::debug!("Authenticated user {}", user.id);
            Ok(AuthenticatedUser(user))
        }
    }
}

/// A token for a deleted or deactivated user is just an invalid token
pub(crate) fn session_user_error(e: AccountError) -> ApiError {
    match e {
        AccountError::NotFound { .. } | AccountError::InactiveAccount { .. } => {
            ApiError::invalid_credentials()
        }
        other => other.into(),
    }
}
