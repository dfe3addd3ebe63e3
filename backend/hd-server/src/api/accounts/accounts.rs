//! Account REST API handlers

use crate::api::extractors::authenticated_user::session_user_error;
use crate::{
    AccessTokenResponse, ApiResult, AppState, AuthenticatedUser, LoginRequest, RefreshRequest,
    RegisterRequest, TokenPairResponse, UserDto,
};

use hd_auth::TokenType;

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/v1/auth/register
///
/// Create an account and its profile
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<UserDto>)> {
    let Json(request) = payload?;

    let user = state.accounts.register(request.into()).await?;
    let projection = state.accounts.project(&user).await?;

    Ok((StatusCode::CREATED, Json(projection.into())))
}

/// POST /api/v1/auth/login
///
/// Exchange username and password for an access/refresh pair
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<TokenPairResponse>> {
    let Json(request) = payload?;

    state.login_limiter.check(&request.username)?;

    let user = state
        .accounts
        .authenticate(&request.username, &request.password)
        .await?;
    let tokens = state.sessions.issue(&user)?;

    log::info!("User {} logged in", user.id);
    Ok(Json(tokens.into()))
}

/// POST /api/v1/auth/token/refresh
///
/// Exchange a refresh token for a new access token
pub async fn refresh_token(
    State(state): State<AppState>,
    payload: Result<Json<RefreshRequest>, JsonRejection>,
) -> ApiResult<Json<AccessTokenResponse>> {
    let Json(request) = payload?;

    let claims = state
        .sessions
        .validator()
        .validate(&request.refresh_token, TokenType::Refresh)?;
    let user = state
        .accounts
        .find_active_user(claims.user_id()?)
        .await
        .map_err(session_user_error)?;

    let access_token = state.sessions.issue_access(&user)?;

    Ok(Json(AccessTokenResponse { access_token }))
}

/// GET /api/v1/auth/me
///
/// The authenticated user's identity projection
pub async fn me(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> ApiResult<Json<UserDto>> {
    let projection = state.accounts.project(&user).await?;

    Ok(Json(projection.into()))
}
