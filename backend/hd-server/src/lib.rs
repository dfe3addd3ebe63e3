pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    accounts::{
        accounts::{login, me, refresh_token, register},
        login_request::LoginRequest,
        refresh_request::RefreshRequest,
        register_request::RegisterRequest,
        token_response::{AccessTokenResponse, TokenPairResponse},
        user_dto::UserDto,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::authenticated_user::AuthenticatedUser,
};
pub use app_state::AppState;

pub use crate::routes::build_router;
