use crate::ApiError;

use hd_accounts::AccountError;
use hd_auth::AuthError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "Password fields didn't match.".into(),
        field: Some("password".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "password");
    assert_eq!(json["error"]["message"], "Password fields didn't match.");
}

#[tokio::test]
async fn test_duplicate_account_error_returns_400_duplicate() {
    let error: ApiError = AccountError::Duplicate {
        field: "username".into(),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "DUPLICATE");
    assert_eq!(json["error"]["field"], "username");
    assert_eq!(
        json["error"]["message"],
        "A user with that username already exists."
    );
}

#[tokio::test]
async fn test_invalid_credentials_returns_401_without_field() {
    let error: ApiError = AccountError::invalid_credentials().into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "INVALID_CREDENTIALS");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_inactive_account_is_indistinguishable_from_bad_password() {
    let inactive: ApiError = AccountError::InactiveAccount {
        location: ErrorLocation::from(Location::caller()),
    }
    .into();
    let wrong: ApiError = AccountError::invalid_credentials().into();

    let (_, inactive_json) = body_json(inactive).await;
    let (_, wrong_json) = body_json(wrong).await;

    assert_eq!(inactive_json, wrong_json);
}

#[tokio::test]
async fn test_rate_limit_returns_429() {
    let error: ApiError = AuthError::RateLimitExceeded {
        limit: 5,
        window_secs: 60,
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(json["error"]["code"], "RATE_LIMITED");
}

#[tokio::test]
async fn test_expired_token_returns_401_with_token_code() {
    let error: ApiError = AuthError::TokenExpired {
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "TOKEN_EXPIRED");
}

#[tokio::test]
async fn test_hashing_failure_returns_500_without_details() {
    let error: ApiError = AuthError::Hashing {
        message: "argon2 exploded".into(),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!json["error"]["message"]
        .as_str()
        .unwrap()
        .contains("argon2"));
}
