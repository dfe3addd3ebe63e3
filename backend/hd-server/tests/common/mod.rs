#![allow(dead_code)]

//! Test infrastructure for hd-server API tests

use hd_accounts::AccountService;
use hd_auth::{
    Argon2Hasher, HashingParams, LoginRateLimiter, PasswordPolicy, RateLimitConfig, SessionIssuer,
};
use hd_db::MIGRATOR;
use hd_server::AppState;

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

pub const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";
pub const STRONG_PASSWORD: &str = "ComplexPass123!";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing with cheap hashing and a generous login limit
pub async fn create_test_app_state() -> AppState {
    create_test_app_state_with_limit(1000).await
}

pub async fn create_test_app_state_with_limit(max_attempts: u32) -> AppState {
    let pool = create_test_pool().await;
    let hasher = Argon2Hasher::new(HashingParams {
        memory_kib: 8,
        iterations: 1,
        parallelism: 1,
    })
    .expect("Failed to build hasher");

    AppState {
        accounts: Arc::new(AccountService::new(
            pool.clone(),
            Arc::new(hasher),
            PasswordPolicy::default(),
        )),
        sessions: Arc::new(SessionIssuer::with_hs256(TEST_SECRET, 300, 86_400)),
        login_limiter: Arc::new(LoginRateLimiter::new(RateLimitConfig {
            max_attempts,
            window_secs: 60,
        })),
        pool,
    }
}

/// Send a JSON request through the router, returning status and parsed body
pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, request).await
}

/// GET with an optional bearer token
pub async fn get_with_token(
    app: &Router,
    uri: &str,
    token: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }

    send(app, builder.body(Body::empty()).unwrap()).await
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

pub fn register_payload(username: &str, email: &str) -> serde_json::Value {
    serde_json::json!({
        "username": username,
        "email": email,
        "password": STRONG_PASSWORD,
        "password2": STRONG_PASSWORD,
    })
}

/// Register then log in, returning (access, refresh)
pub async fn register_and_login(app: &Router, username: &str) -> (String, String) {
    let (status, _) = send_json(
        app,
        "POST",
        "/api/v1/auth/register",
        register_payload(username, &format!("{username}@example.com")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, json) = send_json(
        app,
        "POST",
        "/api/v1/auth/login",
        serde_json::json!({ "username": username, "password": STRONG_PASSWORD }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    (
        json["access_token"].as_str().unwrap().to_string(),
        json["refresh_token"].as_str().unwrap().to_string(),
    )
}
