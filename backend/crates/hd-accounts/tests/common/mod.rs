#![allow(dead_code)]

use hd_accounts::{AccountService, RegistrationRequest};
use hd_auth::{Argon2Hasher, HashingParams, PasswordPolicy};
use hd_db::MIGRATOR;

use std::sync::Arc;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use uuid::Uuid;

pub const STRONG_PASSWORD: &str = "ComplexPass123!";

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Account service with cheap hashing parameters
pub fn create_test_service(pool: &SqlitePool) -> AccountService {
    let hasher = Argon2Hasher::new(HashingParams {
        memory_kib: 8,
        iterations: 1,
        parallelism: 1,
    })
    .expect("Failed to build hasher");

    AccountService::new(pool.clone(), Arc::new(hasher), PasswordPolicy::default())
}

pub fn registration(username: &str, email: &str) -> RegistrationRequest {
    RegistrationRequest {
        username: username.to_string(),
        email: email.to_string(),
        password: STRONG_PASSWORD.to_string(),
        password2: Some(STRONG_PASSWORD.to_string()),
        ..RegistrationRequest::default()
    }
}

pub async fn count_users(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .expect("Failed to count users")
}

pub async fn count_profiles(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM profiles")
        .fetch_one(pool)
        .await
        .expect("Failed to count profiles")
}

pub async fn profile_role(pool: &SqlitePool, user_id: Uuid) -> Option<String> {
    sqlx::query_scalar("SELECT role FROM profiles WHERE user_id = ?")
        .bind(user_id.to_string())
        .fetch_optional(pool)
        .await
        .expect("Failed to read profile role")
}

pub async fn delete_profile(pool: &SqlitePool, user_id: Uuid) {
    sqlx::query("DELETE FROM profiles WHERE user_id = ?")
        .bind(user_id.to_string())
        .execute(pool)
        .await
        .expect("Failed to delete profile");
}
