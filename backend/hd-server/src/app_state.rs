use crate::error::Result as ServerErrorResult;

use hd_accounts::AccountService;
use hd_auth::{
    Argon2Hasher, HashingParams, LoginRateLimiter, PasswordPolicy, RateLimitConfig, SessionIssuer,
};
use hd_config::Config;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub accounts: Arc<AccountService>,
    pub sessions: Arc<SessionIssuer>,
    pub login_limiter: Arc<LoginRateLimiter>,
}

impl AppState {
    /// Wire services from validated configuration
    pub fn from_config(pool: SqlitePool, config: &Config) -> ServerErrorResult<Self> {
        let hasher = Argon2Hasher::new(HashingParams {
            memory_kib: config.password.argon2_memory_kib,
            iterations: config.password.argon2_iterations,
            parallelism: config.password.argon2_parallelism,
        })?;

        let policy = PasswordPolicy {
            min_length: config.password.min_length,
            max_length: config.password.max_length,
            require_letter: config.password.require_letter,
            require_digit: config.password.require_digit,
            require_symbol: config.password.require_symbol,
            reject_numeric: config.password.reject_numeric,
            reject_common: config.password.reject_common,
            reject_similar: config.password.reject_similar,
        };

        let sessions = SessionIssuer::with_hs256(
            config.auth.secret_bytes(),
            config.auth.access_token_ttl_secs,
            config.auth.refresh_token_ttl_secs,
        );

        // Convert config types for hd-auth
        let login_limiter = LoginRateLimiter::new(RateLimitConfig {
            max_attempts: config.rate_limit.max_attempts,
            window_secs: config.rate_limit.window_secs,
        });

        Ok(Self {
            accounts: Arc::new(AccountService::new(pool.clone(), Arc::new(hasher), policy)),
            sessions: Arc::new(sessions),
            login_limiter: Arc::new(login_limiter),
            pool,
        })
    }
}
