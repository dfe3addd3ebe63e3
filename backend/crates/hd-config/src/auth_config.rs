use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ACCESS_TOKEN_TTL_SECS, DEFAULT_REFRESH_TOKEN_TTL_SECS,
    MAX_ACCESS_TOKEN_TTL_SECS, MAX_REFRESH_TOKEN_TTL_SECS, MIN_JWT_SECRET_LENGTH,
};

use serde::Deserialize;

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret, shared by issuer and validator
    pub jwt_secret: Option<String>,
    pub access_token_ttl_secs: u64,
    pub refresh_token_ttl_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            access_token_ttl_secs: DEFAULT_ACCESS_TOKEN_TTL_SECS,
            refresh_token_ttl_secs: DEFAULT_REFRESH_TOKEN_TTL_SECS,
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "<redacted>"))
            .field("access_token_ttl_secs", &self.access_token_ttl_secs)
            .field("refresh_token_ttl_secs", &self.refresh_token_ttl_secs)
            .finish()
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let secret = self.jwt_secret.as_deref().ok_or_else(|| {
            ConfigError::auth("auth.jwt_secret is required (set HD_AUTH_JWT_SECRET)")
        })?;

        if secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::auth(format!(
                "auth.jwt_secret must be at least {} characters",
                MIN_JWT_SECRET_LENGTH
            )));
        }

        if self.access_token_ttl_secs == 0 || self.access_token_ttl_secs > MAX_ACCESS_TOKEN_TTL_SECS
        {
            return Err(ConfigError::auth(format!(
                "auth.access_token_ttl_secs must be 1-{}, got {}",
                MAX_ACCESS_TOKEN_TTL_SECS, self.access_token_ttl_secs
            )));
        }

        if self.refresh_token_ttl_secs <= self.access_token_ttl_secs
            || self.refresh_token_ttl_secs > MAX_REFRESH_TOKEN_TTL_SECS
        {
            return Err(ConfigError::auth(format!(
                "auth.refresh_token_ttl_secs must exceed the access TTL and be at most {}, got {}",
                MAX_REFRESH_TOKEN_TTL_SECS, self.refresh_token_ttl_secs
            )));
        }

        Ok(())
    }

    /// Secret bytes; empty when unset (validate() rejects that case)
    pub fn secret_bytes(&self) -> &[u8] {
        self.jwt_secret.as_deref().unwrap_or_default().as_bytes()
    }
}
