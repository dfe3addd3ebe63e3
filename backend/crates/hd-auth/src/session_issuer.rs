//! Session credential issuance.
//!
//! Tokens are HS256 JWTs sharing the secret with [`JwtValidator`]; the
//! `token_type` claim keeps a refresh token from being used as an access
//! token and vice versa.

use crate::{AuthError, Claims, JwtValidator, Result as AuthErrorResult, SessionTokens, TokenType};

use hd_core::{ErrorLocation, User};

use std::panic::Location;

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use uuid::Uuid;

pub struct SessionIssuer {
    encoding_key: EncodingKey,
    validator: JwtValidator,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl SessionIssuer {
    pub fn with_hs256(secret: &[u8], access_ttl_secs: u64, refresh_ttl_secs: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            validator: JwtValidator::with_hs256(secret),
            access_ttl: Duration::seconds(access_ttl_secs as i64),
            refresh_ttl: Duration::seconds(refresh_ttl_secs as i64),
        }
    }

    /// Issue a fresh access/refresh pair for a verified user
    #[track_caller]
    pub fn issue(&self, user: &User) -> AuthErrorResult<SessionTokens> {
        Ok(SessionTokens {
            access_token: self.encode(&user.id.to_string(), &user.username, TokenType::Access)?,
            refresh_token: self.encode(&user.id.to_string(), &user.username, TokenType::Refresh)?,
        })
    }

    /// Issue only a new access token, for a user whose refresh token has
    /// already been validated. The refresh token itself is not rotated.
    #[track_caller]
    pub fn issue_access(&self, user: &User) -> AuthErrorResult<String> {
        self.encode(&user.id.to_string(), &user.username, TokenType::Access)
    }

    pub fn validator(&self) -> &JwtValidator {
        &self.validator
    }

    #[track_caller]
    fn encode(&self, sub: &str, username: &str, token_type: TokenType) -> AuthErrorResult<String> {
        let ttl = match token_type {
            TokenType::Access => self.access_ttl,
            TokenType::Refresh => self.refresh_ttl,
        };
        let now = Utc::now();
        let claims = Claims {
            sub: sub.to_string(),
            username: username.to_string(),
            token_type,
            jti: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.encoding_key,
        )
        .map_err(|source| AuthError::JwtEncode {
            source,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
