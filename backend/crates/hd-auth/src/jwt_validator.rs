use crate::{AuthError, Claims, Result as AuthErrorResult, TokenType};

use hd_core::ErrorLocation;

use std::panic::Location;

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

/// HS256 session token validator
pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtValidator {
    /// Create validator with HS256 (symmetric secret)
    pub fn with_hs256(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.leeway = 30; // 30 second clock skew tolerance

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Validate a token and require it to be of `expected` type
    #[track_caller]
    pub fn validate(&self, token: &str, expected: TokenType) -> AuthErrorResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::JwtDecode {
                        source: e,
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        let claims = token_data.claims;
        claims.validate()?;

        if claims.token_type != expected {
            return Err(AuthError::WrongTokenType {
                expected,
                actual: claims.token_type,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(claims)
    }

    /// Pull the token out of an `Authorization: Bearer <token>` header value
    #[track_caller]
    pub fn bearer_token(header: Option<&str>) -> AuthErrorResult<&str> {
        let header = header.ok_or_else(|| AuthError::MissingHeader {
            location: ErrorLocation::from(Location::caller()),
        })?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AuthError::InvalidScheme {
                location: ErrorLocation::from(Location::caller()),
            })?
            .trim();

        if token.is_empty() {
            return Err(AuthError::InvalidToken {
                message: "empty bearer token".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(token)
    }
}
