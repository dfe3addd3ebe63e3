pub mod claims;
pub mod credential_hasher;
pub mod error;
pub mod jwt_validator;
pub mod login_rate_limiter;
pub mod password_policy;
pub mod rate_limit_config;
pub mod session_issuer;
pub mod session_tokens;
pub mod token_type;

pub use claims::Claims;
pub use credential_hasher::{Argon2Hasher, CredentialHasher, HashingParams};
pub use error::{AuthError, Result};
pub use jwt_validator::JwtValidator;
pub use login_rate_limiter::LoginRateLimiter;
pub use password_policy::{PasswordPolicy, UserAttributes};
pub use rate_limit_config::RateLimitConfig;
pub use session_issuer::SessionIssuer;
pub use session_tokens::SessionTokens;
pub use token_type::TokenType;

#[cfg(test)]
mod tests;
