use hd_auth::SessionTokens;

use serde::Serialize;

/// Response to a successful login
#[derive(Debug, Serialize)]
pub struct TokenPairResponse {
    pub access_token: String,
    pub refresh_token: String,
}

impl From<SessionTokens> for TokenPairResponse {
    fn from(tokens: SessionTokens) -> Self {
        Self {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
        }
    }
}

/// Response to a token refresh
#[derive(Debug, Serialize)]
pub struct AccessTokenResponse {
    pub access_token: String,
}
