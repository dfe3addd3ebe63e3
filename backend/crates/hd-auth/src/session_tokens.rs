use serde::Serialize;

/// Access/refresh pair returned by a successful login
#[derive(Debug, Clone, Serialize)]
pub struct SessionTokens {
    pub access_token: String,
    pub refresh_token: String,
}
