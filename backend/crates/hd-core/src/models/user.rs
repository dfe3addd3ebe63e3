//! User entity - the identity record an account is built around.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A registered account.
///
/// Deliberately not `Serialize`: anything leaving the process goes through
/// [`crate::IdentityProjection`], which has no password field.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    /// Unique, case-sensitive
    pub username: String,
    /// Unique, compared case-insensitively
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// PHC string produced by the credential hasher
    pub password_hash: String,
    pub is_active: bool,
    pub date_joined: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new active user with a freshly generated id
    pub fn new(
        username: String,
        email: String,
        first_name: String,
        last_name: String,
        password_hash: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            first_name,
            last_name,
            password_hash,
            is_active: true,
            date_joined: now,
            updated_at: now,
        }
    }
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("password_hash", &"<redacted>")
            .field("is_active", &self.is_active)
            .field("date_joined", &self.date_joined)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}
