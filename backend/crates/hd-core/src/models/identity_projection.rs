use crate::{Role, User};

use serde::Serialize;
use uuid::Uuid;

/// Outward view of a user.
///
/// `role` is `None` when the user has no profile row; callers render it as
/// `null` rather than failing the read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentityProjection {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Option<Role>,
}

impl IdentityProjection {
    pub fn new(user: &User, role: Option<Role>) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            role,
        }
    }
}
