use hd_core::IdentityProjection;

use serde::Serialize;

/// User as returned by register and me
#[derive(Debug, Clone, Serialize)]
pub struct UserDto {
    pub id: String,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Null when the user has no profile
    pub role: Option<String>,
}

impl From<IdentityProjection> for UserDto {
    fn from(projection: IdentityProjection) -> Self {
        Self {
            id: projection.id.to_string(),
            username: projection.username,
            email: projection.email,
            first_name: projection.first_name,
            last_name: projection.last_name,
            role: projection.role.map(|role| role.as_str().to_string()),
        }
    }
}
