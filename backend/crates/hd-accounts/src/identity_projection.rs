use hd_core::{IdentityProjection, User};
use hd_db::{ProfileRepository, Result as DbErrorResult};

/// Outward view of `user`; role is `None` when no profile exists
pub async fn project(profiles: &ProfileRepository, user: &User) -> DbErrorResult<IdentityProjection> {
    let role = profiles.find_role(user.id).await?;
    Ok(IdentityProjection::new(user, role))
}
