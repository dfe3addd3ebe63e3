//! Keeps every identity paired with exactly one profile.
//!
//! Called explicitly by each code path that writes a `users` row, inside the
//! same transaction as that write.

use hd_core::Role;
use hd_db::{ProfileRepository, Result as DbErrorResult};

use sqlx::SqliteConnection;
use uuid::Uuid;

/// Which kind of identity write just happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityWrite {
    Created,
    Updated,
}

/// Ensure `user_id` has a profile. A missing one gets the default role; an
/// existing role is never touched. Returns true if a profile was created.
pub async fn sync_profile(
    conn: &mut SqliteConnection,
    user_id: Uuid,
    write: IdentityWrite,
) -> DbErrorResult<bool> {
    let created = ProfileRepository::ensure_exists(&mut *conn, user_id, Role::default()).await?;

    if created && write == IdentityWrite::Updated {
        log::warn!("Repaired missing profile for user {user_id}");
    } else if created {
        log::debug!("Created default profile for user {user_id}");
    }

    Ok(created)
}
