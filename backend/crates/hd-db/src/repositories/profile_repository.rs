//! Profile repository for the one-to-one role store.
//!
//! Both write paths are upserts keyed on the unique `profiles.user_id`, so
//! running either one twice for the same user never yields a second row.

use crate::{DbError, Result as DbErrorResult};

use hd_core::{Profile, Role};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use sqlx::SqlitePool;
use uuid::Uuid;

pub struct ProfileRepository {
    pool: SqlitePool,
}

impl ProfileRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create-or-get: inserts a profile with `role` only if the user has none.
    /// Returns true when a row was inserted.
    pub async fn ensure_exists<'e, E>(
        executor: E,
        user_id: Uuid,
        role: Role,
    ) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let profile = Profile::new(user_id, role);

        let result = sqlx::query(
            r#"
                INSERT INTO profiles (id, user_id, role, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?)
                ON CONFLICT(user_id) DO NOTHING
            "#,
        )
        .bind(profile.id.to_string())
        .bind(profile.user_id.to_string())
        .bind(profile.role.as_str())
        .bind(profile.created_at.timestamp())
        .bind(profile.updated_at.timestamp())
        .execute(executor)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Create-or-update: the user's profile ends up carrying `role`
    pub async fn upsert_role<'e, E>(executor: E, user_id: Uuid, role: Role) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let profile = Profile::new(user_id, role);

        sqlx::query(
            r#"
                INSERT INTO profiles (id, user_id, role, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?)
                ON CONFLICT(user_id) DO UPDATE SET
                    role = excluded.role,
                    updated_at = excluded.updated_at
            "#,
        )
        .bind(profile.id.to_string())
        .bind(profile.user_id.to_string())
        .bind(profile.role.as_str())
        .bind(profile.created_at.timestamp())
        .bind(profile.updated_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Role of the user's profile, or `None` if the profile row is missing
    pub async fn find_role(&self, user_id: Uuid) -> DbErrorResult<Option<Role>> {
        let role: Option<String> =
            sqlx::query_scalar("SELECT role FROM profiles WHERE user_id = ?")
                .bind(user_id.to_string())
                .fetch_optional(&self.pool)
                .await?;

        role.map(|r| parse_role(&r)).transpose()
    }
}

fn parse_role(value: &str) -> DbErrorResult<Role> {
    Role::from_str(value).map_err(|e| DbError::Initialization {
        message: format!("Invalid Role in profiles.role: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })
}
