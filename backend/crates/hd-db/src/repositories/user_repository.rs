//! User repository for the identity store.
//!
//! Writes are associated functions taking any SQLite executor so callers can
//! run them inside a transaction (`&mut *tx`). Reads go through the pool.

use crate::{DbError, Result as DbErrorResult};

use hd_core::User;

use std::panic::Location;

use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const USER_COLUMNS: &str = "id, username, email, first_name, last_name, password_hash, \
                            is_active, date_joined, updated_at";

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create<'e, E>(executor: E, user: &User) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO users (
                    id, username, email, email_normalized, first_name, last_name,
                    password_hash, is_active, date_joined, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id.to_string())
        .bind(&user.username)
        .bind(&user.email)
        .bind(normalize_email(&user.email))
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.password_hash)
        .bind(user.is_active)
        .bind(user.date_joined.timestamp())
        .bind(user.updated_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Persist mutable identity fields. Returns false if no such user exists.
    pub async fn update<'e, E>(executor: E, user: &User) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                UPDATE users
                SET email = ?, email_normalized = ?, first_name = ?, last_name = ?,
                    password_hash = ?, is_active = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&user.email)
        .bind(normalize_email(&user.email))
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.password_hash)
        .bind(user.is_active)
        .bind(user.updated_at.timestamp())
        .bind(user.id.to_string())
        .execute(executor)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?"))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(user_from_row).transpose()
    }

    /// Exact, case-sensitive username match
    pub async fn find_by_username(&self, username: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = ?"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(user_from_row).transpose()
    }

    pub async fn email_exists(&self, email: &str) -> DbErrorResult<bool> {
        let exists: i64 = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM users WHERE email_normalized = ?)",
        )
        .bind(normalize_email(email))
        .fetch_one(&self.pool)
        .await?;

        Ok(exists != 0)
    }

    pub async fn username_exists(&self, username: &str) -> DbErrorResult<bool> {
        let exists: i64 =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE username = ?)")
                .bind(username)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists != 0)
    }
}

/// Key that `users.email_normalized` is unique on
fn normalize_email(email: &str) -> String {
    email.to_lowercase()
}

fn user_from_row(row: &SqliteRow) -> DbErrorResult<User> {
    let id: String = row.try_get("id")?;
    let date_joined: i64 = row.try_get("date_joined")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(User {
        id: Uuid::parse_str(&id).map_err(|e| DbError::Initialization {
            message: format!("Invalid UUID in users.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        username: row.try_get("username")?,
        email: row.try_get("email")?,
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        password_hash: row.try_get("password_hash")?,
        is_active: row.try_get("is_active")?,
        date_joined: DateTime::from_timestamp(date_joined, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in users.date_joined".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
        updated_at: DateTime::from_timestamp(updated_at, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in users.updated_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
    })
}
