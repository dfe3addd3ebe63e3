use hd_core::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    /// A UNIQUE constraint rejected the write; `constraint` is `table.column`
    #[error("Unique constraint violated on {constraint} {location}")]
    UniqueViolation {
        constraint: String,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },
}

impl DbError {
    /// Input field behind a unique violation (`users.email` -> `email`).
    /// Normalized shadow columns report the field they shadow.
    pub fn violated_field(&self) -> Option<&str> {
        match self {
            Self::UniqueViolation { constraint, .. } => {
                let column = constraint
                    .rsplit_once('.')
                    .map(|(_, column)| column)
                    .unwrap_or(constraint);
                Some(column.strip_suffix("_normalized").unwrap_or(column))
            }
            _ => None,
        }
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        if let Some(db_err) = source.as_database_error()
            && db_err.is_unique_violation()
        {
            // SQLite: "UNIQUE constraint failed: users.email"
            let constraint = db_err
                .message()
                .rsplit_once(": ")
                .map(|(_, target)| target.to_string())
                .unwrap_or_else(|| db_err.message().to_string());

            return Self::UniqueViolation {
                constraint,
                location: ErrorLocation::from(Location::caller()),
            };
        }

        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    #[track_caller]
    fn from(e: sqlx::migrate::MigrateError) -> Self {
        Self::Migration {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
