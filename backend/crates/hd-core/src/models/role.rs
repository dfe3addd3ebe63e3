use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Authorization tier carried by a user's profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Files tickets; every new account starts here
    #[default]
    Reporter,
    Technician,
    Manager,
    Admin,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::Reporter,
        Role::Technician,
        Role::Manager,
        Role::Admin,
    ];

    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reporter => "REPORTER",
            Self::Technician => "TECHNICIAN",
            Self::Manager => "MANAGER",
            Self::Admin => "ADMIN",
        }
    }
}

impl FromStr for Role {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "REPORTER" => Ok(Self::Reporter),
            "TECHNICIAN" => Ok(Self::Technician),
            "MANAGER" => Ok(Self::Manager),
            "ADMIN" => Ok(Self::Admin),
            _ => Err(CoreError::InvalidRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
