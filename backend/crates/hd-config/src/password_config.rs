use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Argon2 lower bounds
const MIN_ARGON2_MEMORY_KIB_PER_LANE: u32 = 8;
const MAX_PASSWORD_LENGTH_CEILING: usize = 4096;

/// Password strength policy and hashing cost
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PasswordConfig {
    pub min_length: usize,
    pub max_length: usize,
    pub require_letter: bool,
    pub require_digit: bool,
    pub require_symbol: bool,
    pub reject_numeric: bool,
    pub reject_common: bool,
    pub reject_similar: bool,
    pub argon2_memory_kib: u32,
    pub argon2_iterations: u32,
    pub argon2_parallelism: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            min_length: 8,
            max_length: 128,
            require_letter: false,
            require_digit: false,
            require_symbol: false,
            reject_numeric: true,
            reject_common: true,
            reject_similar: true,
            argon2_memory_kib: 19_456,
            argon2_iterations: 2,
            argon2_parallelism: 1,
        }
    }
}

impl PasswordConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.min_length == 0 {
            return Err(ConfigError::password("password.min_length must be at least 1"));
        }

        if self.max_length < self.min_length || self.max_length > MAX_PASSWORD_LENGTH_CEILING {
            return Err(ConfigError::password(format!(
                "password.max_length must be {}-{}, got {}",
                self.min_length, MAX_PASSWORD_LENGTH_CEILING, self.max_length
            )));
        }

        if self.argon2_iterations == 0 || self.argon2_parallelism == 0 {
            return Err(ConfigError::password(
                "password.argon2_iterations and password.argon2_parallelism must be at least 1",
            ));
        }

        let min_memory = MIN_ARGON2_MEMORY_KIB_PER_LANE * self.argon2_parallelism;
        if self.argon2_memory_kib < min_memory {
            return Err(ConfigError::password(format!(
                "password.argon2_memory_kib must be at least {}, got {}",
                min_memory, self.argon2_memory_kib
            )));
        }

        Ok(())
    }
}
