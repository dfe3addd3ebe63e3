mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod password_config;
mod rate_limit_config;
mod server_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use password_config::PasswordConfig;
pub use rate_limit_config::RateLimitConfig;
pub use server_config::ServerConfig;

const CONFIG_DIR_ENV: &str = "HD_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".hd";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "accounts.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;
const MAX_DATABASE_MAX_CONNECTIONS: u32 = 100;

const MIN_JWT_SECRET_LENGTH: usize = 32;
const DEFAULT_ACCESS_TOKEN_TTL_SECS: u64 = 300;
const DEFAULT_REFRESH_TOKEN_TTL_SECS: u64 = 86_400;
const MAX_ACCESS_TOKEN_TTL_SECS: u64 = 86_400;
const MAX_REFRESH_TOKEN_TTL_SECS: u64 = 90 * 86_400;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

#[cfg(test)]
mod tests;
