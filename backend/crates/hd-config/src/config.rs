use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    DatabaseConfig, LoggingConfig, PasswordConfig, RateLimitConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub password: PasswordConfig,
    pub rate_limit: RateLimitConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for HD_CONFIG_DIR env var, else use ./.hd/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply HD_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: HD_CONFIG_DIR env var > ./.hd/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.password.validate()?;
        self.rate_limit.validate()?;

        Ok(())
    }

    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Log file path, if file logging is configured
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(file) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(file),
            )),
            None => Ok(None),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  database: {} (max {} connections)",
            self.database.path, self.database.max_connections
        );
        info!(
            "  auth: jwt_secret {}, access ttl={}s, refresh ttl={}s",
            if self.auth.jwt_secret.is_some() {
                "set"
            } else {
                "missing"
            },
            self.auth.access_token_ttl_secs,
            self.auth.refresh_token_ttl_secs
        );
        info!(
            "  password: length {}-{}, argon2 m={}KiB t={} p={}",
            self.password.min_length,
            self.password.max_length,
            self.password.argon2_memory_kib,
            self.password.argon2_iterations,
            self.password.argon2_parallelism
        );
        info!(
            "  rate_limit: {} login attempts/{}s",
            self.rate_limit.max_attempts, self.rate_limit.window_secs
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("HD_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("HD_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("HD_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "HD_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Auth
        Self::apply_env_option_string("HD_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_parse(
            "HD_AUTH_ACCESS_TOKEN_TTL_SECS",
            &mut self.auth.access_token_ttl_secs,
        );
        Self::apply_env_parse(
            "HD_AUTH_REFRESH_TOKEN_TTL_SECS",
            &mut self.auth.refresh_token_ttl_secs,
        );

        // Password
        Self::apply_env_parse("HD_PASSWORD_MIN_LENGTH", &mut self.password.min_length);
        Self::apply_env_parse("HD_PASSWORD_MAX_LENGTH", &mut self.password.max_length);
        Self::apply_env_bool(
            "HD_PASSWORD_REQUIRE_LETTER",
            &mut self.password.require_letter,
        );
        Self::apply_env_bool("HD_PASSWORD_REQUIRE_DIGIT", &mut self.password.require_digit);
        Self::apply_env_bool(
            "HD_PASSWORD_REQUIRE_SYMBOL",
            &mut self.password.require_symbol,
        );
        Self::apply_env_parse(
            "HD_PASSWORD_ARGON2_MEMORY_KIB",
            &mut self.password.argon2_memory_kib,
        );
        Self::apply_env_parse(
            "HD_PASSWORD_ARGON2_ITERATIONS",
            &mut self.password.argon2_iterations,
        );
        Self::apply_env_parse(
            "HD_PASSWORD_ARGON2_PARALLELISM",
            &mut self.password.argon2_parallelism,
        );

        // Rate limit
        Self::apply_env_parse(
            "HD_RATE_LIMIT_MAX_ATTEMPTS",
            &mut self.rate_limit.max_attempts,
        );
        Self::apply_env_parse(
            "HD_RATE_LIMIT_WINDOW_SECS",
            &mut self.rate_limit.window_secs,
        );

        // Logging
        Self::apply_env_parse("HD_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("HD_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("HD_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
