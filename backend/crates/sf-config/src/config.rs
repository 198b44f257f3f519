use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR_NAME, DatabaseConfig, LoggingConfig, SessionConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// Loading order:
    /// 1. SF_CONFIG_DIR env var, else ./.storefront/
    /// 2. Auto-create the config directory
    /// 3. Read config.toml if it exists, else defaults
    /// 4. Apply SF_* environment variable overrides
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

    /// Priority: SF_CONFIG_DIR env var > ./.storefront/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Validate all sections. Call after load() to fail at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.database.validate()?;
        self.auth.validate()?;
        self.session.validate()?;

        if let Some(ref file) = self.logging.file
            && (Path::new(file).is_absolute() || file.contains(".."))
        {
            return Err(ConfigError::logging(
                "logging.file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Absolute path to the SQLite document store.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Absolute path to the durable session file.
    pub fn session_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.session.file))
    }

    /// Absolute path to the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref file) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(file),
            )),
            None => Ok(None),
        }
    }

    /// Log configuration summary (never logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  database: {}", self.database.path);
        info!("  session: {}", self.session.file);
        info!(
            "  auth: bcrypt_cost={}, plaintext passwords {}",
            self.auth.bcrypt_cost,
            if self.auth.allow_plaintext_passwords {
                "ALLOWED"
            } else {
                "rejected"
            }
        );
        info!(
            "  logging: {} (colored: {}, target: {})",
            *self.logging.level,
            self.logging.colored,
            self.log_destination()
        );
    }

    /// Configured log file name, or `stderr` (stdout carries command output).
    pub fn log_destination(&self) -> &str {
        self.logging.file.as_deref().unwrap_or("stderr")
    }

    fn apply_env_overrides(&mut self) {
        // Database
        Self::apply_env_string("SF_DATABASE_PATH", &mut self.database.path);

        // Auth
        Self::apply_env_parse("SF_AUTH_BCRYPT_COST", &mut self.auth.bcrypt_cost);
        Self::apply_env_bool(
            "SF_AUTH_ALLOW_PLAINTEXT_PASSWORDS",
            &mut self.auth.allow_plaintext_passwords,
        );

        // Session
        Self::apply_env_string("SF_SESSION_FILE", &mut self.session.file);

        // Logging
        Self::apply_env_parse("SF_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("SF_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("SF_LOG_FILE", &mut self.logging.file);
        Self::apply_env_string("SF_LOG_DIR", &mut self.logging.dir);
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
