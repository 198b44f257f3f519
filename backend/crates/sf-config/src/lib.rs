mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod session_config;

#[cfg(test)]
mod tests;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;

const CONFIG_DIR_ENV: &str = "SF_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".storefront";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_DATABASE_FILENAME: &str = "storefront.db";
const DEFAULT_SESSION_FILENAME: &str = "session.json";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

// bcrypt accepts cost factors 4..=31
const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;
const DEFAULT_BCRYPT_COST: u32 = 12;
const DEFAULT_ALLOW_PLAINTEXT_PASSWORDS: bool = false;
