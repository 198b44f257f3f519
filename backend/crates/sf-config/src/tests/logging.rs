use crate::tests::{EnvGuard, setup_config_dir};
use crate::{Config, LogLevel};

use std::str::FromStr;

use log::LevelFilter;
use serial_test::serial;

#[test]
fn test_log_level_from_str_is_case_insensitive() {
    assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel(LevelFilter::Debug));
    assert_eq!(LogLevel::from_str(" warn ").unwrap(), LogLevel(LevelFilter::Warn));
    assert_eq!(LogLevel::from_str("off").unwrap(), LogLevel(LevelFilter::Off));
}

#[test]
fn test_log_level_unknown_value_falls_back_to_info() {
    assert_eq!(LogLevel::from_str("chatty").unwrap(), LogLevel(LevelFilter::Info));
}

#[test]
#[serial]
fn given_log_level_env_var_when_load_then_applied() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _level = EnvGuard::set("SF_LOG_LEVEL", "trace");
    let _colored = EnvGuard::set("SF_LOG_COLORED", "false");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_eq!(*config.logging.level, LevelFilter::Trace);
    assert!(!config.logging.colored);
}

#[test]
#[serial]
fn given_toml_log_level_when_load_then_parsed() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [logging]
            level = "error"
            file = "storefront.log"
        "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_eq!(*config.logging.level, LevelFilter::Error);
    assert_eq!(config.logging.file.as_deref(), Some("storefront.log"));
}

#[test]
fn test_log_destination_defaults_to_stderr() {
    let mut config = Config::default();
    assert_eq!(config.log_destination(), "stderr");

    config.logging.file = Some("storefront.log".to_string());
    assert_eq!(config.log_destination(), "storefront.log");
}
