//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use multiball::config::AppConfig;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("MB_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("MB_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_env_override_window_count() {
    std::env::set_var("MB_WINDOW__COUNT", "3");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.count, 3);
    std::env::remove_var("MB_WINDOW__COUNT");
}

#[test]
#[serial]
fn test_default_file_loading() {
    std::env::remove_var("MB_WINDOW__TITLE");

    let config = AppConfig::load().unwrap();
    // Values from config/default.toml
    assert_eq!(config.window.title, "Multiball");
    assert_eq!(config.window.count, 5);
    assert_eq!(config.simulation.ball_start, [200.0, 200.0]);
    assert_eq!(config.simulation.ball_velocity, [100.0, 30.0]);
}

#[test]
#[serial]
fn test_missing_config_dir_uses_serde_defaults() {
    let config = AppConfig::load_from("no_such_config_dir").unwrap();
    assert_eq!(config.window.count, AppConfig::default().window.count);
}
