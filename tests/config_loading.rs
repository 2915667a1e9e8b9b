//! Integration tests for configuration loading and saving

mod common;

use common::TestFixture;
use tool_inventory::config::{
    load_config_from, load_config_or_default, save_config_to, Config, DebugLogRotation,
};

#[test]
fn test_missing_config_uses_defaults_without_writing() {
    let fixture = TestFixture::new();
    let path = fixture.path().join("config.toml");

    let config = load_config_from(&path).unwrap();
    assert_eq!(config, Config::default());
    assert!(!fixture.file_exists("config.toml"));
}

#[test]
fn test_report_path_key_is_ignored() {
    let fixture = TestFixture::new();
    let path = fixture.create_file(
        "config.toml",
        "report_path = \"out/tools.csv\"\ndebug_log_keep = 4\n",
    );

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.debug_log_keep, Some(4));
    assert!(!config.debug);
}

#[test]
fn test_invalid_config_is_an_error() {
    let fixture = TestFixture::new();
    let path = fixture.create_file("config.toml", "debug = \"maybe\"\n");

    let err = load_config_from(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_save_then_load() {
    let fixture = TestFixture::new();
    let path = fixture.path().join("nested").join("config.toml");

    let config = Config {
        debug: true,
        debug_log_path: Some("/tmp/inventory-logs/".to_string()),
        debug_log_rotation: Some(DebugLogRotation::None),
        debug_log_keep: Some(5),
    };
    save_config_to(&path, &config).unwrap();

    assert!(fixture.file_exists("nested/config.toml"));
    assert_eq!(load_config_from(&path).unwrap(), config);
}

#[test]
fn test_malformed_config_falls_back_to_defaults() {
    let fixture = TestFixture::new();
    let path = fixture.create_file("config.toml", "debug = [unterminated\n");

    assert!(load_config_from(&path).is_err());
    assert_eq!(load_config_or_default(&path), Config::default());
}
