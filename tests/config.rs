//! Tests for config parsing and config-driven construction.

use std::fs;
use tempfile::TempDir;
use tierlog::{Config, Error, Logger, Threshold};

#[test]
fn empty_config_uses_defaults() {
    let config = Config::parse("").unwrap();
    assert_eq!(config.general.threshold, "all");
    assert!(config.terminal.colors);
    assert!(!config.file.enabled);
    assert_eq!(config.file.path, "logs/");
    assert!(!config.store.enabled);
    assert_eq!(config.store.path, "logs/logs.db");
    assert_eq!(config.debug.env_var, "DEBUG");
}

#[test]
fn full_config_parses() {
    let config = Config::parse(
        r#"
[general]
threshold = "medium"

[terminal]
colors = false

[file]
enabled = true
path = "/var/log/app/"

[store]
enabled = true
path = "/var/log/app/records.db"

[debug]
env_var = "APP_DEBUG"
"#,
    )
    .unwrap();

    assert_eq!(config.parse_threshold(), Threshold::Medium);
    assert!(!config.terminal.colors);
    assert!(config.file.enabled);
    assert_eq!(config.file.path, "/var/log/app/");
    assert!(config.store.enabled);
    assert_eq!(config.store.path, "/var/log/app/records.db");
    assert_eq!(config.debug.env_var, "APP_DEBUG");
}

#[test]
fn partial_section_keeps_other_defaults() {
    let config = Config::parse("[file]\nenabled = true\n").unwrap();
    assert!(config.file.enabled);
    assert_eq!(config.file.path, "logs/");
}

#[test]
fn unknown_threshold_falls_back_to_all() {
    let config = Config::parse("[general]\nthreshold = \"loud\"\n").unwrap();
    assert_eq!(config.parse_threshold(), Threshold::All);
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let err = Config::parse("[general\nthreshold = ").unwrap_err();
    assert!(matches!(err, Error::ConfigParse(_)));
}

#[test]
fn load_from_missing_file_gives_defaults() {
    let tmp = TempDir::new().unwrap();
    let config = Config::load_from(&tmp.path().join("absent.toml")).unwrap();
    assert_eq!(config.general.threshold, "all");
}

#[test]
fn load_from_reads_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.toml");
    fs::write(&path, "[general]\nthreshold = \"low\"\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.parse_threshold(), Threshold::Low);
}

#[test]
fn from_config_applies_settings() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().to_string_lossy().into_owned();
    let config = Config::parse(&format!(
        "[general]\nthreshold = \"high\"\n[terminal]\ncolors = false\n[file]\nenabled = true\npath = \"{dir}\"\n"
    ))
    .unwrap();

    let log = Logger::from_config("Configured", &config);

    assert_eq!(log.identity(), "Configured");
    assert_eq!(log.threshold(), Threshold::High);
    assert!(log.file_sink_enabled());
    assert_eq!(log.file_path(), dir);
    assert!(!log.record_sink_enabled());
}

#[test]
fn from_config_opens_configured_store() {
    let tmp = TempDir::new().unwrap();
    let db = tmp.path().join("records.db");
    let config = Config::parse(&format!(
        "[terminal]\ncolors = false\n[store]\nenabled = true\npath = \"{}\"\n",
        db.display()
    ))
    .unwrap();

    let log = Logger::from_config("Stored", &config);

    assert!(log.record_sink_enabled());
    assert!(log.has_record_store());
    assert!(db.exists());
}
