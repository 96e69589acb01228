//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files.

use std::io::Write;

use marketfeed_domain::MarketError;
use marketfeed_infra::config;
use tempfile::NamedTempFile;

fn write_config(contents: &str, extension: &str) -> std::path::PathBuf {
    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file.write_all(contents.as_bytes()).expect("Failed to write to temp file");
    let path = temp_file.path().with_extension(extension);
    std::fs::copy(temp_file.path(), &path).expect("Failed to copy file");
    path
}

#[test]
fn test_load_full_json_config() {
    let path = write_config(
        r#"{
            "backend": {
                "latency_enabled": true,
                "standard_latency_ms": 100,
                "quick_latency_ms": 20,
                "messaging_latency_ms": 30,
                "checkout_latency_ms": 400,
                "coin_latency_ms": 30
            },
            "session": { "toast_duration_ms": 1500, "max_post_chars": 140 },
            "logging": { "level": "debug", "json": true }
        }"#,
        "json",
    );

    let config = config::load_from_file(Some(path.clone())).expect("config should load");

    assert_eq!(config.backend.standard_latency_ms, 100);
    assert_eq!(config.backend.checkout_latency_ms, 400);
    assert_eq!(config.session.max_post_chars, 140);
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json);

    std::fs::remove_file(path).ok();
}

#[test]
fn test_empty_toml_uses_defaults() {
    let path = write_config("", "toml");

    let loaded = config::load_from_file(Some(path.clone())).expect("config should load");
    assert_eq!(loaded, marketfeed_domain::Config::default());

    std::fs::remove_file(path).ok();
}

#[test]
fn test_wrong_field_type_is_config_error() {
    let path = write_config(r#"{ "backend": { "standard_latency_ms": "fast" } }"#, "json");

    let err = config::load_from_file(Some(path.clone())).unwrap_err();
    assert!(matches!(err, MarketError::Config(_)));

    std::fs::remove_file(path).ok();
}
