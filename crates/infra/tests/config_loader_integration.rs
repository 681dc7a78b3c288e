//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files.

use std::io::Write;

use polaris_domain::{LogFormat, PolarisError};
use polaris_infra::config;
use tempfile::NamedTempFile;

fn write_config(contents: &str, extension: &str) -> std::path::PathBuf {
    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file.write_all(contents.as_bytes()).expect("Failed to write to temp file");

    let path = temp_file.path().with_extension(extension);
    std::fs::copy(temp_file.path(), &path).expect("Failed to copy file");
    path
}

#[test]
fn test_load_config_from_toml_file() {
    let path = write_config(
        r#"
[server]
bind_addr = "0.0.0.0:3100"
log_format = "json"

[backend]
base_url = "https://memory.internal:8443"

[auth]
session_cookie = "polaris_sid"
"#,
        "toml",
    );

    let result = config::load_from_file(Some(path.clone()));
    std::fs::remove_file(path).ok();

    let config = result.expect("Failed to load config from TOML file");
    assert_eq!(config.server.bind_addr, "0.0.0.0:3100");
    assert_eq!(config.server.log_format, LogFormat::Json);
    assert_eq!(config.backend.base_url, "https://memory.internal:8443");
    assert_eq!(config.auth.session_cookie, "polaris_sid");
}

#[test]
fn test_partial_json_file_keeps_defaults() {
    let path = write_config(r#"{ "server": { "bind_addr": "127.0.0.1:9999" } }"#, "json");

    let result = config::load_from_file(Some(path.clone()));
    std::fs::remove_file(path).ok();

    let config = result.expect("Failed to load config from JSON file");
    assert_eq!(config.server.bind_addr, "127.0.0.1:9999");
    assert_eq!(config.backend.base_url, "http://localhost:8000");
    assert_eq!(config.auth.session_cookie, "auth_token");
}

#[test]
fn test_file_with_invalid_backend_url_is_rejected() {
    let path = write_config("[backend]\nbase_url = \"localhost without scheme\"\n", "toml");

    let result = config::load_from_file(Some(path.clone()));
    std::fs::remove_file(path).ok();

    assert!(matches!(result, Err(PolarisError::Config(_))));
}
