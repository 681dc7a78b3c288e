//! Configuration loader
//!
//! Loads application configuration from an optional file, then applies
//! environment variable overrides.
//!
//! ## Loading Strategy
//! 1. Start from [`Config::default`]
//! 2. If a config file is found, it replaces the defaults (missing fields keep
//!    their defaults)
//! 3. Environment variables override individual fields
//! 4. The result is validated
//!
//! ## Environment Variables
//! - `POLARIS_BACKEND_URL`: memory service base URL (default
//!   `http://localhost:8000`)
//! - `POLARIS_BIND_ADDR`: listen address (default `127.0.0.1:3000`)
//! - `POLARIS_SESSION_COOKIE`: browser session cookie name (default
//!   `auth_token`)
//! - `POLARIS_LOG_FORMAT`: `pretty` or `json`
//!
//! ## File Locations
//! The loader checks the following paths (in order):
//! 1. `./polaris.toml` or `./polaris.json` (current working directory)
//! 2. The same names next to the executable

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use polaris_domain::{Config, LogFormat, PolarisError, Result};

use crate::errors::InfraError;

pub const ENV_BACKEND_URL: &str = "POLARIS_BACKEND_URL";
pub const ENV_BIND_ADDR: &str = "POLARIS_BIND_ADDR";
pub const ENV_SESSION_COOKIE: &str = "POLARIS_SESSION_COOKIE";
pub const ENV_LOG_FORMAT: &str = "POLARIS_LOG_FORMAT";

const CONFIG_FILE_NAMES: [&str; 2] = ["polaris.toml", "polaris.json"];

/// Load configuration: discovered file (if any), then environment overrides.
///
/// # Errors
/// Returns `PolarisError::Config` if the file is unreadable or invalid, or if
/// any resulting value fails validation.
pub fn load() -> Result<Config> {
    let base = match discover_config_path() {
        Some(path) => load_from_file(Some(path))?,
        None => {
            tracing::debug!("No config file found, using defaults");
            Config::default()
        }
    };

    let config = apply_env_overrides(base)?;
    tracing::info!(
        backend = %config.backend.base_url,
        bind_addr = %config.server.bind_addr,
        "Configuration loaded"
    );
    Ok(config)
}

/// Defaults plus environment overrides, ignoring config files.
///
/// # Errors
/// Returns `PolarisError::Config` if an override is invalid.
pub fn load_from_env() -> Result<Config> {
    apply_env_overrides(Config::default())
}

/// Load configuration from a file
///
/// If `path` is `None`, searches the standard locations. Supports JSON and TOML
/// (detected by file extension).
///
/// # Errors
/// Returns `PolarisError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(PolarisError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => discover_config_path().ok_or_else(|| {
            PolarisError::Config("No config file found in any of the standard locations".into())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| PolarisError::Config(format!("Failed to read config file: {e}")))?;

    let config = parse_config(&contents, &config_path)?;
    validate(&config)?;
    Ok(config)
}

/// Apply `POLARIS_*` environment overrides on top of `config`.
///
/// Empty variables are treated as unset.
///
/// # Errors
/// Returns `PolarisError::Config` if a value is invalid.
pub fn apply_env_overrides(mut config: Config) -> Result<Config> {
    if let Some(url) = env_var(ENV_BACKEND_URL) {
        config.backend.base_url = url;
    }
    if let Some(addr) = env_var(ENV_BIND_ADDR) {
        config.server.bind_addr = addr;
    }
    if let Some(cookie) = env_var(ENV_SESSION_COOKIE) {
        config.auth.session_cookie = cookie;
    }
    if let Some(format) = env_var(ENV_LOG_FORMAT) {
        config.server.log_format = format.parse::<LogFormat>()?;
    }

    validate(&config)?;
    Ok(config)
}

/// Check values that serde cannot: URL syntax, socket address, cookie name.
///
/// # Errors
/// Returns `PolarisError::Config` describing the first invalid value.
pub fn validate(config: &Config) -> Result<()> {
    let url = url::Url::parse(&config.backend.base_url)
        .map_err(|e| PolarisError::from(InfraError::from(e)))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(PolarisError::Config(format!(
            "Backend URL must use http or https: {}",
            config.backend.base_url
        )));
    }

    config.server.bind_addr.parse::<SocketAddr>().map_err(|e| {
        PolarisError::Config(format!("Invalid bind address {}: {e}", config.server.bind_addr))
    })?;

    let cookie = &config.auth.session_cookie;
    if cookie.is_empty() || !cookie.bytes().all(|b| b.is_ascii_alphanumeric() || b"-_.".contains(&b))
    {
        return Err(PolarisError::Config(format!("Invalid session cookie name: {cookie:?}")));
    }

    Ok(())
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `PolarisError::Config` if format is invalid or parsing fails.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| PolarisError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| PolarisError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(PolarisError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe the standard locations for a configuration file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn discover_config_path() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

/// Non-empty environment variable.
fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|value| value.trim().to_string()).filter(|value| !value.is_empty())
}
