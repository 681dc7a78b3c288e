use std::time::Duration;

use polaris_domain::{LogFormat, PolarisError};
use polaris_infra::ForwardError;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` controls filtering (default `info`); `format` picks human
/// readable or JSON lines. Calling it twice is harmless.
pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    let result = match format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

/// Log the outcome of one forwarded backend call with structured fields.
///
/// # Parameters
/// * `method` / `path` - The backend request (never the token).
/// * `status` - Backend status, `None` when no usable response arrived.
/// * `elapsed` - Time spent waiting on the backend.
/// * `error` - Failure label when `status` is `None`.
#[inline]
pub fn log_forward_outcome(
    method: &str,
    path: &str,
    status: Option<u16>,
    elapsed: Duration,
    error: Option<&ForwardError>,
) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    match (status, error) {
        (Some(status), _) if (200..300).contains(&status) => {
            info!(method, path, status, duration_ms, "forward_success");
        }
        (Some(status), _) => {
            warn!(method, path, status, duration_ms, "forward_backend_error");
        }
        (None, error) => {
            let error_type = error.map_or("unknown", ForwardError::label);
            warn!(method, path, error_type, duration_ms, "forward_failure");
        }
    }
}

/// Convert a `PolarisError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &PolarisError) -> &'static str {
    match error {
        PolarisError::Config(_) => "config",
        PolarisError::Network(_) => "network",
        PolarisError::Auth(_) => "auth",
        PolarisError::NotFound(_) => "not_found",
        PolarisError::InvalidInput(_) => "invalid_input",
        PolarisError::Internal(_) => "internal",
    }
}
