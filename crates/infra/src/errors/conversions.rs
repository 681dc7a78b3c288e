//! Conversions from external infrastructure errors into domain errors.

use polaris_domain::PolarisError;
use reqwest::Error as HttpError;
use url::ParseError as UrlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub PolarisError);

impl From<InfraError> for PolarisError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<PolarisError> for InfraError {
    fn from(value: PolarisError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoPolarisError {
    fn into_polaris(self) -> PolarisError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → PolarisError */
/* -------------------------------------------------------------------------- */

impl IntoPolarisError for HttpError {
    fn into_polaris(self) -> PolarisError {
        if self.is_timeout() {
            return PolarisError::Network("HTTP request timed out".into());
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return PolarisError::Network("HTTP connection failure".into());
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                401 | 403 => PolarisError::Auth(message),
                404 => PolarisError::NotFound(message),
                400..=499 => PolarisError::InvalidInput(message),
                _ => PolarisError::Network(message),
            };
        }

        if self.is_decode() {
            return PolarisError::InvalidInput(format!("HTTP response body invalid: {self}"));
        }

        PolarisError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_polaris())
    }
}

/* -------------------------------------------------------------------------- */
/* url::ParseError → PolarisError */
/* -------------------------------------------------------------------------- */

impl IntoPolarisError for UrlError {
    fn into_polaris(self) -> PolarisError {
        PolarisError::Config(format!("invalid URL: {self}"))
    }
}

impl From<UrlError> for InfraError {
    fn from(value: UrlError) -> Self {
        InfraError(value.into_polaris())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
