//! Forwarding error types

use polaris_domain::PolarisError;
use thiserror::Error;

/// Failure to obtain a usable backend response.
///
/// A backend that answered with an error status is not a `ForwardError`;
/// that response is relayed as is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForwardError {
    /// The request never produced a response.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The response body was not JSON.
    #[error("Malformed backend response: {0}")]
    Decode(String),
}

impl ForwardError {
    /// Stable label for logs.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Decode(_) => "decode",
        }
    }
}

impl From<PolarisError> for ForwardError {
    fn from(err: PolarisError) -> Self {
        match err {
            PolarisError::InvalidInput(message) => Self::Decode(message),
            other => Self::Transport(other.to_string()),
        }
    }
}
