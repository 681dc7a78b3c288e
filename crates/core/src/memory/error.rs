//! Memory settings errors

use thiserror::Error;

/// Failure of a network-bearing memory settings operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemorySettingsError {
    /// No bearer token was available; no request was made.
    #[error("Authentication required. Please sign in again.")]
    Unauthenticated,

    /// The backend answered with a non-success status.
    #[error("server responded with {status}: {message}")]
    Backend { status: u16, message: String },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Transport(String),

    /// The response body was not the expected JSON.
    #[error("invalid response: {0}")]
    Decode(String),
}

impl MemorySettingsError {
    /// Stable label for logs.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "unauthenticated",
            Self::Backend { .. } => "backend",
            Self::Transport(_) => "transport",
            Self::Decode(_) => "decode",
        }
    }
}
