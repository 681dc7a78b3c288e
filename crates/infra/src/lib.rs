//! # Polaris Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The reqwest-backed HTTP client
//! - The memory settings REST gateway and the backend forwarder used by the
//!   API routes
//! - Configuration loading from files and environment variables
//! - Conversions from external errors into domain errors
//!
//! ## Architecture
//! - Implements traits defined in `polaris-core`
//! - Contains all network and filesystem I/O

pub mod api;
pub mod config;
pub mod errors;
pub mod http;

// Re-export commonly used items
pub use api::*;
pub use errors::InfraError;
pub use http::*;
