//! # Polaris Domain
//!
//! Business domain types for Polaris.
//!
//! This crate contains:
//! - The memory settings document and its partial-update patch
//! - Location, OAuth callback and widget data types
//! - Domain error types and Result definitions
//! - Configuration structures and constants
//!
//! ## Architecture
//! - No dependencies on other Polaris crates
//! - Pure data types with serde wire formats

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
