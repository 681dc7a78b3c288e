//! # Polaris App
//!
//! HTTP application layer - axum routes and main entry point.
//!
//! This crate contains:
//! - The `/api/settings/memory` forwarding routes
//! - OAuth callback pages and the HTML widgets they render
//! - Route protection middleware for browser pages
//! - Application context (dependency injection)
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires the core rules and the infra HTTP client into an axum `Router`

pub mod context;
pub mod errors;
pub mod middleware;
pub mod routes;
pub mod utils;
pub mod views;

// Re-export for convenience
pub use context::AppContext;
pub use errors::ApiError;
pub use routes::router;
