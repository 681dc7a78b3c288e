//! Memory service HTTP access
//!
//! - [`MemorySettingsClient`] implements the core `MemorySettingsGateway`
//!   port against a settings API (the backend itself or this app's own
//!   forwarding routes).
//! - [`BackendForwarder`] relays an authenticated request to the backend and
//!   hands back its status and JSON body untouched.

pub mod auth;
pub mod client;
pub mod errors;
pub mod forwarder;

pub use auth::StaticTokenProvider;
pub use client::MemorySettingsClient;
pub use errors::ForwardError;
pub use forwarder::{BackendForwarder, ForwardedResponse};
