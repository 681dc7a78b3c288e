//! # Polaris Core
//!
//! Client-side state and business rules - no HTTP or platform code.
//!
//! This crate contains:
//! - Port interfaces (traits) for the token accessor, the memory settings
//!   backend and browser navigation
//! - The memory settings controller with its local optimistic state
//! - The location cache and the settings modal context
//! - OAuth callback screen evaluation and route protection rules
//!
//! ## Architecture Principles
//! - Only depends on `polaris-common` and `polaris-domain`
//! - All external collaborators via traits
//! - State containers are shared explicitly through `Arc`, never globals

pub mod auth;
pub mod callback;
pub mod location;
pub mod memory;
pub mod routing;
pub mod settings;

// Re-export specific items to avoid ambiguity
pub use auth::ports::AccessTokenProvider;
pub use callback::ports::{Navigator, RecordingNavigator};
pub use callback::screen::{CallbackKind, CallbackOutcome, CallbackScreen, CallbackStatus};
pub use location::store::LocationStore;
pub use memory::controller::{MemorySettingsController, MemorySettingsState};
pub use memory::error::MemorySettingsError;
pub use memory::ports::MemorySettingsGateway;
pub use routing::gate::{GateDecision, RouteGate};
pub use settings::context::{SettingsContext, SettingsTab};
