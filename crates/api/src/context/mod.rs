//! Application context - dependency injection container

use std::sync::Arc;

use polaris_core::RouteGate;
use polaris_domain::{Config, Result};
use polaris_infra::{BackendForwarder, HttpClient};

/// Application context - shared by every handler and middleware.
///
/// Cheap to clone; all members are reference counted.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<Config>,
    pub forwarder: BackendForwarder,
    pub gate: Arc<RouteGate>,
}

impl AppContext {
    /// Build the context from a loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns `PolarisError::Network` if the HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self> {
        let http = HttpClient::new()?;
        let forwarder = BackendForwarder::with_http_client(http, config.backend.base_url.clone());
        Ok(Self::from_parts(config, forwarder, RouteGate::default()))
    }

    pub fn from_parts(config: Config, forwarder: BackendForwarder, gate: RouteGate) -> Self {
        Self { config: Arc::new(config), forwarder, gate: Arc::new(gate) }
    }

    /// Cookie whose presence marks a signed-in browser.
    pub fn session_cookie(&self) -> &str {
        &self.config.auth.session_cookie
    }
}
