//! Memory settings controller
//!
//! Owns the client-side copy of the memory settings document together with
//! the `loading`/`saving` flags and the last error message shown by the
//! settings UI.
//!
//! The state lock is never held across an `.await`: each operation takes a
//! snapshot, awaits the gateway, then writes the result back. Overlapping
//! calls are not serialized against each other, so when two saves are in
//! flight the response that arrives last decides the final local state.

use std::sync::Arc;

use parking_lot::RwLock;
use polaris_domain::{DeleteScope, MemorySettings, MemorySettingsPatch, DEFAULT_MEMORY_SETTINGS};
use tracing::{debug, error, info, instrument};

use super::error::MemorySettingsError;
use super::ports::MemorySettingsGateway;
use crate::auth::ports::AccessTokenProvider;

const FETCH_FAILED: &str = "Failed to load memory settings";
const SAVE_FAILED: &str = "Failed to save memory settings";
const DELETE_FAILED: &str = "Failed to delete memories";

/// Observable state of the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorySettingsState {
    pub settings: MemorySettings,
    /// A fetch is in flight.
    pub loading: bool,
    /// A save is in flight.
    pub saving: bool,
    /// Human-readable message for the last failure, if any.
    pub error: Option<String>,
}

impl Default for MemorySettingsState {
    fn default() -> Self {
        Self { settings: DEFAULT_MEMORY_SETTINGS, loading: false, saving: false, error: None }
    }
}

/// Fetches, edits, saves and deletes the user's memory settings.
pub struct MemorySettingsController {
    gateway: Arc<dyn MemorySettingsGateway>,
    tokens: Arc<dyn AccessTokenProvider>,
    state: RwLock<MemorySettingsState>,
}

impl MemorySettingsController {
    /// Create a controller holding the default settings.
    pub fn new(
        gateway: Arc<dyn MemorySettingsGateway>,
        tokens: Arc<dyn AccessTokenProvider>,
    ) -> Self {
        Self { gateway, tokens, state: RwLock::new(MemorySettingsState::default()) }
    }

    /// Create a controller and immediately load the remote document.
    pub async fn mount(
        gateway: Arc<dyn MemorySettingsGateway>,
        tokens: Arc<dyn AccessTokenProvider>,
    ) -> Self {
        let controller = Self::new(gateway, tokens);
        controller.fetch().await;
        controller
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> MemorySettingsState {
        self.state.read().clone()
    }

    /// Current local settings.
    pub fn settings(&self) -> MemorySettings {
        self.state.read().settings
    }

    /// Load the remote document.
    ///
    /// A missing document resets to the defaults without an error. Any
    /// failure records a message and also resets to the defaults; the error
    /// is not returned.
    #[instrument(skip(self))]
    pub async fn fetch(&self) {
        let Some(token) = self.token().await else {
            let err = MemorySettingsError::Unauthenticated;
            error!(error = %err, "memory settings fetch skipped");
            let mut state = self.state.write();
            state.settings = DEFAULT_MEMORY_SETTINGS;
            state.error = Some(failure_message(FETCH_FAILED, &err));
            return;
        };

        {
            let mut state = self.state.write();
            state.loading = true;
            state.error = None;
        }

        let result = self.gateway.fetch(&token).await;

        let mut state = self.state.write();
        state.loading = false;
        match result {
            Ok(Some(settings)) => {
                debug!("memory settings loaded");
                state.settings = settings;
            }
            Ok(None) => {
                debug!("no memory settings stored yet, using defaults");
                state.settings = DEFAULT_MEMORY_SETTINGS;
            }
            Err(err) => {
                error!(error = %err, kind = err.label(), "failed to load memory settings");
                state.settings = DEFAULT_MEMORY_SETTINGS;
                state.error = Some(failure_message(FETCH_FAILED, &err));
            }
        }
    }

    /// Merge a partial update into the local copy. No I/O.
    pub fn update(&self, patch: &MemorySettingsPatch) {
        self.state.write().settings.apply(patch);
    }

    /// Replace the remote document with the local copy and adopt whatever
    /// the backend stored.
    ///
    /// # Errors
    ///
    /// Returns the failure after recording its message, so callers can keep
    /// an editing UI open.
    #[instrument(skip(self))]
    pub async fn save(&self) -> Result<MemorySettings, MemorySettingsError> {
        let token = self.require_token(SAVE_FAILED).await?;

        let settings = {
            let mut state = self.state.write();
            state.saving = true;
            state.error = None;
            state.settings
        };

        let result = self.gateway.save(&token, &settings).await;

        let mut state = self.state.write();
        state.saving = false;
        match result {
            Ok(saved) => {
                info!("memory settings saved");
                state.settings = saved;
                Ok(saved)
            }
            Err(err) => {
                error!(error = %err, kind = err.label(), "failed to save memory settings");
                state.error = Some(failure_message(SAVE_FAILED, &err));
                Err(err)
            }
        }
    }

    /// Delete every remembered record.
    ///
    /// Local settings are left untouched on success; callers refetch if they
    /// need fresh data.
    ///
    /// # Errors
    ///
    /// Returns the failure after recording its message.
    pub async fn delete_all(&self) -> Result<(), MemorySettingsError> {
        self.delete(DeleteScope::All).await
    }

    /// Delete records remembered in the last 30 days.
    ///
    /// # Errors
    ///
    /// Returns the failure after recording its message.
    pub async fn delete_last_30_days(&self) -> Result<(), MemorySettingsError> {
        self.delete(DeleteScope::Last30Days).await
    }

    #[instrument(skip(self), fields(scope = scope.label()))]
    async fn delete(&self, scope: DeleteScope) -> Result<(), MemorySettingsError> {
        let token = self.require_token(DELETE_FAILED).await?;

        match self.gateway.delete(&token, scope).await {
            Ok(()) => {
                info!("memories deleted");
                Ok(())
            }
            Err(err) => {
                error!(error = %err, kind = err.label(), "failed to delete memories");
                self.state.write().error = Some(failure_message(DELETE_FAILED, &err));
                Err(err)
            }
        }
    }

    async fn token(&self) -> Option<String> {
        self.tokens.access_token().await.filter(|token| !token.is_empty())
    }

    async fn require_token(&self, context: &str) -> Result<String, MemorySettingsError> {
        match self.token().await {
            Some(token) => Ok(token),
            None => {
                let err = MemorySettingsError::Unauthenticated;
                error!(error = %err, "memory settings request skipped");
                self.state.write().error = Some(failure_message(context, &err));
                Err(err)
            }
        }
    }
}

fn failure_message(context: &str, err: &MemorySettingsError) -> String {
    match err {
        MemorySettingsError::Unauthenticated => err.to_string(),
        other => format!("{context}: {other}"),
    }
}
