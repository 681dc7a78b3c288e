//! Port interface for the memory settings backend

use async_trait::async_trait;
use polaris_domain::{DeleteScope, MemorySettings};

use super::error::MemorySettingsError;

/// Remote copy of the memory settings document.
///
/// Every call carries the caller's bearer token explicitly.
#[async_trait]
pub trait MemorySettingsGateway: Send + Sync {
    /// Read the document. `Ok(None)` means the backend has none yet.
    async fn fetch(&self, token: &str) -> Result<Option<MemorySettings>, MemorySettingsError>;

    /// Replace the document, returning the copy the backend stored.
    async fn save(
        &self,
        token: &str,
        settings: &MemorySettings,
    ) -> Result<MemorySettings, MemorySettingsError>;

    /// Delete remembered records in `scope`.
    async fn delete(&self, token: &str, scope: DeleteScope) -> Result<(), MemorySettingsError>;
}
