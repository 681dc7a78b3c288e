//! Access token providers
//!
//! The sign-in flow owns the real token; these providers hand an already
//! known token to the core `AccessTokenProvider` port.

use async_trait::async_trait;
use polaris_core::AccessTokenProvider;

/// Provider returning a fixed token, or none.
///
/// Used when the token is known up front, for example when a request handler
/// acts on behalf of the bearer that called it.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenProvider {
    token: Option<String>,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        let token = token.into();
        Self { token: (!token.is_empty()).then_some(token) }
    }

    /// Provider for a signed-out user.
    pub fn signed_out() -> Self {
        Self { token: None }
    }
}

#[async_trait]
impl AccessTokenProvider for StaticTokenProvider {
    async fn access_token(&self) -> Option<String> {
        self.token.clone()
    }
}
