//! Port interface for the bearer token accessor
//!
//! The token itself is owned by the sign-in flow outside this crate; data
//! fetching components only ask whether one is available.

use async_trait::async_trait;

/// Supplies the current bearer token, if the user is signed in.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Current token, or `None` when there is no session.
    ///
    /// Implementations should return `None` rather than an empty string.
    async fn access_token(&self) -> Option<String>;
}
