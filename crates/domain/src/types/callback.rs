//! OAuth callback query parameters

use serde::{Deserialize, Serialize};

/// Query string handed to an OAuth callback screen by the backend redirect.
///
/// All fields are optional on the wire; `success` is only meaningful when it
/// equals `"true"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackParams {
    #[serde(default)]
    pub success: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

impl CallbackParams {
    /// `success=true` was passed.
    pub fn is_success(&self) -> bool {
        self.success.as_deref() == Some("true")
    }
}
