//! Memory settings REST client
//!
//! Implements [`MemorySettingsGateway`] over HTTP:
//!
//! | Operation | Request |
//! |---|---|
//! | fetch | `GET {base}/settings/memory` |
//! | save | `PUT {base}/settings/memory` with `{settings}` |
//! | delete all | `DELETE {base}/settings/memory/all` |
//! | delete recent | `DELETE {base}/settings/memory/last-30-days` |
//!
//! A 404 on fetch means the user has no document yet and is not an error.

use async_trait::async_trait;
use polaris_core::{MemorySettingsError, MemorySettingsGateway};
use polaris_domain::constants::MEMORY_SETTINGS_PATH;
use polaris_domain::{DeleteScope, MemorySettings, PolarisError, SettingsEnvelope};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use tracing::{debug, info, instrument};

use crate::http::HttpClient;

/// HTTP implementation of the memory settings gateway.
#[derive(Clone)]
pub struct MemorySettingsClient {
    http: HttpClient,
    base_url: String,
}

impl MemorySettingsClient {
    /// Client with a single-attempt, no-timeout HTTP client.
    ///
    /// `base_url` is the API root, e.g. `http://localhost:8000` for the
    /// backend or `http://localhost:3000/api` for the forwarding routes.
    ///
    /// # Errors
    ///
    /// Returns `PolarisError::Network` if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, PolarisError> {
        let http = HttpClient::new()?;
        Ok(Self::with_http_client(http, base_url))
    }

    pub fn with_http_client(http: HttpClient, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    fn url(&self, suffix: &str) -> String {
        format!("{}{}{}", self.base_url, MEMORY_SETTINGS_PATH, suffix)
    }

    fn request(&self, method: Method, suffix: &str, token: &str) -> RequestBuilder {
        self.http
            .request(method, self.url(suffix))
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .header(CONTENT_TYPE, "application/json")
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Response, MemorySettingsError> {
        self.http.send(request).await.map_err(|err| MemorySettingsError::Transport(err.to_string()))
    }

    async fn read_settings(response: Response) -> Result<MemorySettings, MemorySettingsError> {
        response
            .json::<SettingsEnvelope>()
            .await
            .map(|envelope| envelope.settings)
            .map_err(|err| MemorySettingsError::Decode(err.to_string()))
    }
}

#[async_trait]
impl MemorySettingsGateway for MemorySettingsClient {
    #[instrument(skip(self, token))]
    async fn fetch(&self, token: &str) -> Result<Option<MemorySettings>, MemorySettingsError> {
        let response = self.execute(self.request(Method::GET, "", token)).await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            debug!("memory settings not found");
            return Ok(None);
        }
        if !status.is_success() {
            return Err(backend_error(status, response).await);
        }

        Self::read_settings(response).await.map(Some)
    }

    #[instrument(skip(self, token, settings))]
    async fn save(
        &self,
        token: &str,
        settings: &MemorySettings,
    ) -> Result<MemorySettings, MemorySettingsError> {
        let request = self
            .request(Method::PUT, "", token)
            .json(&SettingsEnvelope { settings: *settings });
        let response = self.execute(request).await?;
        let status = response.status();

        if !status.is_success() {
            return Err(backend_error(status, response).await);
        }

        let saved = Self::read_settings(response).await?;
        info!("memory settings stored by backend");
        Ok(saved)
    }

    #[instrument(skip(self, token), fields(scope = scope.label()))]
    async fn delete(&self, token: &str, scope: DeleteScope) -> Result<(), MemorySettingsError> {
        let response =
            self.execute(self.request(Method::DELETE, scope.path_suffix(), token)).await?;
        let status = response.status();

        if !status.is_success() {
            return Err(backend_error(status, response).await);
        }

        Ok(())
    }
}

/// `{error, message}` body used by the backend and the forwarding routes.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

async fn backend_error(status: StatusCode, response: Response) -> MemorySettingsError {
    let text = response.text().await.unwrap_or_default();
    MemorySettingsError::Backend { status: status.as_u16(), message: error_detail(status, &text) }
}

/// Prefer the structured `message`, then `error`, then the raw text, then the
/// status reason.
fn error_detail(status: StatusCode, text: &str) -> String {
    if let Ok(body) = serde_json::from_str::<ErrorBody>(text) {
        if let Some(detail) = body.message.or(body.error).filter(|detail| !detail.is_empty()) {
            return detail;
        }
    }

    let trimmed = text.trim();
    if trimmed.is_empty() {
        status.canonical_reason().unwrap_or("unknown status").to_string()
    } else {
        trimmed.chars().take(200).collect()
    }
}
