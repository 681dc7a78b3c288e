//! Backend forwarder
//!
//! Relays an authenticated request to the memory service: the caller's
//! bearer token and optional JSON body go out, the backend's status code and
//! JSON body come back unchanged. No retry and no client-side timeout.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde_json::Value;
use tracing::{debug, instrument};

use super::errors::ForwardError;
use crate::http::HttpClient;

/// Status and body as returned by the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardedResponse {
    pub status: u16,
    /// Parsed JSON body; `Value::Null` when the backend sent no body.
    pub body: Value,
}

impl ForwardedResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Forwards requests to a fixed backend base URL.
#[derive(Clone)]
pub struct BackendForwarder {
    http: HttpClient,
    base_url: String,
}

impl BackendForwarder {
    /// Forwarder with a single-attempt, no-timeout HTTP client.
    ///
    /// # Errors
    ///
    /// Returns `ForwardError::Transport` if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ForwardError> {
        let http = HttpClient::new()?;
        Ok(Self::with_http_client(http, base_url))
    }

    pub fn with_http_client(http: HttpClient, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Forward `method` to `{base_url}{path}` with `Authorization: Bearer
    /// <token>` and, when given, `body` as JSON.
    ///
    /// # Errors
    ///
    /// `Transport` when no response arrives, `Decode` when the response body
    /// is present but not JSON. Error statuses are returned as `Ok`.
    #[instrument(skip(self, token, body))]
    pub async fn forward(
        &self,
        method: Method,
        path: &str,
        token: &str,
        body: Option<&Value>,
    ) -> Result<ForwardedResponse, ForwardError> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self
            .http
            .request(method, &url)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = self.http.send(request).await?;
        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .await
            .map_err(|err| ForwardError::Transport(format!("failed to read backend body: {err}")))?;

        let body = if bytes.iter().all(u8::is_ascii_whitespace) {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).map_err(|err| ForwardError::Decode(err.to_string()))?
        };

        debug!(status, "backend responded");
        Ok(ForwardedResponse { status, body })
    }
}
