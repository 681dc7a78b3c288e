use polaris_domain::PolarisError;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use tracing::debug;

use crate::errors::InfraError;

/// Single-shot HTTP client.
///
/// One attempt per request and no client-side timeout; both are left to the
/// transport. Error statuses come back as responses, only transport failures
/// become errors.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
}

impl HttpClient {
    /// # Errors
    ///
    /// Returns `PolarisError::Network` if the TLS backend cannot be
    /// initialised.
    pub fn new() -> Result<Self, PolarisError> {
        let client = ReqwestClient::builder()
            .no_proxy()
            .build()
            .map_err(|err| PolarisError::from(InfraError::from(err)))?;
        Ok(Self { client })
    }

    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Send `builder` once.
    ///
    /// # Errors
    ///
    /// The `reqwest::Error` mapped through [`InfraError`]: connection
    /// failures and timeouts are `Network`, malformed requests
    /// `InvalidInput`.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, PolarisError> {
        let request = builder.build().map_err(|err| PolarisError::from(InfraError::from(err)))?;
        let method = request.method().clone();
        let url = request.url().clone();

        match self.client.execute(request).await {
            Ok(response) => {
                debug!(%method, %url, status = %response.status(), "received HTTP response");
                Ok(response)
            }
            Err(err) => {
                debug!(%method, %url, error = %err, "HTTP request failed");
                Err(PolarisError::from(InfraError::from(err)))
            }
        }
    }
}
