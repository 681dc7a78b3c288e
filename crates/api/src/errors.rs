//! HTTP error responses
//!
//! Every error produced by this app (as opposed to one relayed from the
//! backend) is rendered as `{"error": ..., "message": ...}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use polaris_infra::ForwardError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing or invalid authorization header")]
    Unauthorized,

    #[error("{0}")]
    BadRequest(String),

    /// The backend could not be reached or answered with something that is
    /// not JSON.
    #[error("Failed to reach the memory service")]
    Upstream(#[from] ForwardError),
}

/// Body shape for errors raised by this app.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

impl ApiError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    const fn title(&self) -> &'static str {
        match self {
            Self::Unauthorized => "Unauthorized",
            Self::BadRequest(_) => "Bad request",
            Self::Upstream(_) => "Internal server error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody { error: self.title(), message: self.to_string() };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use serde_json::{json, Value};

    use super::*;

    async fn render(err: ApiError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn unauthorized_body() {
        let (status, body) = render(ApiError::Unauthorized).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(
            body,
            json!({ "error": "Unauthorized", "message": "Missing or invalid authorization header" })
        );
    }

    #[tokio::test]
    async fn upstream_failure_hides_transport_detail() {
        let err = ApiError::from(ForwardError::Transport("connection refused".into()));
        let (status, body) = render(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({
                "error": "Internal server error",
                "message": "Failed to reach the memory service"
            })
        );
    }
}
