//! Memory settings forwarding routes
//!
//! Each handler checks for a bearer token, forwards the call to the memory
//! service and relays its answer:
//!
//! - missing or malformed `Authorization` header: 401, backend not contacted
//! - backend 2xx: 200 with the backend body
//! - backend non-2xx: same status and body
//! - no usable backend response: 500 with this app's own error body

use std::time::Instant;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get};
use axum::{Json, Router};
use polaris_domain::constants::MEMORY_SETTINGS_PATH;
use polaris_domain::DeleteScope;
use polaris_infra::ForwardedResponse;
use serde_json::Value;

use crate::context::AppContext;
use crate::errors::ApiError;
use crate::utils::logging::log_forward_outcome;
use crate::utils::session::bearer_token;

/// Routes relative to the `/api` mount point.
pub fn router() -> Router<AppContext> {
    Router::new()
        .route(MEMORY_SETTINGS_PATH, get(get_settings).put(put_settings))
        .route(&scope_path(DeleteScope::All), delete(delete_all))
        .route(&scope_path(DeleteScope::Last30Days), delete(delete_last_30_days))
}

fn scope_path(scope: DeleteScope) -> String {
    format!("{MEMORY_SETTINGS_PATH}{}", scope.path_suffix())
}

pub async fn get_settings(
    State(ctx): State<AppContext>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    forward(&ctx, &headers, Method::GET, MEMORY_SETTINGS_PATH.to_string(), None).await
}

pub async fn put_settings(
    State(ctx): State<AppContext>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    // Credentials are checked before the body so an anonymous caller always
    // sees 401.
    bearer_token(&headers).ok_or(ApiError::Unauthorized)?;
    let body: Value = serde_json::from_slice(&body)
        .map_err(|err| ApiError::BadRequest(format!("Request body must be JSON: {err}")))?;

    forward(&ctx, &headers, Method::PUT, MEMORY_SETTINGS_PATH.to_string(), Some(body)).await
}

pub async fn delete_all(
    State(ctx): State<AppContext>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    forward(&ctx, &headers, Method::DELETE, scope_path(DeleteScope::All), None).await
}

pub async fn delete_last_30_days(
    State(ctx): State<AppContext>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    forward(&ctx, &headers, Method::DELETE, scope_path(DeleteScope::Last30Days), None).await
}

async fn forward(
    ctx: &AppContext,
    headers: &HeaderMap,
    method: Method,
    path: String,
    body: Option<Value>,
) -> Result<Response, ApiError> {
    let token = bearer_token(headers).ok_or(ApiError::Unauthorized)?;

    let started = Instant::now();
    let result = ctx.forwarder.forward(method.clone(), &path, token, body.as_ref()).await;
    let elapsed = started.elapsed();

    match result {
        Ok(response) => {
            log_forward_outcome(method.as_str(), &path, Some(response.status), elapsed, None);
            Ok(relay(response))
        }
        Err(err) => {
            log_forward_outcome(method.as_str(), &path, None, elapsed, Some(&err));
            Err(ApiError::Upstream(err))
        }
    }
}

/// Success collapses to 200; failures keep the backend's status.
fn relay(response: ForwardedResponse) -> Response {
    let status = if response.is_success() {
        StatusCode::OK
    } else {
        StatusCode::from_u16(response.status).unwrap_or(StatusCode::BAD_GATEWAY)
    };
    (status, Json(response.body)).into_response()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn scope_paths_match_backend_suffixes() {
        assert_eq!(scope_path(DeleteScope::All), "/settings/memory/all");
        assert_eq!(scope_path(DeleteScope::Last30Days), "/settings/memory/last-30-days");
    }

    #[test]
    fn relay_collapses_success_statuses() {
        let created = relay(ForwardedResponse { status: 201, body: json!({ "ok": true }) });
        assert_eq!(created.status(), StatusCode::OK);

        let forbidden = relay(ForwardedResponse { status: 403, body: json!({ "error": "no" }) });
        assert_eq!(forbidden.status(), StatusCode::FORBIDDEN);
    }
}
