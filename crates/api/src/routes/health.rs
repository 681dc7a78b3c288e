use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

/// Liveness check: answers as long as the process serves requests.
pub async fn health() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}
