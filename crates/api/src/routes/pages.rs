//! Browser pages
//!
//! Page content is rendered client side; the server only hands out the shell
//! once the route gate has let the request through.

use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};

use crate::views;

pub async fn page(uri: Uri) -> Response {
    let path = uri.path();
    if path == "/api" || path.starts_with("/api/") {
        return (StatusCode::NOT_FOUND, Html(views::not_found_page(path))).into_response();
    }

    Html(views::page_shell(path)).into_response()
}
