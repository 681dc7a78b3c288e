//! OAuth callback pages
//!
//! `GET /auth/callback/{google,github,gmail}` evaluates the query once and
//! answers with a page that redirects itself after the screen's delay.

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use polaris_core::{CallbackKind, CallbackOutcome};
use polaris_domain::CallbackParams;
use tracing::{debug, info};

use crate::context::AppContext;
use crate::utils::session::has_session;
use crate::views;

pub async fn callback_screen(
    State(ctx): State<AppContext>,
    Path(provider): Path<String>,
    Query(params): Query<CallbackParams>,
    headers: HeaderMap,
) -> Response {
    let Ok(kind) = provider.parse::<CallbackKind>() else {
        debug!(provider = %provider, "unknown oauth callback requested");
        let path = format!("/auth/callback/{provider}");
        return (StatusCode::NOT_FOUND, Html(views::not_found_page(&path))).into_response();
    };

    let signed_in = has_session(&headers, ctx.session_cookie());
    let outcome = CallbackOutcome::evaluate(kind, &params, signed_in);
    info!(
        %kind,
        status = ?outcome.status,
        redirect_to = %outcome.redirect_to,
        delay_secs = outcome.delay.as_secs(),
        "oauth callback page rendered"
    );

    Html(views::callback_page(kind, Some(&outcome))).into_response()
}
