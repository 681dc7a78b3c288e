//! Route protection middleware for browser pages

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use polaris_core::GateDecision;
use tracing::debug;

use crate::context::AppContext;
use crate::utils::session::has_session;

/// Apply the [`RouteGate`](polaris_core::RouteGate) to the request.
///
/// A session is a non-empty session cookie or a bearer token; neither is
/// validated here.
pub async fn route_gate(State(ctx): State<AppContext>, request: Request, next: Next) -> Response {
    let authenticated = has_session(request.headers(), ctx.session_cookie());
    let decision =
        ctx.gate.decide(request.uri().path(), request.uri().query(), authenticated);

    match decision {
        GateDecision::Allow => next.run(request).await,
        redirect => {
            let location = redirect.location().unwrap_or_default();
            debug!(path = request.uri().path(), location, "route gate redirect");
            Redirect::temporary(location).into_response()
        }
    }
}
