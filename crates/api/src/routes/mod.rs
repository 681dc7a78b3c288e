//! HTTP routes
//!
//! | Path | Handler |
//! |---|---|
//! | `/health` | liveness |
//! | `/api/settings/memory[/all, /last-30-days]` | backend forwarding |
//! | `/auth/callback/{provider}` | OAuth callback pages |
//! | anything else | page shell behind the route gate |

pub mod callback;
pub mod health;
pub mod memory;
pub mod pages;

use axum::routing::get;
use axum::Router;

use crate::context::AppContext;
use crate::middleware::route_gate;

/// Assemble the application router.
///
/// The route gate wraps browser pages only; `/api` and `/health` answer
/// regardless of session state.
pub fn router(ctx: AppContext) -> Router {
    let browser = Router::new()
        .route("/auth/callback/{provider}", get(callback::callback_screen))
        .fallback(pages::page)
        .layer(axum::middleware::from_fn_with_state(ctx.clone(), route_gate));

    Router::new()
        .route("/health", get(health::health))
        .nest("/api", memory::router())
        .merge(browser)
        .with_state(ctx)
}
