//! Production router.
//!
//! Routes: `/api/llm` (any method; only POST is accepted) and `/health`.
//! Middleware: body limit and tracing. No CORS layer: the SPA is served
//! same-origin, and preflight `OPTIONS` must reach the 405 branch.
//!
//! When a web directory is configured and exists, the built SPA is served
//! from it. API routes take priority; unknown paths fall through to the
//! SPA's `index.html` for client-side routing.

use std::path::Path;

use axum::extract::DefaultBodyLimit;
use axum::routing::{any, get};
use axum::Router;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::http::LLM_PATH;
use crate::state::AppState;

/// Attach SPA static serving as the fallback, or a JSON 404 when there is
/// nothing to serve.
pub(crate) fn with_spa_fallback(router: Router<AppState>, web_dir: Option<&Path>) -> Router<AppState> {
    match web_dir {
        Some(dir) if dir.exists() => {
            let index_path = dir.join("index.html");
            let serve_dir = ServeDir::new(dir).fallback(ServeFile::new(index_path));
            tracing::info!(path = %dir.display(), "SPA static file serving enabled");
            router.fallback_service(serve_dir)
        }
        _ => router.fallback(handlers::health::not_found),
    }
}

/// Build the production router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let routes = Router::new()
        .route(LLM_PATH, any(handlers::advisory::advisory))
        .route("/health", get(handlers::health::health_check));

    with_spa_fallback(routes, state.web_dir.as_deref())
        .layer(DefaultBodyLimit::max(state.max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
