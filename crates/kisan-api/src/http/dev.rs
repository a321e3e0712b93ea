//! Development server with the advisory shim.
//!
//! The shim is middleware that runs ahead of normal request handling:
//! every path starting with `/api/llm` is answered here, everything else
//! passes through to `/health` or the SPA fallback. Unlike the production
//! route, the body is drained from the raw stream by hand and `GET`
//! answers a static health payload.

use axum::body::to_bytes;
use axum::extract::{Request, State};
use axum::http::Method;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use kisan_types::advisory::AdvisoryReply;
use kisan_types::error::AdvisoryError;

use crate::http::handlers;
use crate::http::response::JsonReply;
use crate::http::router::with_spa_fallback;
use crate::http::LLM_PATH;
use crate::state::AppState;

/// Intercept `/api/llm*` before routing reaches any other handler.
pub async fn dev_llm_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    tracing::info!(%method, %path, "[dev-llm] incoming");

    if !path.starts_with(LLM_PATH) {
        return next.run(request).await;
    }

    if method == Method::GET {
        tracing::info!("[dev-llm] health check");
        return JsonReply(AdvisoryReply::health()).into_response();
    }

    if method != Method::POST {
        tracing::warn!(%method, "[dev-llm] method not allowed");
        return JsonReply::from(AdvisoryError::MethodNotAllowed).into_response();
    }

    let body = match to_bytes(request.into_body(), state.max_body_bytes).await {
        Ok(body) => body,
        Err(e) => {
            tracing::error!(error = %e, "[dev-llm] failed to read body");
            return JsonReply::from(AdvisoryError::unexpected(e.to_string())).into_response();
        }
    };

    let reply = state.advisory.handle(method.as_str(), &body).await;
    if !reply.is_success() {
        tracing::warn!(status = reply.status, "[dev-llm] request failed");
    }
    JsonReply(reply).into_response()
}

/// Build the development router: shim middleware over `/health` and the
/// SPA fallback.
pub fn build_dev_router(state: AppState) -> Router {
    let routes = Router::new().route("/health", get(handlers::health::health_check));

    with_spa_fallback(routes, state.web_dir.as_deref())
        .layer(middleware::from_fn_with_state(state.clone(), dev_llm_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
