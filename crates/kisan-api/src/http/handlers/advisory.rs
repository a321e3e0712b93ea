//! Production advisory endpoint.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::Method;

use kisan_types::error::AdvisoryError;

use crate::http::response::JsonReply;
use crate::state::AppState;

/// ANY /api/llm - Forward a POSTed prompt upstream; other methods get 405.
///
/// A body that cannot be read (e.g. over the size limit) is reported as an
/// unexpected failure rather than a framework rejection, so the envelope
/// stays JSON.
pub async fn advisory(
    State(state): State<AppState>,
    method: Method,
    body: Result<Bytes, BytesRejection>,
) -> JsonReply {
    let body = match body {
        Ok(body) => body,
        Err(rejection) if method == Method::POST => {
            return AdvisoryError::unexpected(rejection.body_text()).into();
        }
        Err(_) => Bytes::new(),
    };

    state.advisory.handle(method.as_str(), &body).await.into()
}
