//! Conversion of advisory replies into HTTP responses.
//!
//! Every reply is JSON: `{content}`, `{error}`, or the dev health payload.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use kisan_types::advisory::AdvisoryReply;
use kisan_types::error::AdvisoryError;

/// Axum response wrapper for [`AdvisoryReply`].
#[derive(Debug)]
pub struct JsonReply(pub AdvisoryReply);

impl From<AdvisoryReply> for JsonReply {
    fn from(reply: AdvisoryReply) -> Self {
        JsonReply(reply)
    }
}

impl From<AdvisoryError> for JsonReply {
    fn from(err: AdvisoryError) -> Self {
        JsonReply(err.into())
    }
}

impl IntoResponse for JsonReply {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (
            status,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            self.0.to_json(),
        )
            .into_response()
    }
}
