//! HTTP error responses for the web adapter.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::error::SynthError;

#[derive(Debug)]
pub struct WebError {
    pub status: StatusCode,
    pub message: String,
    /// Unmatched routes answer with `{"error": ...}` instead of the envelope.
    route_miss: bool,
}

impl WebError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            route_miss: false,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn endpoint_not_found() -> Self {
        Self {
            route_miss: true,
            ..Self::not_found("Endpoint not found")
        }
    }
}

pub fn status_from_error(err: &SynthError) -> StatusCode {
    match err {
        SynthError::InstrumentNotFound { .. } => StatusCode::NOT_FOUND,
        SynthError::ConfigParse { .. }
        | SynthError::ConfigInvalid { .. }
        | SynthError::Registry { .. }
        | SynthError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<SynthError> for WebError {
    fn from(err: SynthError) -> Self {
        let status = status_from_error(&err);
        if status.is_server_error() {
            tracing::error!(error = %err, "request failed");
        }
        Self::new(status, err.to_string())
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let body = if self.route_miss {
            json!({ "error": self.message })
        } else {
            json!({ "success": false, "message": self.message })
        };
        (self.status, Json(body)).into_response()
    }
}
