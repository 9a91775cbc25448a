use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The internal taxonomy distinguishes upstream failures from malformed
/// upstream replies, but the wire contract is deliberately flat: every
/// failure becomes HTTP 500 with `{"error": <description>}`, matching what
/// the frontend already expects.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("completion API error: {0}")]
    Upstream(#[from] LlmError),

    #[error("completion API returned a malformed reply: {0}")]
    MalformedReply(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Upstream(e) => tracing::error!("upstream failure: {e}"),
            AppError::MalformedReply(msg) => tracing::error!("malformed upstream reply: {msg}"),
        }

        let body = Json(json!({ "error": self.to_string() }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
