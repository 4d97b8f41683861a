//! HTTP error mapping. Bodies follow `{ "detail": ... }`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use shyampari_core::ChatError;

pub(crate) const INTERNAL_ERROR_DETAIL: &str = "Internal server error";

#[derive(Debug, thiserror::Error)]
pub(crate) enum GatewayError {
    #[error(transparent)]
    Chat(#[from] ChatError),
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        match self {
            GatewayError::Chat(e) => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "detail": e.to_string() })),
            )
                .into_response(),
            GatewayError::Internal(detail) => {
                // Full detail stays in the server log.
                tracing::error!(target: "shyampari::chat", detail = %detail, "Error in chat endpoint");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "detail": INTERNAL_ERROR_DETAIL })),
                )
                    .into_response()
            }
        }
    }
}

/// `CatchPanicLayer` hook: any panic while serving becomes a generic 500.
pub(crate) fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    GatewayError::Internal(detail).into_response()
}
