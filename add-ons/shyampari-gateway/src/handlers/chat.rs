//! POST /chat: remote model first, canned fallback otherwise. Provenance is
//! reported in `using_ai`; upstream failures never reach the caller.

use crate::error::GatewayError;
use crate::AppState;
use axum::extract::{Json, State};
use shyampari_core::{ChatRequest, ChatResult};

/// Length in characters, not bytes.
fn char_len(text: &str) -> usize {
    text.chars().count()
}

pub(crate) async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResult>, GatewayError> {
    let request_id = uuid::Uuid::new_v4();
    tracing::info!(
        target: "shyampari::chat",
        %request_id,
        chars = char_len(&req.message),
        "User message: {}",
        req.message.trim()
    );

    let result = state.chat.respond(&req.message).await.map_err(|e| {
        tracing::warn!(target: "shyampari::chat", %request_id, "Rejected chat request: {}", e);
        GatewayError::from(e)
    })?;

    tracing::info!(
        target: "shyampari::chat",
        %request_id,
        using_ai = result.using_ai,
        "Chat response ready ({} chars)",
        char_len(&result.response)
    );
    Ok(Json(result))
}
