//! Directory, health and provider diagnostics.

use crate::AppState;
use axum::extract::State;
use axum::Json;
use shyampari_core::{Route, VERSION};

const TEST_PROMPT: &str = "Say 'Grok is working correctly for Shyampari Edutech!' in a friendly way.";

fn ai_status(state: &AppState) -> &'static str {
    match state.chat.route() {
        Route::AttemptRemote => "grok-active",
        Route::FallbackOnly => "fallback",
    }
}

/// GET / – service identity and available endpoints.
pub(crate) async fn root(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": format!("{} API", state.config.app_name),
        "version": VERSION,
        "ai_status": ai_status(&state),
        "endpoints": {
            "/chat": "POST - Send chat messages",
            "/health": "GET - Health check",
            "/test-grok": "GET - Test Grok integration",
        }
    }))
}

/// GET /health – credential presence, knowledge base state, version.
pub(crate) async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    let knowledge = state.chat.knowledge();
    let grok_available = state.chat.route() == Route::AttemptRemote;
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "grok_available": grok_available,
        "knowledge_base_loaded": knowledge.is_loaded(),
        "knowledge_base_source": knowledge.source().label(),
        "grok_model": state.chat.model(),
        "api_key_present": state.credential_present,
        "version": VERSION,
    }))
}

/// GET /test-grok – one diagnostic call to the provider, no fallback.
pub(crate) async fn test_grok(State(state): State<AppState>) -> Json<serde_json::Value> {
    if !state.credential_present {
        return Json(serde_json::json!({ "error": "No API key found", "status": "failed" }));
    }

    match state.chat.probe(TEST_PROMPT).await {
        Ok(text) if !text.is_empty() => Json(serde_json::json!({
            "status": "success",
            "response": text,
            "model": state.chat.model(),
        })),
        Ok(_) => Json(serde_json::json!({
            "status": "error",
            "error": "No response from Grok API",
        })),
        Err(e) => {
            tracing::warn!(target: "shyampari::grok", error = %e, "Grok test call failed");
            Json(serde_json::json!({
                "status": "error",
                "error": e.to_string(),
            }))
        }
    }
}
