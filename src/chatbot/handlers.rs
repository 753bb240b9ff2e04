/**
 * Chatbot Handlers
 *
 * HTTP handlers for the chatbot endpoints:
 *
 * - `POST /api/chat` - forward a message through the model gateway
 * - `GET /api/health` - liveness report with the failure counter
 * - `POST /api/restart-ollama` - force a restart of the supervised model
 *
 * # Response Shapes
 *
 * Chat success: `{"respuesta": ..., "user_id": ..., "status": "success"}`.
 * An empty message is the only 400; recovered upstream trouble still
 * answers 200 with apologetic text.
 */

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;

use crate::server::state::AppState;

fn default_user_id() -> String {
    "default".to_string()
}

/// Chat request for POST /api/chat
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Client-supplied conversation key (unauthenticated)
    #[serde(default = "default_user_id")]
    pub user_id: String,
    /// The user's message
    #[serde(default)]
    pub mensaje: String,
}

/// Chat handler
pub async fn chat(State(state): State<AppState>, Json(request): Json<ChatRequest>) -> Response {
    tracing::info!("Chat request: {} - '{:.60}'", request.user_id, request.mensaje);

    match state.gateway.respond(&request.user_id, &request.mensaje).await {
        Ok(respuesta) => Json(serde_json::json!({
            "respuesta": respuesta,
            "user_id": request.user_id,
            "status": "success",
        }))
        .into_response(),
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": e.message() })),
        )
            .into_response(),
    }
}

/// Health handler
///
/// Reports Ollama connectivity, the consecutive-failure counter and the
/// number of active conversations.
pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    let ollama = if state.gateway.is_alive().await {
        "connected"
    } else {
        "disconnected"
    };

    Json(serde_json::json!({
        "status": "ok",
        "ollama": ollama,
        "fail_count": state.gateway.failures(),
        "users_activos": state.gateway.active_users().await,
    }))
}

/// Forced-restart handler
pub async fn restart_ollama(State(state): State<AppState>) -> Json<serde_json::Value> {
    let success = state.gateway.restart_model().await;

    Json(serde_json::json!({
        "success": success,
        "message": if success { "Ollama reiniciado" } else { "Error al reiniciar" },
    }))
}
