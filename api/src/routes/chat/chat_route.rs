//! POST /chat — the guarded RAG chat endpoint.

use std::sync::Arc;

use axum::{Json, extract::State};
use uuid::Uuid;

use crate::core::app_state::AppState;
use crate::error_handler::AppResult;
use crate::routes::chat::chat_request::{ChatRequest, ChatResponse};

/// Handler: POST /chat
///
/// Gate and validation outcomes are part of the structured payload and
/// always answer with HTTP 200; only upstream collaborator failures map to
/// error statuses.
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8080/chat \
///   -H 'content-type: application/json' \
///   -d '{"message":"How do I report an unplowed road?","top_k":10}'
/// ```
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ChatRequest>,
) -> AppResult<Json<ChatResponse>> {
    let session_id = body
        .session_id
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let out = state.chat.chat(&body.message, body.top_k, &session_id).await?;

    Ok(Json(ChatResponse {
        session_id: out.session_id,
        blocked: out.blocked,
        answer: out.answer,
        valid: Some(out.valid),
        issues: Some(out.issues),
    }))
}
