//! Chat request handler.
//!
//! `POST /api/chat` assembles the conversation, asks the provider for a
//! JSON object and relays it. A reply that is not a JSON object is
//! replaced by the fixed fallback payload with status 200.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use serde_json::Value;
use tracing::{debug, error};

use matcha_core::chat::{ChatRequest, assemble_messages};
use matcha_core::completion::request_reply;

use crate::AppState;
use crate::error::{AppError, AppResult};

/// Decode the request body. An empty body is a request without a message.
fn parse_request(body: &[u8]) -> AppResult<ChatRequest> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ChatRequest::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid request body: {e}")))
}

/// `POST /api/chat` — get a structured reply for the user's message.
pub async fn chat_handler(State(state): State<AppState>, body: Bytes) -> AppResult<Json<Value>> {
    let provider = state
        .provider
        .as_deref()
        .ok_or(AppError::ServiceUnavailable)?;

    let request = parse_request(&body)?;
    let messages = assemble_messages(&state.system_prompt, request)?;
    debug!(messages = messages.len(), "assembled chat context");

    let reply = request_reply(provider, &messages).await.map_err(|e| {
        error!("An error occurred in /api/chat: {e}");
        AppError::from(e)
    })?;

    Ok(Json(reply.into_value()))
}
