//! Completion gateway — sends assembled messages to the provider in
//! JSON-object mode and normalizes the reply.
//!
//! # Public API
//!
//! - [`CompletionProvider`] — seam for the external completion API
//! - [`groq::GroqClient`] — Groq (OpenAI-compatible) implementation
//! - [`request_reply`] — one round trip plus decoding
//! - [`StructuredReply`] — decoded object or the fixed fallback
//!
//! The model's text is decoded as a single JSON object. Text that does not
//! decode is not an error: it becomes [`StructuredReply::Fallback`] so the
//! front end still gets a usable reply. Failures are never retried.

pub mod groq;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{Map, Value, json};
use thiserror::Error;
use tracing::{debug, warn};

use crate::chat::ProviderMessage;

pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Errors that can occur while calling the completion provider.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("Provider request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Provider returned {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("Provider returned no completion content")]
    EmptyResponse,

    #[error("Config error: {0}")]
    Config(String),
}

/// Model parameters sent with every completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionSettings {
    pub model: String,
    pub temperature: f32,
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// An external chat-completion API constrained to JSON-object output.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send the messages and return the raw text of the first choice.
    async fn complete(&self, messages: &[ProviderMessage]) -> Result<String, CompletionError>;
}

pub const FALLBACK_REPLY: &str =
    "I apologize, I had a little trouble formatting my thoughts. Could you try rephrasing that?";
pub const FALLBACK_SUMMARY: &str = "AI response format error.";

/// Payload returned when the model's text is not a JSON object.
pub fn fallback_payload() -> Value {
    json!({
        "reply": FALLBACK_REPLY,
        "summary": FALLBACK_SUMMARY,
        "emotions": [],
        "newTasks": [],
        "waterIntake": 0
    })
}

/// Outcome of a successful provider round trip.
#[derive(Debug, Clone, PartialEq)]
pub enum StructuredReply {
    /// The model's object, relayed unmodified.
    Decoded(Map<String, Value>),
    /// The model's text could not be decoded.
    Fallback,
}

impl StructuredReply {
    /// Decode raw model text. No schema is enforced beyond "JSON object".
    pub fn decode(text: &str) -> Self {
        match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(object)) => Self::Decoded(object),
            Ok(other) => {
                warn!(kind = json_kind(&other), "model reply is JSON but not an object");
                Self::Fallback
            }
            Err(e) => {
                warn!(error = %e, "model reply is not valid JSON");
                Self::Fallback
            }
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback)
    }

    /// JSON body sent back to the caller.
    pub fn into_value(self) -> Value {
        match self {
            Self::Decoded(object) => Value::Object(object),
            Self::Fallback => fallback_payload(),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// One provider round trip: call, then decode.
pub async fn request_reply(
    provider: &dyn CompletionProvider,
    messages: &[ProviderMessage],
) -> Result<StructuredReply, CompletionError> {
    debug!(messages = messages.len(), "requesting completion");
    let text = provider.complete(messages).await?;
    Ok(StructuredReply::decode(&text))
}
