//! Prompt assembly — turns a chat request into the provider message list.
//!
//! The conversation sent to the model is always
//! `[system] + [history, in client order] + [new user message]`.
//! Nothing is persisted: the client resends its history on every call.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Errors raised while validating a chat request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChatError {
    #[error("No message provided.")]
    MissingMessage,
}

/// Who authored a history turn, as reported by the client's `type` field.
///
/// Only the string `"ai"` marks an assistant turn. Any other value,
/// including a missing or non-string `type`, is treated as the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TurnKind {
    Assistant,
    #[default]
    User,
}

impl TurnKind {
    /// Total mapping from the raw `type` value.
    pub fn from_type_field(value: &serde_json::Value) -> Self {
        match value.as_str() {
            Some("ai") => Self::Assistant,
            _ => Self::User,
        }
    }

    /// Provider role for this turn.
    pub fn role(self) -> Role {
        match self {
            Self::Assistant => Role::Assistant,
            Self::User => Role::User,
        }
    }
}

impl<'de> Deserialize<'de> for TurnKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(Self::from_type_field(&value))
    }
}

/// One prior turn of the conversation supplied by the client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChatTurn {
    #[serde(rename = "type", default)]
    pub kind: TurnKind,
    pub content: String,
}

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub history: Option<Vec<ChatTurn>>,
}

/// Role of a message on the provider wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single message sent to the completion provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderMessage {
    pub role: Role,
    pub content: String,
}

impl ProviderMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Build the ordered provider message list for a request.
///
/// Fails with [`ChatError::MissingMessage`] when `message` is absent or empty.
/// History content is copied verbatim.
pub fn assemble_messages(
    system_prompt: &str,
    request: ChatRequest,
) -> Result<Vec<ProviderMessage>, ChatError> {
    let message = request
        .message
        .filter(|m| !m.is_empty())
        .ok_or(ChatError::MissingMessage)?;
    let history = request.history.unwrap_or_default();

    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(ProviderMessage::new(Role::System, system_prompt));
    messages.extend(
        history
            .into_iter()
            .map(|turn| ProviderMessage::new(turn.kind.role(), turn.content)),
    );
    messages.push(ProviderMessage::new(Role::User, message));

    Ok(messages)
}
