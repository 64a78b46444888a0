//! Groq completion provider.
//!
//! Calls the OpenAI-compatible chat completions API
//! (`{base}/chat/completions`) with `response_format = json_object`.
//! Uses the transport's default timeout and makes a single attempt.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{CompletionError, CompletionProvider, CompletionSettings};
use crate::chat::ProviderMessage;

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ProviderMessage],
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

impl ResponseFormat {
    const JSON_OBJECT: Self = Self { kind: "json_object" };
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Client for the Groq chat completions endpoint.
///
/// Cloning is cheap; the underlying `reqwest::Client` is shared.
#[derive(Clone)]
pub struct GroqClient {
    http: Client,
    api_key: String,
    base_url: String,
    settings: CompletionSettings,
}

impl std::fmt::Debug for GroqClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroqClient")
            .field("base_url", &self.base_url)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl GroqClient {
    /// Build a client against the public Groq endpoint.
    pub fn new(api_key: &str, settings: CompletionSettings) -> Result<Self, CompletionError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL, settings)
    }

    /// Build a client against a custom OpenAI-compatible base URL.
    pub fn with_base_url(
        api_key: &str,
        base_url: &str,
        settings: CompletionSettings,
    ) -> Result<Self, CompletionError> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(CompletionError::Config("GROQ_API_KEY is empty".to_string()));
        }
        let http = Client::builder().build()?;

        Ok(Self {
            http,
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            settings,
        })
    }

    pub fn settings(&self) -> &CompletionSettings {
        &self.settings
    }

    fn request_body<'a>(&'a self, messages: &'a [ProviderMessage]) -> ChatCompletionRequest<'a> {
        ChatCompletionRequest {
            model: &self.settings.model,
            messages,
            temperature: self.settings.temperature,
            response_format: ResponseFormat::JSON_OBJECT,
        }
    }
}

#[async_trait]
impl CompletionProvider for GroqClient {
    async fn complete(&self, messages: &[ProviderMessage]) -> Result<String, CompletionError> {
        let url = format!("{}/chat/completions", self.base_url);

        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&self.request_body(messages))
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "<no body>".to_string());
            return Err(CompletionError::Api { status, body });
        }

        let data: ChatCompletionResponse = resp.json().await?;

        data.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(CompletionError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::Role;
    use serde_json::json;

    #[test]
    fn empty_key_is_rejected() {
        let err = GroqClient::new("  ", CompletionSettings::default()).unwrap_err();
        assert!(matches!(err, CompletionError::Config(_)));
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client =
            GroqClient::with_base_url("k", "http://localhost:9/v1/", CompletionSettings::default())
                .unwrap();
        assert_eq!(client.base_url, "http://localhost:9/v1");
    }

    #[test]
    fn request_body_requests_json_object_mode() {
        let client = GroqClient::new("k", CompletionSettings::default()).unwrap();
        let messages = [
            ProviderMessage::new(Role::System, "sys"),
            ProviderMessage::new(Role::User, "hi"),
        ];

        let body = serde_json::to_value(client.request_body(&messages)).unwrap();

        assert_eq!(body["model"], "llama-3.1-8b-instant");
        assert_eq!(body["response_format"], json!({"type": "json_object"}));
        assert!((body["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
        assert_eq!(
            body["messages"],
            json!([
                {"role": "system", "content": "sys"},
                {"role": "user", "content": "hi"}
            ])
        );
    }

    #[test]
    fn debug_output_hides_api_key() {
        let client = GroqClient::new("secret-key", CompletionSettings::default()).unwrap();
        assert!(!format!("{client:?}").contains("secret-key"));
    }
}
