//! API server configuration.

use std::path::PathBuf;

use matcha_core::completion::CompletionSettings;
use matcha_core::completion::groq::DEFAULT_BASE_URL;

/// Configuration for the API server, resolved once at startup.
#[derive(Clone)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:5000").
    pub bind_addr: String,
    /// Directory holding `index.html` and the front-end assets.
    pub static_dir: PathBuf,
    /// System prompt file, read once at startup.
    pub system_prompt_path: PathBuf,
    /// Groq API key. `None` leaves `/api/chat` degraded.
    pub groq_api_key: Option<String>,
    /// OpenAI-compatible base URL of the Groq API.
    pub groq_base_url: String,
    /// Model and temperature for every completion.
    pub completion: CompletionSettings,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:5000".into(),
            static_dir: PathBuf::from("static"),
            system_prompt_path: PathBuf::from("system_prompt.txt"),
            groq_api_key: None,
            groq_base_url: DEFAULT_BASE_URL.into(),
            completion: CompletionSettings::default(),
        }
    }
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("bind_addr", &self.bind_addr)
            .field("static_dir", &self.static_dir)
            .field("system_prompt_path", &self.system_prompt_path)
            .field("groq_api_key", &self.groq_api_key.as_ref().map(|_| "<redacted>"))
            .field("groq_base_url", &self.groq_base_url)
            .field("completion", &self.completion)
            .finish()
    }
}
