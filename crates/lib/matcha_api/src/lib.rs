//! # matcha_api
//!
//! HTTP API library for Matcha Journal.

pub mod config;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::Router;
use axum::routing::post;
use matcha_core::completion::CompletionProvider;
use matcha_core::completion::groq::GroqClient;
use matcha_core::prompt::load_system_prompt;
use tower_http::services::{ServeDir, ServeFile};
use tracing::{error, info};

use crate::config::ApiConfig;
use crate::handlers::chat;

pub const ROUTE_INDEX: &str = "/";
pub const ROUTE_STATIC: &str = "/static";
pub const ROUTE_API_CHAT: &str = "/api/chat";

/// Shared application state passed to all handlers.
///
/// Built once at startup and only read afterwards.
#[derive(Clone)]
pub struct AppState {
    /// API configuration.
    pub config: Arc<ApiConfig>,
    /// System instruction prepended to every conversation.
    pub system_prompt: Arc<str>,
    /// Completion provider; `None` when the API key was missing or invalid.
    pub provider: Option<Arc<dyn CompletionProvider>>,
}

impl AppState {
    /// Resolve the system prompt and the provider client from configuration.
    ///
    /// Never fails: a bad or missing key leaves `provider` empty so the
    /// static page is still served.
    pub fn from_config(config: ApiConfig) -> Self {
        let system_prompt: Arc<str> = load_system_prompt(&config.system_prompt_path).into();

        let provider: Option<Arc<dyn CompletionProvider>> = match config.groq_api_key.as_deref()
        {
            None => {
                error!("GROQ_API_KEY is not set; /api/chat is disabled");
                None
            }
            Some(key) => match GroqClient::with_base_url(
                key,
                &config.groq_base_url,
                config.completion.clone(),
            ) {
                Ok(client) => {
                    info!(
                        model = %client.settings().model,
                        temperature = client.settings().temperature,
                        "Groq client initialized"
                    );
                    Some(Arc::new(client))
                }
                Err(e) => {
                    error!("Error initializing Groq client: {e}");
                    None
                }
            },
        };

        Self {
            config: Arc::new(config),
            system_prompt,
            provider,
        }
    }
}

/// Builds the Axum router with all routes and shared state.
///
/// The front end is served from the same origin, so no CORS headers are
/// emitted and browsers refuse cross-origin calls to `/api/chat`.
pub fn router(state: AppState) -> Router {
    let static_dir = &state.config.static_dir;

    Router::new()
        .route(ROUTE_API_CHAT, post(chat::chat_handler))
        .route_service(ROUTE_INDEX, ServeFile::new(static_dir.join("index.html")))
        .nest_service(ROUTE_STATIC, ServeDir::new(static_dir))
        .with_state(state)
}
