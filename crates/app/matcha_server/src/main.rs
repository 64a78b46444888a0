//! Matcha Journal server binary.
//!
//! Serves the single-page front end and the `/api/chat` endpoint.

pub use self::error::{Error, Result};
mod error;
mod logging;

use std::path::PathBuf;

use clap::Parser;
use matcha_api::config::ApiConfig;
use matcha_core::completion::groq::DEFAULT_BASE_URL;
use matcha_core::completion::{CompletionSettings, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
use tracing::{error, info};

/// CLI arguments for the server. Every option can also come from the
/// environment or a `.env` file.
#[derive(Parser, Debug)]
#[command(name = "matcha_server", version, about = "Matcha Journal server")]
struct Args {
    /// Address to listen on.
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:5000")]
    bind_addr: String,

    /// Directory containing index.html and the front-end assets.
    #[arg(long, env = "STATIC_DIR", default_value = "static")]
    static_dir: PathBuf,

    /// System prompt file, read once at startup.
    #[arg(long, env = "SYSTEM_PROMPT_PATH", default_value = "system_prompt.txt")]
    system_prompt: PathBuf,

    /// Groq API key. Without it the server starts but /api/chat answers 500.
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
    groq_api_key: Option<String>,

    /// OpenAI-compatible base URL of the Groq API.
    #[arg(long, env = "GROQ_BASE_URL", default_value = DEFAULT_BASE_URL)]
    groq_base_url: String,

    /// Model identifier used for every completion.
    #[arg(long, env = "GROQ_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// Sampling temperature (0.0 to 2.0).
    #[arg(long, env = "GROQ_TEMPERATURE", default_value_t = DEFAULT_TEMPERATURE)]
    temperature: f32,
}

impl Args {
    fn into_config(self) -> Result<ApiConfig> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(Error::Config(format!(
                "temperature must be between 0.0 and 2.0, got {}",
                self.temperature
            )));
        }

        Ok(ApiConfig {
            bind_addr: self.bind_addr,
            static_dir: self.static_dir,
            system_prompt_path: self.system_prompt,
            groq_api_key: self.groq_api_key,
            groq_base_url: self.groq_base_url,
            completion: CompletionSettings {
                model: self.model,
                temperature: self.temperature,
            },
        })
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    logging::init();

    if let Err(e) = run(Args::parse()).await {
        error!("{e}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let config = args.into_config()?;
    info!(version = matcha_core::version(), config = ?config, "starting matcha_server");

    let state = matcha_api::AppState::from_config(config);
    let app = matcha_api::router(state.clone());

    let listener = tokio::net::TcpListener::bind(&state.config.bind_addr).await?;
    info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
