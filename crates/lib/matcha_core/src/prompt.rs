//! System prompt loading.
//!
//! The prompt is read once at startup and shared read-only afterwards.
//! A missing or unreadable file falls back to [`DEFAULT_SYSTEM_PROMPT`].

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{error, info};

pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are a helpful journaling assistant. You must always respond in valid JSON.";

/// Errors reading the system prompt file.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("System prompt file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read system prompt {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read the prompt file verbatim.
pub fn read_system_prompt(path: &Path) -> Result<String, PromptError> {
    std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            PromptError::NotFound(path.to_path_buf())
        } else {
            PromptError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// Read the prompt file, substituting the default instruction on failure.
pub fn load_system_prompt(path: &Path) -> String {
    match read_system_prompt(path) {
        Ok(prompt) => {
            info!(path = %path.display(), bytes = prompt.len(), "loaded system prompt");
            prompt
        }
        Err(e) => {
            error!("{e}; using default system prompt");
            DEFAULT_SYSTEM_PROMPT.to_string()
        }
    }
}
