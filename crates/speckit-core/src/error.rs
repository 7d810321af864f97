use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpecKitError {
    #[error("failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported ai_assistant '{0}' (expected one of: claude, gemini, copilot, cursor)")]
    InvalidAssistant(String),

    #[error("invalid project_name '{0}': must be a relative path inside the working directory")]
    InvalidProjectName(String),

    #[error("failed to write {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SpecKitError>;
