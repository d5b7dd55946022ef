//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Separates pre-invocation validation failures from failures of the external tool,
//! and converts underlying I/O and JSON errors from preset loading.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing required parameter: {name}")]
    MissingRequiredParameter { name: &'static str },

    #[error("Path not found: {}", path.display())]
    PathNotFound { path: PathBuf },

    #[error("Not a regular file: {}", path.display())]
    NotAFile { path: PathBuf },

    #[error("{program} exited with {}: {stderr}", exit_label(*code))]
    ExternalToolFailure {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Expected output was not created: {}", path.display())]
    OutputMissing { path: PathBuf },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn exit_label(code: Option<i32>) -> String {
    match code {
        Some(c) => format!("status {c}"),
        None => "no status (terminated by signal)".to_string(),
    }
}

impl Error {
    /// True for failures detected before any process was started.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::MissingRequiredParameter { .. }
                | Error::PathNotFound { .. }
                | Error::NotAFile { .. }
        )
    }
}
