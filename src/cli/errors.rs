use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("Working directory does not exist: {}", path.display())]
    MissingWorkingDir { path: PathBuf },

    #[error(transparent)]
    Library(#[from] b0field::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
