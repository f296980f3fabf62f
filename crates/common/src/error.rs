//! Error types shared across DemoDrive crates.

use std::path::PathBuf;

/// Top-level error type for DemoDrive operations.
#[derive(Debug, thiserror::Error)]
pub enum DemodriveError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using DemodriveError.
pub type DemodriveResult<T> = Result<T, DemodriveError>;

impl DemodriveError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}
