//! waopen Error Types
//!
//! Centralized error handling for the launcher and its front ends.

use thiserror::Error;

/// Central error type for waopen
#[derive(Error, Debug)]
pub enum WaError {
    #[error("Invalid deep link URL: {0}")]
    InvalidUrl(String),

    #[error("No application available to open {url}: {reason}")]
    AppUnavailable { url: String, reason: String },

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias for waopen operations
pub type WaResult<T> = Result<T, WaError>;

impl From<arboard::Error> for WaError {
    fn from(err: arboard::Error) -> Self {
        WaError::Clipboard(err.to_string())
    }
}
