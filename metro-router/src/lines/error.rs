//! Network description loading errors.

use std::path::PathBuf;

/// Errors that can occur when loading a network description.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The text is not a valid network description
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}
