use thiserror::Error;

use acervo_lib::ServiceError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Catalog operation failed
    #[error("{0}")]
    Service(#[from] ServiceError),

    /// Cover file rejected before upload
    #[error("Invalid cover: {0}")]
    InvalidCover(String),

    /// Settings could not be saved or rendered
    #[error("Config error: {0}")]
    Config(String),

    /// JSON output failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub(crate) fn invalid_cover(msg: impl Into<String>) -> Self {
        Self::InvalidCover(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
