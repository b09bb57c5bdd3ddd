use thiserror::Error;

use acervo_catalog::ValidationError;
use acervo_db::{OperationError, SchemaError};
use acervo_report::ReportError;

/// Errors returned by [`crate::CatalogService`].
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Title or author missing on add
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The store could not be opened
    #[error("Database error: {0}")]
    Schema(#[from] SchemaError),

    /// A query or statement failed
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// PDF serialization failed
    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    /// The in-memory store's lock was poisoned by a panicking caller
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl From<OperationError> for ServiceError {
    fn from(e: OperationError) -> Self {
        match e {
            OperationError::Sqlite(e) => Self::Sqlite(e),
            OperationError::Validation(e) => Self::Validation(e),
        }
    }
}
