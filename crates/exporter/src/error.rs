//! Export Error Types

use thiserror::Error;

/// Errors while writing output files
#[derive(Debug, Error)]
pub enum ExportError {
    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization failure
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization failure
    #[error("JSON write error: {0}")]
    Json(#[from] serde_json::Error),
}
