//! Ingestion Error Types

use thiserror::Error;

/// Errors that can occur while reading raw dataset files
#[derive(Debug, Error)]
pub enum IngestError {
    /// A raw row did not parse to the expected numeric fields
    #[error("line {line}: malformed record: {reason}")]
    MalformedRecord { line: usize, reason: String },

    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
