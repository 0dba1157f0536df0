//! Normalization Error Types

use thiserror::Error;

/// Errors during channel statistics computation
#[derive(Debug, Clone, Error)]
pub enum NormalizeError {
    /// Statistics require at least one record
    #[error("cannot compute channel statistics over an empty collection")]
    EmptyCollection,
}
