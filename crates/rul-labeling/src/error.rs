//! Labeling Error Types

use thiserror::Error;

/// Errors during RUL label computation
#[derive(Debug, Clone, Error)]
pub enum LabelError {
    /// Nothing to label
    #[error("cannot label an empty record collection")]
    EmptyCollection,

    /// A unit declared by the reference has no records in the series
    #[error("unit {0} has a RUL reference entry but no cycle records")]
    EmptyRun(u32),

    /// A unit in the series has no entry in the true-RUL reference
    #[error("unit {0} has no entry in the true-RUL reference")]
    MissingRulReference(u32),
}
