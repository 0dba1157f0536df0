//! RUL Labeling
//!
//! Computes a remaining-useful-life label for every cycle record. Train runs
//! derive the label from their own final cycle; test runs are truncated
//! before failure and need the externally supplied true-RUL reference.

mod error;
mod labeler;

pub use error::LabelError;
pub use labeler::{label_test, label_train};
