//! Output Writers
//!
//! CSV writer for labeled, normalized tables and a JSON writer for the run
//! report. Output is deterministic: identical input produces byte-identical
//! files.

mod error;
mod table;

pub use error::ExportError;
pub use table::{ensure_dir, write_json, write_labeled_csv};
