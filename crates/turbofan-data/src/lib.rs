//! C-MAPSS Data Model and Ingestion
//!
//! Provides the record types for the turbofan degradation dataset and
//! parsers for the raw whitespace-delimited text files.

mod dataset;
mod error;
mod ingest;
mod record;
mod reference;

pub use dataset::{DatasetId, Split};
pub use error::IngestError;
pub use ingest::{load_records, load_rul_values, parse_records, parse_rul_values};
pub use record::{CycleRecord, LabeledRecord, CHANNEL_NAMES, NUM_CHANNELS, ROW_FIELDS};
pub use reference::RulReference;
