//! Pipeline CLI Support
//!
//! Layered settings resolution and logging setup for the `rul-pipeline`
//! binary.

mod settings;

pub use settings::{Overrides, Settings};

use tracing_subscriber::EnvFilter;

/// Initialize logging
///
/// Respects `RUST_LOG`; defaults to `info`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
