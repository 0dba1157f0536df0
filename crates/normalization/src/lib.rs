//! Channel Normalization
//!
//! Min-max normalization of the 24 continuous channels, with statistics
//! computed over a whole dataset collection in one pass.

mod error;
mod policy;
mod scaler;
mod stats;

pub use error::NormalizeError;
pub use policy::StatsPolicy;
pub use scaler::{MinMaxScaler, NormalizeOptions, DEFAULT_EPSILON};
pub use stats::ChannelStats;
