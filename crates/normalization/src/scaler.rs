//! Epsilon-Stabilized Min-Max Scaling

use crate::error::NormalizeError;
use crate::stats::ChannelStats;
use serde::{Deserialize, Serialize};
use tracing::warn;
use turbofan_data::CycleRecord;

/// Default stabilization epsilon
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Normalization options
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NormalizeOptions {
    /// Stabilization term added to numerator and denominator
    pub epsilon: f64,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }
}

/// Min-max scaler for the continuous channels.
///
/// Transforms each channel value as `(v - min + eps) / (max - min + eps)`.
/// A degenerate channel (min == max) therefore maps every row to exactly
/// `eps / eps = 1.0`; that is the defined result, not a fault.
#[derive(Debug, Clone)]
pub struct MinMaxScaler {
    stats: ChannelStats,
    options: NormalizeOptions,
}

impl MinMaxScaler {
    /// Fit a scaler on a collection, computing its channel statistics
    pub fn fit(records: &[CycleRecord], options: NormalizeOptions) -> Result<Self, NormalizeError> {
        let stats = ChannelStats::compute(records)?;
        Ok(Self::from_stats(stats, options))
    }

    /// Build a scaler from precomputed statistics (shared-stats policy)
    pub fn from_stats(stats: ChannelStats, options: NormalizeOptions) -> Self {
        let degenerate = stats.degenerate_channel_names();
        if !degenerate.is_empty() {
            warn!(
                channels = ?degenerate,
                "degenerate channels (min == max) will normalize to 1.0"
            );
        }
        Self { stats, options }
    }

    /// The fitted channel statistics
    pub fn stats(&self) -> &ChannelStats {
        &self.stats
    }

    /// Transform all channel values in place; `unit` and `cycle` are untouched
    pub fn transform(&self, records: &mut [CycleRecord]) {
        let eps = self.options.epsilon;
        for record in records {
            for (i, value) in record.channels.iter_mut().enumerate() {
                *value = (*value - self.stats.min[i] + eps)
                    / (self.stats.max[i] - self.stats.min[i] + eps);
            }
        }
    }
}
