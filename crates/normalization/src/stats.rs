//! Per-Channel Statistics

use crate::error::NormalizeError;
use serde::{Deserialize, Serialize};
use turbofan_data::{CycleRecord, CHANNEL_NAMES, NUM_CHANNELS};

/// Min/max per continuous channel, taken over one whole collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelStats {
    /// Minimum observed value per channel
    pub min: [f64; NUM_CHANNELS],
    /// Maximum observed value per channel
    pub max: [f64; NUM_CHANNELS],
}

impl ChannelStats {
    /// Compute statistics in a single pass over the full collection.
    ///
    /// The collection must already be fully materialized; the min/max are
    /// global, not per-unit.
    pub fn compute(records: &[CycleRecord]) -> Result<Self, NormalizeError> {
        if records.is_empty() {
            return Err(NormalizeError::EmptyCollection);
        }

        let mut min = [f64::MAX; NUM_CHANNELS];
        let mut max = [f64::MIN; NUM_CHANNELS];

        for record in records {
            for (i, &value) in record.channels.iter().enumerate() {
                min[i] = min[i].min(value);
                max[i] = max[i].max(value);
            }
        }

        Ok(Self { min, max })
    }

    /// Indices of channels with zero observed range (min == max)
    pub fn degenerate_channels(&self) -> Vec<usize> {
        (0..NUM_CHANNELS)
            .filter(|&i| self.min[i] == self.max[i])
            .collect()
    }

    /// Column names of the degenerate channels
    pub fn degenerate_channel_names(&self) -> Vec<&'static str> {
        self.degenerate_channels()
            .into_iter()
            .map(|i| CHANNEL_NAMES[i])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_over_collection() {
        let records = vec![
            CycleRecord::uniform(1, 1, 10.0),
            CycleRecord::uniform(1, 2, 30.0),
            CycleRecord::uniform(2, 1, 20.0),
        ];
        let stats = ChannelStats::compute(&records).unwrap();
        assert_eq!(stats.min[0], 10.0);
        assert_eq!(stats.max[0], 30.0);
        assert_eq!(stats.min[23], 10.0);
        assert_eq!(stats.max[23], 30.0);
    }

    #[test]
    fn test_empty_collection_rejected() {
        let err = ChannelStats::compute(&[]).unwrap_err();
        assert!(matches!(err, NormalizeError::EmptyCollection));
    }

    #[test]
    fn test_degenerate_channel_detection() {
        let mut a = CycleRecord::uniform(1, 1, 5.0);
        let mut b = CycleRecord::uniform(1, 2, 5.0);
        a.channels[1] = 1.0;
        b.channels[1] = 2.0;
        let stats = ChannelStats::compute(&[a, b]).unwrap();

        let degenerate = stats.degenerate_channels();
        assert_eq!(degenerate.len(), NUM_CHANNELS - 1);
        assert!(!degenerate.contains(&1));
        assert!(stats.degenerate_channel_names().contains(&"setting1"));
    }
}
