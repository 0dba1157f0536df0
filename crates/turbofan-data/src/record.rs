//! Cycle Record Types

use serde::{Deserialize, Serialize};

/// Number of continuous channels per record (3 operating settings + 21 sensors)
pub const NUM_CHANNELS: usize = 24;

/// Number of numeric fields a raw row must yield
pub const ROW_FIELDS: usize = NUM_CHANNELS + 2;

/// Column names of the continuous channels, in on-disk order
pub const CHANNEL_NAMES: [&str; NUM_CHANNELS] = [
    "setting1", "setting2", "setting3", "s1", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9",
    "s10", "s11", "s12", "s13", "s14", "s15", "s16", "s17", "s18", "s19", "s20", "s21",
];

/// One sampled operating cycle of one engine unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleRecord {
    /// Engine unit id, unique within a dataset split
    pub unit: u32,
    /// Cycle index, starting at 1 and increasing per unit
    pub cycle: u32,
    /// Continuous channels: settings then sensors, in [`CHANNEL_NAMES`] order
    pub channels: [f64; NUM_CHANNELS],
}

impl CycleRecord {
    /// Create a record with all channels set to one value (test helper and fixtures)
    pub fn uniform(unit: u32, cycle: u32, value: f64) -> Self {
        Self {
            unit,
            cycle,
            channels: [value; NUM_CHANNELS],
        }
    }

    /// The three operating-setting channels
    pub fn settings(&self) -> &[f64] {
        &self.channels[..3]
    }

    /// The 21 sensor channels
    pub fn sensors(&self) -> &[f64] {
        &self.channels[3..]
    }
}

/// A cycle record with its computed remaining-useful-life label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledRecord {
    /// The underlying (normalized) record
    pub record: CycleRecord,
    /// Remaining useful life, in cycles
    pub rul: u32,
}
