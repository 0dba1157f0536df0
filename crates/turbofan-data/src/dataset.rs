//! Dataset Variant Definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four independent C-MAPSS dataset variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DatasetId {
    /// Single operating condition, single fault mode
    Fd001,
    /// Six operating conditions, single fault mode
    Fd002,
    /// Single operating condition, two fault modes
    Fd003,
    /// Six operating conditions, two fault modes
    Fd004,
}

impl DatasetId {
    /// All variants in canonical order
    pub const ALL: [DatasetId; 4] = [
        DatasetId::Fd001,
        DatasetId::Fd002,
        DatasetId::Fd003,
        DatasetId::Fd004,
    ];

    /// Canonical upper-case name (e.g. "FD001")
    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetId::Fd001 => "FD001",
            DatasetId::Fd002 => "FD002",
            DatasetId::Fd003 => "FD003",
            DatasetId::Fd004 => "FD004",
        }
    }

    /// Conventional file name of the train split
    pub fn train_file(&self) -> String {
        format!("train_{}.txt", self.as_str())
    }

    /// Conventional file name of the test split
    pub fn test_file(&self) -> String {
        format!("test_{}.txt", self.as_str())
    }

    /// Conventional file name of the true-RUL reference for the test split
    pub fn rul_file(&self) -> String {
        format!("RUL_{}.txt", self.as_str())
    }

    /// File name of the raw split, by split kind
    pub fn split_file(&self, split: Split) -> String {
        match split {
            Split::Train => self.train_file(),
            Split::Test => self.test_file(),
        }
    }
}

impl fmt::Display for DatasetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatasetId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "FD001" => Ok(DatasetId::Fd001),
            "FD002" => Ok(DatasetId::Fd002),
            "FD003" => Ok(DatasetId::Fd003),
            "FD004" => Ok(DatasetId::Fd004),
            other => Err(format!("unknown dataset variant: {other}")),
        }
    }
}

/// Dataset split kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Split {
    /// Full run-to-failure series
    Train,
    /// Series truncated before failure, paired with a true-RUL reference
    Test,
}

impl Split {
    /// Lower-case name used in output file names
    pub fn as_str(&self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Test => "test",
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
