//! Statistics Policy

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which collection the normalization statistics are fitted on.
///
/// The observed source behavior normalizes train and test with their own
/// statistics, which leaks information asymmetrically between splits. That
/// behavior is kept as the default, but as an explicit policy value rather
/// than a hardcoded assumption.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatsPolicy {
    /// Each split is normalized with statistics from that same split
    #[default]
    SplitLocal,
    /// The test split is normalized with the train split's statistics
    SharedTrainStats,
}

impl StatsPolicy {
    /// Kebab-case name used on the command line and in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            StatsPolicy::SplitLocal => "split-local",
            StatsPolicy::SharedTrainStats => "shared-train",
        }
    }
}

impl fmt::Display for StatsPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatsPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "split-local" => Ok(StatsPolicy::SplitLocal),
            "shared-train" => Ok(StatsPolicy::SharedTrainStats),
            other => Err(format!("unknown stats policy: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_round_trip() {
        assert_eq!(
            "split-local".parse::<StatsPolicy>().unwrap(),
            StatsPolicy::SplitLocal
        );
        assert_eq!(
            "shared-train".parse::<StatsPolicy>().unwrap(),
            StatsPolicy::SharedTrainStats
        );
        assert!("global".parse::<StatsPolicy>().is_err());
    }

    #[test]
    fn test_default_matches_source_behavior() {
        assert_eq!(StatsPolicy::default(), StatsPolicy::SplitLocal);
    }
}
