//! Run Report

use serde::{Deserialize, Serialize};
use turbofan_data::DatasetId;

/// Successful variant result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantOutcome {
    /// Dataset variant
    pub dataset: DatasetId,
    /// Rows in the labeled train table
    pub train_rows: usize,
    /// Rows in the labeled test table
    pub test_rows: usize,
    /// Degenerate (min == max) channels observed fitting the train stats
    pub degenerate_train_channels: Vec<String>,
    /// Degenerate channels observed fitting the test stats
    pub degenerate_test_channels: Vec<String>,
    /// Written train table path
    pub train_table: String,
    /// Written test table path
    pub test_table: String,
}

/// Outcome of one variant, success or failure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VariantStatus {
    /// Both tables written
    Succeeded(VariantOutcome),
    /// The variant aborted; other variants are unaffected
    Failed { kind: String, message: String },
}

/// Per-variant entry of the run report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantReport {
    /// Dataset variant
    pub dataset: DatasetId,
    /// Success or failure detail
    pub status: VariantStatus,
}

impl VariantReport {
    /// Whether this variant succeeded
    pub fn is_success(&self) -> bool {
        matches!(self.status, VariantStatus::Succeeded(_))
    }
}

/// Summary of one pipeline invocation across all configured variants
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineReport {
    /// One entry per configured variant, in job order
    pub variants: Vec<VariantReport>,
}

impl PipelineReport {
    /// Whether every variant succeeded
    pub fn is_success(&self) -> bool {
        self.variants.iter().all(VariantReport::is_success)
    }

    /// Variants that failed, in report order
    pub fn failed_variants(&self) -> Vec<DatasetId> {
        self.variants
            .iter()
            .filter(|v| !v.is_success())
            .map(|v| v.dataset)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_variants() {
        let report = PipelineReport {
            variants: vec![
                VariantReport {
                    dataset: DatasetId::Fd001,
                    status: VariantStatus::Failed {
                        kind: "malformed-record".to_string(),
                        message: "line 3".to_string(),
                    },
                },
                VariantReport {
                    dataset: DatasetId::Fd002,
                    status: VariantStatus::Succeeded(VariantOutcome {
                        dataset: DatasetId::Fd002,
                        train_rows: 10,
                        test_rows: 5,
                        degenerate_train_channels: Vec::new(),
                        degenerate_test_channels: Vec::new(),
                        train_table: "train_FD002.csv".to_string(),
                        test_table: "test_FD002.csv".to_string(),
                    }),
                },
            ],
        };

        assert!(!report.is_success());
        assert_eq!(report.failed_variants(), vec![DatasetId::Fd001]);
    }
}
