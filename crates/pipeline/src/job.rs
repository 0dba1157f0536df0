//! Variant Job Definition

use normalization::{StatsPolicy, DEFAULT_EPSILON};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use turbofan_data::{DatasetId, Split};

/// Options applied to every stage of one variant run
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PipelineOptions {
    /// Min-max stabilization epsilon
    pub epsilon: f64,
    /// Which split the normalization statistics come from
    pub policy: StatsPolicy,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            policy: StatsPolicy::default(),
        }
    }
}

/// Everything one variant run needs: the variant, where its raw files live,
/// where its tables go, and the processing options. Jobs are self-contained
/// values; running one touches no shared state.
#[derive(Debug, Clone)]
pub struct VariantJob {
    /// Dataset variant to process
    pub dataset: DatasetId,
    /// Directory holding the raw train/test/RUL files
    pub input_dir: PathBuf,
    /// Directory the labeled CSV tables are written to
    pub output_dir: PathBuf,
    /// Processing options
    pub options: PipelineOptions,
}

impl VariantJob {
    /// Create a job for one variant
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(
        dataset: DatasetId,
        input_dir: P,
        output_dir: Q,
        options: PipelineOptions,
    ) -> Self {
        Self {
            dataset,
            input_dir: input_dir.as_ref().to_path_buf(),
            output_dir: output_dir.as_ref().to_path_buf(),
            options,
        }
    }

    /// Path of a raw split file
    pub fn input_path(&self, split: Split) -> PathBuf {
        self.input_dir.join(self.dataset.split_file(split))
    }

    /// Path of the raw true-RUL reference file
    pub fn rul_path(&self) -> PathBuf {
        self.input_dir.join(self.dataset.rul_file())
    }

    /// Path of the labeled output table for a split
    pub fn output_path(&self, split: Split) -> PathBuf {
        self.output_dir
            .join(format!("{}_{}.csv", split.as_str(), self.dataset.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_paths() {
        let job = VariantJob::new(
            DatasetId::Fd002,
            "/data/raw",
            "/data/out",
            PipelineOptions::default(),
        );
        assert_eq!(
            job.input_path(Split::Train),
            PathBuf::from("/data/raw/train_FD002.txt")
        );
        assert_eq!(job.rul_path(), PathBuf::from("/data/raw/RUL_FD002.txt"));
        assert_eq!(
            job.output_path(Split::Test),
            PathBuf::from("/data/out/test_FD002.csv")
        );
    }
}
