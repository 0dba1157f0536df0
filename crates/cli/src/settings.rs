//! Layered Settings

use anyhow::{anyhow, Context};
use config::{Config, Environment, File};
use normalization::{StatsPolicy, DEFAULT_EPSILON};
use pipeline::{PipelineOptions, VariantJob};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use turbofan_data::DatasetId;

/// Resolved pipeline settings.
///
/// Sources are layered: built-in defaults, then an optional TOML file, then
/// `RUL_PIPELINE_*` environment variables, then command-line flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory with the raw dataset files
    pub input_dir: PathBuf,
    /// Directory for labeled tables and the run report
    pub output_dir: PathBuf,
    /// Variant names to process
    pub datasets: Vec<String>,
    /// Min-max stabilization epsilon, applied to every variant
    pub epsilon: f64,
    /// Normalization statistics policy name
    pub policy: String,
}

/// Command-line values overriding file and environment sources
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub input_dir: Option<String>,
    pub output_dir: Option<String>,
    pub datasets: Option<Vec<String>>,
    pub epsilon: Option<f64>,
    pub policy: Option<String>,
}

impl Settings {
    /// Resolve settings from all layered sources
    pub fn load(config_file: Option<&Path>, overrides: &Overrides) -> anyhow::Result<Self> {
        let default_datasets: Vec<String> =
            DatasetId::ALL.iter().map(|d| d.as_str().to_string()).collect();

        let mut builder = Config::builder()
            .set_default("input_dir", "data")?
            .set_default("output_dir", "out")?
            .set_default("datasets", default_datasets)?
            .set_default("epsilon", DEFAULT_EPSILON)?
            .set_default("policy", StatsPolicy::default().as_str())?;

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path));
        }
        builder = builder.add_source(
            Environment::with_prefix("RUL_PIPELINE").try_parsing(true),
        );

        builder = builder
            .set_override_option("input_dir", overrides.input_dir.clone())?
            .set_override_option("output_dir", overrides.output_dir.clone())?
            .set_override_option("datasets", overrides.datasets.clone())?
            .set_override_option("epsilon", overrides.epsilon)?
            .set_override_option("policy", overrides.policy.clone())?;

        let settings = builder
            .build()
            .context("failed to resolve configuration")?
            .try_deserialize()
            .context("invalid configuration")?;
        Ok(settings)
    }

    /// Parsed statistics policy
    pub fn stats_policy(&self) -> anyhow::Result<StatsPolicy> {
        self.policy.parse().map_err(|e: String| anyhow!(e))
    }

    /// Parsed dataset variants, in configured order
    pub fn dataset_ids(&self) -> anyhow::Result<Vec<DatasetId>> {
        self.datasets
            .iter()
            .map(|name| name.parse().map_err(|e: String| anyhow!(e)))
            .collect()
    }

    /// One job per configured variant
    pub fn jobs(&self) -> anyhow::Result<Vec<VariantJob>> {
        let options = PipelineOptions {
            epsilon: self.epsilon,
            policy: self.stats_policy()?,
        };
        Ok(self
            .dataset_ids()?
            .into_iter()
            .map(|dataset| VariantJob::new(dataset, &self.input_dir, &self.output_dir, options))
            .collect())
    }
}
