//! Turbofan RUL Preprocessing Pipeline - Main Entry Point

use anyhow::Result;
use clap::{Parser, Subcommand};
use cli::{init_logging, Overrides, Settings};
use pipeline::{run_all, VariantStatus};
use std::path::PathBuf;
use tracing::{error, info};
use turbofan_data::DatasetId;

#[derive(Parser)]
#[command(name = "rul-pipeline")]
#[command(about = "RUL labeling and normalization for the C-MAPSS turbofan dataset", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the preprocessing pipeline over the configured variants
    Run {
        /// Directory with the raw dataset files
        #[arg(short, long)]
        input_dir: Option<String>,

        /// Directory for labeled CSV tables and the run report
        #[arg(short, long)]
        output_dir: Option<String>,

        /// Dataset variants to process (default: all four)
        #[arg(short, long)]
        dataset: Vec<String>,

        /// Min-max stabilization epsilon
        #[arg(long)]
        epsilon: Option<f64>,

        /// Normalization statistics policy: split-local | shared-train
        #[arg(long)]
        policy: Option<String>,

        /// Optional TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// List the dataset variants and their expected raw file names
    Datasets,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            input_dir,
            output_dir,
            dataset,
            epsilon,
            policy,
            config,
        } => {
            let overrides = Overrides {
                input_dir,
                output_dir,
                datasets: if dataset.is_empty() { None } else { Some(dataset) },
                epsilon,
                policy,
            };
            run(config.as_deref(), &overrides).await
        }
        Commands::Datasets => {
            list_datasets();
            Ok(())
        }
    }
}

async fn run(config: Option<&std::path::Path>, overrides: &Overrides) -> Result<()> {
    let settings = Settings::load(config, overrides)?;
    info!(
        input_dir = %settings.input_dir.display(),
        output_dir = %settings.output_dir.display(),
        epsilon = settings.epsilon,
        policy = %settings.policy,
        "=== Turbofan RUL Pipeline v{} ===",
        env!("CARGO_PKG_VERSION")
    );

    let jobs = settings.jobs()?;
    let report = run_all(jobs).await;

    exporter::ensure_dir(&settings.output_dir)?;
    let report_path = settings.output_dir.join("report.json");
    exporter::write_json(&report, &report_path)?;
    info!(path = %report_path.display(), "wrote run report");

    for variant in &report.variants {
        match &variant.status {
            VariantStatus::Succeeded(outcome) => info!(
                dataset = %variant.dataset,
                train_rows = outcome.train_rows,
                test_rows = outcome.test_rows,
                "variant succeeded"
            ),
            VariantStatus::Failed { kind, message } => error!(
                dataset = %variant.dataset,
                kind = %kind,
                "variant failed: {message}"
            ),
        }
    }

    let failed = report.failed_variants();
    if failed.is_empty() {
        Ok(())
    } else {
        let names: Vec<&str> = failed.iter().map(DatasetId::as_str).collect();
        anyhow::bail!(
            "{} of {} variants failed: {}",
            failed.len(),
            report.variants.len(),
            names.join(", ")
        )
    }
}

fn list_datasets() {
    for dataset in DatasetId::ALL {
        println!(
            "{}: {} {} {}",
            dataset,
            dataset.train_file(),
            dataset.test_file(),
            dataset.rul_file()
        );
    }
}
