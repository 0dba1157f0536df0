//! Variant Execution

use crate::error::PipelineError;
use crate::job::VariantJob;
use crate::report::{PipelineReport, VariantOutcome, VariantReport, VariantStatus};
use exporter::{ensure_dir, write_labeled_csv};
use normalization::{MinMaxScaler, NormalizeOptions, StatsPolicy};
use rul_labeling::{label_test, label_train};
use tracing::{error, info};
use turbofan_data::{load_records, load_rul_values, RulReference, Split};

/// Run one variant end to end: ingest both splits and the RUL reference,
/// normalize per the configured statistics policy, label, and export.
///
/// Stateless: the result is a pure function of the job's files and options,
/// so rerunning over identical input produces byte-identical tables.
pub fn run_variant(job: &VariantJob) -> Result<VariantOutcome, PipelineError> {
    info!(dataset = %job.dataset, "processing variant");

    let mut train = load_records(job.input_path(Split::Train))?;
    let mut test = load_records(job.input_path(Split::Test))?;
    let reference = RulReference::from_positional(&load_rul_values(job.rul_path())?);

    let options = NormalizeOptions {
        epsilon: job.options.epsilon,
    };
    let train_scaler = MinMaxScaler::fit(&train, options)?;
    let test_scaler = match job.options.policy {
        StatsPolicy::SplitLocal => MinMaxScaler::fit(&test, options)?,
        StatsPolicy::SharedTrainStats => {
            MinMaxScaler::from_stats(train_scaler.stats().clone(), options)
        }
    };

    let degenerate_train_channels = name_strings(train_scaler.stats().degenerate_channel_names());
    let degenerate_test_channels = name_strings(test_scaler.stats().degenerate_channel_names());

    train_scaler.transform(&mut train);
    test_scaler.transform(&mut test);

    let train_labeled = label_train(train)?;
    let test_labeled = label_test(test, &reference)?;

    ensure_dir(&job.output_dir)?;
    let train_table = job.output_path(Split::Train);
    let test_table = job.output_path(Split::Test);
    write_labeled_csv(&train_labeled, &train_table)?;
    write_labeled_csv(&test_labeled, &test_table)?;

    info!(
        dataset = %job.dataset,
        train_rows = train_labeled.len(),
        test_rows = test_labeled.len(),
        "variant complete"
    );

    Ok(VariantOutcome {
        dataset: job.dataset,
        train_rows: train_labeled.len(),
        test_rows: test_labeled.len(),
        degenerate_train_channels,
        degenerate_test_channels,
        train_table: train_table.display().to_string(),
        test_table: test_table.display().to_string(),
    })
}

/// Run all configured variants concurrently on blocking tasks.
///
/// Variants share nothing, so one failing never aborts the others; every
/// job gets an entry in the returned report, in job order.
pub async fn run_all(jobs: Vec<VariantJob>) -> PipelineReport {
    let mut handles = Vec::with_capacity(jobs.len());
    for job in jobs {
        let dataset = job.dataset;
        handles.push((dataset, tokio::task::spawn_blocking(move || run_variant(&job))));
    }

    let mut variants = Vec::with_capacity(handles.len());
    for (dataset, handle) in handles {
        let status = match handle.await {
            Ok(Ok(outcome)) => VariantStatus::Succeeded(outcome),
            Ok(Err(e)) => {
                error!(dataset = %dataset, kind = e.kind(), "variant failed: {e}");
                VariantStatus::Failed {
                    kind: e.kind().to_string(),
                    message: e.to_string(),
                }
            }
            Err(e) => {
                error!(dataset = %dataset, "variant task aborted: {e}");
                VariantStatus::Failed {
                    kind: "task".to_string(),
                    message: e.to_string(),
                }
            }
        };
        variants.push(VariantReport { dataset, status });
    }

    PipelineReport { variants }
}

fn name_strings(names: Vec<&'static str>) -> Vec<String> {
    names.into_iter().map(str::to_string).collect()
}
