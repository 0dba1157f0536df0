//! Pipeline Error Types

use exporter::ExportError;
use normalization::NormalizeError;
use rul_labeling::LabelError;
use thiserror::Error;
use turbofan_data::IngestError;

/// Per-variant pipeline failure, wrapping the stage-specific cause
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Raw file parsing failed
    #[error("ingestion failed: {0}")]
    Ingest(#[from] IngestError),

    /// Channel statistics could not be computed
    #[error("normalization failed: {0}")]
    Normalize(#[from] NormalizeError),

    /// Label computation failed
    #[error("labeling failed: {0}")]
    Label(#[from] LabelError),

    /// Output writing failed
    #[error("export failed: {0}")]
    Export(#[from] ExportError),
}

impl PipelineError {
    /// Stable kind name used in the run report
    pub fn kind(&self) -> &'static str {
        match self {
            PipelineError::Ingest(IngestError::MalformedRecord { .. }) => "malformed-record",
            PipelineError::Ingest(IngestError::Io(_)) => "io",
            PipelineError::Normalize(NormalizeError::EmptyCollection) => "empty-collection",
            PipelineError::Label(LabelError::EmptyCollection) => "empty-collection",
            PipelineError::Label(LabelError::EmptyRun(_)) => "empty-run",
            PipelineError::Label(LabelError::MissingRulReference(_)) => "missing-rul-reference",
            PipelineError::Export(_) => "export",
        }
    }
}
