//! Report Writer Port - Exports rendered reports.
//!
//! This port defines the contract for the "Download Full Report" action.
//! Adapters (like LocalReportWriter) provide the implementation.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::foundation::AssessmentId;

use super::ReportFormat;

/// Port for exporting rendered reports.
///
/// # Contract
///
/// Implementations must:
/// - Write atomically (no partial content on failure)
/// - Name exports `assessment_{id}.{ext}`
/// - Overwrite an earlier export of the same assessment and format
#[async_trait]
pub trait ReportWriter: Send + Sync {
    /// Writes `content` and returns where it landed.
    async fn write(
        &self,
        assessment_id: AssessmentId,
        format: ReportFormat,
        content: &str,
    ) -> Result<PathBuf, ExportError>;

    /// Where an export for this assessment and format would be written.
    fn report_path(&self, assessment_id: AssessmentId, format: ReportFormat) -> PathBuf;
}

/// File name used for an exported report.
pub fn report_file_name(assessment_id: AssessmentId, format: ReportFormat) -> String {
    format!("assessment_{}.{}", assessment_id, format.extension())
}

/// Errors that can occur during export.
#[derive(Debug, Clone, Error)]
pub enum ExportError {
    #[error("Output directory unavailable: {path}: {message}")]
    OutputDirectory { path: String, message: String },

    #[error("IO error: {message}")]
    Io { message: String },
}

impl ExportError {
    pub fn output_directory(path: &Path, message: impl Into<String>) -> Self {
        Self::OutputDirectory {
            path: path.display().to_string(),
            message: message.into(),
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }
}
