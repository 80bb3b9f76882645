//! Local Report Writer Adapter - Implementation of ReportWriter.
//!
//! Exports rendered reports into a single output directory using atomic writes.

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::domain::foundation::AssessmentId;
use crate::ports::{report_file_name, ExportError, ReportFormat, ReportWriter};

/// Writes reports under `{output_dir}/assessment_{id}.{ext}`.
///
/// # Atomic Writes
///
/// 1. Write content to `assessment_{id}.{ext}.tmp`
/// 2. Sync to disk
/// 3. Rename over the final name
#[derive(Debug, Clone)]
pub struct LocalReportWriter {
    output_dir: PathBuf,
}

impl LocalReportWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &std::path::Path {
        &self.output_dir
    }

    fn temp_path(&self, assessment_id: AssessmentId, format: ReportFormat) -> PathBuf {
        self.output_dir
            .join(format!("{}.tmp", report_file_name(assessment_id, format)))
    }

    async fn ensure_output_dir(&self) -> Result<(), ExportError> {
        fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| ExportError::output_directory(&self.output_dir, e.to_string()))
    }
}

#[async_trait]
impl ReportWriter for LocalReportWriter {
    async fn write(
        &self,
        assessment_id: AssessmentId,
        format: ReportFormat,
        content: &str,
    ) -> Result<PathBuf, ExportError> {
        self.ensure_output_dir().await?;

        let temp_path = self.temp_path(assessment_id, format);
        let final_path = self.report_path(assessment_id, format);

        // Write to temp file
        let mut file = fs::File::create(&temp_path).await.map_err(|e| {
            ExportError::io(format!(
                "Failed to create temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        file.write_all(content.as_bytes()).await.map_err(|e| {
            ExportError::io(format!(
                "Failed to write to temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        // Sync to disk
        file.sync_all().await.map_err(|e| {
            ExportError::io(format!(
                "Failed to sync temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        // Atomic rename
        fs::rename(&temp_path, &final_path).await.map_err(|e| {
            ExportError::io(format!(
                "Failed to rename {} to {}: {}",
                temp_path.display(),
                final_path.display(),
                e
            ))
        })?;

        debug!(path = %final_path.display(), bytes = content.len(), "Report written");
        Ok(final_path)
    }

    fn report_path(&self, assessment_id: AssessmentId, format: ReportFormat) -> PathBuf {
        self.output_dir.join(report_file_name(assessment_id, format))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_writer() -> (LocalReportWriter, TempDir) {
        let temp = TempDir::new().unwrap();
        let writer = LocalReportWriter::new(temp.path().join("reports"));
        (writer, temp)
    }

    #[tokio::test]
    async fn write_creates_output_dir_and_file() {
        let (writer, _temp) = create_writer();
        let id = AssessmentId::new();

        let path = writer
            .write(id, ReportFormat::Markdown, "# Report\n")
            .await
            .unwrap();

        assert!(writer.output_dir().is_dir());
        assert_eq!(path, writer.report_path(id, ReportFormat::Markdown));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# Report\n");
    }

    #[tokio::test]
    async fn write_leaves_no_temp_file() {
        let (writer, _temp) = create_writer();
        let id = AssessmentId::new();
        writer.write(id, ReportFormat::Json, "{}").await.unwrap();

        assert!(!writer.temp_path(id, ReportFormat::Json).exists());
        let names: Vec<String> = std::fs::read_dir(writer.output_dir())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec![format!("assessment_{}.json", id)]);
    }

    #[tokio::test]
    async fn write_overwrites_existing() {
        let (writer, _temp) = create_writer();
        let id = AssessmentId::new();
        writer.write(id, ReportFormat::Markdown, "first").await.unwrap();
        let path = writer.write(id, ReportFormat::Markdown, "second").await.unwrap();

        assert_eq!(std::fs::read_to_string(path).unwrap(), "second");
    }

    #[tokio::test]
    async fn formats_get_separate_files() {
        let (writer, _temp) = create_writer();
        let id = AssessmentId::new();
        let md = writer.write(id, ReportFormat::Markdown, "md").await.unwrap();
        let json = writer.write(id, ReportFormat::Json, "json").await.unwrap();
        assert_ne!(md, json);
        assert!(md.exists() && json.exists());
    }

    #[tokio::test]
    async fn unusable_output_dir_is_reported() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("not-a-dir");
        std::fs::write(&blocker, "file").unwrap();

        let writer = LocalReportWriter::new(blocker.join("reports"));
        let err = writer
            .write(AssessmentId::new(), ReportFormat::Markdown, "x")
            .await
            .unwrap_err();
        assert!(matches!(err, ExportError::OutputDirectory { .. }));
    }
}
