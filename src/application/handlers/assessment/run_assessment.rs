//! RunAssessmentHandler - Loads an answer sheet, scores it and renders the report.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::domain::assessment::AssessmentEvent;
use crate::domain::foundation::DomainError;
use crate::domain::report::AssessmentReport;
use crate::ports::{
    AnswerSource, AnswerSourceError, ExportError, RenderError, ReportFormat, ReportRenderer,
    ReportWriter,
};

use super::{AssessmentRunner, ReplayError};

/// Command to run one assessment from an answer sheet.
#[derive(Debug, Clone)]
pub struct RunAssessmentCommand {
    pub answers: PathBuf,
    pub format: ReportFormat,
    /// Also write the rendered report through the report writer.
    pub export: bool,
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct RunAssessmentResult {
    pub report: AssessmentReport,
    pub rendered: String,
    pub exported_to: Option<PathBuf>,
    pub events: Vec<AssessmentEvent>,
}

#[derive(Debug, Error)]
pub enum RunAssessmentError {
    #[error(transparent)]
    Source(#[from] AnswerSourceError),

    #[error(transparent)]
    Replay(#[from] ReplayError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Handler for running assessments end to end.
pub struct RunAssessmentHandler {
    answer_source: Arc<dyn AnswerSource>,
    report_writer: Arc<dyn ReportWriter>,
    renderers: Vec<Arc<dyn ReportRenderer>>,
    runner: AssessmentRunner,
}

impl RunAssessmentHandler {
    pub fn new(
        answer_source: Arc<dyn AnswerSource>,
        report_writer: Arc<dyn ReportWriter>,
        renderers: Vec<Arc<dyn ReportRenderer>>,
        runner: AssessmentRunner,
    ) -> Self {
        Self {
            answer_source,
            report_writer,
            renderers,
            runner,
        }
    }

    fn renderer(&self, format: ReportFormat) -> Result<&Arc<dyn ReportRenderer>, RenderError> {
        self.renderers
            .iter()
            .find(|r| r.format() == format)
            .ok_or_else(|| RenderError::UnknownFormat(format.to_string()))
    }

    pub async fn handle(
        &self,
        cmd: RunAssessmentCommand,
    ) -> Result<RunAssessmentResult, RunAssessmentError> {
        // 1. Load the sheet
        let sheet = self.answer_source.load(&cmd.answers).await?;

        // 2. Replay it to the results stage
        let mut assessment = self.runner.run(&sheet)?;
        let events = assessment.take_events();

        // 3. Build and render the report
        let report = AssessmentReport::from_assessment(&assessment, sheet.respondent.clone())?;
        let rendered = self.renderer(cmd.format)?.render(&report)?;

        // 4. Export when asked
        let exported_to = if cmd.export {
            let path = self
                .report_writer
                .write(report.id(), cmd.format, &rendered)
                .await?;
            info!(assessment_id = %report.id(), path = %path.display(), "Report exported");
            Some(path)
        } else {
            None
        };

        Ok(RunAssessmentResult {
            report,
            rendered,
            exported_to,
            events,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::answers::AnswerSheet;
    use crate::domain::foundation::AssessmentId;
    use async_trait::async_trait;
    use std::path::Path;
    use std::sync::Mutex;

    // ───────────────────────────────────────────────────────────────
    // Test doubles
    // ───────────────────────────────────────────────────────────────

    struct StaticAnswerSource {
        sheet: Option<AnswerSheet>,
    }

    #[async_trait]
    impl AnswerSource for StaticAnswerSource {
        async fn load(&self, location: &Path) -> Result<AnswerSheet, AnswerSourceError> {
            self.sheet
                .clone()
                .ok_or_else(|| AnswerSourceError::not_found(location.display().to_string()))
        }
    }

    #[derive(Default)]
    struct RecordingWriter {
        writes: Mutex<Vec<(AssessmentId, ReportFormat, String)>>,
    }

    #[async_trait]
    impl ReportWriter for RecordingWriter {
        async fn write(
            &self,
            assessment_id: AssessmentId,
            format: ReportFormat,
            content: &str,
        ) -> Result<PathBuf, ExportError> {
            self.writes
                .lock()
                .unwrap()
                .push((assessment_id, format, content.to_string()));
            Ok(self.report_path(assessment_id, format))
        }

        fn report_path(&self, assessment_id: AssessmentId, format: ReportFormat) -> PathBuf {
            PathBuf::from(crate::ports::report_file_name(assessment_id, format))
        }
    }

    struct ScoreOnlyRenderer;

    impl ReportRenderer for ScoreOnlyRenderer {
        fn format(&self) -> ReportFormat {
            ReportFormat::Markdown
        }

        fn render(&self, report: &AssessmentReport) -> Result<String, RenderError> {
            Ok(format!("score={}", report.results.alignment_score))
        }
    }

    fn sheet() -> AnswerSheet {
        serde_yaml::from_str(
            r#"
respondent: Robin
values:
  pairedChoice: structure
  independence: 20
  jobPreference: structured
  toggles: [Stability, Security, Service, Collaboration, Balance]
purpose:
  ratings: { creator: 2, builder: 6, healer: 5, seeker: 3, justice: 4 }
  symbol: builder
meaning:
  taskEnergy:
    self-directed: 2
    routine: 5
    team-meetings: 4
    admin: 4
    creative-problem: 2
    following-process: 5
  impactLevel: organization
  idealWorkday: A planned day with clear priorities.
pact:
  purpose: 3
  authenticity: 3
  trajectory: 3
  congruence: 9
  reflection: Looking for a steadier team and clearer scope.
"#,
        )
        .unwrap()
    }

    fn handler(sheet: Option<AnswerSheet>, writer: Arc<RecordingWriter>) -> RunAssessmentHandler {
        RunAssessmentHandler::new(
            Arc::new(StaticAnswerSource { sheet }),
            writer,
            vec![Arc::new(ScoreOnlyRenderer) as Arc<dyn ReportRenderer>],
            AssessmentRunner::default(),
        )
    }

    fn command(export: bool) -> RunAssessmentCommand {
        RunAssessmentCommand {
            answers: PathBuf::from("answers.yaml"),
            format: ReportFormat::Markdown,
            export,
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Handler tests
    // ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn runs_sheet_and_renders_report() {
        let writer = Arc::new(RecordingWriter::default());
        let result = handler(Some(sheet()), writer.clone())
            .handle(command(false))
            .await
            .unwrap();

        // (3 + 3 + 9 + 3) / 4 = 4.5 → 64
        assert_eq!(result.report.results.alignment_score, 64);
        assert_eq!(result.rendered, "score=64");
        assert_eq!(result.report.metadata.respondent.as_deref(), Some("Robin"));
        assert_eq!(result.exported_to, None);
        assert!(writer.writes.lock().unwrap().is_empty());
        assert!(matches!(
            result.events.last(),
            Some(AssessmentEvent::ResultsComputed { .. })
        ));
    }

    #[tokio::test]
    async fn export_goes_through_writer() {
        let writer = Arc::new(RecordingWriter::default());
        let result = handler(Some(sheet()), writer.clone())
            .handle(command(true))
            .await
            .unwrap();

        let writes = writer.writes.lock().unwrap();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].0, result.report.id());
        assert_eq!(writes[0].2, "score=64");
        assert!(result
            .exported_to
            .unwrap()
            .to_string_lossy()
            .ends_with(".md"));
    }

    #[tokio::test]
    async fn missing_renderer_is_an_error() {
        let writer = Arc::new(RecordingWriter::default());
        let mut cmd = command(false);
        cmd.format = ReportFormat::Json;

        let err = handler(Some(sheet()), writer).handle(cmd).await.unwrap_err();
        assert!(matches!(err, RunAssessmentError::Render(RenderError::UnknownFormat(_))));
    }

    #[tokio::test]
    async fn source_errors_propagate() {
        let writer = Arc::new(RecordingWriter::default());
        let err = handler(None, writer).handle(command(false)).await.unwrap_err();
        assert!(matches!(
            err,
            RunAssessmentError::Source(AnswerSourceError::NotFound { .. })
        ));
    }
}
