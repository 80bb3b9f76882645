//! JSON report renderer.

use crate::domain::report::AssessmentReport;
use crate::ports::{RenderError, ReportFormat, ReportRenderer};

/// Pretty-printed JSON implementation of [`ReportRenderer`].
#[derive(Debug, Clone, Default)]
pub struct JsonReportRenderer;

impl JsonReportRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl ReportRenderer for JsonReportRenderer {
    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }

    fn render(&self, report: &AssessmentReport) -> Result<String, RenderError> {
        serde_json::to_string_pretty(report).map_err(|e| RenderError::Serialization(e.to_string()))
    }
}
