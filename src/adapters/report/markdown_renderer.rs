//! Markdown report renderer.
//!
//! Lays the report out the way the results page reads: score, profile,
//! needs, PACT bars, recommendations, then the reflection prompts.

use crate::domain::catalog::PactScale;
use crate::domain::report::AssessmentReport;
use crate::domain::scoring::{AssessmentResults, PactBreakdownEntry};
use crate::ports::{RenderError, ReportFormat, ReportRenderer};

const TITLE: &str = "Autonomy vs Structure Assessment";

/// Markdown implementation of [`ReportRenderer`].
#[derive(Debug, Clone, Default)]
pub struct MarkdownReportRenderer;

impl MarkdownReportRenderer {
    pub fn new() -> Self {
        Self
    }

    fn header(&self, report: &AssessmentReport) -> String {
        let meta = &report.metadata;
        let mut section = format!("# {} Report\n\n", TITLE);
        if let Some(respondent) = &meta.respondent {
            section.push_str(&format!("**Respondent:** {}\n", respondent));
        }
        section.push_str(&format!("**Assessment:** `{}`\n", meta.assessment_id));
        section.push_str(&format!("**Started:** {}\n", meta.started_at.to_rfc3339()));
        section.push_str(&format!("**Completed:** {}\n\n", meta.completed_at.to_rfc3339()));
        section
    }

    fn alignment(&self, results: &AssessmentResults) -> String {
        format!(
            "## Overall Alignment\n\n**{}%** ({})\n\n",
            results.alignment_score, results.alignment_level
        )
    }

    fn profile(&self, results: &AssessmentResults) -> String {
        let mut section = String::from("## Your Preference Profile\n\n");
        section.push_str(&format!("**{}**\n\n", results.profile));
        section.push_str(&format!("{}\n\n", results.insights.profile_description));
        section.push_str(&format!(
            "Autonomy indicators: {} / Structure indicators: {}\n\n",
            results.indicators.autonomy, results.indicators.structure
        ));
        section
    }

    fn needs(&self, results: &AssessmentResults) -> String {
        let mut section = String::from("## Top Motivational Needs\n\n");
        for (i, need) in results.top_needs.iter().enumerate() {
            section.push_str(&format!("{}. {}\n", i + 1, need));
        }
        section.push('\n');
        section
    }

    fn breakdown(&self, results: &AssessmentResults) -> String {
        let mut section = String::from("## PACT Framework Breakdown\n\n");
        if results.pact_breakdown.is_empty() {
            section.push_str("*No PACT answers recorded*\n\n");
            return section;
        }
        section.push_str("| Dimension | Answer | Percent |\n");
        section.push_str("|-----------|--------|---------|\n");
        for entry in &results.pact_breakdown {
            section.push_str(&format!(
                "| {} | {} | {}% |\n",
                entry.dimension,
                answer_text(entry),
                entry.rounded_percent()
            ));
        }
        section.push('\n');
        section
    }

    fn recommendations(&self, results: &AssessmentResults) -> String {
        let recs = results.recommendations;
        let mut section = String::from("## Career Recommendations\n\n");
        for (heading, items) in [
            ("Recommended Environments", recs.environments),
            ("Suitable Roles", recs.roles),
            ("Cultures", recs.cultures),
        ] {
            section.push_str(&format!("### {}\n", heading));
            for item in items {
                section.push_str(&format!("- {}\n", item));
            }
            section.push('\n');
        }
        section
    }

    fn next_steps(&self, results: &AssessmentResults) -> String {
        let insights = &results.insights;
        let mut section = String::new();
        if let Some(attention) = &insights.attention {
            section.push_str("## Areas for Attention\n\n");
            section.push_str(&format!("{}\n\n", attention));
        }
        section.push_str("## Your Next Step\n\n");
        section.push_str(&format!("> {}\n\n", insights.next_step));
        section.push_str(&format!("{}\n", insights.reflection_prompt));
        section
    }
}

fn answer_text(entry: &PactBreakdownEntry) -> String {
    match entry.dimension.scale() {
        PactScale::SevenPoint => format!("{:.0}/7", entry.raw),
        PactScale::Percent => format!("{:.0}/100", entry.raw),
    }
}

impl ReportRenderer for MarkdownReportRenderer {
    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }

    fn render(&self, report: &AssessmentReport) -> Result<String, RenderError> {
        let results = &report.results;
        let mut doc = self.header(report);
        doc.push_str(&self.alignment(results));
        doc.push_str(&self.profile(results));
        doc.push_str(&self.needs(results));
        doc.push_str(&self.breakdown(results));
        doc.push_str(&self.recommendations(results));
        doc.push_str(&self.next_steps(results));
        Ok(doc)
    }
}
