//! Report module - The exportable summary of a finished assessment.

mod assessment_report;

pub use assessment_report::{AssessmentReport, ReportMetadata};
