use serde::Serialize;

use crate::domain::assessment::{Assessment, AssessmentRecord};
use crate::domain::foundation::{AssessmentId, DomainError, ErrorCode, Timestamp};
use crate::domain::scoring::{AssessmentResults, PactAggregation};

/// Who and when, shown in the report header.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub assessment_id: AssessmentId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub respondent: Option<String>,
    pub started_at: Timestamp,
    pub completed_at: Timestamp,
    pub pact_aggregation: PactAggregation,
}

/// Results plus the answers they were derived from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentReport {
    pub metadata: ReportMetadata,
    pub results: AssessmentResults,
    pub answers: AssessmentRecord,
}

impl AssessmentReport {
    /// Builds a report from an assessment that reached its results.
    pub fn from_assessment(
        assessment: &Assessment,
        respondent: Option<String>,
    ) -> Result<Self, DomainError> {
        let (results, completed_at) = match (assessment.results(), assessment.completed_at()) {
            (Some(results), Some(completed_at)) => (results.clone(), completed_at),
            _ => {
                return Err(DomainError::new(
                    ErrorCode::StageIncomplete,
                    format!(
                        "Assessment {} has not reached its results (currently at {})",
                        assessment.id(),
                        assessment.stage().title()
                    ),
                ))
            }
        };

        Ok(Self {
            metadata: ReportMetadata {
                assessment_id: assessment.id(),
                respondent,
                started_at: assessment.started_at(),
                completed_at,
                pact_aggregation: assessment.engine().aggregation(),
            },
            results,
            answers: assessment.record().clone(),
        })
    }

    pub fn id(&self) -> AssessmentId {
        self.metadata.assessment_id
    }
}
