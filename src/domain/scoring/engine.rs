use serde::Serialize;
use tracing::debug;

use crate::domain::assessment::AssessmentRecord;
use crate::domain::catalog::CoreValue;

use super::alignment::{alignment_score_for, AlignmentLevel, PactAggregation};
use super::breakdown::{pact_breakdown, PactBreakdownEntry};
use super::insights::Insights;
use super::needs::top_motivational_needs;
use super::profile::{classify, IndicatorTally, PreferenceProfile};
use super::recommendations::{for_profile, CareerRecommendations};

/// Everything the results page shows, derived from one assessment record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResults {
    pub alignment_score: u32,
    pub alignment_level: AlignmentLevel,
    pub profile: PreferenceProfile,
    pub indicators: IndicatorTally,
    pub top_needs: Vec<CoreValue>,
    pub recommendations: &'static CareerRecommendations,
    pub pact_breakdown: Vec<PactBreakdownEntry>,
    pub insights: Insights,
}

/// Scoring and classification over an [`AssessmentRecord`].
///
/// Total over partial records: missing stages fall back to defaults
/// instead of failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoringEngine {
    aggregation: PactAggregation,
}

impl ScoringEngine {
    pub fn new(aggregation: PactAggregation) -> Self {
        Self { aggregation }
    }

    pub fn aggregation(&self) -> PactAggregation {
        self.aggregation
    }

    pub fn evaluate(&self, record: &AssessmentRecord) -> AssessmentResults {
        let values = record.values.as_ref();
        let pact = record.pact.as_ref();

        let alignment_score = alignment_score_for(pact, self.aggregation);
        let profile = classify(values);

        debug!(
            alignment_score,
            profile = profile.label(),
            aggregation = ?self.aggregation,
            "Scored assessment record"
        );

        AssessmentResults {
            alignment_score,
            alignment_level: AlignmentLevel::from_score(alignment_score),
            profile,
            indicators: IndicatorTally::of(values),
            top_needs: top_motivational_needs(values),
            recommendations: for_profile(profile),
            pact_breakdown: pact_breakdown(pact),
            insights: Insights::derive(alignment_score, profile),
        }
    }
}
