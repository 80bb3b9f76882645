//! Alignment score and level derived from the PACT stage.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::stages::PactRecord;

use super::breakdown::pact_breakdown;

/// Scores at or above this are "Highly Aligned".
pub const HIGHLY_ALIGNED_THRESHOLD: u32 = 80;

/// Scores at or above this (and below the high mark) are "Partially Aligned".
pub const PARTIALLY_ALIGNED_THRESHOLD: u32 = 60;

/// How the four PACT answers are combined into one alignment figure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PactAggregation {
    /// `round(overall_pact_score * 100 / 7)` over the mixed-scale mean.
    ///
    /// Matches the questionnaire's published arithmetic; a high congruence
    /// answer pushes the score well past 100.
    #[default]
    Raw,
    /// Mean of the per-dimension percentages, always within 0-100.
    Normalized,
}

/// Converts an overall PACT score on the 7-point scale to a percentage.
///
/// Not clamped: mixed-scale inputs produce values above 100.
pub fn alignment_score(overall_pact_score: f64) -> u32 {
    // `as` saturates: NaN and negatives become 0.
    (overall_pact_score * 100.0 / 7.0).round() as u32
}

/// Alignment score for an optional PACT record; 0 when the stage is absent.
pub fn alignment_score_for(pact: Option<&PactRecord>, aggregation: PactAggregation) -> u32 {
    let Some(pact) = pact else {
        return 0;
    };
    match aggregation {
        PactAggregation::Raw => alignment_score(pact.overall_pact_score),
        PactAggregation::Normalized => {
            let entries = pact_breakdown(Some(pact));
            if entries.is_empty() {
                return 0;
            }
            let mean = entries.iter().map(|e| e.percent).sum::<f64>() / entries.len() as f64;
            mean.round() as u32
        }
    }
}

/// Banded reading of the alignment score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignmentLevel {
    HighlyAligned,
    PartiallyAligned,
    NeedsAlignment,
}

impl AlignmentLevel {
    pub fn from_score(score: u32) -> Self {
        if score >= HIGHLY_ALIGNED_THRESHOLD {
            AlignmentLevel::HighlyAligned
        } else if score >= PARTIALLY_ALIGNED_THRESHOLD {
            AlignmentLevel::PartiallyAligned
        } else {
            AlignmentLevel::NeedsAlignment
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AlignmentLevel::HighlyAligned => "Highly Aligned",
            AlignmentLevel::PartiallyAligned => "Partially Aligned",
            AlignmentLevel::NeedsAlignment => "Needs Alignment",
        }
    }
}

impl fmt::Display for AlignmentLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
