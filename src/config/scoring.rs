//! Scoring configuration

use serde::Deserialize;

use crate::domain::scoring::{PactAggregation, ScoringEngine};

/// Scoring configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringConfig {
    /// `raw` (default) or `normalized`
    #[serde(default)]
    pub pact_aggregation: PactAggregation,
}

impl ScoringConfig {
    /// Engine configured from these settings
    pub fn engine(&self) -> ScoringEngine {
        ScoringEngine::new(self.pact_aggregation)
    }
}
