//! Per-dimension PACT bar values.

use serde::Serialize;

use crate::domain::catalog::PactDimension;
use crate::domain::stages::PactRecord;

/// One bar of the PACT breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PactBreakdownEntry {
    pub dimension: PactDimension,
    /// Answer as given, on the dimension's own scale.
    pub raw: f64,
    /// `raw * 100 / scale max`; not re-clamped.
    pub percent: f64,
}

impl PactBreakdownEntry {
    /// Percentage rounded for display.
    pub fn rounded_percent(&self) -> i64 {
        self.percent.round() as i64
    }
}

/// Breakdown for every recorded dimension, in acronym order; empty when absent.
pub fn pact_breakdown(pact: Option<&PactRecord>) -> Vec<PactBreakdownEntry> {
    pact.map(|p| {
        p.pact_scores
            .entries()
            .into_iter()
            .map(|(dimension, raw)| PactBreakdownEntry {
                dimension,
                raw,
                percent: raw * 100.0 / dimension.scale().max(),
            })
            .collect()
    })
    .unwrap_or_default()
}
