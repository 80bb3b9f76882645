//! Scoring module - Turns an assessment record into results.
//!
//! Every function here is pure and total: absent stages degrade to defined
//! defaults (score 0, "Balanced Integrator", fallback needs, no breakdown).
//!
//! # Components
//!
//! - `alignment` - PACT alignment score and level bands
//! - `profile` - Indicator tables and ordered classification rules
//! - `needs` - Top motivational needs
//! - `recommendations` - Career recommendation sets
//! - `breakdown` - Per-dimension PACT percentages
//! - `insights` - Attention flag and next-step prompt
//! - `engine` - `ScoringEngine` tying the above together

mod alignment;
mod breakdown;
mod engine;
mod insights;
mod needs;
mod profile;
mod recommendations;

pub use alignment::{
    alignment_score, alignment_score_for, AlignmentLevel, PactAggregation,
    HIGHLY_ALIGNED_THRESHOLD, PARTIALLY_ALIGNED_THRESHOLD,
};
pub use breakdown::{pact_breakdown, PactBreakdownEntry};
pub use engine::{AssessmentResults, ScoringEngine};
pub use insights::{Insights, REFLECTION_PROMPT};
pub use needs::{top_motivational_needs, FALLBACK_NEEDS, TOP_NEEDS_COUNT};
pub use profile::{
    classify, classify_with, matched_indicators, tally, Indicator, IndicatorTally, Orientation,
    PreferenceProfile, ProfileRule, AUTONOMY_INDICATORS, PROFILE_RULES, STRUCTURE_INDICATORS,
};
pub use recommendations::{for_orientation, for_profile, CareerRecommendations};
