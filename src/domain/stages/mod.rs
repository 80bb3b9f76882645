//! Stages module - Input collectors for the four questionnaire sections.
//!
//! Each form owns its interaction state, re-checks its completeness predicate
//! on every call and hands out a stage record exactly once per activation.
//! Records carry their own `validate()` so the orchestrator can re-check
//! payloads that did not come from a form.

mod collector;
mod meaning;
mod pact;
mod purpose;
mod values;

pub use collector::StageCollector;
pub use meaning::{
    AllocationEdit, MeaningForm, MeaningRecord, RewardAllocation, IDEAL_WORKDAY_MIN_CHARS,
};
pub use pact::{PactForm, PactRecord, PactScores, REFLECTION_MIN_CHARS};
pub use purpose::{primary_archetype, PurposeForm, PurposeRecord};
pub use values::{JobPreference, PairedChoice, ValueToggle, ValuesForm, ValuesRecord};
