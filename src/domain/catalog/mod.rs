//! Catalog module - The fixed question sets of the assessment.
//!
//! Every option a respondent can pick is a closed enum here, so records can
//! only ever reference catalog entries. Ordering of `all()` is the order the
//! questionnaire presents them and is relied on for tie-breaking.

mod archetype;
mod core_value;
mod impact;
mod pact_dimension;
mod reward;
mod task;

pub use archetype::Archetype;
pub use core_value::{CoreValue, TOP_VALUES_LIMIT};
pub use impact::ImpactLevel;
pub use pact_dimension::{PactDimension, PactScale};
pub use reward::{RewardCategory, INITIAL_REWARD_POINTS, REWARD_POINTS_CAP};
pub use task::{MeaningTask, TaskOrientation};
