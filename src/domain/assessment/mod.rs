//! Assessment module - Orchestrates the wizard across its six stages.
//!
//! # Components
//!
//! - `aggregate` - The `Assessment` aggregate root
//! - `record` - `AssessmentRecord` and the `StagePayload` handed in per stage
//! - `progress` - Progress header snapshot
//! - `events` - Domain events drained via `take_events()`

mod aggregate;
mod events;
mod progress;
mod record;

pub use aggregate::Assessment;
pub use events::AssessmentEvent;
pub use progress::AssessmentProgress;
pub use record::{AssessmentRecord, StagePayload};
