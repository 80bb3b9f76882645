//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, the stage enum, and error types
//! that form the vocabulary of the assessment domain.

mod errors;
mod ids;
mod likert;
mod percentage;
mod stage;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::AssessmentId;
pub use likert::{FivePointRating, Likert, SevenPointRating};
pub use percentage::Percentage;
pub use stage::Stage;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
