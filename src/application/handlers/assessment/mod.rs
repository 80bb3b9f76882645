//! Assessment handlers.

mod replay;
mod run_assessment;

pub use replay::{AssessmentRunner, ReplayError};
pub use run_assessment::{
    RunAssessmentCommand, RunAssessmentError, RunAssessmentHandler, RunAssessmentResult,
};
