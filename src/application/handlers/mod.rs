//! Command handlers.

pub mod assessment;

pub use assessment::{
    AssessmentRunner, ReplayError, RunAssessmentCommand, RunAssessmentError,
    RunAssessmentHandler, RunAssessmentResult,
};
