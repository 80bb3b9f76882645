//! Application layer - Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    AssessmentRunner, ReplayError, RunAssessmentCommand, RunAssessmentError,
    RunAssessmentHandler, RunAssessmentResult,
};
