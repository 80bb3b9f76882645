//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, stages, errors)
//! - `catalog` - The fixed question sets
//! - `stages` - Input collectors for the four question stages
//! - `assessment` - The wizard aggregate and its record
//! - `scoring` - Pure scoring and classification over a record
//! - `answers` - Answer sheets replayed through the forms
//! - `report` - Exportable summary of a finished assessment

pub mod answers;
pub mod assessment;
pub mod catalog;
pub mod foundation;
pub mod report;
pub mod scoring;
pub mod stages;
