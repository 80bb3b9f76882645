//! Autonomy Assessment - Career preference questionnaire
//!
//! This crate walks a respondent through a six-stage questionnaire (intro,
//! values, purpose, meaning, PACT, results), then scores the answers into a
//! preference profile, PACT alignment and career recommendations.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
