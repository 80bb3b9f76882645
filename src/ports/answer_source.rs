//! Answer Source Port - Where answer sheets come from.
//!
//! The application depends on this trait, while adapters (like
//! FileAnswerSource) provide the implementation.

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

use crate::domain::answers::AnswerSheet;

/// Port for loading answer sheets.
///
/// # Contract
///
/// Implementations must:
/// - Return `NotFound` when nothing exists at the location
/// - Return `Parse` when the content is not a valid sheet
/// - Not validate answers; replay through the forms does that
#[async_trait]
pub trait AnswerSource: Send + Sync {
    /// Loads the answer sheet stored at `location`.
    async fn load(&self, location: &Path) -> Result<AnswerSheet, AnswerSourceError>;
}

/// Errors that can occur while loading answer sheets.
#[derive(Debug, Clone, Error)]
pub enum AnswerSourceError {
    #[error("Answer sheet not found: {path}")]
    NotFound { path: String },

    #[error("Unsupported answer sheet format: {path} (expected .yaml, .yml or .json)")]
    UnsupportedFormat { path: String },

    #[error("Failed to parse answer sheet {path}: {message}")]
    Parse { path: String, message: String },

    #[error("IO error: {message}")]
    Io { message: String },
}

impl AnswerSourceError {
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub fn unsupported_format(path: impl Into<String>) -> Self {
        Self::UnsupportedFormat { path: path.into() }
    }

    pub fn parse(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }
}
