//! Report export configuration

use serde::Deserialize;
use std::path::PathBuf;

use crate::ports::ReportFormat;

use super::error::ValidationError;

/// Report export configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Directory exported reports are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Format used when the command line does not pick one
    #[serde(default)]
    pub format: ReportFormat,
}

impl ReportConfig {
    /// Validate report configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("report.output_dir"));
        }
        if self.output_dir.is_file() {
            return Err(ValidationError::OutputDirIsFile(
                self.output_dir.display().to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            format: ReportFormat::default(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("reports")
}
