//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Allow `--export` to write report files
    #[serde(default = "default_export_reports")]
    pub export_reports: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            export_reports: default_export_reports(),
        }
    }
}

fn default_export_reports() -> bool {
    true
}
