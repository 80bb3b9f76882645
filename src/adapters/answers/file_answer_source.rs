//! File Answer Source Adapter - Loads answer sheets from YAML or JSON files.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use tracing::debug;

use crate::domain::answers::AnswerSheet;
use crate::ports::{AnswerSource, AnswerSourceError};

/// Sheet encodings recognised by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SheetFormat {
    Yaml,
    Json,
}

impl SheetFormat {
    fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(SheetFormat::Yaml),
            "json" => Some(SheetFormat::Json),
            _ => None,
        }
    }
}

/// Reads answer sheets from the local filesystem.
///
/// The encoding is picked from the extension: `.yaml`/`.yml` or `.json`.
#[derive(Debug, Clone, Default)]
pub struct FileAnswerSource;

impl FileAnswerSource {
    pub fn new() -> Self {
        Self
    }

    fn parse(path: &Path, format: SheetFormat, content: &str) -> Result<AnswerSheet, AnswerSourceError> {
        let display = path.display().to_string();
        match format {
            SheetFormat::Yaml => serde_yaml::from_str(content)
                .map_err(|e| AnswerSourceError::parse(display, e.to_string())),
            SheetFormat::Json => serde_json::from_str(content)
                .map_err(|e| AnswerSourceError::parse(display, e.to_string())),
        }
    }
}

#[async_trait]
impl AnswerSource for FileAnswerSource {
    async fn load(&self, location: &Path) -> Result<AnswerSheet, AnswerSourceError> {
        let format = SheetFormat::from_path(location)
            .ok_or_else(|| AnswerSourceError::unsupported_format(location.display().to_string()))?;

        let content = fs::read_to_string(location).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => AnswerSourceError::not_found(location.display().to_string()),
            _ => AnswerSourceError::io(format!(
                "Failed to read {}: {}",
                location.display(),
                e
            )),
        })?;

        debug!(path = %location.display(), ?format, bytes = content.len(), "Loaded answer sheet");
        Self::parse(location, format, &content)
    }
}
