//! JSON exporter for mapped documents

use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{MappingError, MappingResult};

/// Writes mapped documents as indented UTF-8 JSON
#[derive(Debug, Default)]
pub struct JsonExporter;

impl JsonExporter {
    pub fn new() -> Self {
        Self
    }

    /// Render the document with two-space indentation.
    ///
    /// Non-ASCII characters are written as-is; only the escapes JSON requires
    /// (quotes, backslashes, control characters) are applied.
    pub fn to_pretty_string(&self, document: &Map<String, Value>) -> MappingResult<String> {
        serde_json::to_string_pretty(document)
            .map_err(|e| MappingError::Unexpected(format!("Failed to serialize output: {}", e)))
    }

    /// Path of `file_name` inside `output_dir`
    pub fn output_path(&self, output_dir: &Path, file_name: &str) -> PathBuf {
        output_dir.join(file_name)
    }

    /// Serialize `document` and write it to `path`.
    ///
    /// Serialization completes before the file is touched, so a failure never
    /// leaves a partial file behind. Returns the absolute path written.
    pub fn write(&self, path: &Path, document: &Map<String, Value>) -> MappingResult<PathBuf> {
        let content = self.to_pretty_string(document)?;
        std::fs::write(path, content)?;

        let full_path = std::path::absolute(path)?;
        info!("Wrote {} properties to {}", document.len(), full_path.display());
        Ok(full_path)
    }
}
