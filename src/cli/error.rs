//! CLI-specific error types

use crate::error::MappingError;
use std::path::PathBuf;
use thiserror::Error;

/// CLI-specific error type
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Json file '{}' not found", .0.display())]
    JsonNotFound(PathBuf),

    #[error("Xml file '{}' not found", .0.display())]
    XmlNotFound(PathBuf),

    #[error("{0:#}")]
    IoError(#[from] anyhow::Error),

    #[error("Mapping error: {0}")]
    MappingError(#[from] MappingError),
}

impl CliError {
    /// One-line message shown to the user.
    ///
    /// Configuration problems, input document problems, missing fields and
    /// coercion failures each get their own prefix; anything else is shown
    /// with its kind.
    pub fn diagnostic(&self) -> String {
        match self {
            CliError::MappingError(err) => match err {
                MappingError::Config(msg) => format!("Bad XML configuration: {}", msg),
                MappingError::Document(msg) => format!("Bad JSON file: {}", msg),
                MappingError::FieldNotFound(_) => {
                    format!("JSON file doesn't have 'source' from XML: {}", err)
                }
                MappingError::Coercion(_) | MappingError::TypeMismatch { .. } => {
                    format!("Cannot map field: {}", err)
                }
                MappingError::Io(_) | MappingError::Unexpected(_) => {
                    format!("{}: {}", err.kind(), err)
                }
            },
            other => other.to_string(),
        }
    }
}
