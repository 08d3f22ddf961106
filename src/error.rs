//! Error types shared by the importer, the mapping engine and the exporter

use thiserror::Error;

/// Error raised while mapping a JSON document through a mapping configuration.
///
/// Every variant aborts the run: the engine never returns a partially
/// assembled document and the exporter never writes one.
#[derive(Debug, Error)]
pub enum MappingError {
    /// Malformed or incomplete mapping configuration
    #[error("{0}")]
    Config(String),

    /// Value present but not coercible to the declared type,
    /// or the declared type itself is unknown
    #[error("{0}")]
    Coercion(String),

    /// Declared `source` is not a property of the input document
    #[error("the given key '{0}' was not present in the document")]
    FieldNotFound(String),

    /// Field present but holding the wrong kind of JSON value
    #[error("field '{field}' holds {found}, expected {expected}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    /// Input JSON could not be parsed or is not an object
    #[error("{0}")]
    Document(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Unexpected(String),
}

impl MappingError {
    /// Short name of the error kind, used when no dedicated diagnostic applies
    pub fn kind(&self) -> &'static str {
        match self {
            MappingError::Config(_) => "ConfigError",
            MappingError::Coercion(_) => "CoercionError",
            MappingError::FieldNotFound(_) => "FieldNotFound",
            MappingError::TypeMismatch { .. } => "TypeMismatchError",
            MappingError::Document(_) => "DocumentError",
            MappingError::Io(_) => "IoError",
            MappingError::Unexpected(_) => "UnexpectedError",
        }
    }
}

impl From<serde_json::Error> for MappingError {
    fn from(err: serde_json::Error) -> Self {
        MappingError::Document(err.to_string())
    }
}

impl From<quick_xml::Error> for MappingError {
    fn from(err: quick_xml::Error) -> Self {
        MappingError::Config(err.to_string())
    }
}

/// Result alias for mapping operations
pub type MappingResult<T> = Result<T, MappingError>;

/// Name of the JSON kind of `value`, for diagnostics
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
