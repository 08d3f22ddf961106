//! Mapping configuration model
//!
//! A mapping configuration is an ordered list of property declarations. Each
//! declaration names an output property, the input field it is read from and
//! the scalar type the value is coerced into.

use std::fmt;
use std::str::FromStr;

use crate::error::{MappingError, MappingResult};

/// Output file stem used when the configuration carries no usable name
pub const DEFAULT_CONFIG_NAME: &str = "default";

/// Scalar type a source value is coerced into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetType {
    Integer,
    String,
    DateTime,
    Boolean,
}

impl FromStr for TargetType {
    type Err = MappingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "integer" => Ok(TargetType::Integer),
            "string" => Ok(TargetType::String),
            "datetime" => Ok(TargetType::DateTime),
            "boolean" => Ok(TargetType::Boolean),
            _ => Err(MappingError::Coercion(format!("cannot convert to '{}'", s))),
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetType::Integer => write!(f, "integer"),
            TargetType::String => write!(f, "string"),
            TargetType::DateTime => write!(f, "datetime"),
            TargetType::Boolean => write!(f, "boolean"),
        }
    }
}

/// A `property` element as read from the configuration.
///
/// Attributes stay optional here; [`PropertyElement::validate`] turns the
/// element into a [`MappingDeclaration`] once all three are known to exist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyElement {
    pub name: Option<String>,
    pub source: Option<String>,
    pub type_name: Option<String>,
}

impl PropertyElement {
    pub fn new(name: &str, source: &str, type_name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            source: Some(source.to_string()),
            type_name: Some(type_name.to_string()),
        }
    }

    /// Check that `name`, `source` and `type` are all present
    pub fn validate(&self) -> MappingResult<MappingDeclaration> {
        match (&self.name, &self.source, &self.type_name) {
            (Some(name), Some(source), Some(type_name)) => Ok(MappingDeclaration {
                name: name.clone(),
                source: source.clone(),
                type_name: type_name.clone(),
            }),
            _ => Err(MappingError::Config(
                "missing attributes in 'property' element".to_string(),
            )),
        }
    }
}

/// A validated (name, source, type) triple.
///
/// `type_name` is kept as written; it is matched against [`TargetType`]
/// when the declaration is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingDeclaration {
    pub name: String,
    pub source: String,
    pub type_name: String,
}

/// Parsed mapping configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingConfig {
    /// Document identifier, used as the output file stem
    pub name: String,
    /// `None` when the `properties` container is missing altogether
    pub properties: Option<Vec<PropertyElement>>,
}

impl MappingConfig {
    /// Create a configuration, falling back to [`DEFAULT_CONFIG_NAME`] for an empty name
    pub fn new(name: Option<&str>, properties: Option<Vec<PropertyElement>>) -> Self {
        let name = match name {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => DEFAULT_CONFIG_NAME.to_string(),
        };
        Self { name, properties }
    }

    /// Name of the output file produced for this configuration
    pub fn output_file_name(&self) -> String {
        format!("{}.json", self.name)
    }
}
