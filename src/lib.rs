//! JSON Mapper - reshape JSON documents through an XML mapping configuration
//!
//! Provides:
//! - Mapping configuration import (XML)
//! - Type coercion of source fields (integer, string, datetime, boolean)
//! - Output document assembly in declaration order
//! - Indented JSON export

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod export;
pub mod import;
pub mod models;

// Re-export commonly used types
pub use config::MapperConfig;
pub use convert::{build_output, map_document, resolve};
pub use error::{MappingError, MappingResult};
pub use export::JsonExporter;
pub use import::MappingConfigImporter;
pub use models::{MappingConfig, MappingDeclaration, PropertyElement, TargetType};
