//! Import functionality
//!
//! Provides the parser for the XML mapping configuration.

pub mod xml_config;

pub use xml_config::MappingConfigImporter;
