//! Export functionality
//!
//! Serializes mapped documents to disk.

pub mod json;

pub use json::JsonExporter;
