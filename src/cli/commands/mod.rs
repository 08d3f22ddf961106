//! CLI command implementations

pub mod map;
