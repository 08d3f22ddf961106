//! Models for the mapping configuration

pub mod mapping;

pub use mapping::{
    DEFAULT_CONFIG_NAME, MappingConfig, MappingDeclaration, PropertyElement, TargetType,
};
