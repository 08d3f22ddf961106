//! Mapping engine
//!
//! Walks the declarations of a [`MappingConfig`] in order, resolves each one
//! against the input document and assembles the output object.

use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use super::coercion::resolve;
use crate::error::{MappingError, MappingResult};
use crate::models::MappingConfig;

/// Build the output document for `config` from `input`.
///
/// Output properties follow declaration order. A repeated `name` replaces the
/// earlier value and keeps its first position. The first failing declaration
/// aborts the whole build.
pub fn build_output(config: &MappingConfig, input: &Value) -> MappingResult<Map<String, Value>> {
    let properties = config.properties.as_ref().ok_or_else(no_properties)?;

    let mut output = Map::new();
    for property in properties {
        let declaration = property.validate()?;
        debug!(
            "Mapping '{}' <- '{}' as {}",
            declaration.name, declaration.source, declaration.type_name
        );

        let value = resolve(input, &declaration.source, &declaration.type_name)?;
        if output.insert(declaration.name.clone(), value).is_some() {
            warn!(
                "Property '{}' declared more than once, keeping the last value",
                declaration.name
            );
        }
    }

    info!(
        "Mapped {} properties for '{}'",
        output.len(),
        config.name
    );
    Ok(output)
}

/// Parse the input document and build the output in one step.
///
/// A configuration without `properties` is rejected before the input is parsed.
pub fn map_document(config: &MappingConfig, json_content: &str) -> MappingResult<Map<String, Value>> {
    if config.properties.is_none() {
        return Err(no_properties());
    }
    let input: Value = serde_json::from_str(json_content)?;
    build_output(config, &input)
}

fn no_properties() -> MappingError {
    MappingError::Config("no 'properties' in configuration".to_string())
}
