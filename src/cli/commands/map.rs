//! Map command implementation

use crate::cli::error::CliError;
use crate::config::{DEFAULT_JSON_FILENAME, DEFAULT_XML_FILENAME, MapperConfig};
use crate::convert::map_document;
use crate::export::JsonExporter;
use crate::import::MappingConfigImporter;
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Arguments for the map command
#[derive(Debug, Clone)]
pub struct MapArgs {
    pub input: PathBuf,
    pub mapping: PathBuf,
    pub config: MapperConfig,
}

/// Usage hint printed when the positional arguments are wrong
pub fn usage_hint() -> String {
    format!(
        "Wrong number of arguments\nExample of usage: json-mapper {} {}",
        DEFAULT_JSON_FILENAME, DEFAULT_XML_FILENAME
    )
}

fn read_file(path: &Path) -> Result<String, CliError> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file {}", path.display()))?;
    Ok(content)
}

/// Handle the map command.
///
/// Returns the absolute path of the written file. Nothing is written unless
/// every declaration maps successfully.
pub fn handle_map(args: &MapArgs) -> Result<PathBuf, CliError> {
    if !args.input.is_file() {
        return Err(CliError::JsonNotFound(args.input.clone()));
    }
    if !args.mapping.is_file() {
        return Err(CliError::XmlNotFound(args.mapping.clone()));
    }

    let xml_content = read_file(&args.mapping)?;
    let config = MappingConfigImporter::new().import(&xml_content)?;
    debug!(
        "Loaded mapping '{}' from {}",
        config.name,
        args.mapping.display()
    );

    let json_content = read_file(&args.input)?;
    let output = map_document(&config, &json_content)?;

    let exporter = JsonExporter::new();
    let output_path = exporter.output_path(&args.config.output_dir, &config.output_file_name());
    let full_path = exporter.write(&output_path, &output)?;

    println!("Completed. Data saved to {}", full_path.display());
    Ok(full_path)
}
