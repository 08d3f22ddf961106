//! Runtime configuration
//!
//! Settings are resolved from defaults, then environment variables, then
//! explicit overrides (CLI flags).

use std::path::PathBuf;

/// Default input document filename shown in the usage hint
pub const DEFAULT_JSON_FILENAME: &str = "jsonData.json";

/// Default mapping configuration filename shown in the usage hint
pub const DEFAULT_XML_FILENAME: &str = "xmlData.xml";

/// Environment variable for the output directory
pub const ENV_OUTPUT_DIR: &str = "JSON_MAPPER_OUTPUT_DIR";

/// Mapper configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapperConfig {
    /// Directory the output `<name>.json` is written to
    pub output_dir: PathBuf,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

impl MapperConfig {
    /// Defaults with environment overrides applied
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) {
        if let Ok(dir) = std::env::var(ENV_OUTPUT_DIR) {
            if !dir.is_empty() {
                self.output_dir = PathBuf::from(dir);
            }
        }
    }

    /// Apply an explicit output directory, if given
    pub fn with_output_dir(mut self, output_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = output_dir {
            self.output_dir = dir;
        }
        self
    }
}
