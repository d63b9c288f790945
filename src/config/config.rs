//! Main configuration structure and implementation

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{ConversionConfig, OutputConfig};

/// Files looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILES: [&str; 4] = [
    ".openapi-to-json-schema.yaml",
    ".openapi-to-json-schema.yml",
    "openapi-to-json-schema.yaml",
    "openapi-to-json-schema.yml",
];

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// Conversion settings
    pub conversion: ConversionConfig,

    /// Output settings
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read configuration {}: {}", path.display(), e))?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the first default configuration file found in `dir`, or defaults
    pub fn discover(dir: &Path) -> Result<Self> {
        match Self::find_default_file(dir) {
            Some(path) => {
                debug!("Using configuration file {}", path.display());
                Self::from_file(&path)
            }
            None => {
                debug!("No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// First existing default configuration file in `dir`
    pub fn find_default_file(dir: &Path) -> Option<PathBuf> {
        DEFAULT_CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Save configuration to a YAML file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.version != "1.0" {
            return Err(anyhow!(
                "Unsupported configuration version: {}",
                self.version
            ));
        }

        self.conversion.validate()?;
        self.output.validate()?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            conversion: ConversionConfig::default(),
            output: OutputConfig::default(),
        }
    }
}
