//! Conversion settings

use anyhow::{anyhow, Result};
use jsonschema_model::DEFAULT_ID;
use serde::{Deserialize, Serialize};

use crate::convert::{ConvertOptions, DEFAULT_COMPONENT};

/// Which component to convert and how the root is labelled
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Component name under `components.schemas`
    pub component: String,

    /// `$id` of the generated schema
    pub id: String,

    /// Fail when the component does not exist
    pub strict: bool,
}

impl ConversionConfig {
    pub fn validate(&self) -> Result<()> {
        if self.component.trim().is_empty() {
            return Err(anyhow!("Component name cannot be empty"));
        }

        if self.id.trim().is_empty() {
            return Err(anyhow!("Schema id cannot be empty"));
        }

        Ok(())
    }

    /// Options for the converter
    pub fn to_options(&self) -> ConvertOptions {
        ConvertOptions {
            component: self.component.clone(),
            id: self.id.clone(),
            strict: self.strict,
        }
    }
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            component: DEFAULT_COMPONENT.to_string(),
            id: DEFAULT_ID.to_string(),
            strict: false,
        }
    }
}
