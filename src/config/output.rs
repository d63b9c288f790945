//! Output settings

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where and how the generated schema is written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output file; stdout when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Write the document on a single line
    pub compact: bool,

    /// Spaces per indentation level
    pub indent: usize,
}

impl OutputConfig {
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.path {
            if path.to_string_lossy().is_empty() {
                return Err(anyhow!("Output path cannot be empty"));
            }
        }
        Ok(())
    }

    /// Indentation to serialize with, `None` for compact output
    pub fn indent(&self) -> Option<usize> {
        if self.compact {
            None
        } else {
            Some(self.indent)
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: None,
            compact: false,
            indent: 1,
        }
    }
}
