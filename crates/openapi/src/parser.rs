//! OpenAPI document loading

use crate::types::OpenApi;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Errors raised while loading a document
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("schema file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("unsupported file extension: {0}")]
    UnsupportedExtension(String),

    #[error("couldn't parse input as yaml or json (yaml: {yaml}; json: {json})")]
    UnsupportedFormat { yaml: String, json: String },

    #[error("invalid YAML document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse a YAML document
pub fn load_yaml(content: &[u8]) -> Result<OpenApi, LoadError> {
    Ok(serde_yaml::from_slice(content)?)
}

/// Parse a JSON document
pub fn load_json(content: &[u8]) -> Result<OpenApi, LoadError> {
    Ok(serde_json::from_slice(content)?)
}

/// Parse a document of unknown format, trying YAML before JSON
pub fn load_auto(content: &[u8]) -> Result<OpenApi, LoadError> {
    let yaml_error = match serde_yaml::from_slice::<OpenApi>(content) {
        Ok(doc) => {
            debug!("Parsed input as YAML");
            return Ok(doc);
        }
        Err(e) => e,
    };

    match serde_json::from_slice::<OpenApi>(content) {
        Ok(doc) => {
            debug!("Parsed input as JSON");
            Ok(doc)
        }
        Err(json_error) => Err(LoadError::UnsupportedFormat {
            yaml: yaml_error.to_string(),
            json: json_error.to_string(),
        }),
    }
}

/// Load a document from disk, choosing the format from the file extension
pub fn load_file(path: &Path) -> Result<OpenApi, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();

    match extension {
        "yaml" | "yml" => {
            debug!("Loading YAML document from {}", path.display());
            load_yaml(&std::fs::read(path)?)
        }
        "json" => {
            debug!("Loading JSON document from {}", path.display());
            load_json(&std::fs::read(path)?)
        }
        other => Err(LoadError::UnsupportedExtension(other.to_string())),
    }
}
