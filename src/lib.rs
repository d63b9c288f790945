//! OpenAPI to JSON Schema
//!
//! Extracts a named component from an OpenAPI document's `components.schemas`
//! section and converts it into a draft 2020-12 JSON Schema document.

pub mod cli;
pub mod config;
pub mod convert;
pub mod utils;

pub use config::{Config, ConversionConfig, OutputConfig};
pub use convert::{convert_component, convert_property, ConvertOptions, Converter};
pub use jsonschema_model::Schema as JsonSchema;
pub use openapi_model::{LoadError, OpenApi, Schema as OpenApiSchema};

use std::path::{Path, PathBuf};
use tracing::info;

/// Application context tying configuration, loading and conversion together
pub struct SchemaExtractor {
    config: Config,
    converter: Converter,
}

impl SchemaExtractor {
    /// Create a new extractor with the given configuration
    pub fn new(config: Config) -> ConvertResult<Self> {
        config
            .validate()
            .map_err(|e| ConvertError::Config(e.to_string()))?;

        let converter = Converter::new(config.conversion.to_options());
        Ok(Self { config, converter })
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Load a document from a file
    pub fn load_file(&self, path: &Path) -> ConvertResult<OpenApi> {
        info!("Loading OpenAPI document from {}", path.display());
        Ok(openapi_model::load_file(path)?)
    }

    /// Load a document of unknown format from raw bytes
    pub fn load_bytes(&self, content: &[u8]) -> ConvertResult<OpenApi> {
        info!("Loading OpenAPI document from {} bytes of input", content.len());
        Ok(openapi_model::load_auto(content)?)
    }

    /// Convert the configured component
    pub fn convert(&self, document: &OpenApi) -> ConvertResult<JsonSchema> {
        self.converter.convert(document)
    }

    /// Serialize a schema according to the output settings
    pub fn render(&self, schema: &JsonSchema) -> ConvertResult<String> {
        Ok(schema.to_json(self.config.output.indent())?)
    }

    /// Load, convert and render in one go
    pub fn run_file(&self, path: &Path) -> ConvertResult<String> {
        let document = self.load_file(path)?;
        let schema = self.convert(&document)?;
        self.render(&schema)
    }

    /// Write rendered output to the configured file, or stdout when none is set.
    ///
    /// Returns the path written to, if any.
    pub fn emit(&self, rendered: &str) -> ConvertResult<Option<PathBuf>> {
        match &self.config.output.path {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    utils::ensure_directory(parent)?;
                }
                std::fs::write(path, rendered)?;
                info!("Wrote JSON schema to {}", path.display());
                Ok(Some(path.clone()))
            }
            None => {
                println!("{rendered}");
                Ok(None)
            }
        }
    }
}

/// Application error types
#[derive(thiserror::Error, Debug)]
pub enum ConvertError {
    #[error("Failed to load OpenAPI document: {0}")]
    Load(#[from] LoadError),

    #[error("Component not found: {0}")]
    MissingComponent(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("no schema file provided")]
    NoInput,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for the main application
pub type ConvertResult<T> = Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const DOC: &str = r#"
openapi: 3.0.0
components:
  schemas:
    dataValues:
      type: object
      properties:
        name:
          type: string
          minLength: 1
"#;

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = Config::default();
        config.version = "0.1".to_string();

        assert!(matches!(
            SchemaExtractor::new(config),
            Err(ConvertError::Config(_))
        ));
    }

    #[test]
    fn test_run_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("values.yaml");
        std::fs::write(&input, DOC).unwrap();

        let mut config = Config::default();
        config.output.compact = true;
        let extractor = SchemaExtractor::new(config).unwrap();

        let rendered = extractor.run_file(&input).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["properties"]["name"]["title"], "name");
        assert_eq!(value["additionalProperties"], false);
        assert!(!rendered.contains('\n'));
    }

    #[test]
    fn test_emit_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out").join("schema.json");

        let mut config = Config::default();
        config.output.path = Some(output.clone());
        let extractor = SchemaExtractor::new(config).unwrap();

        let written = extractor.emit("{}").unwrap();
        assert_eq!(written, Some(output.clone()));
        assert_eq!(std::fs::read_to_string(output).unwrap(), "{}");
    }

    #[test]
    fn test_load_bytes_unsupported_format() {
        let extractor = SchemaExtractor::new(Config::default()).unwrap();

        assert!(matches!(
            extractor.load_bytes(b"{ not: [valid"),
            Err(ConvertError::Load(LoadError::UnsupportedFormat { .. }))
        ));
    }
}
