//! Configuration management for openapi-to-json-schema

pub mod config;
pub mod conversion;
pub mod output;


// Re-export main types for convenience
pub use config::{Config, DEFAULT_CONFIG_FILES};
pub use conversion::ConversionConfig;
pub use output::OutputConfig;
