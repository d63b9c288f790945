//! OpenAPI document model and loading

pub mod parser;
pub mod types;

pub use parser::{load_auto, load_file, load_json, load_yaml, LoadError};
pub use types::{Components, Info, OpenApi, Schema};
