//! OpenAPI type definitions
//!
//! Only the parts of a document needed to extract component schemas are
//! modelled. Paths, operations, `$ref` and composition keywords are ignored
//! during deserialization.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// OpenAPI document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpenApi {
    /// OpenAPI version string
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub openapi: String,

    /// API information
    #[serde(default, deserialize_with = "null_as_default")]
    pub info: Info,

    /// Reusable components
    #[serde(default, deserialize_with = "null_as_default")]
    pub components: Components,
}

impl OpenApi {
    /// Look up a component schema by name
    pub fn component(&self, name: &str) -> Option<&Schema> {
        self.components.schemas.get(name)
    }

    /// Names of all component schemas, sorted
    pub fn component_names(&self) -> Vec<&str> {
        self.components.schemas.keys().map(String::as_str).collect()
    }
}

/// API information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Info {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(default, deserialize_with = "scalar_as_string")]
    pub version: String,
}

/// Components section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Components {
    /// Named schemas
    #[serde(default, deserialize_with = "null_as_default")]
    pub schemas: BTreeMap<String, Schema>,
}

/// A schema node under `components.schemas`.
///
/// Zero bounds mean "no constraint". An absent `additionalProperties`
/// deserializes to `Some(true)`; an explicit `null` leaves it unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// Base type (`string`, `object`, `array`, ...)
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub schema_type: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(default = "additional_properties_default")]
    pub additional_properties: Option<bool>,

    /// Array item schema
    #[serde(default)]
    pub items: Option<Box<Schema>>,

    /// Default value
    #[serde(default)]
    pub default: Option<Value>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub min_length: u64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub max_length: u64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub minimum: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub maximum: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub min_items: u64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub max_items: u64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub min_properties: u64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub max_properties: u64,

    /// Allowed values
    #[serde(rename = "enum", default, deserialize_with = "null_as_default")]
    pub enum_values: Vec<Value>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub nullable: bool,

    /// Nested properties, present for object-shaped schemas
    #[serde(default)]
    pub properties: Option<BTreeMap<String, Schema>>,
}

impl Default for Schema {
    fn default() -> Self {
        Self {
            schema_type: String::new(),
            title: String::new(),
            description: String::new(),
            additional_properties: additional_properties_default(),
            items: None,
            default: None,
            min_length: 0,
            max_length: 0,
            minimum: 0,
            maximum: 0,
            min_items: 0,
            max_items: 0,
            min_properties: 0,
            max_properties: 0,
            enum_values: Vec::new(),
            nullable: false,
            properties: None,
        }
    }
}

impl Schema {
    /// Create a schema of the given base type
    pub fn of_type(schema_type: impl Into<String>) -> Self {
        Self {
            schema_type: schema_type.into(),
            ..Self::default()
        }
    }

    /// Whether any lower bound is positive
    pub fn has_positive_lower_bound(&self) -> bool {
        self.min_items > 0 || self.min_length > 0 || self.minimum > 0 || self.min_properties > 0
    }

    /// Whether the schema is enum-constrained without a default among its values.
    ///
    /// A missing default compares as `null`.
    pub fn has_unsatisfied_enum(&self) -> bool {
        if self.enum_values.is_empty() {
            return false;
        }
        let default = self.default.as_ref().unwrap_or(&Value::Null);
        !self.enum_values.contains(default)
    }

    /// Whether a property with this schema must be present in its parent
    pub fn is_required(&self) -> bool {
        self.has_positive_lower_bound() || self.has_unsatisfied_enum()
    }
}

fn additional_properties_default() -> Option<bool> {
    Some(true)
}

/// Treat an explicit `null` like an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept any scalar for version-like fields; YAML reads `3.0` as a float.
fn scalar_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a scalar version string, found {other}"
        ))),
    }
}
