//! JSON Schema node definition and serialization

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Draft identifier written to the root `$schema` keyword
pub const DRAFT_2020_12: &str = "https://json-schema.org/draft/2020-12/schema";

/// Default root `$id`
pub const DEFAULT_ID: &str = "https://example.biz/schema/ytt/data-values.json";

/// A JSON Schema node.
///
/// Empty strings, zero bounds, empty lists and `None` are left out of the
/// serialized form. `type` is always written and `properties` is written
/// whenever it is present, even when empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(rename = "$id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Base type followed by `"null"` for nullable nodes
    #[serde(rename = "type", default)]
    pub schema_type: Vec<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, Schema>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<bool>,

    /// Names of required properties, in visiting order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,

    #[serde(default, skip_serializing_if = "is_zero")]
    pub min_length: u64,

    #[serde(default, skip_serializing_if = "is_zero")]
    pub max_length: u64,

    #[serde(default, skip_serializing_if = "is_zero_signed")]
    pub minimum: i64,

    #[serde(default, skip_serializing_if = "is_zero_signed")]
    pub maximum: i64,

    #[serde(default, skip_serializing_if = "is_zero")]
    pub min_items: u64,

    #[serde(default, skip_serializing_if = "is_zero")]
    pub max_items: u64,

    #[serde(default, skip_serializing_if = "is_zero")]
    pub min_properties: u64,

    #[serde(default, skip_serializing_if = "is_zero")]
    pub max_properties: u64,

    #[serde(rename = "enum", default, skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<Value>,
}

impl Schema {
    /// Create the root wrapper: a closed object with an empty property map
    pub fn root(id: impl Into<String>) -> Self {
        Self {
            schema: Some(DRAFT_2020_12.to_string()),
            id: Some(id.into()),
            schema_type: vec!["object".to_string()],
            additional_properties: Some(false),
            properties: Some(BTreeMap::new()),
            ..Self::default()
        }
    }

    /// Whether any lower bound is positive
    pub fn has_positive_lower_bound(&self) -> bool {
        self.min_items > 0 || self.min_length > 0 || self.minimum > 0 || self.min_properties > 0
    }

    /// Whether the node is enum-constrained without a default among its values
    pub fn has_unsatisfied_enum(&self) -> bool {
        if self.enum_values.is_empty() {
            return false;
        }
        let default = self.default.as_ref().unwrap_or(&Value::Null);
        !self.enum_values.contains(default)
    }

    /// Whether a property with this schema must be listed as required
    pub fn is_required(&self) -> bool {
        self.has_positive_lower_bound() || self.has_unsatisfied_enum()
    }

    /// Serialize to JSON text, indenting by `indent` spaces per level when given
    pub fn to_json(&self, indent: Option<usize>) -> Result<String, serde_json::Error> {
        let Some(width) = indent else {
            return serde_json::to_string(self);
        };

        let indent = " ".repeat(width);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;

        String::from_utf8(buf).map_err(|e| serde::ser::Error::custom(e.to_string()))
    }
}

fn is_zero(value: &u64) -> bool {
    *value == 0
}

fn is_zero_signed(value: &i64) -> bool {
    *value == 0
}
