//! OpenAPI component to JSON Schema conversion
//!
//! The input tree is walked once and an isomorphic output tree is built.
//! Required-ness is not read from the input; a property is required when it
//! carries a positive lower bound or an enum that does not admit its default.

use jsonschema_model::{Schema as JsonSchema, DEFAULT_ID};
use openapi_model::{OpenApi, Schema as OpenApiSchema};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

use crate::{ConvertError, ConvertResult};

/// Default component name
pub const DEFAULT_COMPONENT: &str = "dataValues";

/// Convert one named component into a root JSON Schema.
///
/// A missing component yields a root with an empty property map.
pub fn convert_component(document: &OpenApi, component: &str) -> JsonSchema {
    let mut root = JsonSchema::root(DEFAULT_ID);

    let Some(source) = document.component(component) else {
        warn!("Component '{}' not found, emitting an empty schema", component);
        return root;
    };

    debug!("Converting component '{}'", component);

    let mut properties = BTreeMap::new();
    if let Some(source_properties) = &source.properties {
        for (name, property) in source_properties {
            properties.insert(name.clone(), convert_property(property).with_default_title(name));
        }
    }
    root.properties = Some(properties);

    root
}

/// Convert a single schema node and everything below it
pub fn convert_property(source: &OpenApiSchema) -> JsonSchema {
    let mut schema_type = vec![source.schema_type.clone()];
    if source.nullable {
        schema_type.push("null".to_string());
    }

    let mut property = JsonSchema {
        schema_type,
        title: source.title.clone(),
        description: source.description.clone(),
        default: source.default.clone(),
        additional_properties: source.additional_properties,
        min_length: source.min_length,
        max_length: source.max_length,
        minimum: source.minimum,
        maximum: source.maximum,
        min_items: source.min_items,
        max_items: source.max_items,
        min_properties: source.min_properties,
        max_properties: source.max_properties,
        ..JsonSchema::default()
    };

    if !source.enum_values.is_empty() {
        property.enum_values = source.enum_values.clone();
    }

    if let Some(items) = &source.items {
        property.items = Some(Box::new(convert_property(items)));
    }

    if let Some(source_properties) = &source.properties {
        let mut properties = BTreeMap::new();
        for (name, child) in source_properties {
            let converted = convert_property(child).with_default_title(name);
            let required = child.is_required() || converted.is_required();
            debug!("Property '{}' required: {}", name, required);

            properties.insert(name.clone(), converted);
            if required {
                property.required.push(name.clone());
            }
        }
        property.properties = Some(properties);
    }

    property
}

trait DefaultTitle {
    fn with_default_title(self, key: &str) -> Self;
}

impl DefaultTitle for JsonSchema {
    fn with_default_title(mut self, key: &str) -> Self {
        if self.title.is_empty() {
            self.title = key.to_string();
        }
        self
    }
}

/// Options for a conversion run
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Component to extract
    pub component: String,

    /// `$id` written to the root
    pub id: String,

    /// Fail instead of emitting an empty schema when the component is missing
    pub strict: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            component: DEFAULT_COMPONENT.to_string(),
            id: DEFAULT_ID.to_string(),
            strict: false,
        }
    }
}

/// Converter bound to a set of options
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert the configured component of `document`
    pub fn convert(&self, document: &OpenApi) -> ConvertResult<JsonSchema> {
        let component = &self.options.component;

        if self.options.strict && document.component(component).is_none() {
            return Err(ConvertError::MissingComponent(component.clone()));
        }

        let mut schema = convert_component(document, component);
        schema.id = Some(self.options.id.clone());

        info!(
            "Converted component '{}' with {} properties",
            component,
            schema.properties.as_ref().map_or(0, BTreeMap::len)
        );

        Ok(schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonschema_model::DRAFT_2020_12;
    use serde_json::json;

    fn document(yaml: &str) -> OpenApi {
        openapi_model::load_yaml(yaml.as_bytes()).unwrap()
    }

    fn schema(yaml: &str) -> OpenApiSchema {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_root_wrapper() {
        let doc = document(
            r#"
components:
  schemas:
    dataValues:
      type: object
      additionalProperties: true
      minProperties: 3
      properties:
        name:
          type: string
"#,
        );

        let root = convert_component(&doc, "dataValues");

        assert_eq!(root.schema.as_deref(), Some(DRAFT_2020_12));
        assert_eq!(root.id.as_deref(), Some(DEFAULT_ID));
        assert_eq!(root.schema_type, vec!["object"]);
        assert_eq!(root.additional_properties, Some(false));
        assert!(root.required.is_empty());
        assert_eq!(root.min_properties, 0);
        assert_eq!(root.title, "");
        assert_eq!(root.properties.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn test_root_properties_are_not_required() {
        let doc = document(
            r#"
components:
  schemas:
    dataValues:
      properties:
        name:
          type: string
          minLength: 1
"#,
        );

        let root = convert_component(&doc, "dataValues");
        assert!(root.required.is_empty());
        assert_eq!(root.properties.unwrap()["name"].title, "name");
    }

    #[test]
    fn test_missing_component_is_empty() {
        let doc = document("components:\n  schemas: {}\n");

        let root = convert_component(&doc, "dataValues");

        assert_eq!(
            serde_json::to_value(&root).unwrap(),
            json!({
                "$schema": DRAFT_2020_12,
                "$id": DEFAULT_ID,
                "type": ["object"],
                "additionalProperties": false,
                "properties": {},
            })
        );
    }

    #[test]
    fn test_nullable_appends_null() {
        let converted = convert_property(&schema("type: integer\nnullable: true"));
        assert_eq!(converted.schema_type, vec!["integer", "null"]);

        let converted = convert_property(&schema("type: integer"));
        assert_eq!(converted.schema_type, vec!["integer"]);
    }

    #[test]
    fn test_missing_type_passes_through() {
        let converted = convert_property(&schema("nullable: true"));
        assert_eq!(converted.schema_type, vec!["", "null"]);
    }

    #[test]
    fn test_fields_are_copied_verbatim() {
        let source = schema(
            r#"
type: string
title: Name
description: The name
default: bob
additionalProperties: false
minLength: 10
maxLength: 2
minimum: 4
maximum: 5
minItems: 6
maxItems: 7
minProperties: 8
maxProperties: 9
"#,
        );

        let converted = convert_property(&source);

        assert_eq!(converted.title, "Name");
        assert_eq!(converted.description, "The name");
        assert_eq!(converted.default, Some(json!("bob")));
        assert_eq!(converted.additional_properties, Some(false));
        assert_eq!(converted.min_length, 10);
        assert_eq!(converted.max_length, 2);
        assert_eq!(converted.minimum, 4);
        assert_eq!(converted.maximum, 5);
        assert_eq!(converted.min_items, 6);
        assert_eq!(converted.max_items, 7);
        assert_eq!(converted.min_properties, 8);
        assert_eq!(converted.max_properties, 9);
        assert!(converted.schema.is_none());
        assert!(converted.id.is_none());
    }

    #[test]
    fn test_additional_properties_defaults_to_true() {
        let converted = convert_property(&schema("type: object"));
        assert_eq!(converted.additional_properties, Some(true));
    }

    #[test]
    fn test_enum_passthrough() {
        let converted = convert_property(&schema("type: string\nenum: [a, b]"));
        assert_eq!(converted.enum_values, vec![json!("a"), json!("b")]);

        let converted = convert_property(&schema("type: string\nenum: []"));
        assert!(converted.enum_values.is_empty());
    }

    #[test]
    fn test_items_get_no_default_title() {
        let doc = document(
            r#"
components:
  schemas:
    dataValues:
      properties:
        tags:
          type: array
          items:
            type: string
"#,
        );

        let root = convert_component(&doc, "dataValues");
        let tags = &root.properties.as_ref().unwrap()["tags"];

        assert_eq!(tags.schema_type, vec!["array"]);
        assert_eq!(tags.title, "tags");
        let items = tags.items.as_ref().unwrap();
        assert_eq!(items.schema_type, vec!["string"]);
        assert_eq!(items.title, "");
    }

    #[test]
    fn test_nested_titles_and_required() {
        let source = schema(
            r#"
type: object
properties:
  name:
    type: string
    minLength: 1
  nickname:
    type: string
    title: Alias
  status:
    type: string
    enum: [a, b]
    default: a
  status2:
    type: string
    enum: [a, b]
    default: z
  replicas:
    type: integer
    minimum: 1
  labels:
    type: object
    minProperties: 1
  ports:
    type: array
    minItems: 1
    items:
      type: integer
"#,
        );

        let converted = convert_property(&source);
        let properties = converted.properties.as_ref().unwrap();

        assert_eq!(properties["name"].title, "name");
        assert_eq!(properties["nickname"].title, "Alias");
        assert_eq!(
            converted.required,
            vec!["labels", "name", "ports", "replicas", "status2"]
        );
    }

    #[test]
    fn test_empty_properties_map_is_kept() {
        let converted = convert_property(&schema("type: object\nproperties: {}"));

        assert_eq!(converted.properties, Some(BTreeMap::new()));
        assert!(converted.required.is_empty());
    }

    #[test]
    fn test_required_is_computed_per_level() {
        let source = schema(
            r#"
type: object
properties:
  spec:
    type: object
    properties:
      image:
        type: string
        minLength: 1
      tag:
        type: string
"#,
        );

        let converted = convert_property(&source);
        let spec = &converted.properties.as_ref().unwrap()["spec"];

        assert!(converted.required.is_empty());
        assert_eq!(spec.required, vec!["image"]);
        assert_eq!(spec.properties.as_ref().unwrap()["tag"].title, "tag");
    }

    #[test]
    fn test_scenario_name_property() {
        let doc = document(
            r#"
components:
  schemas:
    dataValues:
      type: object
      properties:
        config:
          type: object
          properties:
            name:
              type: string
              minLength: 1
"#,
        );

        let root = convert_component(&doc, "dataValues");
        let config = &root.properties.as_ref().unwrap()["config"];

        assert_eq!(config.required, vec!["name"]);
        assert_eq!(
            serde_json::to_value(&config.properties.as_ref().unwrap()["name"]).unwrap(),
            json!({
                "type": ["string"],
                "title": "name",
                "minLength": 1,
                "additionalProperties": true,
            })
        );
    }

    #[test]
    fn test_converter_applies_id() {
        let doc = document("components:\n  schemas:\n    values:\n      type: object\n");
        let converter = Converter::new(ConvertOptions {
            component: "values".to_string(),
            id: "https://example.com/values.json".to_string(),
            strict: false,
        });

        let schema = converter.convert(&doc).unwrap();
        assert_eq!(schema.id.as_deref(), Some("https://example.com/values.json"));
    }

    #[test]
    fn test_converter_strict_missing_component() {
        let doc = document("components:\n  schemas: {}\n");
        let converter = Converter::new(ConvertOptions {
            strict: true,
            ..ConvertOptions::default()
        });

        match converter.convert(&doc) {
            Err(ConvertError::MissingComponent(name)) => assert_eq!(name, "dataValues"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_converter_lenient_missing_component() {
        let doc = document("components:\n  schemas: {}\n");
        let schema = Converter::default().convert(&doc).unwrap();

        assert_eq!(schema.properties, Some(BTreeMap::new()));
    }
}
