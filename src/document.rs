//! API document structs for serde deserialization.
//!
//! This module defines the subset of OpenAPI 3 / Swagger 2 that the
//! generator consumes. Mappings use `IndexMap` so declarations are emitted
//! in the source document's encounter order, which keeps output
//! deterministic across runs.

use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::HashSet;

/// Root API description, OpenAPI v3 or Swagger v2.
#[derive(Debug, Deserialize)]
pub struct ApiDocument {
    /// OpenAPI version marker, e.g. "3.0.1".
    pub openapi: Option<String>,
    /// Swagger version marker, e.g. "2.0".
    pub swagger: Option<String>,
    /// API metadata, logged at startup.
    pub info: Option<Info>,
    /// OpenAPI 3 components section.
    pub components: Option<Components>,
    /// Swagger 2 definitions table.
    pub definitions: Option<IndexMap<String, Schema>>,
}

/// API metadata.
#[derive(Debug, Deserialize)]
pub struct Info {
    pub title: Option<String>,
    pub version: Option<String>,
}

/// Components section containing reusable schemas.
#[derive(Debug, Deserialize)]
pub struct Components {
    pub schemas: Option<IndexMap<String, Schema>>,
}

/// One schema definition or sub-definition.
#[derive(Debug, Clone, Deserialize)]
pub struct Schema {
    /// The type of the schema (string, number, integer, boolean, object, array).
    #[serde(rename = "type")]
    pub schema_type: Option<String>,

    /// Reference to another named schema.
    #[serde(rename = "$ref")]
    pub ref_path: Option<String>,

    /// Properties for object types, in source order.
    pub properties: Option<IndexMap<String, Schema>>,

    /// Required property names on an object node, or a boolean flag
    /// directly on a property node.
    pub required: Option<RequiredSpec>,

    /// Item schema for array types.
    pub items: Option<Box<Schema>>,

    /// Enum values in declaration order.
    #[serde(rename = "enum")]
    pub enum_values: Option<Vec<EnumValue>>,

    /// Composition members. Kept as a heterogeneous list, never merged.
    #[serde(rename = "allOf")]
    pub all_of: Option<Vec<Schema>>,
}

/// `required` is a list of property names on object schemas, but some
/// documents carry it as a boolean flag directly on a property node.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RequiredSpec {
    Names(Vec<String>),
    Flag(bool),
}

/// Enum value can be string, integer, float, boolean, or null.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum EnumValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl Schema {
    /// Whether a `$ref` to this schema should be wrapped in a shape
    /// reference. Object-kind means an explicit object type or an inline
    /// properties map.
    pub fn is_object_kind(&self) -> bool {
        self.schema_type.as_deref() == Some("object") || self.properties.is_some()
    }

    /// The set of required property names declared on this object node.
    pub fn required_names(&self) -> HashSet<&str> {
        match &self.required {
            Some(RequiredSpec::Names(names)) => names.iter().map(String::as_str).collect(),
            _ => HashSet::new(),
        }
    }

    /// Whether this property node carries its own `required: true` flag.
    pub fn required_flag(&self) -> bool {
        matches!(self.required, Some(RequiredSpec::Flag(true)))
    }
}

/// Recognized API description versions.
///
/// Each variant supplies its own definitions-table lookup; no other
/// versions are recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiVersion {
    OpenApi3,
    Swagger2,
}

impl ApiVersion {
    /// Detect the document version from its `openapi` / `swagger` markers.
    ///
    /// Only a major version 3 `openapi` marker or a major version 2
    /// `swagger` marker are recognized; anything else is `None`.
    pub fn detect(document: &ApiDocument) -> Option<Self> {
        if let Some(marker) = &document.openapi {
            if major_version(marker) == Some(3) {
                return Some(Self::OpenApi3);
            }
        }
        if let Some(marker) = &document.swagger {
            if major_version(marker) == Some(2) {
                return Some(Self::Swagger2);
            }
        }
        None
    }

    /// The named-definitions table for this version, if present on the
    /// document.
    pub fn definitions<'a>(&self, document: &'a ApiDocument) -> Option<&'a IndexMap<String, Schema>> {
        match self {
            Self::OpenApi3 => document.components.as_ref()?.schemas.as_ref(),
            Self::Swagger2 => document.definitions.as_ref(),
        }
    }
}

fn major_version(marker: &str) -> Option<u32> {
    marker.split('.').next()?.trim().parse().ok()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn doc(value: serde_json::Value) -> ApiDocument {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_detect_openapi3() {
        let document = doc(serde_json::json!({ "openapi": "3.0.1" }));
        assert_eq!(ApiVersion::detect(&document), Some(ApiVersion::OpenApi3));
    }

    #[test]
    fn test_detect_swagger2() {
        let document = doc(serde_json::json!({ "swagger": "2.0" }));
        assert_eq!(ApiVersion::detect(&document), Some(ApiVersion::Swagger2));
    }

    #[test]
    fn test_detect_rejects_other_versions() {
        assert_eq!(ApiVersion::detect(&doc(serde_json::json!({ "openapi": "2.0" }))), None);
        assert_eq!(ApiVersion::detect(&doc(serde_json::json!({ "swagger": "3.0" }))), None);
        assert_eq!(ApiVersion::detect(&doc(serde_json::json!({}))), None);
        assert_eq!(
            ApiVersion::detect(&doc(serde_json::json!({ "openapi": "not-a-version" }))),
            None
        );
    }

    #[test]
    fn test_definitions_lookup_per_version() {
        let v3 = doc(serde_json::json!({
            "openapi": "3.0.0",
            "components": { "schemas": { "Img": { "type": "object" } } }
        }));
        let table = ApiVersion::OpenApi3.definitions(&v3).unwrap();
        assert!(table.contains_key("Img"));
        assert!(ApiVersion::Swagger2.definitions(&v3).is_none());

        let v2 = doc(serde_json::json!({
            "swagger": "2.0",
            "definitions": { "Link": { "type": "object" } }
        }));
        let table = ApiVersion::Swagger2.definitions(&v2).unwrap();
        assert!(table.contains_key("Link"));
        assert!(ApiVersion::OpenApi3.definitions(&v2).is_none());
    }

    #[test]
    fn test_required_spec_forms() {
        let object: Schema = serde_json::from_value(serde_json::json!({
            "type": "object",
            "required": ["title", "img"],
            "properties": { "title": { "type": "string" } }
        }))
        .unwrap();
        let names = object.required_names();
        assert!(names.contains("title"));
        assert!(names.contains("img"));
        assert!(!object.required_flag());

        let flagged: Schema =
            serde_json::from_value(serde_json::json!({ "type": "string", "required": true }))
                .unwrap();
        assert!(flagged.required_flag());
        assert!(flagged.required_names().is_empty());
    }

    #[test]
    fn test_is_object_kind() {
        let typed: Schema =
            serde_json::from_value(serde_json::json!({ "type": "object" })).unwrap();
        assert!(typed.is_object_kind());

        let untyped_with_props: Schema = serde_json::from_value(serde_json::json!({
            "properties": { "a": { "type": "string" } }
        }))
        .unwrap();
        assert!(untyped_with_props.is_object_kind());

        let scalar: Schema =
            serde_json::from_value(serde_json::json!({ "type": "string" })).unwrap();
        assert!(!scalar.is_object_kind());
    }

    #[test]
    fn test_properties_preserve_source_order() {
        let schema: Schema = serde_json::from_str(
            r#"{ "type": "object", "properties": {
                "zebra": { "type": "string" },
                "alpha": { "type": "string" },
                "mid": { "type": "number" }
            } }"#,
        )
        .unwrap();
        let keys: Vec<_> = schema.properties.unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["zebra", "alpha", "mid"]);
    }
}
