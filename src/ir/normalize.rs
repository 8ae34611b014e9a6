//! Normalization from an API document to the PropTypes IR.
//!
//! This module holds all the schema-specific logic:
//! - locating the named-definitions table for the document version
//! - recursive schema-to-expression compilation
//! - `$ref` resolution and object/scalar classification

use indexmap::IndexMap;
use std::collections::HashSet;

use crate::document::{ApiDocument, ApiVersion, EnumValue, Schema};
use crate::error::GenerateError;

use super::types::{DeclBody, PtDecl, PtExpr, PtLiteral, PtModule, PtPrimitive, PtProp};
use super::utils::format_decl_name;

/// Normalize a parsed document into the output module.
///
/// `narrow` optionally restricts compilation to one named schema's immediate
/// properties; a name that does not exist in the table (or names a schema
/// without properties) falls back to the full definitions table unchanged.
pub fn normalize_document(
    document: &ApiDocument,
    narrow: Option<&str>,
) -> Result<PtModule, GenerateError> {
    let version = ApiVersion::detect(document).ok_or(GenerateError::UnrecognizedVersion)?;
    let definitions = version
        .definitions(document)
        .ok_or(GenerateError::SchemaMissing)?;

    let mut decls = Vec::with_capacity(definitions.len());
    // References always resolve against the full table, even when narrowed.
    for (name, schema) in narrow_targets(definitions, narrow) {
        decls.push(normalize_declaration(name, schema, definitions)?);
    }

    Ok(PtModule { decls })
}

/// Pick the top-level mapping to compile: one schema's properties when
/// narrowing applies, the whole definitions table otherwise.
fn narrow_targets<'a>(
    definitions: &'a IndexMap<String, Schema>,
    narrow: Option<&str>,
) -> &'a IndexMap<String, Schema> {
    narrow
        .and_then(|name| definitions.get(name))
        .and_then(|schema| schema.properties.as_ref())
        .unwrap_or(definitions)
}

/// Compile one named schema into a declaration.
///
/// Object schemas become object-literal bodies with one line per property;
/// everything else becomes a single expression body.
pub fn normalize_declaration(
    name: &str,
    schema: &Schema,
    definitions: &IndexMap<String, Schema>,
) -> Result<PtDecl, GenerateError> {
    let decl_name = format_decl_name(name);

    if schema.is_object_kind() && schema.ref_path.is_none() {
        let props = match &schema.properties {
            Some(properties) => {
                normalize_properties(properties, &schema.required_names(), definitions)?
            }
            None => Vec::new(),
        };
        return Ok(PtDecl {
            name: decl_name,
            body: DeclBody::Object(props),
        });
    }

    Ok(PtDecl {
        name: decl_name,
        body: DeclBody::Expr(compile_type(schema, definitions)?),
    })
}

/// Compile one schema node into a type expression.
///
/// Pure in its inputs; the definitions table is needed only to classify
/// `$ref` targets as object vs scalar/enum.
pub fn compile_type(
    schema: &Schema,
    definitions: &IndexMap<String, Schema>,
) -> Result<PtExpr, GenerateError> {
    // Enums win over the type switch: swagger enums usually carry
    // "type": "string" alongside the value list.
    if let Some(values) = &schema.enum_values {
        return Ok(PtExpr::OneOf(
            values.iter().map(enum_value_to_literal).collect(),
        ));
    }

    // Composition stays a heterogeneous list of independently compiled
    // members, never a merged shape.
    if let Some(members) = &schema.all_of {
        let compiled = members
            .iter()
            .map(|member| compile_type(member, definitions))
            .collect::<Result<Vec<_>, _>>()?;
        return Ok(PtExpr::AllOf(compiled));
    }

    match schema.schema_type.as_deref() {
        Some("array") => compile_array(schema.items.as_deref(), definitions),

        Some("object") => match &schema.ref_path {
            Some(pointer) => {
                let (name, _) = resolve_ref(pointer, definitions)?;
                Ok(PtExpr::ShapeRef(name))
            }
            None => {
                let props = match &schema.properties {
                    Some(properties) => {
                        normalize_properties(properties, &schema.required_names(), definitions)?
                    }
                    None => Vec::new(),
                };
                Ok(PtExpr::Shape(props))
            }
        },

        Some("number" | "integer" | "long" | "float" | "double") => {
            Ok(PtExpr::Primitive(PtPrimitive::Number))
        }

        Some("string" | "byte" | "binary" | "date" | "DATETIME" | "password") => {
            Ok(PtExpr::Primitive(PtPrimitive::String))
        }

        Some("boolean") => Ok(PtExpr::Primitive(PtPrimitive::Bool)),

        // No recognizable type: an untyped $ref defers to the target's
        // kind, anything else is an empty type slot.
        _ => match &schema.ref_path {
            Some(pointer) => {
                let (name, is_object) = resolve_ref(pointer, definitions)?;
                Ok(if is_object {
                    PtExpr::ShapeRef(name)
                } else {
                    PtExpr::NamedRef(name)
                })
            }
            None => Ok(PtExpr::Empty),
        },
    }
}

/// Compile an array schema's item expression.
fn compile_array(
    items: Option<&Schema>,
    definitions: &IndexMap<String, Schema>,
) -> Result<PtExpr, GenerateError> {
    let inner = match items {
        Some(items) => match &items.ref_path {
            Some(pointer) => {
                let (name, is_object) = resolve_ref(pointer, definitions)?;
                if is_object {
                    PtExpr::ShapeRef(name)
                } else {
                    PtExpr::NamedRef(name)
                }
            }
            None => compile_type(items, definitions)?,
        },
        // Arrays without an item schema keep an empty slot.
        None => PtExpr::Empty,
    };
    Ok(PtExpr::ArrayOf(Box::new(inner)))
}

/// Compile an object's properties in source order.
fn normalize_properties(
    properties: &IndexMap<String, Schema>,
    required: &HashSet<&str>,
    definitions: &IndexMap<String, Schema>,
) -> Result<Vec<PtProp>, GenerateError> {
    let mut props = Vec::with_capacity(properties.len());
    for (name, child) in properties {
        let expr = compile_type(child, definitions)?;
        props.push(PtProp {
            name: name.clone(),
            expr,
            // Exact name membership in the parent's required list, or a
            // required flag carried by the property node itself.
            required: required.contains(name.as_str()) || child.required_flag(),
        });
    }
    Ok(props)
}

/// Resolve a `$ref` pointer to a formatted declaration name and classify
/// the target.
///
/// The raw schema name is the final slash-delimited path segment. A name
/// absent from the definitions table is a hard error, never a blank
/// identifier.
pub fn resolve_ref(
    pointer: &str,
    definitions: &IndexMap<String, Schema>,
) -> Result<(String, bool), GenerateError> {
    let raw = pointer.rsplit('/').next().unwrap_or(pointer);
    let target =
        definitions
            .get(raw)
            .ok_or_else(|| GenerateError::UnresolvedReference {
                pointer: pointer.to_string(),
                name: raw.to_string(),
            })?;
    Ok((format_decl_name(raw), target.is_object_kind()))
}

fn enum_value_to_literal(value: &EnumValue) -> PtLiteral {
    match value {
        EnumValue::String(s) => PtLiteral::String(s.clone()),
        EnumValue::Integer(i) => PtLiteral::Int(*i),
        EnumValue::Float(f) => PtLiteral::Float(*f),
        EnumValue::Bool(b) => PtLiteral::Bool(*b),
        EnumValue::Null => PtLiteral::Null,
    }
}
