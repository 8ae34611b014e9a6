//! PropTypes IR types for code generation.
//!
//! This module defines the PropTypes expression tree:
//! - PtExpr: type expressions (primitives, arrayOf, shape, oneOf, references)
//! - PtLiteral: literal values inside oneOf lists
//! - PtDecl / PtModule: named declarations and the whole output module
//!
//! The compiler in `normalize` builds this tree; the `Emit` trait in `emit`
//! renders it to text. Keeping the two apart means the recursive compiler
//! never touches formatting concerns.

/// PropTypes primitive validators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PtPrimitive {
    String,
    Number,
    Bool,
}

/// Literal values inside a `oneOf([...])` list.
#[derive(Debug, Clone, PartialEq)]
pub enum PtLiteral {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
}

/// One compiled type expression.
#[derive(Debug, Clone, PartialEq)]
pub enum PtExpr {
    /// `PropTypes.string` / `PropTypes.number` / `PropTypes.bool`
    Primitive(PtPrimitive),
    /// `PropTypes.oneOf(["a","b"])` - enum values in declaration order
    OneOf(Vec<PtLiteral>),
    /// `PropTypes.arrayOf(<inner>)`
    ArrayOf(Box<PtExpr>),
    /// `allOf` composition rendered as a multi-line heterogeneous
    /// `PropTypes.arrayOf(member, member, ...)` list. Members are kept
    /// separate, never merged into one shape.
    AllOf(Vec<PtExpr>),
    /// Inline object: `PropTypes.shape({ ... })`
    Shape(Vec<PtProp>),
    /// Reference to an object-kind definition: `PropTypes.shape(NamePropTypes)`
    ShapeRef(String),
    /// Bare reference to a scalar/enum-kind definition: `NamePropTypes`
    NamedRef(String),
    /// A schema with no recognizable type yields an empty type slot.
    Empty,
}

/// One property line inside an object body or inline shape.
#[derive(Debug, Clone, PartialEq)]
pub struct PtProp {
    pub name: String,
    pub expr: PtExpr,
    pub required: bool,
}

/// Body of a named declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum DeclBody {
    /// `export const Name = { ...props };` - object schemas
    Object(Vec<PtProp>),
    /// `export const Name = <expr>;` - everything else
    Expr(PtExpr),
}

/// One named exported declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct PtDecl {
    pub name: String,
    pub body: DeclBody,
}

/// Complete output module: header plus declarations in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct PtModule {
    pub decls: Vec<PtDecl>,
}
