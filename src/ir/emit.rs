//! PropTypes code emission via the Emit trait.
//!
//! Every IR node renders itself at an explicit nesting depth. Depth is a
//! plain parameter threaded through the recursion, so it is restored on
//! every exit path by construction and two sibling subtrees can never leak
//! indentation into each other.

use super::types::{DeclBody, PtDecl, PtExpr, PtLiteral, PtModule, PtPrimitive, PtProp};
use super::utils::{escape_js_string, indent, quote_if_needed};

/// Fixed module header: lint suppression for forward references, then the
/// PropTypes import.
pub const MODULE_HEADER: &str =
    "/* eslint no-use-before-define: 0 */\nimport PropTypes from 'prop-types';\n\n";

/// Trait for emitting PropTypes source text from IR nodes.
pub trait Emit {
    /// Render the node at the given nesting depth.
    ///
    /// Depth 0 is a standalone declaration body; object property lines of a
    /// top-level declaration sit at depth 1.
    fn emit(&self, depth: usize) -> String;
}

impl Emit for PtPrimitive {
    fn emit(&self, _depth: usize) -> String {
        match self {
            PtPrimitive::String => "PropTypes.string".to_string(),
            PtPrimitive::Number => "PropTypes.number".to_string(),
            PtPrimitive::Bool => "PropTypes.bool".to_string(),
        }
    }
}

impl Emit for PtLiteral {
    fn emit(&self, _depth: usize) -> String {
        match self {
            PtLiteral::String(s) => format!("\"{}\"", escape_js_string(s)),
            PtLiteral::Int(i) => i.to_string(),
            PtLiteral::Float(f) => f.to_string(),
            PtLiteral::Bool(b) => b.to_string(),
            PtLiteral::Null => "null".to_string(),
        }
    }
}

impl Emit for PtExpr {
    fn emit(&self, depth: usize) -> String {
        match self {
            PtExpr::Primitive(p) => p.emit(depth),
            PtExpr::OneOf(values) => {
                // Literal list joined without spaces, always prefixed
                // regardless of nesting depth.
                let list = values
                    .iter()
                    .map(|v| v.emit(depth))
                    .collect::<Vec<_>>()
                    .join(",");
                format!("PropTypes.oneOf([{list}])")
            }
            PtExpr::ArrayOf(inner) => {
                format!("PropTypes.arrayOf({})", inner.emit(depth))
            }
            PtExpr::AllOf(members) => {
                let mut output = String::from("PropTypes.arrayOf(\n");
                for member in members {
                    output.push_str(&indent(depth + 1));
                    output.push_str(&member.emit(depth + 1));
                    output.push_str(",\n");
                }
                output.push_str(&indent(depth));
                output.push(')');
                output
            }
            PtExpr::Shape(props) => {
                let mut output = String::from("PropTypes.shape({\n");
                for prop in props {
                    output.push_str(&prop.emit(depth + 1));
                }
                output.push_str(&indent(depth));
                output.push_str("})");
                output
            }
            PtExpr::ShapeRef(name) => format!("PropTypes.shape({name})"),
            PtExpr::NamedRef(name) => name.clone(),
            PtExpr::Empty => String::new(),
        }
    }
}

impl Emit for PtProp {
    fn emit(&self, depth: usize) -> String {
        let key = quote_if_needed(&self.name);
        let marker = if self.required { ".isRequired" } else { "" };
        format!(
            "{}{}: {}{},\n",
            indent(depth),
            key,
            self.expr.emit(depth),
            marker
        )
    }
}

impl Emit for PtDecl {
    fn emit(&self, depth: usize) -> String {
        match &self.body {
            DeclBody::Object(props) if props.is_empty() => {
                format!("export const {} = {{}};\n", self.name)
            }
            DeclBody::Object(props) => {
                let mut output = format!("export const {} = {{\n", self.name);
                for prop in props {
                    output.push_str(&prop.emit(depth + 1));
                }
                output.push_str("};\n");
                output
            }
            DeclBody::Expr(expr) => {
                format!("export const {} = {};\n", self.name, expr.emit(depth))
            }
        }
    }
}

impl Emit for PtModule {
    fn emit(&self, depth: usize) -> String {
        let decls = self
            .decls
            .iter()
            .map(|d| d.emit(depth))
            .collect::<Vec<_>>()
            .join("\n");
        format!("{MODULE_HEADER}{decls}")
    }
}
