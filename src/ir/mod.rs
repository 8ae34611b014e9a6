//! Intermediate representation for schema to PropTypes code generation.
//!
//! Three-stage pipeline:
//! 1. Normalize: API document -> PropTypes expression IR (all schema
//!    corner cases resolved here)
//! 2. IR: a small typed expression tree over the schema kinds
//! 3. Emission: IR -> source text via the `Emit` trait, with the nesting
//!    depth threaded as an explicit parameter
//!
//! ## Module Structure
//!
//! - `types`: PropTypes IR (PtExpr, PtProp, PtDecl, PtModule)
//! - `normalize`: document -> IR conversion, $ref resolution
//! - `emit`: IR -> code strings (via Emit trait)
//! - `utils`: name formatting and quoting helpers

pub mod emit;
pub mod normalize;
pub mod types;
pub mod utils;

// Re-export the main entry points
pub use emit::Emit;
pub use normalize::normalize_document;
