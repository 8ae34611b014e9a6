//! PropTypes module generation from a parsed API document.
//!
//! This module is a thin wrapper around the IR-based pipeline:
//! 1. Locate: version detection and definitions-table lookup
//! 2. Normalize: schemas -> PropTypes IR
//! 3. Emit: IR -> module text (via the Emit trait)

use crate::document::ApiDocument;
use crate::error::GenerateError;
use crate::ir::{normalize_document, Emit};

/// Generate the PropTypes module text for a document.
///
/// `narrow` optionally restricts output to one named schema's properties;
/// an unknown name falls back to the full definitions table.
pub fn generate(document: &ApiDocument, narrow: Option<&str>) -> Result<String, GenerateError> {
    let module = normalize_document(document, narrow)?;
    Ok(module.emit(0))
}
