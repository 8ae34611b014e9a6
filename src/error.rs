//! Error taxonomy for the generator.

use std::path::PathBuf;
use thiserror::Error;

/// Terminal errors surfaced by loading or compiling a document.
///
/// Compilation either completes with the full output text or fails with one
/// of these; there is no partial output.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Neither `components.schemas` nor `definitions` is present.
    #[error("API error: missing schemas (document has neither components.schemas nor definitions)")]
    SchemaMissing,

    /// The document declares neither a valid OpenAPI 3 nor Swagger 2
    /// version marker.
    #[error("unrecognized API version: expected an OpenAPI 3 or Swagger 2 document")]
    UnrecognizedVersion,

    /// A `$ref` points at a name absent from the definitions table.
    #[error("unresolved $ref '{pointer}': no definition named '{name}'")]
    UnresolvedReference { pointer: String, name: String },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse YAML document: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
