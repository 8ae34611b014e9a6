//! Document loading: file reading and JSON/YAML deserialization.
//!
//! The loader is deliberately thin. Structural validation against the
//! OpenAPI/Swagger meta-schema is out of scope; the document is assumed to
//! have been validated upstream.

use std::fs;
use std::path::Path;

use crate::document::ApiDocument;
use crate::error::GenerateError;

/// Read a file and deserialize it into an [`ApiDocument`].
///
/// `.yml` / `.yaml` extensions select the YAML parser; everything else is
/// treated as JSON.
pub fn load_document(path: &Path) -> Result<ApiDocument, GenerateError> {
    let content = fs::read_to_string(path).map_err(|source| GenerateError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let is_yaml = matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yml" | "yaml")
    );

    if is_yaml {
        Ok(serde_yaml::from_str(&content)?)
    } else {
        Ok(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_json_document() {
        let mut file = tempfile::NamedTempFile::with_suffix(".json").unwrap();
        write!(
            file,
            r#"{{ "openapi": "3.0.1", "info": {{ "title": "Demo", "version": "1.0" }} }}"#
        )
        .unwrap();
        let document = load_document(file.path()).unwrap();
        assert_eq!(document.openapi.as_deref(), Some("3.0.1"));
        assert_eq!(document.info.unwrap().title.as_deref(), Some("Demo"));
    }

    #[test]
    fn test_load_yaml_document() {
        let mut file = tempfile::NamedTempFile::with_suffix(".yml").unwrap();
        write!(
            file,
            "swagger: '2.0'\ndefinitions:\n  Thing:\n    type: string\n"
        )
        .unwrap();
        let document = load_document(file.path()).unwrap();
        assert_eq!(document.swagger.as_deref(), Some("2.0"));
        assert!(document.definitions.unwrap().contains_key("Thing"));
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let err = load_document(Path::new("/nonexistent/api.json")).unwrap_err();
        assert!(matches!(err, GenerateError::Read { .. }));
    }

    #[test]
    fn test_load_malformed_json_is_parse_error() {
        let mut file = tempfile::NamedTempFile::with_suffix(".json").unwrap();
        write!(file, "{{ not json").unwrap();
        let err = load_document(file.path()).unwrap_err();
        assert!(matches!(err, GenerateError::Json(_)));
    }
}
