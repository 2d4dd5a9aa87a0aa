//! YAML document loading
//!
//! Turns schema and configuration text into [`Document`]s. Load failures are
//! reported through [`Error`] and never mixed with validation issues.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::value::{Document, Value};

/// Read and parse a YAML document from `path`
pub fn load_document(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let doc = parse_with_origin(&text, &path.display().to_string())?;
    debug!(path = %path.display(), keys = doc.len(), "loaded document");
    Ok(doc)
}

/// Parse YAML text into a document.
///
/// Empty text parses to an empty document.
pub fn parse_document(text: &str) -> Result<Document> {
    parse_with_origin(text, "<input>")
}

fn parse_with_origin(text: &str, origin: &str) -> Result<Document> {
    let raw: serde_yaml::Value = serde_yaml::from_str(text).map_err(|source| Error::Yaml {
        origin: origin.to_string(),
        source,
    })?;
    let value = Value::try_from(raw).map_err(|source| Error::InvalidKey {
        origin: origin.to_string(),
        source,
    })?;

    match value {
        Value::Mapping(doc) => Ok(doc),
        Value::Null => Ok(Document::new()),
        other => Err(Error::NotAMapping {
            origin: origin.to_string(),
            found: other.type_name(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_text_is_empty_document() {
        assert!(parse_document("").unwrap().is_empty());
        assert!(parse_document("# only a comment\n").unwrap().is_empty());
        assert!(parse_document("null").unwrap().is_empty());
    }

    #[test]
    fn test_top_level_must_be_mapping() {
        let err = parse_document("- a\n- b\n").unwrap_err();
        assert!(matches!(err, Error::NotAMapping { found: "list", .. }));
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_malformed_yaml() {
        let err = parse_document("name: [unterminated").unwrap_err();
        assert!(matches!(err, Error::Yaml { .. }));
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_load_from_file() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), "name: {type: string, required: true}\n").unwrap();
        let doc = load_document(file.path()).unwrap();
        assert!(doc.get("name").and_then(Value::as_mapping).is_some());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_document("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(!err.is_parse_error());
    }
}
