//! # Document Loading
//!
//! Reads an OpenAPI document from disk into a `serde_json::Value`. The
//! format is chosen from the file extension: `.json` goes through
//! `serde_json`, everything else through `serde_yaml` (which also accepts
//! JSON text). Mapping order is preserved so findings come out in document
//! order.
//!
//! Loading is the only place parsing happens. Rules never see text, and
//! `$ref`s are left exactly as written.

use std::path::Path;

use serde_json::Value;

use crate::error::DocumentError;

/// Source format of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// `.json`
    Json,
    /// `.yaml`, `.yml`, or anything unrecognized.
    Yaml,
}

impl DocumentFormat {
    /// Pick a format from a file path's extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// Read and parse a document file.
///
/// # Errors
///
/// Returns [`DocumentError::Read`] if the file cannot be read, a parse
/// error if the text is not valid for its format, and
/// [`DocumentError::NotAMapping`] if the root is not a mapping.
pub fn load_document(path: &Path) -> Result<Value, DocumentError> {
    let text = std::fs::read_to_string(path).map_err(|source| DocumentError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse_document(&text, DocumentFormat::from_path(path), &path.display().to_string())
}

/// Parse document text in the given format. `origin` names the source in errors.
pub fn parse_document(
    text: &str,
    format: DocumentFormat,
    origin: &str,
) -> Result<Value, DocumentError> {
    let value: Value = match format {
        DocumentFormat::Json => {
            serde_json::from_str(text).map_err(|source| DocumentError::InvalidJson {
                origin: origin.to_string(),
                source,
            })?
        }
        DocumentFormat::Yaml => {
            serde_yaml::from_str(text).map_err(|source| DocumentError::InvalidYaml {
                origin: origin.to_string(),
                source,
            })?
        }
    };

    if !value.is_object() {
        return Err(DocumentError::NotAMapping {
            origin: origin.to_string(),
            found: type_name(&value),
        });
    }
    Ok(value)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension() {
        assert_eq!(DocumentFormat::from_path(Path::new("api.json")), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_path(Path::new("api.JSON")), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_path(Path::new("api.yaml")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("api.yml")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("api")), DocumentFormat::Yaml);
    }

    #[test]
    fn yaml_preserves_mapping_order() {
        let text = "properties:\n  zetaKey: {type: string}\n  alphaKey: {type: string}\n";
        let doc = parse_document(text, DocumentFormat::Yaml, "inline").unwrap();
        let keys: Vec<&String> = doc["properties"].as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["zetaKey", "alphaKey"]);
    }

    #[test]
    fn yaml_parser_accepts_json_text() {
        let doc = parse_document(r#"{"openapi": "3.0.3"}"#, DocumentFormat::Yaml, "inline").unwrap();
        assert_eq!(doc["openapi"], "3.0.3");
    }

    #[test]
    fn rejects_non_mapping_root() {
        let err = parse_document("[1, 2]", DocumentFormat::Json, "inline").unwrap_err();
        assert!(matches!(err, DocumentError::NotAMapping { found: "array", .. }));
    }

    #[test]
    fn invalid_json_is_reported() {
        let err = parse_document("{", DocumentFormat::Json, "broken.json").unwrap_err();
        assert!(matches!(err, DocumentError::InvalidJson { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn load_missing_file() {
        let err = load_document(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(matches!(err, DocumentError::Read { .. }));
    }

    #[test]
    fn load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("api.json");
        std::fs::write(&path, r#"{"paths": {}}"#).unwrap();
        let doc = load_document(&path).unwrap();
        assert!(doc["paths"].is_object());
    }
}
