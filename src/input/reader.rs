use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::PromptError;

/// A loaded prompt catalog
///
/// Any JSON value is accepted. Only objects carry categories; every other
/// root shape is treated as an empty catalog by the consumers.
pub type PromptDocument = Value;

/// Read and parse a prompt catalog from a file
///
/// # Arguments
/// * `path` - Path to the JSON file
///
/// # Returns
/// * `Ok(PromptDocument)` - The parsed document
/// * `Err(PromptError)` - If the file cannot be read or is not valid JSON
pub fn load_document(path: &Path) -> Result<PromptDocument, PromptError> {
    let contents = fs::read_to_string(path)?;
    log::debug!("Read {} bytes from {:?}", contents.len(), path);

    parse_document(&contents)
}

/// Parse a prompt catalog from an in-memory string
pub fn parse_document(contents: &str) -> Result<PromptDocument, PromptError> {
    serde_json::from_str::<Value>(contents).map_err(|e| PromptError::InvalidJson(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_load_catalog_from_file() {
        let path = PathBuf::from("tests/fixtures/catalog.json");
        let document = load_document(&path).unwrap();

        assert!(document.is_object());
        assert!(document.get("system_prompts").is_some());
    }

    #[test]
    fn test_invalid_json_returns_error() {
        let path = PathBuf::from("tests/fixtures/invalid.json");
        let result = load_document(&path);

        match result {
            Err(PromptError::InvalidJson(_)) => {}
            _ => panic!("Expected InvalidJson error"),
        }
    }

    #[test]
    fn test_file_not_found_returns_error() {
        let path = PathBuf::from("tests/fixtures/nonexistent.json");
        let result = load_document(&path);

        match result {
            Err(PromptError::Io(_)) => {}
            _ => panic!("Expected IO error"),
        }
    }

    #[test]
    fn test_document_preserves_key_order() {
        let document = parse_document(r#"{"zeta": [], "alpha": [], "mid": []}"#).unwrap();
        let keys: Vec<&String> = document.as_object().unwrap().keys().collect();

        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_non_object_roots_parse() {
        assert!(parse_document("[]").is_ok());
        assert!(parse_document("42").is_ok());
        assert!(parse_document("\"text\"").is_ok());
    }

    #[test]
    fn test_invalid_json_string() {
        let result = parse_document(r#"{"name": "Test", invalid}"#);
        assert!(matches!(result, Err(PromptError::InvalidJson(_))));
    }
}
