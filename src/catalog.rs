//! Catalog loading from JSON / JSONC.

use std::path::Path;

use jsonc_parser::ParseOptions;
use serde_json::Value;
use thiserror::Error;

use crate::table::{
    TranslationTable,
    TranslationValue,
};

#[derive(Error, Debug)]
pub enum CatalogError {
    /// File could not be read.
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// Text is not valid JSON / JSONC.
    #[error("Failed to parse catalog: {0}")]
    Parse(String),

    /// Document holds no value.
    #[error("Catalog document is empty")]
    Empty,

    /// Root value is not an object.
    #[error("Catalog root must be an object, found {0}")]
    NotAnObject(&'static str),
}

/// Build a table from a JSON object.
///
/// Strings become leaves, numbers and booleans become leaves holding their
/// JSON text, arrays become tables keyed by index (`"0"`, `"1"`, ...), and
/// `null` entries are dropped.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use i18n_plugin::catalog::from_json_value;
///
/// let table = from_json_value(&json!({ "zh": { "hello": "你好，世界" } })).unwrap();
/// assert_eq!(table.flatten(".").get("zh.hello"), Some(&"你好，世界".to_string()));
/// ```
pub fn from_json_value(json: &Value) -> Result<TranslationTable, CatalogError> {
    match json {
        Value::Object(map) => Ok(map
            .iter()
            .filter_map(|(key, value)| convert_value(value).map(|value| (key.as_str(), value)))
            .collect()),
        other => Err(CatalogError::NotAnObject(json_kind(other))),
    }
}

/// Converts one JSON value; `None` for `null`.
fn convert_value(json: &Value) -> Option<TranslationValue> {
    match json {
        Value::Null => None,
        Value::String(s) => Some(TranslationValue::Leaf(s.clone())),
        Value::Object(map) => Some(TranslationValue::Node(
            map.iter()
                .filter_map(|(key, value)| convert_value(value).map(|value| (key.as_str(), value)))
                .collect(),
        )),
        Value::Array(arr) => Some(TranslationValue::Node(
            arr.iter()
                .enumerate()
                .filter_map(|(index, value)| {
                    convert_value(value).map(|value| (index.to_string(), value))
                })
                .collect(),
        )),
        Value::Bool(_) | Value::Number(_) => Some(TranslationValue::Leaf(json.to_string())),
    }
}

/// Name of a JSON value's type, for error messages.
const fn json_kind(json: &Value) -> &'static str {
    match json {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Parse catalog text. Comments and trailing commas are accepted.
pub fn parse_catalog(text: &str) -> Result<TranslationTable, CatalogError> {
    let json = jsonc_parser::parse_to_serde_value(text, &ParseOptions::default())
        .map_err(|e| CatalogError::Parse(e.to_string()))?
        .ok_or(CatalogError::Empty)?;

    from_json_value(&json)
}

/// Load a catalog file.
pub fn load_catalog_file(file_path: &Path) -> Result<TranslationTable, CatalogError> {
    tracing::debug!("Loading catalog from: {:?}", file_path);

    let content = std::fs::read_to_string(file_path)?;
    let table = parse_catalog(&content)?;

    tracing::debug!("Loaded {} top-level catalog entries", table.len());
    Ok(table)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    #[googletest::test]
    fn test_from_json_value_nested() {
        let json = json!({
            "zh": {
                "hello": "你好，世界",
                "welcome": "欢迎"
            },
            "title": "Title"
        });

        let result = from_json_value(&json).unwrap().flatten(".");

        expect_that!(result.get("zh.hello"), some(eq(&"你好，世界".to_string())));
        expect_that!(result.get("zh.welcome"), some(eq(&"欢迎".to_string())));
        expect_that!(result.get("title"), some(eq(&"Title".to_string())));
        expect_that!(result.len(), eq(3));
    }

    #[googletest::test]
    fn test_from_json_value_non_string_values() {
        let json = json!({
            "number": 42,
            "boolean": true,
            "null": null
        });

        let table = from_json_value(&json).unwrap();

        expect_that!(table.get("number").and_then(TranslationValue::as_leaf), some(eq("42")));
        expect_that!(table.get("boolean").and_then(TranslationValue::as_leaf), some(eq("true")));
        expect_that!(table.get("null"), none());
    }

    #[googletest::test]
    fn test_from_json_value_array_is_indexed() {
        let json = json!({
            "users": [
                { "name": "Alice" },
                { "name": "Bob" }
            ],
            "items": ["apple", null, "cherry"]
        });

        let result = from_json_value(&json).unwrap().flatten(".");

        expect_that!(result.get("users.0.name"), some(eq(&"Alice".to_string())));
        expect_that!(result.get("users.1.name"), some(eq(&"Bob".to_string())));
        expect_that!(result.get("items.0"), some(eq(&"apple".to_string())));
        expect_that!(result.get("items.1"), none());
        expect_that!(result.get("items.2"), some(eq(&"cherry".to_string())));
    }

    #[rstest]
    #[case(json!("text"), "string")]
    #[case(json!([1, 2]), "array")]
    #[case(json!(null), "null")]
    #[case(json!(3), "number")]
    fn test_from_json_value_rejects_non_object_root(#[case] json: Value, #[case] kind: &str) {
        let result = from_json_value(&json);

        assert!(matches!(result, Err(CatalogError::NotAnObject(found)) if found == kind));
    }

    #[googletest::test]
    fn test_parse_catalog_accepts_comments() {
        let text = r#"{
  // greeting shown on the landing page
  "zh": {
    "hello": "你好，世界", /* trailing comma below */
  },
}"#;

        let table = parse_catalog(text).unwrap();

        expect_that!(table.flatten(".").get("zh.hello"), some(eq(&"你好，世界".to_string())));
    }

    #[rstest]
    fn test_parse_catalog_invalid() {
        let result = parse_catalog("{ \"zh\": ");

        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[rstest]
    fn test_parse_catalog_empty_document() {
        let result = parse_catalog("  // nothing here\n");

        assert!(matches!(result, Err(CatalogError::Empty)));
    }

    #[rstest]
    fn test_load_catalog_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("zh.json");
        fs::write(&file_path, r#"{"zh": {"hello": "你好，世界"}}"#).unwrap();

        let table = load_catalog_file(&file_path).unwrap();

        assert_eq!(table.flatten(".").get("zh.hello").map(String::as_str), Some("你好，世界"));
    }

    #[rstest]
    fn test_load_catalog_file_missing() {
        let temp_dir = TempDir::new().unwrap();

        let result = load_catalog_file(&temp_dir.path().join("missing.json"));

        assert!(matches!(result, Err(CatalogError::Io(_))));
    }
}
