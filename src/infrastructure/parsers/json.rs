// ============================================================
// JSON PARSER
// ============================================================
// Parse a JSON document into rows: array root = row list,
// object root = single-row list, anything else is rejected

use serde_json::Value;

use crate::domain::error::{AppError, Result};
use crate::domain::table::Row;

use super::row_is_blank;

pub struct JsonTableParser;

impl JsonTableParser {
    /// Parse JSON text into rows and headers
    pub fn parse_content(content: &str) -> Result<(Vec<Row>, Vec<String>)> {
        let root: Value = serde_json::from_str(content)
            .map_err(|e| AppError::ParseError(format!("Invalid JSON format: {}", e)))?;

        let elements = match root {
            Value::Array(items) => items,
            Value::Object(_) => vec![root],
            _ => {
                return Err(AppError::ParseError(
                    "Invalid JSON format: expected an object or an array of objects at the root"
                        .to_string(),
                ))
            }
        };

        // Headers come from the first row's key set
        let mut headers: Vec<String> = Vec::new();
        if let Some(Value::Object(first)) = elements.first() {
            for key in first.keys() {
                let name = key.trim();
                if name.is_empty() {
                    continue;
                }
                if headers.iter().any(|existing| existing == name) {
                    continue;
                }
                headers.push(name.to_string());
            }
        }

        let mut rows = Vec::new();
        for (index, element) in elements.into_iter().enumerate() {
            let object = match element {
                Value::Object(map) => map,
                _ => {
                    return Err(AppError::ParseError(format!(
                        "Invalid JSON format: element {} is not an object",
                        index
                    )))
                }
            };

            // Normalize every row to the header key set so all rows share
            // the same shape; keys missing from a row become null
            let mut row = Row::new();
            for header in &headers {
                let value = object
                    .iter()
                    .find(|(key, _)| key.trim() == header.as_str())
                    .map(|(_, value)| value.clone())
                    .unwrap_or(Value::Null);
                row.insert(header.clone(), value);
            }

            if row_is_blank(&row) {
                continue;
            }
            rows.push(row);
        }

        Ok((rows, headers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_array_root() {
        let content = r#"[{"name":"Alice","age":30},{"name":"Bob","age":25}]"#;
        let (rows, headers) = JsonTableParser::parse_content(content).unwrap();

        assert_eq!(headers, vec!["name", "age"]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1]["name"], json!("Bob"));
    }

    #[test]
    fn test_single_object_root_wrapped() {
        let content = r#"{"name":"Alice","age":30}"#;
        let (rows, headers) = JsonTableParser::parse_content(content).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(headers, vec!["name", "age"]);
        assert_eq!(rows[0]["age"], json!(30));
    }

    #[test]
    fn test_scalar_root_rejected() {
        for content in ["42", "\"hello\"", "true", "null"] {
            let result = JsonTableParser::parse_content(content);
            assert!(
                matches!(result, Err(AppError::ParseError(_))),
                "expected rejection for root {}",
                content
            );
        }
    }

    #[test]
    fn test_malformed_json_rejected() {
        let result = JsonTableParser::parse_content("{not json");
        assert!(matches!(result, Err(AppError::ParseError(_))));
    }

    #[test]
    fn test_non_object_element_rejected() {
        let result = JsonTableParser::parse_content(r#"[{"a":1}, 2]"#);
        match result {
            Err(AppError::ParseError(msg)) => assert!(msg.contains("element 1")),
            other => panic!("expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_rows_normalized_to_first_row_keys() {
        let content = r#"[{"a":1,"b":2},{"a":3,"c":9}]"#;
        let (rows, headers) = JsonTableParser::parse_content(content).unwrap();

        assert_eq!(headers, vec!["a", "b"]);
        assert_eq!(rows[1]["a"], json!(3));
        assert_eq!(rows[1]["b"], Value::Null);
        assert!(rows[1].get("c").is_none());
    }

    #[test]
    fn test_all_null_row_filtered() {
        let content = r#"[{"a":1,"b":"x"},{"a":null,"b":""}]"#;
        let (rows, _) = JsonTableParser::parse_content(content).unwrap();

        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_nested_values_kept_verbatim() {
        let content = r#"[{"id":1,"tags":["a","b"]}]"#;
        let (rows, _) = JsonTableParser::parse_content(content).unwrap();

        assert_eq!(rows[0]["tags"], json!(["a", "b"]));
    }

    #[test]
    fn test_empty_array_yields_nothing() {
        let (rows, headers) = JsonTableParser::parse_content("[]").unwrap();
        assert!(rows.is_empty());
        assert!(headers.is_empty());
    }
}
