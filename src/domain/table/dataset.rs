// ============================================================
// DATASET TYPES
// ============================================================
// Data structures representing a parsed tabular upload

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use uuid::Uuid;

use super::ColumnType;

/// One parsed record, keyed by column name.
/// Key insertion order follows first-row discovery order.
pub type Row = serde_json::Map<String, Value>;

/// Per-column inferred type tags
pub type ColumnTypeMap = HashMap<String, ColumnType>;

/// Uniform row-oriented table produced by the ingestion pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedTable {
    /// Parsed data rows, blank rows already filtered
    pub rows: Vec<Row>,

    /// Ordered column names from the first row
    pub headers: Vec<String>,

    /// Inferred type per column
    pub column_types: ColumnTypeMap,
}

impl ParsedTable {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }
}

/// Outcome of parsing a single uploaded file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    Success,
    Error,
}

/// A file in the upload list together with its parse outcome.
/// Created on file-drop, discarded when removed from the list or
/// superseded by a new parse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedFile {
    pub id: String,
    pub file_name: String,
    pub status: UploadStatus,
    pub table: Option<ParsedTable>,
    pub error: Option<String>,
}

impl UploadedFile {
    pub fn success(file_name: impl Into<String>, table: ParsedTable) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            file_name: file_name.into(),
            status: UploadStatus::Success,
            table: Some(table),
            error: None,
        }
    }

    pub fn failed(file_name: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            file_name: file_name.into(),
            status: UploadStatus::Error,
            table: None,
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == UploadStatus::Success
    }
}

/// Phase of the enclosing upload flow.
/// There is no terminal failed phase: a parse failure returns the flow
/// to Idle and the error is surfaced as a transient message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadPhase {
    Idle,
    Parsing,
    Analyzing,
    Complete,
}

impl std::fmt::Display for UploadPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UploadPhase::Idle => write!(f, "idle"),
            UploadPhase::Parsing => write!(f, "parsing"),
            UploadPhase::Analyzing => write!(f, "analyzing"),
            UploadPhase::Complete => write!(f, "complete"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_uploaded_file_success() {
        let table = ParsedTable {
            rows: vec![],
            headers: vec!["a".to_string()],
            column_types: HashMap::new(),
        };
        let file = UploadedFile::success("data.csv", table);

        assert!(file.is_success());
        assert!(file.error.is_none());
        assert!(!file.id.is_empty());
    }

    #[test]
    fn test_uploaded_file_failed() {
        let file = UploadedFile::failed("data.bin", "Unsupported format");

        assert_eq!(file.status, UploadStatus::Error);
        assert!(file.table.is_none());
        assert_eq!(file.error.as_deref(), Some("Unsupported format"));
    }

    #[test]
    fn test_row_preserves_insertion_order() {
        let mut row = Row::new();
        row.insert("zulu".to_string(), json!(1));
        row.insert("alpha".to_string(), json!(2));

        let keys: Vec<&String> = row.keys().collect();
        assert_eq!(keys, vec!["zulu", "alpha"]);
    }
}
