// ============================================================
// COLUMN TYPE ENUM
// ============================================================
// Semantic type tag assigned to a column by heuristic inspection

use serde::{Deserialize, Serialize};

/// Semantic type inferred for a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Numeric values (integer or floating point)
    Number,

    /// Boolean values
    Boolean,

    /// Text containing an email address
    Email,

    /// Text that parses as a calendar date
    Date,

    /// Anything else, the fallback type
    String,
}

impl ColumnType {
    /// Get the lowercase tag used in serialized output
    pub fn tag(&self) -> &'static str {
        match self {
            ColumnType::Number => "number",
            ColumnType::Boolean => "boolean",
            ColumnType::Email => "email",
            ColumnType::Date => "date",
            ColumnType::String => "string",
        }
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}
