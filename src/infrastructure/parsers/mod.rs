// ============================================================
// FILE PARSERS
// ============================================================
// Format-specific parsers producing (rows, headers) pairs

mod csv;
mod json;
mod xlsx;

pub use self::csv::CsvTableParser;
pub use self::json::JsonTableParser;
pub use self::xlsx::XlsxTableParser;

use serde_json::Value;

use crate::domain::table::Row;

/// A row is blank when every value is null or empty text
pub(crate) fn row_is_blank(row: &Row) -> bool {
    row.values().all(|value| match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    })
}
