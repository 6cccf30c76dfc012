// ============================================================
// WORKBOOK PARSER
// ============================================================
// Decode XLSX/XLS workbooks, first sheet only, first row as headers

use std::io::Cursor;
use std::path::Path;

use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Data, Range, Reader, Sheets};
use serde_json::Value;

use crate::domain::error::{AppError, Result};
use crate::domain::table::Row;

use super::row_is_blank;

/// Workbook parser backed by calamine
pub struct XlsxTableParser;

impl XlsxTableParser {
    /// Parse a workbook file from disk
    pub fn parse_file(path: &Path) -> Result<(Vec<Row>, Vec<String>)> {
        let mut workbook = open_workbook_auto(path)
            .map_err(|e| AppError::ParseError(format!("Failed to open Excel file: {}", e)))?;
        Self::first_sheet_table(&mut workbook)
    }

    /// Parse a workbook from in-memory bytes
    pub fn parse_bytes(bytes: &[u8]) -> Result<(Vec<Row>, Vec<String>)> {
        let cursor = Cursor::new(bytes.to_vec());
        let mut workbook = open_workbook_auto_from_rs(cursor)
            .map_err(|e| AppError::ParseError(format!("Failed to open Excel file: {}", e)))?;
        Self::first_sheet_table(&mut workbook)
    }

    /// Select the first sheet by declaration order and convert it
    fn first_sheet_table<RS: std::io::Read + std::io::Seek>(
        workbook: &mut Sheets<RS>,
    ) -> Result<(Vec<Row>, Vec<String>)> {
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| AppError::ParseError("No worksheet found in workbook".to_string()))?
            .map_err(|e| AppError::ParseError(format!("Failed to read Excel range: {}", e)))?;

        Ok(Self::range_to_table(&range))
    }

    /// Convert a cell range into rows and headers. The literal first row
    /// of cells is the header row; empty header cells are discarded along
    /// with their columns, and rows with no non-empty value are dropped.
    pub(crate) fn range_to_table(range: &Range<Data>) -> (Vec<Row>, Vec<String>) {
        let mut sheet_rows = range.rows();

        let header_cells = match sheet_rows.next() {
            Some(cells) => cells,
            None => return (Vec::new(), Vec::new()),
        };

        let mut headers: Vec<(usize, String)> = Vec::new();
        for (idx, cell) in header_cells.iter().enumerate() {
            let name = Self::cell_to_header(cell);
            if name.is_empty() {
                continue;
            }
            if headers.iter().any(|(_, existing)| *existing == name) {
                continue;
            }
            headers.push((idx, name));
        }

        let mut rows = Vec::new();
        for cells in sheet_rows {
            let mut row = Row::new();
            for (idx, name) in &headers {
                let value = cells
                    .get(*idx)
                    .map(Self::cell_to_value)
                    .unwrap_or_else(|| Value::String(String::new()));
                row.insert(name.clone(), value);
            }
            if row_is_blank(&row) {
                continue;
            }
            rows.push(row);
        }

        let headers = headers.into_iter().map(|(_, name)| name).collect();
        (rows, headers)
    }

    /// Header cells are stringified and trimmed
    fn cell_to_header(cell: &Data) -> String {
        match cell {
            Data::Empty => String::new(),
            Data::String(s) => s.trim().to_string(),
            other => format!("{}", other).trim().to_string(),
        }
    }

    /// Data cells keep their native workbook type; empty cells default
    /// to an empty string. Date cells carry the raw serial number.
    fn cell_to_value(cell: &Data) -> Value {
        match cell {
            Data::Empty => Value::String(String::new()),
            Data::String(s) => Value::String(s.clone()),
            Data::Int(i) => Value::from(*i),
            Data::Float(f) => Value::from(*f),
            Data::Bool(b) => Value::Bool(*b),
            Data::DateTime(dt) => Value::from(dt.as_f64()),
            Data::DateTimeIso(s) => Value::String(s.clone()),
            Data::DurationIso(s) => Value::String(s.clone()),
            Data::Error(e) => Value::String(format!("{}", e)),
        }
    }
}
