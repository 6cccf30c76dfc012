// ============================================================
// CSV PARSER
// ============================================================
// Parse delimited text into rows with encoding and delimiter detection

use csv::{ReaderBuilder, Trim};
use serde_json::Value;

use crate::domain::error::{AppError, Result};
use crate::domain::table::Row;

/// CSV parser with delimiter and encoding detection
pub struct CsvTableParser {
    /// Delimiter character (default: comma)
    delimiter: u8,

    /// Whether to trim whitespace from headers and values
    trim: bool,
}

impl Default for CsvTableParser {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
        }
    }
}

impl CsvTableParser {
    /// Create a new CSV parser with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set whether to trim whitespace
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Parse raw file bytes, decoding the text first
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<(Vec<Row>, Vec<String>)> {
        let content = Self::decode_bytes(bytes);
        self.parse_content(&content)
    }

    /// Parse CSV content from string.
    /// The first record is the header row. Rows where every field is
    /// empty are dropped before any shape check; any other row whose
    /// field count differs from the header aborts the whole call.
    pub fn parse_content(&self, content: &str) -> Result<(Vec<Row>, Vec<String>)> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(if self.trim { Trim::All } else { Trim::None })
            .flexible(true) // Shape errors are reported per row below
            .from_reader(content.as_bytes());

        let header_record = reader
            .headers()
            .map_err(|e| AppError::ParseError(format!("Failed to read CSV headers: {}", e)))?
            .clone();
        let expected_fields = header_record.len();

        // Empty header cells are discarded along with their columns;
        // a duplicate header keeps the first column.
        let mut headers: Vec<(usize, String)> = Vec::new();
        for (idx, name) in header_record.iter().enumerate() {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            if headers.iter().any(|(_, existing)| existing == name) {
                continue;
            }
            headers.push((idx, name.to_string()));
        }

        let mut rows = Vec::new();

        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                AppError::ParseError(format!("Failed to parse CSV row {}: {}", index + 1, e))
            })?;

            if record.iter().all(|field| field.trim().is_empty()) {
                continue;
            }

            if record.len() != expected_fields {
                return Err(AppError::ParseError(format!(
                    "Failed to parse CSV row {}: expected {} fields, found {}",
                    index + 1,
                    expected_fields,
                    record.len()
                )));
            }

            let mut row = Row::new();
            for (idx, name) in &headers {
                let raw = record.get(*idx).unwrap_or("");
                row.insert(name.clone(), Self::coerce_scalar(raw));
            }
            rows.push(row);
        }

        let headers = headers.into_iter().map(|(_, name)| name).collect();
        Ok((rows, headers))
    }

    /// Decode file bytes as UTF-8, falling back to Windows-1252
    pub fn decode_bytes(bytes: &[u8]) -> String {
        let text = match std::str::from_utf8(bytes) {
            Ok(text) => text.to_string(),
            Err(_) => {
                let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
                decoded.into_owned()
            }
        };

        // Strip the UTF-8 BOM that Excel prepends to exported CSVs
        text.strip_prefix('\u{feff}').unwrap_or(&text).to_string()
    }

    /// Convert a raw CSV field into a typed scalar: numeric text becomes
    /// a number, true/false become booleans, everything else stays text
    fn coerce_scalar(raw: &str) -> Value {
        if raw.is_empty() {
            return Value::String(String::new());
        }
        match raw {
            "true" => return Value::Bool(true),
            "false" => return Value::Bool(false),
            _ => {}
        }
        if let Ok(int) = raw.parse::<i64>() {
            return Value::from(int);
        }
        if let Ok(float) = raw.parse::<f64>() {
            if float.is_finite() {
                return Value::from(float);
            }
        }
        Value::String(raw.to_string())
    }

    /// Detect delimiter from content (comma, semicolon, tab, pipe)
    pub fn detect_delimiter(content: &str) -> u8 {
        let candidates = [b',', b';', b'\t', b'|'];

        let sample_lines: Vec<_> = content.lines().take(10).collect();
        if sample_lines.is_empty() {
            return b',';
        }

        let mut best_delimiter = b',';
        let mut best_score = 0.0f32;

        for &delimiter in &candidates {
            let field_counts: Vec<usize> = sample_lines
                .iter()
                .map(|line| line.bytes().filter(|&b| b == delimiter).count())
                .collect();

            // Score by frequency, penalized by inconsistency across lines
            let avg = field_counts.iter().sum::<usize>() as f32 / field_counts.len() as f32;
            let variance = field_counts
                .iter()
                .map(|&x| (x as f32 - avg).powi(2))
                .sum::<f32>()
                / field_counts.len() as f32;

            let score = avg / (1.0 + variance.sqrt());
            if score > best_score {
                best_score = score;
                best_delimiter = delimiter;
            }
        }

        best_delimiter
    }
}
