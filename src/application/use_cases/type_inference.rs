// ============================================================
// TYPE INFERENCE USE CASE
// ============================================================
// Assign a semantic type to each column by inspecting a leading
// sample of rows. Best-effort heuristic, never a validated schema.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::domain::table::{ColumnType, ColumnTypeMap, IngestConfig, Row};

/// Date-only layouts accepted by the permissive date rule
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%d %b %Y",
    "%b %d, %Y",
    "%B %d, %Y",
];

/// Date-time layouts accepted by the permissive date rule
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Column type inference over a parsed table
pub struct TypeInference {
    config: IngestConfig,
}

impl TypeInference {
    /// Create a new inference pass with the given config
    pub fn new(config: IngestConfig) -> Self {
        Self { config }
    }

    /// Infer a type per column from a leading sample of rows.
    /// With the default config only the first row is inspected; larger
    /// sample windows take a majority vote with first-seen tie-breaking.
    /// Inference never fails: a field it cannot read degrades to string.
    pub fn infer(&self, rows: &[Row], headers: &[String]) -> ColumnTypeMap {
        let sample_size = self
            .config
            .infer_sample_rows
            .min(self.config.max_sample_rows)
            .max(1)
            .min(rows.len());
        let sample = &rows[..sample_size];

        let mut types = ColumnTypeMap::new();
        for header in headers {
            types.insert(header.clone(), Self::vote_column(sample, header));
        }
        types
    }

    /// Majority vote over the sample for one column
    fn vote_column(sample: &[Row], header: &str) -> ColumnType {
        // (type, count) pairs in first-seen order so ties keep the
        // earliest observed type
        let mut votes: Vec<(ColumnType, usize)> = Vec::new();

        for row in sample {
            let candidate = match row.get(header) {
                Some(value) => Self::classify(value),
                None => ColumnType::String,
            };
            match votes.iter_mut().find(|(t, _)| *t == candidate) {
                Some((_, count)) => *count += 1,
                None => votes.push((candidate, 1)),
            }
        }

        let mut winner = ColumnType::String;
        let mut winner_votes = 0;
        for (candidate, count) in votes {
            if count > winner_votes {
                winner = candidate;
                winner_votes = count;
            }
        }
        winner
    }

    /// Ordered predicates: numeric, boolean, email, date, string.
    /// Non-scalar values (objects, arrays, null) fall through to string.
    pub fn classify(value: &Value) -> ColumnType {
        match value {
            Value::Number(_) => ColumnType::Number,
            Value::Bool(_) => ColumnType::Boolean,
            Value::String(s) => {
                if s.contains('@') {
                    ColumnType::Email
                } else if Self::is_date_string(s) {
                    ColumnType::Date
                } else {
                    ColumnType::String
                }
            }
            _ => ColumnType::String,
        }
    }

    /// Permissive date test over a fixed set of common layouts
    fn is_date_string(value: &str) -> bool {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return false;
        }

        if DateTime::parse_from_rfc3339(trimmed).is_ok()
            || DateTime::parse_from_rfc2822(trimmed).is_ok()
        {
            return true;
        }
        if DATE_FORMATS
            .iter()
            .any(|fmt| NaiveDate::parse_from_str(trimmed, fmt).is_ok())
        {
            return true;
        }
        DATETIME_FORMATS
            .iter()
            .any(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).is_ok())
    }
}

impl Default for TypeInference {
    fn default() -> Self {
        Self::new(IngestConfig::default())
    }
}
