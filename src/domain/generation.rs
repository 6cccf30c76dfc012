// ============================================================
// GENERATION SERVICE TYPES
// ============================================================
// Request/response boundary to the external synthetic data
// generation service. The service itself is opaque: one request,
// one result, progress delivered out-of-band per job.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::table::{ColumnType, ParsedTable, Row};

/// Trade-off between generation speed and output fidelity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityLevel {
    Draft,
    Balanced,
    High,
}

impl Default for QualityLevel {
    fn default() -> Self {
        QualityLevel::Balanced
    }
}

/// Connection settings for the generation service, passed by value
/// into each call. The pipeline holds no ambient session state.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GenerationConfig {
    pub base_url: String,
    pub api_key: Option<String>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api".to_string(),
            api_key: None,
        }
    }
}

/// A request to synthesize rows from a sample
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Representative rows the service models its output on
    pub sample_rows: Vec<Row>,

    /// Inferred types for the sample's columns
    pub column_types: HashMap<String, ColumnType>,

    /// Number of synthetic rows requested
    pub row_count: u32,

    /// Free-text description of the data domain, e.g. "healthcare"
    pub domain: String,

    #[serde(default)]
    pub quality_level: QualityLevel,
}

impl GenerationRequest {
    /// Build a request from a parsed upload, using its leading rows
    /// as the generation sample
    pub fn from_table(
        table: &ParsedTable,
        sample_size: usize,
        row_count: u32,
        domain: impl Into<String>,
        quality_level: QualityLevel,
    ) -> Self {
        Self {
            sample_rows: table.rows.iter().take(sample_size.max(1)).cloned().collect(),
            column_types: table.column_types.clone(),
            row_count,
            domain: domain.into(),
            quality_level,
        }
    }

    /// Validate request values before submission
    pub fn validate(&self) -> Result<(), String> {
        if self.sample_rows.is_empty() {
            return Err("sample_rows must contain at least one row".to_string());
        }
        if self.row_count == 0 {
            return Err("row_count must be > 0".to_string());
        }
        if self.domain.trim().is_empty() {
            return Err("domain must not be empty".to_string());
        }
        Ok(())
    }
}

/// Quality scores reported alongside a generated result set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityMetrics {
    pub quality_score: f32,
    pub privacy_score: f32,
    pub bias_score: f32,
}

/// Result set returned by the generation service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    pub job_id: String,
    pub rows: Vec<Row>,
    pub metrics: QualityMetrics,
}

/// One backend-reported progress update for a generation job.
/// progress is 0-100, or -1 when the job failed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressEvent {
    pub job_id: String,
    pub progress: i32,
    pub message: String,
    pub phase: String,
}

impl ProgressEvent {
    pub fn is_error(&self) -> bool {
        self.progress < 0
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= 100
    }
}
