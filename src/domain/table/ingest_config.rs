// ============================================================
// INGEST CONFIGURATION
// ============================================================
// Configuration values for file parsing and type inference

use serde::{Deserialize, Serialize};

/// Configuration for the ingestion pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestConfig {
    /// CSV delimiter. None enables automatic detection over
    /// comma, semicolon, tab and pipe.
    pub delimiter: Option<u8>,

    /// Trim surrounding whitespace from headers and values (default: true)
    pub trim_values: bool,

    /// Number of leading rows inspected for type inference (default: 1).
    /// A value of 1 reproduces the first-row sampling heuristic; larger
    /// values switch to a majority vote over the sample.
    pub infer_sample_rows: usize,

    /// Upper bound on rows inspected when voting (default: 100)
    pub max_sample_rows: usize,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            trim_values: true,
            infer_sample_rows: 1,
            max_sample_rows: 100,
        }
    }
}

impl IngestConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config with a fixed CSV delimiter
    pub fn with_delimiter(delimiter: u8) -> Self {
        Self {
            delimiter: Some(delimiter),
            ..Default::default()
        }
    }

    /// Create a config that votes over the whole inference sample window
    pub fn majority_vote() -> Self {
        Self {
            infer_sample_rows: 100,
            ..Default::default()
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.infer_sample_rows == 0 {
            return Err("infer_sample_rows must be > 0".to_string());
        }
        if self.infer_sample_rows > self.max_sample_rows {
            return Err("infer_sample_rows must be <= max_sample_rows".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(IngestConfig::default().validate().is_ok());
        assert_eq!(IngestConfig::default().infer_sample_rows, 1);
    }

    #[test]
    fn test_zero_sample_rows_rejected() {
        let config = IngestConfig {
            infer_sample_rows: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_sample_window_bound() {
        let config = IngestConfig {
            infer_sample_rows: 500,
            max_sample_rows: 100,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
