// ============================================================
// FILE INGESTION USE CASE
// ============================================================
// Convert an uploaded file into a uniform row table: dispatch by
// extension, parse, filter blank rows, derive headers, infer types

use std::path::Path;

use crate::domain::error::{AppError, Result};
use crate::domain::table::{IngestConfig, ParsedTable, UploadedFile};
use crate::infrastructure::parsers::{CsvTableParser, JsonTableParser, XlsxTableParser};

use super::type_inference::TypeInference;

/// Extensions the pipeline accepts
const SUPPORTED_EXTENSIONS: &[&str] = &["csv", "xlsx", "xls", "json"];

/// File ingestion use case
pub struct FileIngestionUseCase {
    config: IngestConfig,
}

impl FileIngestionUseCase {
    /// Create a new ingestion pipeline
    pub fn new(config: IngestConfig) -> Self {
        Self { config }
    }

    /// Parse a file from disk
    pub async fn ingest_file(&self, file_path: &str) -> Result<ParsedTable> {
        let path = Path::new(file_path);

        if !path.exists() {
            return Err(AppError::IoError(format!("File not found: {}", file_path)));
        }

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| AppError::ValidationError("Invalid file name".to_string()))?
            .to_string();

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| AppError::IoError(format!("Failed to read {}: {}", file_name, e)))?;

        self.ingest_bytes(&file_name, &bytes)
    }

    /// Parse in-memory file contents. Pure transformation: the same
    /// name and bytes always produce the same table or the same error,
    /// and a failure never yields a partially filled table.
    pub fn ingest_bytes(&self, file_name: &str, bytes: &[u8]) -> Result<ParsedTable> {
        self.config
            .validate()
            .map_err(|e| AppError::ValidationError(format!("Invalid ingest config: {}", e)))?;

        let extension = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .unwrap_or_default();

        tracing::info!(file = file_name, format = %extension, "Parsing uploaded file");

        let (rows, headers) = match extension.as_str() {
            "csv" => {
                let content = CsvTableParser::decode_bytes(bytes);
                let delimiter = self
                    .config
                    .delimiter
                    .unwrap_or_else(|| CsvTableParser::detect_delimiter(&content));
                CsvTableParser::new()
                    .with_delimiter(delimiter)
                    .with_trim(self.config.trim_values)
                    .parse_content(&content)?
            }
            "xlsx" | "xls" => XlsxTableParser::parse_bytes(bytes)?,
            "json" => {
                let content = std::str::from_utf8(bytes).map_err(|_| {
                    AppError::ParseError("Invalid JSON format: file is not valid UTF-8".to_string())
                })?;
                JsonTableParser::parse_content(content)?
            }
            _ => {
                return Err(AppError::UnsupportedFormat(format!(
                    "Cannot parse {}: accepted formats are {}",
                    file_name,
                    SUPPORTED_EXTENSIONS.join(", ")
                )))
            }
        };

        if rows.is_empty() {
            return Err(AppError::EmptyResult(format!(
                "No data found in {}",
                file_name
            )));
        }
        if headers.is_empty() {
            return Err(AppError::EmptyResult(format!(
                "No columns detected in {}",
                file_name
            )));
        }

        let column_types = TypeInference::new(self.config.clone()).infer(&rows, &headers);

        tracing::info!(
            file = file_name,
            rows = rows.len(),
            columns = headers.len(),
            "Parsed uploaded file"
        );

        Ok(ParsedTable {
            rows,
            headers,
            column_types,
        })
    }

    /// Parse a file and wrap the outcome as an upload-list entry
    /// instead of propagating the error
    pub async fn ingest_upload(&self, file_path: &str) -> UploadedFile {
        let file_name = Path::new(file_path)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(file_path)
            .to_string();

        match self.ingest_file(file_path).await {
            Ok(table) => UploadedFile::success(file_name, table),
            Err(e) => {
                tracing::error!(file = %file_name, error = %e, "Upload failed");
                UploadedFile::failed(file_name, e.to_string())
            }
        }
    }
}

impl Default for FileIngestionUseCase {
    fn default() -> Self {
        Self::new(IngestConfig::default())
    }
}
