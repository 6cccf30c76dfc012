// ============================================================
// TABLE DOMAIN LAYER
// ============================================================
// Core types and value objects for tabular ingestion
// No I/O, no async, no external dependencies

mod column_type;
mod dataset;
mod ingest_config;

pub use column_type::ColumnType;
pub use dataset::{
    ColumnTypeMap, ParsedTable, Row, UploadPhase, UploadStatus, UploadedFile,
};
pub use ingest_config::IngestConfig;
