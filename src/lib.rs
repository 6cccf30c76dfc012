pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::use_cases::file_ingestion::FileIngestionUseCase;
pub use application::use_cases::progress_tracker::{ActivityEntry, JobProgress, ProgressTracker};
pub use application::use_cases::type_inference::TypeInference;
pub use application::use_cases::upload_flow::UploadFlow;
pub use domain::error::{AppError, Result};
pub use domain::generation::{
    GenerationConfig, GenerationRequest, GenerationResult, ProgressEvent, QualityLevel,
    QualityMetrics,
};
pub use domain::table::{
    ColumnType, ColumnTypeMap, IngestConfig, ParsedTable, Row, UploadPhase, UploadStatus,
    UploadedFile,
};
pub use infrastructure::generation::{GenerationService, HttpGenerationClient};
