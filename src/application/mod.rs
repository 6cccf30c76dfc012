pub mod use_cases;

pub use use_cases::file_ingestion::FileIngestionUseCase;
pub use use_cases::progress_tracker::{ActivityEntry, JobProgress, ProgressTracker};
pub use use_cases::type_inference::TypeInference;
pub use use_cases::upload_flow::UploadFlow;
