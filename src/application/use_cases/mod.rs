pub mod file_ingestion;
pub mod progress_tracker;
pub mod type_inference;
pub mod upload_flow;
