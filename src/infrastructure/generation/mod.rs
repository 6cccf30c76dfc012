pub mod client;

use async_trait::async_trait;

use crate::domain::error::Result;
use crate::domain::generation::{GenerationConfig, GenerationRequest, GenerationResult};

pub use client::HttpGenerationClient;

/// Boundary to the external synthetic data generation service.
/// One request, one result; progress arrives out-of-band as
/// ProgressEvents keyed by the returned job id.
#[async_trait]
pub trait GenerationService {
    async fn generate(
        &self,
        config: &GenerationConfig,
        request: &GenerationRequest,
    ) -> Result<GenerationResult>;
}
