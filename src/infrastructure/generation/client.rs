use async_trait::async_trait;

use super::GenerationService;
use crate::domain::error::{AppError, Result};
use crate::domain::generation::{GenerationConfig, GenerationRequest, GenerationResult};

/// HTTP client for the generation backend
pub struct HttpGenerationClient {
    client: reqwest::Client,
}

impl HttpGenerationClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(config: &GenerationConfig, path: &str) -> String {
        if config.base_url.ends_with('/') {
            format!("{}{}", config.base_url, path)
        } else {
            format!("{}/{}", config.base_url, path)
        }
    }
}

impl Default for HttpGenerationClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerationService for HttpGenerationClient {
    async fn generate(
        &self,
        config: &GenerationConfig,
        request: &GenerationRequest,
    ) -> Result<GenerationResult> {
        request
            .validate()
            .map_err(AppError::ValidationError)?;

        let url = Self::endpoint(config, "generate");
        tracing::info!(
            url = %url,
            rows = request.row_count,
            domain = %request.domain,
            "Submitting generation request"
        );

        let mut builder = self.client.post(&url).json(request);
        if let Some(api_key) = &config.api_key {
            builder = builder.bearer_auth(api_key);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| AppError::GenerationError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::GenerationError(format!(
                "API error ({}): {}",
                status, text
            )));
        }

        response
            .json::<GenerationResult>()
            .await
            .map_err(|e| AppError::GenerationError(format!("Failed to parse response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::generation::QualityLevel;
    use crate::domain::table::Row;
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::Arc;

    fn sample_request() -> GenerationRequest {
        let mut row = Row::new();
        row.insert("age".to_string(), json!(30));

        GenerationRequest {
            sample_rows: vec![row],
            column_types: HashMap::new(),
            row_count: 10,
            domain: "retail".to_string(),
            quality_level: QualityLevel::Draft,
        }
    }

    #[test]
    fn test_endpoint_join() {
        let config = GenerationConfig {
            base_url: "http://localhost:8000/api".to_string(),
            api_key: None,
        };
        assert_eq!(
            HttpGenerationClient::endpoint(&config, "generate"),
            "http://localhost:8000/api/generate"
        );

        let config = GenerationConfig {
            base_url: "http://localhost:8000/api/".to_string(),
            api_key: None,
        };
        assert_eq!(
            HttpGenerationClient::endpoint(&config, "generate"),
            "http://localhost:8000/api/generate"
        );
    }

    #[tokio::test]
    async fn test_invalid_request_rejected_before_sending() {
        let mut request = sample_request();
        request.row_count = 0;

        let result = HttpGenerationClient::new()
            .generate(&GenerationConfig::default(), &request)
            .await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_generation_error() {
        let config = GenerationConfig {
            base_url: "http://127.0.0.1:1/api".to_string(),
            api_key: None,
        };

        let result = HttpGenerationClient::new()
            .generate(&config, &sample_request())
            .await;

        assert!(matches!(result, Err(AppError::GenerationError(_))));
    }

    #[tokio::test]
    async fn test_trait_is_object_safe() {
        struct CannedService;

        #[async_trait]
        impl GenerationService for CannedService {
            async fn generate(
                &self,
                _config: &GenerationConfig,
                request: &GenerationRequest,
            ) -> Result<GenerationResult> {
                Ok(GenerationResult {
                    job_id: "job-1".to_string(),
                    rows: request.sample_rows.clone(),
                    metrics: crate::domain::generation::QualityMetrics {
                        quality_score: 0.9,
                        privacy_score: 0.8,
                        bias_score: 0.1,
                    },
                })
            }
        }

        let service: Arc<dyn GenerationService + Send + Sync> = Arc::new(CannedService);
        let result = service
            .generate(&GenerationConfig::default(), &sample_request())
            .await
            .unwrap();

        assert_eq!(result.job_id, "job-1");
        assert_eq!(result.rows.len(), 1);
    }
}
