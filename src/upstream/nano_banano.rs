use crate::{
    config::UpstreamConfig,
    error::{GenerationError, Result},
    models::UpstreamPayload,
    upstream::{BackendReply, ImageBackend},
};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// HTTP client for the Nano Banano image generation API. The service is
/// unauthenticated; only the JSON payload is sent.
pub struct NanoBananoClient {
    client: Client,
    config: UpstreamConfig,
}

impl NanoBananoClient {
    pub fn new(config: UpstreamConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                GenerationError::ConfigError(format!("failed to build HTTP client: {}", e))
            })?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &UpstreamConfig {
        &self.config
    }
}

#[async_trait]
impl ImageBackend for NanoBananoClient {
    async fn generate(&self, payload: &UpstreamPayload) -> Result<BackendReply> {
        log::info!("Generating image with model: {}", payload.model);
        log::debug!("Upstream prompt: {}", payload.prompt);

        let response = self
            .client
            .post(&self.config.api_url)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenerationError::NetworkError(format!(
                        "upstream request timed out after {}s",
                        self.config.timeout_secs
                    ))
                } else {
                    GenerationError::NetworkError(format!("upstream request failed: {}", e))
                }
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            GenerationError::NetworkError(format!("failed to read upstream response: {}", e))
        })?;

        if status != 200 {
            log::warn!("Upstream returned status {}", status);
        }

        Ok(BackendReply { status, body })
    }
}
