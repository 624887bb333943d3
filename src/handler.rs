use std::sync::Arc;

use serde_json::json;

use crate::{
    config::UpstreamConfig,
    error::{GenerationError, Result},
    models::{
        GeneratedImage, GenerationRequest, IncomingEvent, ResponseEnvelope, UpstreamPayload,
        UpstreamResponse,
    },
    styles,
    upstream::ImageBackend,
};

/// Maps one platform event to one response envelope. Failures never escape:
/// every error is converted into a JSON error envelope.
pub struct RequestHandler {
    config: UpstreamConfig,
    backend: Arc<dyn ImageBackend>,
}

impl RequestHandler {
    pub fn new(config: UpstreamConfig, backend: Arc<dyn ImageBackend>) -> Self {
        Self { config, backend }
    }

    pub async fn handle(&self, event: IncomingEvent) -> ResponseEnvelope {
        match event.http_method.as_str() {
            "OPTIONS" => ResponseEnvelope::preflight(),
            "POST" => {
                // Absent body falls back to an empty object; a present but
                // malformed body fails the parse below.
                let raw_body = event.body.as_deref().unwrap_or("{}");
                match self.process(raw_body).await {
                    Ok(envelope) => envelope,
                    Err(e) => {
                        log::error!("Image generation failed: {}", e);
                        ResponseEnvelope::json(
                            500,
                            &json!({ "error": e.to_string(), "type": e.kind() }),
                        )
                    }
                }
            }
            method => {
                log::warn!("Rejected {} request", method);
                ResponseEnvelope::error(405, "Method not allowed")
            }
        }
    }

    async fn process(&self, raw_body: &str) -> Result<ResponseEnvelope> {
        let request: GenerationRequest = serde_json::from_str(raw_body)
            .map_err(|e| GenerationError::SerializationError(format!("invalid request body: {}", e)))?;

        if request.prompt.is_empty() {
            return Ok(ResponseEnvelope::error(400, "Prompt is required"));
        }

        let payload = self.build_payload(&request);
        let reply = self.backend.generate(&payload).await?;

        if reply.status != 200 {
            return Ok(ResponseEnvelope::error(
                reply.status,
                &format!("API error: {}", reply.body),
            ));
        }

        let response: UpstreamResponse = serde_json::from_str(&reply.body).map_err(|e| {
            GenerationError::ResponseError(format!("invalid upstream response: {}", e))
        })?;

        let image = match response.data.as_deref() {
            Some([first, ..]) => first,
            _ => {
                log::error!("Upstream response contained no image data");
                return Ok(ResponseEnvelope::error(500, "No image data in response"));
            }
        };

        let body = GeneratedImage {
            success: true,
            image_url: image.image_url(),
            prompt: request.prompt,
            style: request.style,
        };
        let body = serde_json::to_value(&body)
            .map_err(|e| GenerationError::SerializationError(e.to_string()))?;

        Ok(ResponseEnvelope::json(200, &body))
    }

    fn build_payload(&self, request: &GenerationRequest) -> UpstreamPayload {
        let full_prompt = styles::compose_prompt(&request.prompt, &request.style);

        let mut payload = UpstreamPayload {
            model: self.config.model.clone(),
            prompt: full_prompt,
            n: 1,
            size: self.config.image_size.clone(),
            image: None,
        };

        // Image-to-image: forward the source image and reword the prompt.
        // An empty string is treated the same as no image.
        if let Some(input_image) = request.input_image.as_deref().filter(|s| !s.is_empty()) {
            payload.prompt = format!("modify this image: {}", payload.prompt);
            payload.image = Some(input_image.to_string());
        }

        payload
    }
}
