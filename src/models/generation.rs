use serde::{Deserialize, Serialize};

use crate::styles;

fn default_style() -> String {
    styles::DEFAULT_STYLE.to_string()
}

/// Client request parsed from the event body.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationRequest {
    #[serde(default)]
    pub prompt: String,
    #[serde(default = "default_style")]
    pub style: String,
    /// Base64-encoded source image for image-to-image generation, forwarded
    /// upstream without decoding.
    #[serde(rename = "inputImage")]
    pub input_image: Option<String>,
}

/// Payload sent to the generation service.
#[derive(Debug, Clone, Serialize)]
pub struct UpstreamPayload {
    pub model: String,
    pub prompt: String,
    pub n: u32,
    pub size: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Success shape returned by the generation service.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamResponse {
    pub data: Option<Vec<UpstreamImage>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamImage {
    pub url: Option<String>,
    pub b64_json: Option<String>,
}

impl UpstreamImage {
    /// An empty `url` counts as absent; the `b64_json` fallback is returned
    /// as-is, even when it is missing or empty.
    pub fn image_url(&self) -> Option<String> {
        self.url
            .clone()
            .filter(|url| !url.is_empty())
            .or_else(|| self.b64_json.clone())
    }
}

/// Body of a successful handler response, echoing the original request
/// values rather than the composed prompt.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedImage {
    pub success: bool,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
    pub prompt: String,
    pub style: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let request: GenerationRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.prompt, "");
        assert_eq!(request.style, "modern");
        assert!(request.input_image.is_none());
    }

    #[test]
    fn test_payload_omits_absent_image() {
        let payload = UpstreamPayload {
            model: "flux-realism".to_string(),
            prompt: "a cat, ".to_string(),
            n: 1,
            size: "1024x1024".to_string(),
            image: None,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("image").is_none());
        assert_eq!(value["n"], 1);
        assert_eq!(value["size"], "1024x1024");
    }

    #[test]
    fn test_image_url_prefers_url() {
        let image = UpstreamImage {
            url: Some("http://x/y.png".to_string()),
            b64_json: Some("abc".to_string()),
        };
        assert_eq!(image.image_url().as_deref(), Some("http://x/y.png"));
    }

    #[test]
    fn test_empty_url_falls_back() {
        let image = UpstreamImage {
            url: Some(String::new()),
            b64_json: Some("abc".to_string()),
        };
        assert_eq!(image.image_url().as_deref(), Some("abc"));

        let neither = UpstreamImage {
            url: Some(String::new()),
            b64_json: None,
        };
        assert!(neither.image_url().is_none());
    }

    #[test]
    fn test_generated_image_serializes_null_url() {
        let body = GeneratedImage {
            success: true,
            image_url: None,
            prompt: "a cat".to_string(),
            style: "modern".to_string(),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["imageUrl"], serde_json::Value::Null);
        assert_eq!(value["success"], true);
    }
}
