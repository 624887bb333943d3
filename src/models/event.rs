use serde::{Deserialize, Serialize};
use std::collections::HashMap;

fn default_method() -> String {
    "GET".to_string()
}

/// HTTP-like event delivered by the function platform.
#[derive(Debug, Clone, Deserialize)]
pub struct IncomingEvent {
    #[serde(rename = "httpMethod", default = "default_method")]
    pub http_method: String,
    /// Raw request body. An absent body is treated as `{}` downstream; a
    /// present but malformed body is a processing failure.
    pub body: Option<String>,
}

/// Uniform response shape required by the invoking platform.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseEnvelope {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
    #[serde(rename = "isBase64Encoded")]
    pub is_base64_encoded: bool,
}

impl ResponseEnvelope {
    /// JSON response carrying the CORS and content-type headers every
    /// non-preflight path shares.
    pub fn json(status_code: u16, body: &serde_json::Value) -> Self {
        let headers = HashMap::from([
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Access-Control-Allow-Origin".to_string(), "*".to_string()),
        ]);

        Self {
            status_code,
            headers,
            body: body.to_string(),
            is_base64_encoded: false,
        }
    }

    pub fn error(status_code: u16, message: &str) -> Self {
        Self::json(status_code, &serde_json::json!({ "error": message }))
    }

    /// CORS preflight response: empty body, 24h max-age.
    pub fn preflight() -> Self {
        let headers = HashMap::from([
            ("Access-Control-Allow-Origin".to_string(), "*".to_string()),
            (
                "Access-Control-Allow-Methods".to_string(),
                "POST, OPTIONS".to_string(),
            ),
            (
                "Access-Control-Allow-Headers".to_string(),
                "Content-Type".to_string(),
            ),
            ("Access-Control-Max-Age".to_string(), "86400".to_string()),
        ]);

        Self {
            status_code: 200,
            headers,
            body: String::new(),
            is_base64_encoded: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_defaults() {
        let event: IncomingEvent = serde_json::from_str("{}").unwrap();
        assert_eq!(event.http_method, "GET");
        assert!(event.body.is_none());

        let event: IncomingEvent =
            serde_json::from_str(r#"{"httpMethod":"POST","body":"{}"}"#).unwrap();
        assert_eq!(event.http_method, "POST");
        assert_eq!(event.body.as_deref(), Some("{}"));
    }

    #[test]
    fn test_envelope_field_names() {
        let envelope = ResponseEnvelope::error(400, "Prompt is required");
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["statusCode"], 400);
        assert_eq!(value["isBase64Encoded"], false);
        assert_eq!(value["headers"]["Content-Type"], "application/json");
        assert_eq!(value["headers"]["Access-Control-Allow-Origin"], "*");
        assert_eq!(value["body"], r#"{"error":"Prompt is required"}"#);
    }

    #[test]
    fn test_preflight_headers() {
        let envelope = ResponseEnvelope::preflight();
        assert_eq!(envelope.status_code, 200);
        assert!(envelope.body.is_empty());
        assert_eq!(
            envelope.headers.get("Access-Control-Allow-Methods").unwrap(),
            "POST, OPTIONS"
        );
        assert_eq!(
            envelope.headers.get("Access-Control-Max-Age").unwrap(),
            "86400"
        );
    }
}
