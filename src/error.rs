use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Request error: {0}")]
    RequestError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Response error: {0}")]
    ResponseError(String),
}

impl GenerationError {
    /// Variant name, surfaced as the `type` field of the catch-all error body.
    pub fn kind(&self) -> &'static str {
        match self {
            GenerationError::ConfigError(_) => "ConfigError",
            GenerationError::RequestError(_) => "RequestError",
            GenerationError::SerializationError(_) => "SerializationError",
            GenerationError::NetworkError(_) => "NetworkError",
            GenerationError::ResponseError(_) => "ResponseError",
        }
    }
}

pub type Result<T> = std::result::Result<T, GenerationError>;
