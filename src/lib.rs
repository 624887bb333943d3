pub mod config;
pub mod error;
pub mod handler;
pub mod logger;
pub mod models;
pub mod styles;
pub mod upstream;

pub use config::UpstreamConfig;
pub use error::{GenerationError, Result};
pub use handler::RequestHandler;
pub use models::{
    GeneratedImage, GenerationRequest, IncomingEvent, ResponseEnvelope, UpstreamPayload,
};
pub use upstream::{BackendReply, ImageBackend, NanoBananoClient};
