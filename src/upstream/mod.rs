pub mod nano_banano;

use crate::{error::Result, models::UpstreamPayload};
use async_trait::async_trait;

pub use nano_banano::NanoBananoClient;

/// Raw reply from the generation service. Non-200 statuses are replies, not
/// errors; the handler decides what they mean.
#[derive(Debug, Clone)]
pub struct BackendReply {
    pub status: u16,
    pub body: String,
}

#[async_trait]
pub trait ImageBackend: Send + Sync {
    async fn generate(&self, payload: &UpstreamPayload) -> Result<BackendReply>;
}
