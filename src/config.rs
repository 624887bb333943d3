use std::env;

pub const DEFAULT_API_URL: &str = "https://ai.nano-banano.com/v1/images/generations";
pub const DEFAULT_MODEL: &str = "flux-realism";
pub const DEFAULT_IMAGE_SIZE: &str = "1024x1024";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Upstream generation service settings. Defaults match the public Nano
/// Banano endpoint; environment variables override them for staging and
/// test deployments.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub api_url: String,
    pub model: String,
    pub image_size: String,
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        UpstreamConfig {
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            image_size: DEFAULT_IMAGE_SIZE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl UpstreamConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(api_url) = env::var("NANO_BANANO_API_URL") {
            config.api_url = api_url;
        }
        if let Ok(model) = env::var("NANO_BANANO_MODEL") {
            config.model = model;
        }
        if let Ok(image_size) = env::var("NANO_BANANO_IMAGE_SIZE") {
            config.image_size = image_size;
        }
        if let Ok(timeout) = env::var("NANO_BANANO_TIMEOUT_SECS") {
            if let Ok(timeout) = timeout.parse() {
                config.timeout_secs = timeout;
            }
        }

        config
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_image_size(mut self, image_size: impl Into<String>) -> Self {
        self.image_size = image_size.into();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}
