//! Connection settings for the hosted model.

use derive_getters::Getters;
use serde::Deserialize;

/// Pre-trained model every recipe is generated with.
pub const DEFAULT_MODEL: &str = "gpt2";

/// HuggingFace Inference API base URL.
pub const DEFAULT_INFERENCE_URL: &str = "https://router.huggingface.co/hf-inference";

/// HuggingFace Hub base URL, used to verify the model on load.
pub const DEFAULT_HUB_URL: &str = "https://huggingface.co";

/// Where and how to reach the text-generation model.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize, derive_builder::Builder)]
#[builder(setter(into))]
#[serde(default)]
pub struct ModelConfig {
    /// Base URL of the inference API
    #[builder(default = "DEFAULT_INFERENCE_URL.to_string()")]
    inference_url: String,
    /// Base URL of the model hub
    #[builder(default = "DEFAULT_HUB_URL.to_string()")]
    hub_url: String,
    /// Optional bearer token
    #[builder(default)]
    api_token: Option<String>,
    /// Check the model exists and serves text generation before first use
    #[builder(default = "true")]
    verify_on_load: bool,
}

impl ModelConfig {
    /// Creates a new builder for `ModelConfig`.
    pub fn builder() -> ModelConfigBuilder {
        ModelConfigBuilder::default()
    }

    /// Returns a copy using `token` when no token is configured.
    pub fn with_fallback_token(mut self, token: Option<String>) -> Self {
        if self.api_token.is_none() {
            self.api_token = token.filter(|t| !t.is_empty());
        }
        self
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            inference_url: DEFAULT_INFERENCE_URL.to_string(),
            hub_url: DEFAULT_HUB_URL.to_string(),
            api_token: None,
            verify_on_load: true,
        }
    }
}
