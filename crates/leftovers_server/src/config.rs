//! Web server settings.

use derive_getters::Getters;
use serde::Deserialize;

/// Address the web UI listens on unless configured otherwise.
pub const DEFAULT_BIND: &str = "127.0.0.1:8501";

/// Configuration for the web UI listener.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Deserialize, derive_builder::Builder)]
#[builder(setter(into))]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to bind, e.g. "127.0.0.1:8501"
    #[builder(default = "DEFAULT_BIND.to_string()")]
    bind: String,
}

impl ServerConfig {
    /// Creates a new builder for `ServerConfig`.
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
        }
    }
}
