//! Layered configuration: defaults, TOML file, environment.

use derive_getters::Getters;
use leftovers_error::{ConfigError, ConfigErrorKind};
use leftovers_models::ModelConfig;
use leftovers_server::ServerConfig;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, instrument};

/// Config file read from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "leftovers.toml";

const ENV_PREFIX: &str = "LEFTOVERS";

/// Application configuration.
///
/// Sources, later ones overriding earlier ones:
/// 1. built-in defaults
/// 2. the TOML file (`leftovers.toml` if present, or an explicit path)
/// 3. `LEFTOVERS_*` environment variables, `__` between nesting levels
///    (e.g. `LEFTOVERS_SERVER__BIND`, `LEFTOVERS_MODEL__API_TOKEN`)
///
/// `HF_TOKEN` fills in the API token when none is configured.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Getters)]
#[serde(default)]
pub struct LeftoversConfig {
    /// Web UI settings
    server: ServerConfig,
    /// Model connection settings
    model: ModelConfig,
}

impl LeftoversConfig {
    /// Loads configuration from `path` (or [`DEFAULT_CONFIG_FILE`]) and the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if an explicit file is missing or any source
    /// is malformed.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let environment = ::config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__");
        let config = Self::load_from(path, environment)?;
        Ok(config.with_token_fallback(std::env::var("HF_TOKEN").ok()))
    }

    fn load_from(
        path: Option<&Path>,
        environment: ::config::Environment,
    ) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => ::config::File::from(path).required(true),
            None => ::config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let config: Self = ::config::Config::builder()
            .add_source(file)
            .add_source(environment)
            .build()
            .map_err(|e| ConfigError::new(ConfigErrorKind::Read(e.to_string())))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(ConfigErrorKind::Invalid(e.to_string())))?;

        debug!(bind = %config.server.bind(), inference_url = %config.model.inference_url(), "Configuration loaded");
        Ok(config)
    }

    /// Replaces the web UI bind address.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the server settings cannot be rebuilt.
    pub fn with_bind(mut self, bind: impl Into<String>) -> Result<Self, ConfigError> {
        let address = bind.into();
        self.server = ServerConfig::builder()
            .bind(address.as_str())
            .build()
            .map_err(|e| {
                ConfigError::new(ConfigErrorKind::Bind {
                    address,
                    message: e.to_string(),
                })
            })?;
        Ok(self)
    }

    fn with_token_fallback(mut self, token: Option<String>) -> Self {
        self.model = self.model.with_fallback_token(token);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leftovers_models::DEFAULT_INFERENCE_URL;
    use leftovers_server::DEFAULT_BIND;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(vars: &[(&str, &str)]) -> ::config::Environment {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ::config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .source(Some(source))
    }

    #[test]
    fn test_defaults_without_sources() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let config = LeftoversConfig::load_from(None, env(&[])).unwrap();
        assert_eq!(config.server().bind(), DEFAULT_BIND);
        assert_eq!(config.model().inference_url(), DEFAULT_INFERENCE_URL);
        assert!(*config.model().verify_on_load());

        let err = LeftoversConfig::load_from(Some(&missing), env(&[])).unwrap_err();
        assert!(matches!(err.kind, ConfigErrorKind::Read(_)));
    }

    #[test]
    fn test_malformed_value_is_invalid() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[model]\nverify_on_load = \"sometimes\"").unwrap();

        let err = LeftoversConfig::load_from(Some(file.path()), env(&[])).unwrap_err();
        assert!(matches!(err.kind, ConfigErrorKind::Invalid(_)));
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[server]\nbind = \"0.0.0.0:9000\"\n\n[model]\ninference_url = \"http://localhost:8080\"\nverify_on_load = false"
        )
        .unwrap();

        let config = LeftoversConfig::load_from(Some(file.path()), env(&[])).unwrap();
        assert_eq!(config.server().bind(), "0.0.0.0:9000");
        assert_eq!(config.model().inference_url(), "http://localhost:8080");
        assert!(!*config.model().verify_on_load());
    }

    #[test]
    fn test_environment_overrides_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[server]\nbind = \"0.0.0.0:9000\"").unwrap();

        let config = LeftoversConfig::load_from(
            Some(file.path()),
            env(&[
                ("LEFTOVERS_SERVER__BIND", "127.0.0.1:7000"),
                ("LEFTOVERS_MODEL__API_TOKEN", "hf_secret"),
            ]),
        )
        .unwrap();
        assert_eq!(config.server().bind(), "127.0.0.1:7000");
        assert_eq!(config.model().api_token().as_deref(), Some("hf_secret"));
    }

    #[test]
    fn test_token_fallback_and_bind_override() {
        let config = LeftoversConfig::default()
            .with_token_fallback(Some("hf_env".to_string()))
            .with_bind("0.0.0.0:80")
            .unwrap();
        assert_eq!(config.model().api_token().as_deref(), Some("hf_env"));
        assert_eq!(config.server().bind(), "0.0.0.0:80");
    }
}
