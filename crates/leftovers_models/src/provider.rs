//! Lazily constructed, shared model handle.

use crate::{DEFAULT_MODEL, HuggingFaceGenerator, ModelConfig};
use async_trait::async_trait;
use leftovers_error::ModelError;
use leftovers_interface::TextGenerator;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, info, instrument, warn};

/// Shared handle to a text-generation model.
pub type ModelHandle = Arc<dyn TextGenerator>;

/// Constructs the model handle on first use.
#[async_trait]
pub trait ModelFactory: Send + Sync {
    /// Build a new handle.
    async fn create(&self) -> Result<ModelHandle, ModelError>;
}

/// Builds a [`HuggingFaceGenerator`] for the fixed recipe model.
#[derive(Debug, Clone)]
pub struct HuggingFaceFactory {
    model: String,
    config: ModelConfig,
}

impl HuggingFaceFactory {
    /// Factory for [`DEFAULT_MODEL`].
    pub fn new(config: ModelConfig) -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            config,
        }
    }
}

#[async_trait]
impl ModelFactory for HuggingFaceFactory {
    async fn create(&self) -> Result<ModelHandle, ModelError> {
        let generator = HuggingFaceGenerator::connect(&self.model, &self.config).await?;
        Ok(Arc::new(generator))
    }
}

/// Hands out an already built handle.
struct Prebuilt(ModelHandle);

#[async_trait]
impl ModelFactory for Prebuilt {
    async fn create(&self) -> Result<ModelHandle, ModelError> {
        Ok(Arc::clone(&self.0))
    }
}

/// Owns the single model handle for the life of the process.
///
/// The handle is built by the factory on the first call to
/// [`get_model`](Self::get_model) and every later call returns the same
/// `Arc`. Concurrent first calls wait on one construction. A failed
/// construction is not cached, so the next call tries again.
pub struct ModelProvider {
    factory: Box<dyn ModelFactory>,
    handle: OnceCell<ModelHandle>,
}

impl ModelProvider {
    /// Provider that builds its handle with `factory`.
    pub fn new(factory: impl ModelFactory + 'static) -> Self {
        Self {
            factory: Box::new(factory),
            handle: OnceCell::new(),
        }
    }

    /// Provider for the hosted recipe model.
    pub fn hugging_face(config: ModelConfig) -> Self {
        Self::new(HuggingFaceFactory::new(config))
    }

    /// Provider that already holds `handle`.
    pub fn with_handle(handle: ModelHandle) -> Self {
        Self {
            factory: Box::new(Prebuilt(Arc::clone(&handle))),
            handle: OnceCell::new_with(Some(handle)),
        }
    }

    /// Returns the shared handle, building it on first use.
    ///
    /// # Errors
    ///
    /// Returns the factory's error when construction fails.
    #[instrument(skip(self))]
    pub async fn get_model(&self) -> Result<ModelHandle, ModelError> {
        if let Some(handle) = self.handle.get() {
            return Ok(Arc::clone(handle));
        }

        let handle = self
            .handle
            .get_or_try_init(|| async {
                info!("Loading text-generation model");
                self.factory.create().await.inspect_err(|e| {
                    warn!(error = %e, "Model construction failed");
                })
            })
            .await?;

        debug!(model = handle.model_name(), "Model handle available");
        Ok(Arc::clone(handle))
    }

    /// Whether the handle has been built.
    pub fn is_loaded(&self) -> bool {
        self.handle.initialized()
    }
}

impl std::fmt::Debug for ModelProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelProvider")
            .field("loaded", &self.is_loaded())
            .finish()
    }
}
