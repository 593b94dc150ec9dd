//! The text-generation capability.

use async_trait::async_trait;
use leftovers_core::{DecodingConfig, GeneratedText, Prompt};
use leftovers_error::ModelError;

/// A handle to a pre-trained text-generation model.
///
/// Implementations are stateless from the caller's perspective: the same
/// handle may be shared across requests for the life of the process.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Identifier of the underlying model (e.g. `gpt2`).
    fn model_name(&self) -> &str;

    /// Generate continuations of `prompt`.
    ///
    /// Each returned candidate is the prompt followed by the model's
    /// continuation.
    ///
    /// # Errors
    ///
    /// Returns a [`ModelError`] for any transport, API or parsing failure.
    async fn generate(
        &self,
        prompt: &Prompt,
        config: &DecodingConfig,
    ) -> Result<GeneratedText, ModelError>;
}
