//! HuggingFace Inference API data transfer objects.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Text-generation request body.
#[derive(Debug, Clone, PartialEq, Serialize, Getters, Builder)]
#[builder(setter(into))]
pub struct HuggingFaceRequest {
    /// Input text
    inputs: String,
    /// Generation parameters
    parameters: HuggingFaceParameters,
    /// Inference options
    #[builder(default)]
    options: HuggingFaceOptions,
}

impl HuggingFaceRequest {
    /// Creates a new builder for `HuggingFaceRequest`.
    pub fn builder() -> HuggingFaceRequestBuilder {
        HuggingFaceRequestBuilder::default()
    }
}

/// Generation parameters, named as the transformers pipeline expects them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Getters)]
pub struct HuggingFaceParameters {
    /// Maximum total length in tokens
    max_length: u32,
    /// Number of sequences to return
    num_return_sequences: u32,
    /// Use sampling
    do_sample: bool,
    /// Sampling temperature
    temperature: f32,
    /// Beam count
    num_beams: u32,
    /// Forbid repeating n-grams of this size
    no_repeat_ngram_size: u32,
    /// Stop beam search early
    early_stopping: bool,
    /// Include the prompt in `generated_text`
    return_full_text: bool,
}

/// Inference API options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct HuggingFaceOptions {
    /// Block until the model is loaded instead of returning 503
    wait_for_model: bool,
    /// Allow the API to return a cached result
    use_cache: bool,
}

impl Default for HuggingFaceOptions {
    fn default() -> Self {
        Self {
            wait_for_model: true,
            use_cache: false,
        }
    }
}

/// One generated sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct HuggingFaceResponse {
    /// Prompt followed by the generated continuation
    generated_text: String,
}

/// Error payload returned by the Inference API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct HuggingFaceErrorBody {
    /// Error message
    error: String,
}

/// Subset of the Hub model metadata.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct HubModelInfo {
    /// Repository identifier
    #[serde(default, rename = "modelId")]
    model_id: Option<String>,
    /// Task the model serves, e.g. `text-generation`
    #[serde(default)]
    pipeline_tag: Option<String>,
}

impl HuggingFaceParameters {
    pub(super) fn new(
        max_length: u32,
        num_return_sequences: u32,
        do_sample: bool,
        temperature: f32,
        num_beams: u32,
        no_repeat_ngram_size: u32,
        early_stopping: bool,
    ) -> Self {
        Self {
            max_length,
            num_return_sequences,
            do_sample,
            temperature,
            num_beams,
            no_repeat_ngram_size,
            early_stopping,
            return_full_text: true,
        }
    }
}
