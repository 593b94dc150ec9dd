//! Text-generation model integrations for Leftovers.
//!
//! - [`HuggingFaceGenerator`] drives the HuggingFace Inference API
//!   text-generation task.
//! - [`ModelProvider`] constructs a model handle once, on first use, and
//!   hands the same handle to every later caller.

mod config;
mod huggingface;
mod provider;

pub use config::{DEFAULT_HUB_URL, DEFAULT_INFERENCE_URL, DEFAULT_MODEL, ModelConfig, ModelConfigBuilder};
pub use huggingface::{
    HubModelInfo, HuggingFaceErrorBody, HuggingFaceGenerator, HuggingFaceOptions,
    HuggingFaceParameters, HuggingFaceRequest, HuggingFaceRequestBuilder, HuggingFaceResponse,
};
pub use provider::{HuggingFaceFactory, ModelFactory, ModelHandle, ModelProvider};
