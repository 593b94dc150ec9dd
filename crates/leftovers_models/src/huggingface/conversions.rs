//! Conversions between Leftovers types and the Inference API format.

use super::{HuggingFaceParameters, HuggingFaceRequest, HuggingFaceResponse};
use leftovers_core::{DecodingConfig, GeneratedText, Prompt};
use leftovers_error::{ModelError, ModelErrorKind};

impl From<&DecodingConfig> for HuggingFaceParameters {
    fn from(config: &DecodingConfig) -> Self {
        HuggingFaceParameters::new(
            *config.max_length(),
            *config.num_return_sequences(),
            *config.do_sample(),
            *config.temperature(),
            *config.num_beams(),
            *config.no_repeat_ngram_size(),
            *config.early_stopping(),
        )
    }
}

/// Builds the request body for a prompt.
pub fn to_request(
    prompt: &Prompt,
    config: &DecodingConfig,
) -> Result<HuggingFaceRequest, ModelError> {
    HuggingFaceRequest::builder()
        .inputs(prompt.as_str())
        .parameters(HuggingFaceParameters::from(config))
        .build()
        .map_err(|e| {
            ModelError::new(ModelErrorKind::Other(format!(
                "Failed to build request: {}",
                e
            )))
        })
}

/// Collects the generated sequences, rejecting an empty response.
pub fn from_response(responses: Vec<HuggingFaceResponse>) -> Result<GeneratedText, ModelError> {
    if responses.is_empty() {
        return Err(ModelError::new(ModelErrorKind::EmptyResponse));
    }

    Ok(GeneratedText::new(
        responses
            .into_iter()
            .map(|r| r.generated_text().clone())
            .collect(),
    ))
}
