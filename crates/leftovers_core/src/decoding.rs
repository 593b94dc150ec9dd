//! Fixed decoding settings for recipe generation.

use derive_getters::Getters;
use serde::Serialize;

/// Parameters controlling how the model samples its output.
///
/// Recipe generation always uses [`DecodingConfig::RECIPE`]; the values are
/// not user-configurable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Getters)]
pub struct DecodingConfig {
    /// Maximum output length in tokens, prompt included
    max_length: u32,
    /// Number of candidate sequences returned
    num_return_sequences: u32,
    /// Stochastic sampling enabled
    do_sample: bool,
    /// Sampling temperature
    temperature: f32,
    /// Beam count
    num_beams: u32,
    /// No n-gram of this size may repeat
    no_repeat_ngram_size: u32,
    /// Stop beam search once every beam has finished
    early_stopping: bool,
}

impl DecodingConfig {
    /// The settings used for every recipe.
    pub const RECIPE: Self = Self {
        max_length: 500,
        num_return_sequences: 1,
        do_sample: true,
        temperature: 0.7,
        num_beams: 5,
        no_repeat_ngram_size: 2,
        early_stopping: true,
    };
}

impl Default for DecodingConfig {
    fn default() -> Self {
        Self::RECIPE
    }
}
