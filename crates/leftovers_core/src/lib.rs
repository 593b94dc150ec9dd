//! Core data types for the Leftovers recipe generator.
//!
//! This crate holds the values that flow through a single generation:
//! the user's selections, the prompt built from them, the fixed decoding
//! settings handed to the model, and the text that comes back.

mod decoding;
mod ingredients;
mod menu;
mod observability;
mod output;
mod prompt;
mod request;

pub use decoding::DecodingConfig;
pub use ingredients::Ingredients;
pub use menu::{Cuisine, MealType};
pub use observability::{LogFormat, init_tracing};
pub use output::{GeneratedText, Recipe};
pub use prompt::{PROMPT_SECTIONS, Prompt};
pub use request::{GenerationRequest, GenerationRequestBuilder};
