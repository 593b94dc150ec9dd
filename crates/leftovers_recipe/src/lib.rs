//! Recipe generation from leftover ingredients.
//!
//! [`RecipeGenerator`] turns a [`GenerationRequest`](leftovers_core::GenerationRequest)
//! into a prompt, runs it through the shared model with the fixed recipe
//! decoding settings, and strips the echoed prompt from the output.

mod cleanup;
mod generator;

pub use cleanup::clean_output;
pub use generator::RecipeGenerator;
