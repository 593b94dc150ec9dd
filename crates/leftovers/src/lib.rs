//! Leftover food recipe generator.
//!
//! Turns a list of ingredients, a meal type and a cuisine into a recipe
//! using a pre-trained text-generation model, served through a small web UI.
//!
//! # Example
//!
//! ```no_run
//! use leftovers::{Cuisine, GenerationRequest, MealType, ModelConfig, ModelProvider, RecipeGenerator};
//! use std::sync::Arc;
//!
//! # async fn run() -> leftovers::LeftoversResult<()> {
//! let provider = Arc::new(ModelProvider::hugging_face(ModelConfig::default()));
//! let generator = RecipeGenerator::new(provider);
//!
//! let request = GenerationRequest::new("chicken\nrice", MealType::Dinner, Cuisine::Italian)?;
//! match generator.generate(&request).await {
//!     Ok(recipe) => println!("{}", recipe),
//!     Err(e) => eprintln!("{}", e),
//! }
//! # Ok(())
//! # }
//! ```

mod settings;

pub use settings::{DEFAULT_CONFIG_FILE, LeftoversConfig};

pub use leftovers_core::{
    Cuisine, DecodingConfig, GeneratedText, GenerationRequest, Ingredients, LogFormat, MealType,
    Prompt, Recipe, init_tracing,
};
pub use leftovers_error::{
    ConfigError, ConfigErrorKind, LeftoversError, LeftoversErrorKind, LeftoversResult, ModelError,
    ModelErrorKind, RecipeError, ServerError, ServerErrorKind, ValidationError, ValidationErrorKind,
};
pub use leftovers_interface::TextGenerator;
pub use leftovers_models::{
    DEFAULT_MODEL, HuggingFaceGenerator, ModelConfig, ModelFactory, ModelHandle, ModelProvider,
};
pub use leftovers_recipe::{RecipeGenerator, clean_output};
pub use leftovers_server::{ServerConfig, create_router, serve};
