//! The recipe generator.

use leftovers_core::{DecodingConfig, GenerationRequest, Prompt, Recipe};
use leftovers_error::{ModelError, ModelErrorKind, RecipeError};
use leftovers_models::ModelProvider;
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

use crate::clean_output;

/// Generates one recipe per request using the shared model.
#[derive(Debug, Clone)]
pub struct RecipeGenerator {
    provider: Arc<ModelProvider>,
    decoding: DecodingConfig,
}

impl RecipeGenerator {
    /// Creates a generator that draws its model from `provider`.
    pub fn new(provider: Arc<ModelProvider>) -> Self {
        Self {
            provider,
            decoding: DecodingConfig::RECIPE,
        }
    }

    /// The provider backing this generator.
    pub fn provider(&self) -> &Arc<ModelProvider> {
        &self.provider
    }

    /// Generates a recipe for `request`.
    ///
    /// Any failure while loading or invoking the model is caught and returned
    /// as a [`RecipeError`]; this never panics on model failure.
    ///
    /// # Errors
    ///
    /// Returns a [`RecipeError`] describing the generation failure.
    #[instrument(
        skip(self, request),
        fields(
            meal_type = %request.meal_type(),
            cuisine = %request.cuisine(),
            prompt_len = tracing::field::Empty
        )
    )]
    pub async fn generate(&self, request: &GenerationRequest) -> Result<Recipe, RecipeError> {
        let prompt = Prompt::from(request);
        tracing::Span::current().record("prompt_len", prompt.len());

        match self.run(&prompt).await {
            Ok(raw) => {
                let recipe = Recipe::new(clean_output(&raw, &prompt));
                info!(recipe_len = recipe.as_str().len(), "Recipe generated");
                Ok(recipe)
            }
            Err(e) => {
                error!(error = %e, "Recipe generation failed");
                Err(RecipeError::from(e))
            }
        }
    }

    /// Generates a recipe, rendering a failure as its error message.
    ///
    /// The returned string is either the recipe or
    /// `"Error generating recipe: <description>"`.
    pub async fn generate_text(&self, request: &GenerationRequest) -> String {
        match self.generate(request).await {
            Ok(recipe) => recipe.into_inner(),
            Err(e) => e.to_string(),
        }
    }

    async fn run(&self, prompt: &Prompt) -> Result<String, ModelError> {
        let model = self.provider.get_model().await?;
        debug!(model = model.model_name(), "Invoking model");

        let output = model.generate(prompt, &self.decoding).await?;
        output
            .first()
            .map(str::to_string)
            .ok_or_else(|| ModelError::new(ModelErrorKind::EmptyResponse))
    }
}
