//! Tests for recipe generation through a mock model.

mod test_utils;

use async_trait::async_trait;
use leftovers_core::{Cuisine, DecodingConfig, GenerationRequest, MealType, Prompt};
use leftovers_error::{ModelError, ModelErrorKind, RECIPE_ERROR_PREFIX};
use leftovers_models::{ModelFactory, ModelHandle, ModelProvider};
use leftovers_recipe::RecipeGenerator;
use std::sync::Arc;
use strum::IntoEnumIterator;
use test_utils::{MockBehavior, mock_provider};

fn chicken_rice() -> GenerationRequest {
    GenerationRequest::new("chicken\nrice", MealType::Dinner, Cuisine::Italian)
        .expect("valid request")
}

#[tokio::test]
async fn test_recipe_is_continuation_without_prompt() {
    let (provider, mock) = mock_provider(MockBehavior::Continue(
        "\n\nIngredients: chicken, rice\nInstructions: simmer.\n".to_string(),
    ));
    let generator = RecipeGenerator::new(provider);
    let request = chicken_rice();

    let recipe = generator.generate(&request).await.expect("generation succeeds");

    assert_eq!(recipe.as_str(), "Ingredients: chicken, rice\nInstructions: simmer.");
    assert!(!recipe.as_str().starts_with(Prompt::from(&request).as_str()));
    assert_eq!(mock.calls(), 1);
}

#[tokio::test]
async fn test_model_receives_recipe_decoding_settings() {
    let (provider, mock) = mock_provider(MockBehavior::Continue(" ok".to_string()));
    let generator = RecipeGenerator::new(provider);

    generator.generate(&chicken_rice()).await.expect("generation succeeds");

    assert_eq!(mock.last_config(), Some(DecodingConfig::RECIPE));
}

#[tokio::test]
async fn test_timeout_fault_becomes_error_string() {
    let (provider, _mock) = mock_provider(MockBehavior::Fail("timeout".to_string()));
    let generator = RecipeGenerator::new(provider);

    let text = generator.generate_text(&chicken_rice()).await;

    assert_eq!(text, "Error generating recipe: timeout");
}

#[tokio::test]
async fn test_failure_is_explicit_error_value() {
    let (provider, _mock) = mock_provider(MockBehavior::Fail("CUDA out of memory".to_string()));
    let generator = RecipeGenerator::new(provider);

    let err = generator.generate(&chicken_rice()).await.unwrap_err();

    assert_eq!(err.description(), "CUDA out of memory");
    assert_eq!(
        err.model_error().kind,
        ModelErrorKind::Other("CUDA out of memory".to_string())
    );
    assert!(err.to_string().starts_with(RECIPE_ERROR_PREFIX));
}

#[tokio::test]
async fn test_empty_candidates_are_a_generation_failure() {
    let (provider, _mock) = mock_provider(MockBehavior::Empty);
    let generator = RecipeGenerator::new(provider);

    let text = generator.generate_text(&chicken_rice()).await;

    assert!(text.starts_with(RECIPE_ERROR_PREFIX));
}

#[tokio::test]
async fn test_every_selection_yields_a_string() {
    let (provider, mock) = mock_provider(MockBehavior::Continue("\nStir.".to_string()));
    let generator = RecipeGenerator::new(provider);

    for meal_type in MealType::iter() {
        for cuisine in Cuisine::iter() {
            let request = GenerationRequest::new("beans\ncorn", meal_type, cuisine)
                .expect("valid request");
            let text = generator.generate_text(&request).await;
            assert_eq!(text, "Stir.");
        }
    }
    assert_eq!(mock.calls(), 20);
}

#[tokio::test]
async fn test_raw_output_without_echo_is_trimmed() {
    let (provider, _mock) = mock_provider(MockBehavior::Raw("  Just a salad.  ".to_string()));
    let generator = RecipeGenerator::new(provider);

    let recipe = generator.generate(&chicken_rice()).await.expect("generation succeeds");

    assert_eq!(recipe.as_str(), "Just a salad.");
}

struct BrokenFactory;

#[async_trait]
impl ModelFactory for BrokenFactory {
    async fn create(&self) -> Result<ModelHandle, ModelError> {
        Err(ModelError::new(ModelErrorKind::ModelNotFound("gpt2".to_string())))
    }
}

#[tokio::test]
async fn test_model_construction_failure_is_caught() {
    let generator = RecipeGenerator::new(Arc::new(ModelProvider::new(BrokenFactory)));

    let text = generator.generate_text(&chicken_rice()).await;

    assert_eq!(text, "Error generating recipe: Model not found: gpt2");
}
