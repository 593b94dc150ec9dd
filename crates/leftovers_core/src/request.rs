//! A single recipe generation request.

use crate::{Cuisine, Ingredients, MealType};
use derive_getters::Getters;
use leftovers_error::ValidationError;
use serde::Serialize;

/// Everything needed to generate one recipe.
///
/// Ingredients are validated on construction, so a request that exists is
/// always ready to be sent to the model.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Getters, derive_builder::Builder)]
pub struct GenerationRequest {
    /// Ingredient list as entered
    #[builder(setter(custom))]
    ingredients: Ingredients,
    /// Meal type selection
    #[builder(default)]
    meal_type: MealType,
    /// Cuisine selection
    #[builder(default)]
    cuisine: Cuisine,
}

impl GenerationRequest {
    /// Creates a request, rejecting empty ingredients.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the ingredients are blank.
    #[track_caller]
    pub fn new(
        ingredients: impl Into<String>,
        meal_type: MealType,
        cuisine: Cuisine,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            ingredients: Ingredients::new(ingredients)?,
            meal_type,
            cuisine,
        })
    }

    /// Creates a new builder for `GenerationRequest`.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }
}

impl GenerationRequestBuilder {
    /// Sets the ingredient list.
    pub fn ingredients(&mut self, ingredients: Ingredients) -> &mut Self {
        self.ingredients = Some(ingredients);
        self
    }
}
