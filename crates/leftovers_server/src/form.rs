//! Request and response bodies.

use leftovers_core::{Cuisine, MealType};
use serde::{Deserialize, Serialize};

/// Fields submitted by the recipe form and the JSON API.
///
/// Missing selections fall back to the first option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecipeForm {
    /// Ingredient list, one per line
    pub ingredients: String,
    /// Selected meal type
    pub meal_type: MealType,
    /// Selected cuisine
    pub cuisine: Cuisine,
}

impl RecipeForm {
    /// Ingredient text with browser `\r\n` line breaks converted to `\n`.
    pub fn ingredient_text(&self) -> String {
        self.ingredients.replace("\r\n", "\n")
    }
}


/// JSON body returned by the recipe API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeResponse {
    /// Ingredients as submitted
    pub ingredients: String,
    /// Meal type used
    pub meal_type: MealType,
    /// Cuisine used
    pub cuisine: Cuisine,
    /// Generated recipe
    pub recipe: String,
}
