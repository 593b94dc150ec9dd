//! Recipe prompt construction.

use crate::{Cuisine, GenerationRequest, Ingredients, MealType};

/// Section labels the prompt asks the model to provide, in order.
pub const PROMPT_SECTIONS: [&str; 4] = ["Ingredients", "Instructions", "Serving Size", "Notes"];

/// Prompt text sent to the text-generation model.
///
/// Built deterministically from a [`GenerationRequest`]; values are
/// substituted verbatim.
///
/// # Examples
///
/// ```
/// use leftovers_core::{Cuisine, GenerationRequest, MealType, Prompt};
///
/// let request = GenerationRequest::new("eggs", MealType::Breakfast, Cuisine::Mexican).unwrap();
/// let prompt = Prompt::from(&request);
/// assert!(prompt.as_str().starts_with("Create a Mexican Breakfast recipe using eggs."));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub struct Prompt(String);

impl Prompt {
    /// Interpolates the selections into the recipe template.
    pub fn build(ingredients: &Ingredients, meal_type: MealType, cuisine: Cuisine) -> Self {
        let mut text = format!(
            "Create a {} {} recipe using {}. Provide:",
            cuisine,
            meal_type,
            ingredients.as_str()
        );
        for section in PROMPT_SECTIONS {
            text.push_str("\n- ");
            text.push_str(section);
        }
        Self(text)
    }

    /// The prompt text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length of the prompt in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the prompt is empty. Never true for a built prompt.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&GenerationRequest> for Prompt {
    fn from(request: &GenerationRequest) -> Self {
        Self::build(request.ingredients(), *request.meal_type(), *request.cuisine())
    }
}

impl AsRef<str> for Prompt {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
