//! Recipe generation error types.

use crate::ModelError;

/// Prefix of every rendered generation failure.
pub const RECIPE_ERROR_PREFIX: &str = "Error generating recipe: ";

/// A caught generation failure.
///
/// The display form is the user-facing message, so the web UI and CLI can
/// show it directly in place of a recipe.
///
/// # Examples
///
/// ```
/// use leftovers_error::{ModelError, ModelErrorKind, RecipeError};
///
/// let err = RecipeError::from(ModelError::new(ModelErrorKind::Other("timeout".into())));
/// assert_eq!(err.to_string(), "Error generating recipe: timeout");
/// ```
#[derive(Debug, Clone)]
pub struct RecipeError {
    description: String,
    source: ModelError,
}

impl RecipeError {
    /// Description of the underlying failure.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The model error that caused this failure.
    pub fn model_error(&self) -> &ModelError {
        &self.source
    }
}

impl From<ModelError> for RecipeError {
    fn from(source: ModelError) -> Self {
        Self {
            description: source.description(),
            source,
        }
    }
}

impl std::fmt::Display for RecipeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", RECIPE_ERROR_PREFIX, self.description)
    }
}

impl std::error::Error for RecipeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
