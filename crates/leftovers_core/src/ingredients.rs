//! Validated ingredient list.

use leftovers_error::{ValidationError, ValidationErrorKind};
use serde::Serialize;

/// Free-text ingredient list, one item per line.
///
/// Construction rejects text that is empty after trimming. The original text
/// is kept verbatim: it is interpolated into the prompt and echoed back to the
/// user exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, derive_more::Display, derive_more::Deref)]
#[serde(transparent)]
pub struct Ingredients(String);

impl Ingredients {
    /// Validates and wraps an ingredient list.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrorKind::EmptyIngredients`] when the text is
    /// empty or whitespace-only.
    #[track_caller]
    pub fn new(text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::EmptyIngredients));
        }
        Ok(Self(text))
    }

    /// The ingredient text as entered.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Non-blank lines, trimmed.
    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.0.lines().map(str::trim).filter(|line| !line.is_empty())
    }
}
