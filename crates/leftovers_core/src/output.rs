//! Model output and the finished recipe.

use serde::{Deserialize, Serialize};

/// Candidate sequences returned by a text-generation model.
///
/// Each candidate is the full text the model produced: the prompt followed by
/// its continuation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GeneratedText {
    candidates: Vec<String>,
}

impl GeneratedText {
    /// Wraps the candidates returned by a model.
    pub fn new(candidates: Vec<String>) -> Self {
        Self { candidates }
    }

    /// All candidates, in the order the model returned them.
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// The first candidate, if any.
    pub fn first(&self) -> Option<&str> {
        self.candidates.first().map(String::as_str)
    }
}

impl From<String> for GeneratedText {
    fn from(text: String) -> Self {
        Self::new(vec![text])
    }
}

/// A cleaned, user-facing recipe.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(transparent)]
pub struct Recipe(String);

impl Recipe {
    /// Wraps already-cleaned recipe text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The recipe text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the recipe, returning its text.
    pub fn into_inner(self) -> String {
        self.0
    }
}
