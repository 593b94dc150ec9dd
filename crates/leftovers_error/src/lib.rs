//! Error types for the Leftovers recipe generator.
//!
//! Every error carries the source location where it was created. Kinds are
//! plain enums so callers can match on them without string inspection.

mod config;
mod model;
mod recipe;
mod server;
mod validation;

pub use config::{ConfigError, ConfigErrorKind};
pub use model::{ModelError, ModelErrorKind};
pub use recipe::{RECIPE_ERROR_PREFIX, RecipeError};
pub use server::{ServerError, ServerErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};

/// Crate-level error variants.
#[derive(Debug, derive_more::From, derive_more::Display)]
pub enum LeftoversErrorKind {
    /// Text-generation model error
    #[display("{}", _0)]
    Model(ModelError),
    /// Recipe generation failure
    #[display("{}", _0)]
    Recipe(RecipeError),
    /// Invalid user input
    #[display("{}", _0)]
    Validation(ValidationError),
    /// Configuration error
    #[display("{}", _0)]
    Config(ConfigError),
    /// Web server error
    #[display("{}", _0)]
    Server(ServerError),
    /// Writing output failed
    #[display("I/O Error: {}", _0)]
    Io(std::io::Error),
}

/// Leftovers error with kind discrimination.
#[derive(Debug)]
pub struct LeftoversError(Box<LeftoversErrorKind>);

impl LeftoversError {
    /// Create a new error from a kind.
    pub fn new(kind: LeftoversErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &LeftoversErrorKind {
        &self.0
    }
}

impl std::fmt::Display for LeftoversError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Leftovers Error: {}", self.0)
    }
}

impl std::error::Error for LeftoversError {}

// Generic From implementation for any type that converts to LeftoversErrorKind
impl<T> From<T> for LeftoversError
where
    T: Into<LeftoversErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Leftovers operations.
pub type LeftoversResult<T> = std::result::Result<T, LeftoversError>;
