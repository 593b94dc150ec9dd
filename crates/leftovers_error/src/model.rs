//! Text-generation model error types.

/// Kinds of failures raised while constructing or invoking a model.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ModelErrorKind {
    /// HTTP client could not be built
    #[display("Failed to create HTTP client: {}", _0)]
    ClientCreation(String),
    /// HTTP/network error
    #[display("HTTP error: {}", _0)]
    Http(String),
    /// API returned an error
    #[display("API error (status {}): {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },
    /// Model identifier unknown to the hub
    #[display("Model not found: {}", _0)]
    ModelNotFound(String),
    /// Model exists but does not serve text generation
    #[display("Model {} serves '{}', not text-generation", model, pipeline)]
    UnsupportedPipeline {
        /// Model identifier
        model: String,
        /// Pipeline tag reported by the hub
        pipeline: String,
    },
    /// Failed to parse response
    #[display("Response parsing failed: {}", _0)]
    ResponseParsing(String),
    /// Model returned no candidate sequences
    #[display("Model returned no generated sequences")]
    EmptyResponse,
    /// Any other failure, described verbatim
    #[display("{}", _0)]
    Other(String),
}

/// Model error with location tracking.
///
/// # Examples
///
/// ```
/// use leftovers_error::{ModelError, ModelErrorKind};
///
/// let err = ModelError::new(ModelErrorKind::ModelNotFound("gpt2".to_string()));
/// assert!(format!("{}", err).contains("Model not found: gpt2"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Model Error: {} at line {} in {}", kind, line, file)]
pub struct ModelError {
    /// The kind of error that occurred
    pub kind: ModelErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ModelError {
    /// Create a new model error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ModelErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Human-readable description of the failure, without source location.
    pub fn description(&self) -> String {
        self.kind.to_string()
    }
}
