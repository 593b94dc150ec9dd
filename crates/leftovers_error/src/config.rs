//! Configuration error types.

/// Kinds of configuration failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConfigErrorKind {
    /// A configuration source could not be read
    #[display("Failed to read configuration: {}", _0)]
    Read(String),
    /// Sources were read but did not describe valid settings
    #[display("Invalid configuration: {}", _0)]
    Invalid(String),
    /// Bind address override was rejected
    #[display("Invalid bind address '{}': {}", address, message)]
    Bind {
        /// Requested address
        address: String,
        /// Why it was rejected
        message: String,
    },
}

/// Configuration error with location tracking.
///
/// # Examples
///
/// ```
/// use leftovers_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::Read("leftovers.toml not found".into()));
/// assert!(err.to_string().starts_with("Configuration Error: Failed to read"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// The kind of error that occurred
    pub kind: ConfigErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new configuration error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
