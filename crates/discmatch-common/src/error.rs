//! Common error types used throughout discmatch.
//!
//! Partial or malformed catalog data is never an error: the parser leaves
//! fields unset and the scorer charges a completeness penalty instead. What
//! remains here are the conditions a caller has to react to.

/// Common error type for discmatch.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration values that would make automatic acceptance unsafe.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A human declined to answer or the prompt was interrupted.
    #[error("Selection cancelled by user")]
    Cancelled,

    /// Invalid input was provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Reading or writing JSON failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Create a new Configuration error.
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create a new InvalidInput error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Whether this error represents a user cancellation rather than a failure.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
