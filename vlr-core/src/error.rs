//! Core error types.

use thiserror::Error;

/// Core error type for model-level operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Unknown search category or similar enumerated value.
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

/// Error raised by a page extractor when the markup cannot be interpreted.
///
/// Extraction errors are never retried; the orchestrator records them as a
/// failed call and hands them back to the caller unchanged.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// A CSS selector failed to compile.
    #[error("Invalid selector `{selector}`: {reason}")]
    InvalidSelector {
        /// The selector source text.
        selector: String,
        /// Parser message.
        reason: String,
    },

    /// A section the page must contain is missing.
    #[error("Missing element: {0}")]
    MissingElement(String),

    /// A field held a value that could not be interpreted.
    #[error("Invalid value for {field}: {value:?}")]
    InvalidValue {
        /// Field name.
        field: &'static str,
        /// Offending raw text.
        value: String,
    },
}

impl ExtractionError {
    /// Shorthand for [`ExtractionError::MissingElement`].
    pub fn missing(what: impl Into<String>) -> Self {
        Self::MissingElement(what.into())
    }
}
