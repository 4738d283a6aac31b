//! Assertion error types.

use thiserror::Error;

/// Result type alias for template assertions.
pub type AssertionResult<T> = Result<T, AssertionError>;

/// Errors raised when a synthesized graph does not match an expectation.
#[derive(Debug, Error)]
pub enum AssertionError {
    #[error("malformed descriptor graph: {0}")]
    Malformed(String),

    #[error("no {kind} resource named {name}")]
    ResourceNotFound { kind: String, name: String },

    #[error("expected {expected} {kind} resources, found {actual}")]
    CountMismatch {
        kind: String,
        expected: usize,
        actual: usize,
    },

    #[error("{kind} {name} does not match expected properties:\n{expected}\nactual:\n{actual}")]
    PropertyMismatch {
        kind: String,
        name: String,
        expected: String,
        actual: String,
    },

    #[error("no output named {0}")]
    OutputNotFound(String),

    #[error("output {name}: expected {expected:?}, found {actual:?}")]
    OutputMismatch {
        name: String,
        expected: String,
        actual: String,
    },
}
