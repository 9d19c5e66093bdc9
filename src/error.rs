//! Error types for expression construction.

use thiserror::Error;

/// The main error type for building function expressions.
///
/// Every failure surfaces at expression-construction time and is propagated
/// to the caller; nothing is retried or handled internally. A builder either
/// fully constructs its node or fails before constructing anything.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PgFuncError {
    /// The function is cataloged but its wrapper is not implemented yet.
    #[error("{function} is not implemented in the current version")]
    NotSupported { function: &'static str },

    /// Scalar coercion, cross-argument range or allow-list validation failed.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl PgFuncError {
    /// Create a not-supported error for the named SQL function.
    pub fn not_supported(function: &'static str) -> Self {
        Self::NotSupported { function }
    }

    /// Create an invalid-argument error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

/// Result type alias for expression construction.
pub type PgFuncResult<T> = Result<T, PgFuncError>;
