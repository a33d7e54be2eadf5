//! Attribute model error types.
//!
//! The model itself is total; the only failure mode is naming something
//! outside the closed vocabulary when parsing user input.

use thiserror::Error;

/// Errors raised while parsing attribute-model names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// The name is not one of the known attribute flags.
    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),

    /// The name is not one of the known type classifications.
    #[error("Unknown type classification: {0}")]
    UnknownTypeClass(String),
}

/// Result type for attribute-model operations.
pub type ModelResult<T> = Result<T, ModelError>;
