//! Render error types.
//!
//! Rendering is partial: two cross-flag combinations have no consistent
//! source text. Both are reported to the caller instead of emitting code.

use thiserror::Error;

use crate::fragment::ConstructorStyle;

/// Errors that can occur while rendering an attribute set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// More than one default-constructor style flag is set.
    #[error("multiple default-constructor styles specified")]
    AmbiguousConstructorStyle {
        /// The conflicting styles, in emission order.
        styles: Vec<ConstructorStyle>,
    },

    /// The default constructor is inherited but no base class is emitted.
    #[error("inherited constructor specified with no base class")]
    DanglingInheritedConstructor,

    /// A configured name or the indent would not yield a valid declaration.
    #[error("invalid render config: {field} = {value:?} ({reason})")]
    InvalidConfig {
        field: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
