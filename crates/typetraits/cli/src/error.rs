//! CLI error types

use thiserror::Error;
use typetraits_render::RenderError;
use typetraits_types::ModelError;

/// Errors surfaced by the command-line front end
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file could not be located or parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading an input file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Attribute-set JSON was malformed or used an unknown flag
    #[error("Invalid attribute set: {0}")]
    Json(#[from] serde_json::Error),

    /// Unknown attribute or type name
    #[error(transparent)]
    Model(#[from] ModelError),

    /// The attribute set has no consistent declaration
    #[error("Cannot render: {0}")]
    Render(#[from] RenderError),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
