//! Error types for the CLI

use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Output could not be encoded as JSON
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Neither lexemes nor an input file were given
    #[error("no literals given; pass LITERAL arguments or --file")]
    NoInput,
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
