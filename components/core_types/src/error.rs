//! Compiler diagnostic types.
//!
//! Errors raised while resolving literals are converted into [`JsError`]
//! values so the surrounding compiler can report them against the token's
//! source position.

use crate::SourcePosition;
use std::fmt;

/// The kind of diagnostic.
///
/// These correspond to JavaScript's built-in error constructors, plus an
/// internal kind for compiler limitations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Syntax error in JavaScript code
    SyntaxError,
    /// Feature the compiler does not implement yet
    InternalError,
}

impl ErrorKind {
    /// The constructor name used when rendering the diagnostic
    pub fn name(self) -> &'static str {
        match self {
            ErrorKind::SyntaxError => "SyntaxError",
            ErrorKind::InternalError => "InternalError",
        }
    }
}

/// A compiler diagnostic with message and source position.
///
/// # Examples
///
/// ```
/// use core_types::{JsError, ErrorKind};
///
/// let error = JsError {
///     kind: ErrorKind::InternalError,
///     message: "Not implemented".to_string(),
///     source_position: None,
/// };
///
/// assert_eq!(error.to_string(), "InternalError: Not implemented");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsError {
    /// The type of error
    pub kind: ErrorKind,
    /// Human-readable error message
    pub message: String,
    /// Source position where the error occurred
    pub source_position: Option<SourcePosition>,
}

impl fmt::Display for JsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.name(), self.message)?;
        if let Some(pos) = &self.source_position {
            write!(f, " ({})", pos)?;
        }
        Ok(())
    }
}

impl std::error::Error for JsError {}
