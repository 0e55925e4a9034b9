//! Literal resolution errors and their conversion to compiler diagnostics

use crate::token::LiteralKind;
use core_types::{ErrorKind, JsError, SourcePosition, SourceRange};
use thiserror::Error;

/// Why a literal could not be resolved.
///
/// Offsets are byte offsets into the lexeme, counting the opening quote.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiteralError {
    /// `\1` through `\7`: legacy octal escapes are rejected
    #[error("Octal escape sequences are not supported: `\\{digit}` at offset {offset}")]
    UnsupportedOctalEscape {
        /// The digit following the backslash
        digit: char,
        /// Offset of the backslash
        offset: usize,
    },

    /// `\x` or `\u` without the required hex digits, or a dangling backslash
    #[error("Malformed escape sequence `{sequence}` at offset {offset}")]
    MalformedEscape {
        /// The escape text consumed before the problem was found
        sequence: String,
        /// Offset of the backslash
        offset: usize,
    },

    /// A string lexeme without matching delimiters
    #[error("String literal is not enclosed in matching quotes: {text}")]
    UnquotedString {
        /// The offending lexeme
        text: String,
    },

    /// Literal kinds that have no value representation yet
    #[error("Not implemented: {kind} literals cannot be resolved")]
    NotImplemented {
        /// Kind of the rejected literal
        kind: LiteralKind,
    },
}

impl LiteralError {
    /// Offset into the lexeme where the problem starts, when there is one
    pub fn offset(&self) -> Option<usize> {
        match self {
            LiteralError::UnsupportedOctalEscape { offset, .. }
            | LiteralError::MalformedEscape { offset, .. } => Some(*offset),
            _ => None,
        }
    }

    /// Convert into a diagnostic pointing at the literal's source range.
    pub fn to_js_error(&self, range: &SourceRange) -> JsError {
        match self {
            LiteralError::NotImplemented { .. } => JsError {
                kind: ErrorKind::InternalError,
                message: self.to_string(),
                source_position: Some(range.start),
            },
            _ => syntax_error(self.to_string(), Some(range.start)),
        }
    }
}

/// Create a syntax error at a given position
pub fn syntax_error(message: impl Into<String>, position: Option<SourcePosition>) -> JsError {
    JsError {
        kind: ErrorKind::SyntaxError,
        message: message.into(),
        source_position: position,
    }
}
