//! Source position and range types used to tie diagnostics to tokens.

use serde::Serialize;
use std::fmt;

/// Represents a position in source code.
///
/// # Examples
///
/// ```
/// use core_types::SourcePosition;
///
/// let pos = SourcePosition::new(10, 5, 150);
///
/// assert_eq!(pos.line, 10);
/// assert_eq!(pos.to_string(), "10:5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SourcePosition {
    /// Line number (1-indexed)
    pub line: u32,
    /// Column number (1-indexed)
    pub column: u32,
    /// Byte offset from the start of the source file
    pub offset: usize,
}

impl SourcePosition {
    /// Create a position from its line, column and byte offset
    pub fn new(line: u32, column: u32, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The half-open span a token occupies in its source file.
///
/// Owned by the tokenizer. Consumers that only resolve token values never
/// look inside; they carry it along so diagnostics can point at the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SourceRange {
    /// First character of the token
    pub start: SourcePosition,
    /// Position just past the last character of the token
    pub end: SourcePosition,
}

impl SourceRange {
    /// Create a range from two positions
    pub fn new(start: SourcePosition, end: SourcePosition) -> Self {
        Self { start, end }
    }

    /// Range of a token that lies on one line starting at `start`.
    pub fn single_line(start: SourcePosition, byte_len: usize) -> Self {
        let end = SourcePosition {
            line: start.line,
            column: start
                .column
                .saturating_add(u32::try_from(byte_len).unwrap_or(u32::MAX)),
            offset: start.offset.saturating_add(byte_len),
        };
        Self { start, end }
    }

    /// Number of bytes the range covers
    pub fn len(&self) -> usize {
        self.end.offset.saturating_sub(self.start.offset)
    }

    /// Whether the range covers no bytes
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for SourceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
