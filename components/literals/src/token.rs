//! Literal tokens as produced by the tokenizer

use crate::error::LiteralError;
use crate::resolver::resolve;
use crate::value::SemanticValue;
use core_types::{JsError, SourceRange};
use once_cell::sync::OnceCell;
use serde::Serialize;
use std::fmt;

/// Category of a literal token.
///
/// Boolean literals are keyword tokens and never reach the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LiteralKind {
    /// `null`
    Null,
    /// Numeric literal
    Number,
    /// Single or double quoted string literal
    String,
    /// Regular expression literal
    RegularExpression,
    /// Template literal without substitutions
    Template,
}

impl LiteralKind {
    /// Lowercase name used in diagnostics
    pub fn name(self) -> &'static str {
        match self {
            LiteralKind::Null => "null",
            LiteralKind::Number => "number",
            LiteralKind::String => "string",
            LiteralKind::RegularExpression => "regular expression",
            LiteralKind::Template => "template",
        }
    }
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A literal exactly as the tokenizer saw it.
///
/// `text` is the raw lexeme; for strings it includes both quote characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLiteral {
    kind: LiteralKind,
    text: String,
    source_range: SourceRange,
}

impl RawLiteral {
    /// Create a raw literal
    pub fn new(kind: LiteralKind, text: impl Into<String>, source_range: SourceRange) -> Self {
        Self {
            kind,
            text: text.into(),
            source_range,
        }
    }

    /// Literal kind
    pub fn kind(&self) -> LiteralKind {
        self.kind
    }

    /// Raw lexeme
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Where the lexeme sits in its source file
    pub fn source_range(&self) -> &SourceRange {
        &self.source_range
    }
}

impl fmt::Display for RawLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A literal token whose value is resolved on first use and then cached.
///
/// The cache is written once; concurrent first accesses block on the single
/// initialisation and all observe the same result. Tokens are `Send + Sync`
/// and can be shared between worker threads behind an `Arc`.
///
/// # Examples
///
/// ```
/// use core_types::SourceRange;
/// use literals::{LiteralKind, LiteralToken};
///
/// let token = LiteralToken::new(LiteralKind::String, r"'abc'", SourceRange::default());
/// assert!(!token.is_resolved());
/// assert_eq!(token.processed_value().unwrap().to_string(), "abc");
/// assert!(token.is_resolved());
/// ```
#[derive(Debug, Clone)]
pub struct LiteralToken {
    literal: RawLiteral,
    processed: OnceCell<Result<SemanticValue, LiteralError>>,
}

impl LiteralToken {
    /// Create a token from its parts
    pub fn new(kind: LiteralKind, text: impl Into<String>, source_range: SourceRange) -> Self {
        Self::from_raw(RawLiteral::new(kind, text, source_range))
    }

    /// Wrap an existing raw literal
    pub fn from_raw(literal: RawLiteral) -> Self {
        Self {
            literal,
            processed: OnceCell::new(),
        }
    }

    /// The underlying raw literal
    pub fn raw(&self) -> &RawLiteral {
        &self.literal
    }

    /// Literal kind
    pub fn kind(&self) -> LiteralKind {
        self.literal.kind()
    }

    /// Raw lexeme
    pub fn text(&self) -> &str {
        self.literal.text()
    }

    /// Where the lexeme sits in its source file
    pub fn source_range(&self) -> &SourceRange {
        self.literal.source_range()
    }

    /// Whether the value has already been computed
    pub fn is_resolved(&self) -> bool {
        self.processed.get().is_some()
    }

    /// The value this literal represents, e.g. the decoded characters of a
    /// string literal rather than its source text.
    pub fn processed_value(&self) -> Result<&SemanticValue, &LiteralError> {
        self.processed
            .get_or_init(|| {
                let result = resolve(&self.literal);
                log::debug!(
                    "cached {} literal {} ({})",
                    self.literal.kind(),
                    self.literal,
                    if result.is_ok() { "ok" } else { "error" }
                );
                result
            })
            .as_ref()
    }

    /// Like [`processed_value`](Self::processed_value), but failures come back
    /// as a diagnostic positioned at the token.
    pub fn value_or_diagnostic(&self) -> Result<&SemanticValue, JsError> {
        self.processed_value()
            .map_err(|err| err.to_js_error(self.source_range()))
    }
}

impl PartialEq for LiteralToken {
    fn eq(&self, other: &Self) -> bool {
        self.literal == other.literal
    }
}

impl From<RawLiteral> for LiteralToken {
    fn from(literal: RawLiteral) -> Self {
        Self::from_raw(literal)
    }
}

impl fmt::Display for LiteralToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.literal, f)
    }
}
