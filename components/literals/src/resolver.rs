//! Literal kind dispatch

use crate::error::LiteralError;
use crate::escape::decode_string_literal;
use crate::number::parse_numeric_literal;
use crate::token::{LiteralKind, RawLiteral};
use crate::value::SemanticValue;

/// Resolve a raw literal to the value it denotes.
///
/// Pure and stateless: the literal is not modified and resolving it again
/// yields an equal value. Use [`LiteralToken`](crate::LiteralToken) to cache
/// the result against the token.
///
/// # Errors
///
/// - String escapes that are octal or malformed
/// - [`LiteralError::NotImplemented`] for regular expression and template
///   literals
pub fn resolve(literal: &RawLiteral) -> Result<SemanticValue, LiteralError> {
    match literal.kind() {
        LiteralKind::Null => Ok(SemanticValue::Null),
        LiteralKind::Number => Ok(SemanticValue::Number(parse_numeric_literal(
            literal.text(),
        ))),
        LiteralKind::String => decode_string_literal(literal.text()).map(SemanticValue::String),
        kind @ (LiteralKind::RegularExpression | LiteralKind::Template) => {
            log::debug!("no value representation for {} literal {}", kind, literal);
            Err(LiteralError::NotImplemented { kind })
        }
    }
}
