//! JavaScript Literal Resolution
//!
//! Turns the raw lexeme of a literal token into the value the parser embeds
//! in the AST. The tokenizer hands over the literal text exactly as written,
//! quotes and escapes included; this crate decodes it.
//!
//! # Overview
//!
//! - [`RawLiteral`] - Literal kind, lexeme and source range from the tokenizer
//! - [`LiteralToken`] - A raw literal with its resolved value cached
//! - [`resolve`] - Map a raw literal to its [`SemanticValue`]
//! - [`decode_string_literal`] - Resolve escape sequences in a quoted lexeme
//! - [`parse_numeric_literal`] - Convert a numeric lexeme to an `f64`
//!
//! # Example
//!
//! ```
//! use core_types::SourceRange;
//! use literals::{resolve, LiteralKind, RawLiteral, SemanticValue};
//!
//! let literal = RawLiteral::new(LiteralKind::String, r#""a\x41\n""#, SourceRange::default());
//! let value = resolve(&literal).unwrap();
//! assert_eq!(value.as_js_string().unwrap(), "aA\n");
//!
//! let number = RawLiteral::new(LiteralKind::Number, "0x1F", SourceRange::default());
//! assert_eq!(resolve(&number).unwrap(), SemanticValue::Number(31.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod escape;
pub mod number;
pub mod resolver;
pub mod token;
pub mod value;

pub use error::LiteralError;
pub use escape::decode_string_literal;
pub use number::parse_numeric_literal;
pub use resolver::resolve;
pub use token::{LiteralKind, LiteralToken, RawLiteral};
pub use value::{number_to_string, SemanticValue};
