//! Core types shared by the literal resolution components.
//!
//! This crate provides the foundational types used when turning raw literal
//! lexemes into values: source location tracking, UTF-16 string storage, and
//! the diagnostic error type reported back to the compiler.
//!
//! # Overview
//!
//! - [`JsString`] - Sequence of UTF-16 code units (a JavaScript string value)
//! - [`JsError`] - Compiler diagnostic with an optional source position
//! - [`ErrorKind`] - Types of diagnostics
//! - [`SourcePosition`] - Source code location
//! - [`SourceRange`] - Start and end of a token in the source
//!
//! # Examples
//!
//! ```
//! use core_types::{ErrorKind, JsError, JsString, SourcePosition};
//!
//! let value = JsString::from("hello");
//! assert_eq!(value.len(), 5);
//!
//! let error = JsError {
//!     kind: ErrorKind::SyntaxError,
//!     message: "Octal escape sequences are not supported".to_string(),
//!     source_position: Some(SourcePosition::new(1, 9, 8)),
//! };
//! assert_eq!(error.to_string(), "SyntaxError: Octal escape sequences are not supported (1:9)");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod source;
mod string;

pub use error::{ErrorKind, JsError};
pub use source::{SourcePosition, SourceRange};
pub use string::JsString;
