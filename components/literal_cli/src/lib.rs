//! Literal Resolver CLI Library
//!
//! Provides the Inspector and supporting modules for the `corten-lit`
//! command, a debugging front end that resolves literal lexemes given on
//! the command line or in a file.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod error;
pub mod format;
pub mod inspector;

pub use cli::{Cli, KindArg};
pub use error::{CliError, CliResult};
pub use inspector::{infer_kind, read_lexemes, Inspector, Report};
