//! Command-line arguments

use clap::{ArgAction, Parser, ValueEnum};
use literals::LiteralKind;

/// Resolve JavaScript literal lexemes to their values
#[derive(Debug, Parser)]
#[command(name = "corten-lit", version)]
pub struct Cli {
    /// Raw literal lexemes, quotes included for strings (e.g. '"a\x41"')
    #[arg(value_name = "LITERAL")]
    pub literals: Vec<String>,

    /// Treat every lexeme as this kind instead of inferring it
    #[arg(short, long, value_enum)]
    pub kind: Option<KindArg>,

    /// Read one lexeme per line from FILE ('-' for stdin)
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<String>,

    /// Print one JSON object per literal
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log filter matching the requested verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Literal kinds accepted by `--kind`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    /// The null literal
    Null,
    /// Numeric literal
    Number,
    /// Quoted string literal
    String,
    /// Regular expression literal
    Regexp,
    /// Template literal
    Template,
}

impl From<KindArg> for LiteralKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Null => LiteralKind::Null,
            KindArg::Number => LiteralKind::Number,
            KindArg::String => LiteralKind::String,
            KindArg::Regexp => LiteralKind::RegularExpression,
            KindArg::Template => LiteralKind::Template,
        }
    }
}
