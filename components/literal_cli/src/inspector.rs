//! Resolution driver for the CLI
//!
//! The Inspector turns each input lexeme into a token, resolves it and
//! writes one line of output per literal.

use crate::error::CliResult;
use crate::format::columns;
use core_types::{SourcePosition, SourceRange};
use literals::{LiteralKind, LiteralToken, SemanticValue};
use serde::Serialize;
use std::fs;
use std::io::{self, Write};

/// Widest raw lexeme column before values wrap to the next line
const MAX_RAW_WIDTH: usize = 24;

/// Width of the kind column
const KIND_WIDTH: isize = 9;

/// Outcome counts of one inspection run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Report {
    /// Literals that resolved to a value
    pub resolved: usize,
    /// Literals that produced an error
    pub failed: usize,
}

impl Report {
    /// Whether every literal resolved
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// One line of `--json` output
#[derive(Debug, Serialize)]
struct Record<'a> {
    raw: &'a str,
    kind: LiteralKind,
    line: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<&'a SemanticValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Resolves literal lexemes and reports their values
#[derive(Debug, Clone, Default)]
pub struct Inspector {
    /// Kind applied to every lexeme, or `None` to infer it
    kind: Option<LiteralKind>,
    /// Whether to emit JSON lines instead of columns
    json: bool,
}

impl Inspector {
    /// Create an inspector that infers literal kinds and prints columns
    ///
    /// # Example
    /// ```
    /// use literal_cli::Inspector;
    ///
    /// let inspector = Inspector::new();
    /// assert!(!inspector.is_json());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Force every lexeme to be treated as `kind`
    pub fn with_kind(mut self, kind: Option<LiteralKind>) -> Self {
        self.kind = kind;
        self
    }

    /// Enable JSON output
    pub fn with_json(mut self, enabled: bool) -> Self {
        self.json = enabled;
        self
    }

    /// Check if JSON output is enabled
    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Resolve every lexeme and write the results to `out`.
    ///
    /// Resolution failures are reported in the output and counted; only
    /// write failures abort the run.
    ///
    /// # Example
    /// ```
    /// use literal_cli::Inspector;
    ///
    /// let mut out = Vec::new();
    /// let report = Inspector::new()
    ///     .inspect(&["0x1F".to_string()], &mut out)
    ///     .unwrap();
    ///
    /// assert_eq!(report.resolved, 1);
    /// assert!(String::from_utf8(out).unwrap().contains("31"));
    /// ```
    pub fn inspect<W: Write>(&self, lexemes: &[String], out: &mut W) -> CliResult<Report> {
        let raw_width = lexemes
            .iter()
            .map(|lexeme| lexeme.chars().count())
            .max()
            .unwrap_or(0)
            .min(MAX_RAW_WIDTH)
            + 2;

        let mut report = Report::default();
        for (index, lexeme) in lexemes.iter().enumerate() {
            let line = index as u32 + 1;
            let kind = self.kind.unwrap_or_else(|| infer_kind(lexeme));
            let range = SourceRange::single_line(SourcePosition::new(line, 1, 0), lexeme.len());
            let token = LiteralToken::new(kind, lexeme.as_str(), range);

            let value = token.value_or_diagnostic();
            match &value {
                Ok(_) => report.resolved += 1,
                Err(err) => {
                    log::info!("{}", err);
                    report.failed += 1;
                }
            }

            if self.json {
                let record = Record {
                    raw: token.text(),
                    kind,
                    line,
                    value: value.as_ref().ok().copied(),
                    error: value.as_ref().err().map(|err| err.message.clone()),
                };
                serde_json::to_writer(&mut *out, &record)?;
                writeln!(out)?;
            } else {
                let rendered = match &value {
                    Ok(value) => render_value(value)?,
                    Err(err) => format!("error: {}", err.message),
                };
                let row = columns(&[
                    (token.text(), raw_width as isize),
                    (kind.name(), KIND_WIDTH),
                    (rendered.as_str(), 0),
                ]);
                writeln!(out, "{}", row.trim_end())?;
            }
        }

        log::debug!(
            "inspected {} literals: {} resolved, {} failed",
            lexemes.len(),
            report.resolved,
            report.failed
        );
        Ok(report)
    }
}

/// Show strings quoted with control characters escaped, other values as
/// JavaScript prints them.
fn render_value(value: &SemanticValue) -> CliResult<String> {
    Ok(match value {
        SemanticValue::String(s) => serde_json::to_string(s)?,
        other => other.to_string(),
    })
}

/// Guess a lexeme's kind from its first character.
///
/// ```
/// use literal_cli::infer_kind;
/// use literals::LiteralKind;
///
/// assert_eq!(infer_kind("'x'"), LiteralKind::String);
/// assert_eq!(infer_kind("null"), LiteralKind::Null);
/// assert_eq!(infer_kind("1e3"), LiteralKind::Number);
/// ```
pub fn infer_kind(lexeme: &str) -> LiteralKind {
    match lexeme.chars().next() {
        Some('"' | '\'') => LiteralKind::String,
        Some('/') => LiteralKind::RegularExpression,
        Some('`') => LiteralKind::Template,
        _ if lexeme == "null" => LiteralKind::Null,
        _ => LiteralKind::Number,
    }
}

/// Read lexemes one per line from `path`, or from stdin when `path` is `-`.
///
/// Blank lines are skipped and trailing `\r` is removed.
pub fn read_lexemes(path: &str) -> CliResult<Vec<String>> {
    let text = if path == "-" {
        io::read_to_string(io::stdin())?
    } else {
        fs::read_to_string(path)?
    };

    Ok(text
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect())
}
