//! String literal escape decoding
//!
//! Decodes the interior of a quoted string lexeme into UTF-16 code units.
//! The scan is a single forward pass over the characters between the quotes;
//! it never looks at the delimiters and never reads past the closing quote.

use crate::error::LiteralError;
use core_types::JsString;
use std::str::CharIndices;

/// Decode a quoted string lexeme such as `'a\tb'` into its value.
///
/// Recognised escapes after a backslash:
///
/// - line terminators (LF, CR, CRLF, U+2028, U+2029): line continuation, nothing
/// - `0` `b` `f` `n` `r` `t` `v`: the usual control characters
/// - `xHH` and `uHHHH`: the code unit with that hex value
/// - `1`..=`7`: rejected, octal escapes are not supported
/// - anything else: the character itself
///
/// # Examples
///
/// ```
/// use literals::decode_string_literal;
///
/// assert_eq!(decode_string_literal(r#""\x41B""#).unwrap(), "AB");
/// assert!(decode_string_literal(r"'\1'").is_err());
/// ```
pub fn decode_string_literal(lexeme: &str) -> Result<JsString, LiteralError> {
    let interior = interior(lexeme)?;

    if !interior.contains('\\') {
        log::trace!("string literal without escapes, {} bytes", interior.len());
        return Ok(JsString::from(interior));
    }

    StringDecoder::new(interior).decode()
}

/// The text between the delimiting quotes.
fn interior(lexeme: &str) -> Result<&str, LiteralError> {
    let mut chars = lexeme.chars();
    match (chars.next(), chars.next_back()) {
        (Some(open @ ('"' | '\'')), Some(close)) if open == close => {
            Ok(&lexeme[1..lexeme.len() - 1])
        }
        _ => Err(LiteralError::UnquotedString {
            text: lexeme.to_string(),
        }),
    }
}

/// Cursor over the interior of a string lexeme
struct StringDecoder<'a> {
    source: &'a str,
    chars: CharIndices<'a>,
    result: JsString,
}

impl<'a> StringDecoder<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices(),
            result: JsString::with_capacity(source.len()),
        }
    }

    fn decode(mut self) -> Result<JsString, LiteralError> {
        while let Some((offset, ch)) = self.chars.next() {
            if ch == '\\' {
                self.decode_escape(offset)?;
            } else {
                self.result.push_char(ch);
            }
        }
        Ok(self.result)
    }

    /// Decode the escape whose backslash sits at `start`
    fn decode_escape(&mut self, start: usize) -> Result<(), LiteralError> {
        let Some((_, escaped)) = self.chars.next() else {
            return Err(self.malformed(start));
        };

        match escaped {
            '\r' => {
                // CRLF is one line terminator
                if self.chars.as_str().starts_with('\n') {
                    self.chars.next();
                }
            }
            '\n' | '\u{2028}' | '\u{2029}' => {}
            '0' => self.result.push_unit(0x0000),
            'b' => self.result.push_unit(0x0008),
            'f' => self.result.push_unit(0x000C),
            'n' => self.result.push_unit(0x000A),
            'r' => self.result.push_unit(0x000D),
            't' => self.result.push_unit(0x0009),
            'v' => self.result.push_unit(0x000B),
            'x' => {
                let unit = self.hex_digits(start, 2)?;
                self.result.push_unit(unit);
            }
            'u' => {
                let unit = self.hex_digits(start, 4)?;
                self.result.push_unit(unit);
            }
            '1'..='7' => {
                return Err(LiteralError::UnsupportedOctalEscape {
                    digit: escaped,
                    offset: start + 1,
                });
            }
            _ => self.result.push_char(escaped),
        }
        Ok(())
    }

    /// Read exactly `count` hex digits as one code unit
    fn hex_digits(&mut self, start: usize, count: usize) -> Result<u16, LiteralError> {
        let mut unit: u16 = 0;
        for _ in 0..count {
            let digit = self
                .chars
                .next()
                .and_then(|(_, ch)| ch.to_digit(16))
                .ok_or_else(|| self.malformed(start))?;
            unit = (unit << 4) | digit as u16;
        }
        Ok(unit)
    }

    /// Error for the escape starting at `start`, covering everything consumed so far
    fn malformed(&self, start: usize) -> LiteralError {
        let end = self.source.len() - self.chars.as_str().len();
        LiteralError::MalformedEscape {
            sequence: self.source[start..end].to_string(),
            offset: start + 1,
        }
    }
}
