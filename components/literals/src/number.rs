//! Numeric literal conversion
//!
//! The tokenizer only hands over grammar-valid numeric lexemes, so this is a
//! conversion rather than a parser: pick the radix from the prefix, drop
//! numeric separators, and produce the nearest `f64`.

use num_bigint::BigUint;
use num_traits::ToPrimitive;
use std::borrow::Cow;

/// Convert a numeric literal lexeme to its value.
///
/// Handles decimal (`3.14`, `.5`, `1e3`), hexadecimal (`0x1F`), octal
/// (`0o17`) and binary (`0b101`) literals, with or without `_` separators.
/// Text that is not a numeric literal converts to `NaN`, as JavaScript's
/// `Number(text)` would.
///
/// Unlike `Number(text)`, separators are accepted (`Number("1_000")` is
/// `NaN`) and a leading zero stays decimal, following the literal grammar.
///
/// # Examples
///
/// ```
/// use literals::parse_numeric_literal;
///
/// assert_eq!(parse_numeric_literal("0x1F"), 31.0);
/// assert_eq!(parse_numeric_literal("1_000"), 1000.0);
/// assert!(parse_numeric_literal("12px").is_nan());
/// ```
pub fn parse_numeric_literal(text: &str) -> f64 {
    let digits: Cow<'_, str> = if text.contains('_') {
        Cow::Owned(text.replace('_', ""))
    } else {
        Cow::Borrowed(text)
    };

    let value = match split_radix_prefix(&digits) {
        Some((radix, rest)) => parse_radix_digits(rest, radix),
        None => parse_decimal(&digits),
    };

    value.unwrap_or_else(|| {
        log::warn!("numeric literal {:?} does not convert to a number", text);
        f64::NAN
    })
}

/// Split `0x`/`0o`/`0b` (either case) off the front of a literal
fn split_radix_prefix(text: &str) -> Option<(u32, &str)> {
    let bytes = text.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    Some((radix, &text[2..]))
}

/// Integer digits in the given radix, rounded to the nearest double.
///
/// Goes through a big integer so literals wider than 53 bits still round
/// correctly instead of accumulating error digit by digit.
fn parse_radix_digits(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    BigUint::parse_bytes(digits.as_bytes(), radix)?.to_f64()
}

/// Decimal literal through the host float conversion.
///
/// `str::parse` also accepts words like `inf` and signs, which are never part
/// of a numeric literal, so those are filtered out first.
fn parse_decimal(text: &str) -> Option<f64> {
    let is_literal_text = text
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    let starts_with_digit = text
        .bytes()
        .next()
        .map_or(false, |b| b.is_ascii_digit() || b == b'.');

    if !is_literal_text || !starts_with_digit {
        return None;
    }
    text.parse::<f64>().ok()
}
