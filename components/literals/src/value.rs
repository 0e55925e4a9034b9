//! Resolved literal values

use core_types::JsString;
use serde::{Serialize, Serializer};
use std::fmt;

/// The compile-time value of a literal token.
///
/// # Examples
///
/// ```
/// use literals::SemanticValue;
///
/// let value = SemanticValue::Number(1e21);
/// assert_eq!(value.to_string(), "1e+21");
/// assert_eq!(value.type_of(), "number");
/// assert!(SemanticValue::Null.is_null());
/// ```
#[derive(Debug, Clone)]
pub enum SemanticValue {
    /// The `null` literal
    Null,
    /// A numeric literal as an IEEE 754 double
    Number(f64),
    /// A string literal with escapes decoded
    String(JsString),
}

/// Values compare with SameValue semantics: `NaN` equals itself and `0`
/// differs from `-0`, so resolving the same token twice always compares equal.
impl PartialEq for SemanticValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (SemanticValue::Null, SemanticValue::Null) => true,
            (SemanticValue::Number(a), SemanticValue::Number(b)) => {
                (a.is_nan() && b.is_nan()) || a.to_bits() == b.to_bits()
            }
            (SemanticValue::String(a), SemanticValue::String(b)) => a == b,
            _ => false,
        }
    }
}

impl SemanticValue {
    /// Whether this is the null value
    pub fn is_null(&self) -> bool {
        matches!(self, SemanticValue::Null)
    }

    /// The numeric value, if this is a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            SemanticValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The string value, if this is a string
    pub fn as_js_string(&self) -> Option<&JsString> {
        match self {
            SemanticValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Result of JavaScript's `typeof` operator on this value
    pub fn type_of(&self) -> &'static str {
        match self {
            SemanticValue::Null => "object",
            SemanticValue::Number(_) => "number",
            SemanticValue::String(_) => "string",
        }
    }
}

/// Null and finite numbers serialize as their JSON counterparts. JSON has no
/// `NaN` or `Infinity`, so those are written as the strings JavaScript prints
/// for them instead of collapsing into `null`.
impl Serialize for SemanticValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SemanticValue::Null => serializer.serialize_unit(),
            SemanticValue::Number(n) if n.is_finite() => serializer.serialize_f64(*n),
            SemanticValue::Number(n) => serializer.serialize_str(&number_to_string(*n)),
            SemanticValue::String(s) => s.serialize(serializer),
        }
    }
}

/// Renders the value the way `String(value)` does in JavaScript.
impl fmt::Display for SemanticValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemanticValue::Null => write!(f, "null"),
            SemanticValue::Number(n) => write!(f, "{}", number_to_string(*n)),
            SemanticValue::String(s) => write!(f, "{}", s),
        }
    }
}

/// Format a number as JavaScript's `Number.prototype.toString()` does.
///
/// Uses the shortest digit string that round-trips, switching to exponent
/// notation below `1e-6` and from `1e21` upwards.
pub fn number_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value < 0.0 {
        return format!("-{}", number_to_string(-value));
    }

    let mut buffer = ryu::Buffer::new();
    let (digits, n) = shortest_digits(buffer.format_finite(value));
    let k = digits.len() as i32;

    if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{}.{}", int_part, frac_part)
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let exponent = n - 1;
        let sign = if exponent < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", first, sign, exponent.abs())
        } else {
            format!("{}.{}e{}{}", first, rest, sign, exponent.abs())
        }
    }
}

/// Significant digits of a ryu rendering and the position of the decimal
/// point relative to them (`value = 0.digits * 10^n`).
fn shortest_digits(repr: &str) -> (String, i32) {
    let (mantissa, exponent) = match repr.split_once('e') {
        Some((mantissa, exp)) => (mantissa, exp.parse::<i32>().unwrap_or(0)),
        None => (repr, 0),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let all: String = int_part.chars().chain(frac_part.chars()).collect();
    let significant = all.trim_start_matches('0');
    let leading_zeros = (all.len() - significant.len()) as i32;

    let n = int_part.len() as i32 - leading_zeros + exponent;
    (significant.trim_end_matches('0').to_string(), n)
}
