//! UTF-16 string storage.
//!
//! JavaScript strings are sequences of 16-bit code units, not Unicode scalar
//! values. Escapes such as `\uD83D` can produce unpaired surrogates that a
//! Rust `String` cannot hold, so decoded string literals are kept as code
//! units and only converted to UTF-8 at the edges.

use serde::{Serialize, Serializer};
use std::fmt;

/// A JavaScript string value: an ordered sequence of UTF-16 code units.
///
/// # Examples
///
/// ```
/// use core_types::JsString;
///
/// let mut s = JsString::from("a");
/// s.push_unit(0xD83D);
/// assert_eq!(s.len(), 2);
/// assert!(s.to_utf8().is_none());
/// assert_eq!(s.to_string_lossy(), "a\u{FFFD}");
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct JsString {
    units: Vec<u16>,
}

impl JsString {
    /// Create an empty string
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty string with room for `capacity` code units
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            units: Vec::with_capacity(capacity),
        }
    }

    /// Wrap raw code units
    pub fn from_units(units: Vec<u16>) -> Self {
        Self { units }
    }

    /// The code units of this string
    pub fn as_units(&self) -> &[u16] {
        &self.units
    }

    /// Number of code units (JavaScript's `length`)
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the string has no code units
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Append a single code unit
    pub fn push_unit(&mut self, unit: u16) {
        self.units.push(unit);
    }

    /// Append a character, split into a surrogate pair when outside the BMP
    pub fn push_char(&mut self, ch: char) {
        let mut buf = [0u16; 2];
        self.units.extend_from_slice(ch.encode_utf16(&mut buf));
    }

    /// Append every character of `s`
    pub fn push_str(&mut self, s: &str) {
        self.units.extend(s.encode_utf16());
    }

    /// Convert to UTF-8, or `None` if the string holds an unpaired surrogate.
    pub fn to_utf8(&self) -> Option<String> {
        String::from_utf16(&self.units).ok()
    }

    /// Convert to UTF-8, replacing unpaired surrogates with U+FFFD.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(&self.units)
    }
}

impl From<&str> for JsString {
    fn from(s: &str) -> Self {
        Self {
            units: s.encode_utf16().collect(),
        }
    }
}

impl From<String> for JsString {
    fn from(s: String) -> Self {
        JsString::from(s.as_str())
    }
}

impl PartialEq<str> for JsString {
    fn eq(&self, other: &str) -> bool {
        self.units.iter().copied().eq(other.encode_utf16())
    }
}

impl PartialEq<&str> for JsString {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl fmt::Debug for JsString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_utf8() {
            Some(s) => f.debug_tuple("JsString").field(&s).finish(),
            None => f.debug_tuple("JsString").field(&self.units).finish(),
        }
    }
}

impl fmt::Display for JsString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in char::decode_utf16(self.units.iter().copied()) {
            write!(f, "{}", ch.unwrap_or(char::REPLACEMENT_CHARACTER))?;
        }
        Ok(())
    }
}

/// Serializes as a UTF-8 string. Unpaired surrogates cannot be represented
/// and are replaced with U+FFFD, so `"\uD800"` and `"\uFFFD"` serialize
/// identically; use [`JsString::as_units`] when the exact code units matter.
impl Serialize for JsString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string_lossy())
    }
}
