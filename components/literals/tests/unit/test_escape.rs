//! Escape decoding properties over whole character classes

use literals::{decode_string_literal, LiteralError};

/// Characters that mean something other than themselves after a backslash
const SPECIAL: &str = "0bfnrtvxu1234567";

#[cfg(test)]
mod fast_path_tests {
    use super::*;

    #[test]
    fn test_no_backslash_returns_interior_unchanged() {
        for interior in ["", "plain", "tab\there", "日本語", "emoji 😀", "q'uo\"te"] {
            for quote in ['"', '\''] {
                if interior.contains(quote) {
                    continue;
                }
                let lexeme = format!("{quote}{interior}{quote}");
                assert_eq!(decode_string_literal(&lexeme).unwrap(), interior);
            }
        }
    }

    #[test]
    fn test_fast_path_matches_general_path() {
        // A trailing identity escape forces the general path over the same text
        for interior in ["abc", "x y z", "ünï©ødé", "😀😀"] {
            let fast = decode_string_literal(&format!("'{interior}'")).unwrap();
            let slow = decode_string_literal(&format!("'{interior}\\z'")).unwrap();
            assert_eq!(format!("{fast}z"), slow.to_string());
        }
    }
}

#[cfg(test)]
mod identity_escape_tests {
    use super::*;

    #[test]
    fn test_printable_ascii_identity_escapes() {
        for byte in 0x20u8..=0x7E {
            let ch = byte as char;
            if SPECIAL.contains(ch) {
                continue;
            }
            let lexeme = format!("\"\\{ch}\"");
            let decoded = decode_string_literal(&lexeme).unwrap();
            assert_eq!(decoded, ch.to_string().as_str(), "escape of {ch:?}");
        }
    }

    #[test]
    fn test_non_ascii_identity_escape() {
        assert_eq!(decode_string_literal("'\\é'").unwrap(), "é");
        assert_eq!(decode_string_literal("'\\😀'").unwrap(), "😀");
    }
}

#[cfg(test)]
mod numeric_escape_tests {
    use super::*;

    #[test]
    fn test_every_octal_digit_is_rejected() {
        for digit in '1'..='7' {
            let lexeme = format!("'\\{digit}'");
            assert_eq!(
                decode_string_literal(&lexeme),
                Err(LiteralError::UnsupportedOctalEscape { digit, offset: 1 })
            );
        }
    }

    #[test]
    fn test_hex_escape_case_insensitive() {
        assert_eq!(decode_string_literal(r"'\x6a\x6A'").unwrap(), "jj");
        assert_eq!(decode_string_literal(r"'\u00e9\u00E9'").unwrap(), "éé");
    }

    #[test]
    fn test_escape_consumes_exactly_its_digits() {
        assert_eq!(decode_string_literal(r"'\x414'").unwrap(), "A4");
        assert_eq!(decode_string_literal(r"'\u00411'").unwrap(), "A1");
    }

    #[test]
    fn test_surrogate_pair_from_two_escapes() {
        let decoded = decode_string_literal(r"'\uD83D\uDE00'").unwrap();
        assert_eq!(decoded, "😀");
    }

    #[test]
    fn test_escape_cannot_borrow_closing_quote() {
        for lexeme in [r#""\x""#, r#""\xA""#, r#""\u""#, r#""\u004""#] {
            assert!(
                matches!(
                    decode_string_literal(lexeme),
                    Err(LiteralError::MalformedEscape { .. })
                ),
                "{lexeme}"
            );
        }
    }

    #[test]
    fn test_malformed_offset_is_relative_to_lexeme() {
        let err = decode_string_literal(r"'abc\xZZ'").unwrap_err();
        assert_eq!(err.offset(), Some(4));
        assert_eq!(
            err.to_string(),
            "Malformed escape sequence `\\xZ` at offset 4"
        );
    }
}
