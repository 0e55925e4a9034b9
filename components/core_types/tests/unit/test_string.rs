//! Unit tests for JsString

use core_types::JsString;

#[cfg(test)]
mod js_string_tests {
    use super::*;

    #[test]
    fn test_empty_string() {
        let s = JsString::new();
        assert!(s.is_empty());
        assert_eq!(s, "");
        assert_eq!(s.to_utf8().as_deref(), Some(""));
    }

    #[test]
    fn test_length_counts_code_units() {
        // One BMP character, one astral character (two units)
        let s = JsString::from("é𝄞");
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn test_surrogate_pair_built_from_units_is_valid_utf8() {
        let mut s = JsString::with_capacity(2);
        s.push_unit(0xD834);
        s.push_unit(0xDD1E);

        assert_eq!(s, "𝄞");
        assert_eq!(s.to_utf8().as_deref(), Some("𝄞"));
    }

    #[test]
    fn test_unpaired_surrogate() {
        let s = JsString::from_units(vec![0xD800]);

        assert!(s.to_utf8().is_none());
        assert_eq!(s.to_string_lossy(), "\u{FFFD}");
        assert_eq!(s.to_string(), "\u{FFFD}");
    }

    #[test]
    fn test_from_string() {
        let s = JsString::from(String::from("abc"));
        assert_eq!(s.as_units(), &[0x61, 0x62, 0x63]);
    }

    #[test]
    fn test_debug_shows_text() {
        assert_eq!(format!("{:?}", JsString::from("hi")), r#"JsString("hi")"#);
    }

    #[test]
    fn test_lone_surrogate_serializes_as_replacement_char() {
        let lone = serde_json::to_string(&JsString::from_units(vec![0xD800])).unwrap();
        let replacement = serde_json::to_string(&JsString::from("\u{FFFD}")).unwrap();
        assert_eq!(lone, replacement);
    }

    #[test]
    fn test_serializes_as_json_string() {
        let json = serde_json::to_string(&JsString::from("a\"b")).unwrap();
        assert_eq!(json, r#""a\"b""#);
    }
}
