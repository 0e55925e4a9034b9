//! Unit tests for SourcePosition and SourceRange

use core_types::{SourcePosition, SourceRange};

#[cfg(test)]
mod source_position_tests {
    use super::*;

    #[test]
    fn test_source_position_zero_values() {
        let pos = SourcePosition::default();

        assert_eq!(pos.line, 0);
        assert_eq!(pos.column, 0);
        assert_eq!(pos.offset, 0);
    }

    #[test]
    fn test_source_position_large_values() {
        let pos = SourcePosition::new(u32::MAX, u32::MAX, usize::MAX);

        assert_eq!(pos.line, u32::MAX);
        assert_eq!(pos.column, u32::MAX);
        assert_eq!(pos.offset, usize::MAX);
    }

    #[test]
    fn test_source_position_display() {
        assert_eq!(SourcePosition::new(12, 40, 999).to_string(), "12:40");
    }

    #[test]
    fn test_source_position_is_copy() {
        let pos = SourcePosition::new(1, 1, 0);
        let copied = pos;
        assert_eq!(pos, copied);
    }

    #[test]
    fn test_source_position_serializes_fields() {
        let json = serde_json::to_string(&SourcePosition::new(1, 2, 3)).unwrap();
        assert_eq!(json, r#"{"line":1,"column":2,"offset":3}"#);
    }
}

#[cfg(test)]
mod source_range_tests {
    use super::*;

    #[test]
    fn test_range_spanning_lines() {
        let range = SourceRange::new(
            SourcePosition::new(1, 10, 9),
            SourcePosition::new(2, 4, 20),
        );

        assert_eq!(range.len(), 11);
        assert_eq!(range.to_string(), "1:10-2:4");
    }

    #[test]
    fn test_inverted_range_has_zero_len() {
        let range = SourceRange::new(SourcePosition::new(1, 5, 4), SourcePosition::new(1, 1, 0));
        assert_eq!(range.len(), 0);
        assert!(range.is_empty());
    }

    #[test]
    fn test_single_line_range_of_string_token() {
        let lexeme = "'abc'";
        let range = SourceRange::single_line(SourcePosition::new(4, 7, 60), lexeme.len());

        assert_eq!(range.start.column, 7);
        assert_eq!(range.end.column, 12);
        assert_eq!(range.end.offset, 65);
    }
}
