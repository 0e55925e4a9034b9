//! Unit tests for JsError and ErrorKind

use core_types::{ErrorKind, JsError, SourcePosition};

#[cfg(test)]
mod error_kind_tests {
    use super::*;

    #[test]
    fn test_error_kind_syntax_error() {
        let kind = ErrorKind::SyntaxError;
        assert!(matches!(kind, ErrorKind::SyntaxError));
        assert_eq!(kind.name(), "SyntaxError");
    }

    #[test]
    fn test_error_kind_equality() {
        assert_eq!(ErrorKind::InternalError, ErrorKind::InternalError);
        assert_ne!(ErrorKind::SyntaxError, ErrorKind::InternalError);
    }
}

#[cfg(test)]
mod js_error_tests {
    use super::*;

    #[test]
    fn test_js_error_without_position() {
        let error = JsError {
            kind: ErrorKind::SyntaxError,
            message: "Invalid hexadecimal escape sequence".to_string(),
            source_position: None,
        };

        assert_eq!(
            error.to_string(),
            "SyntaxError: Invalid hexadecimal escape sequence"
        );
    }

    #[test]
    fn test_js_error_with_position() {
        let error = JsError {
            kind: ErrorKind::InternalError,
            message: "Not implemented".to_string(),
            source_position: Some(SourcePosition::new(7, 1, 88)),
        };

        assert_eq!(error.to_string(), "InternalError: Not implemented (7:1)");
    }

    #[test]
    fn test_js_error_is_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(JsError {
            kind: ErrorKind::InternalError,
            message: "Not implemented".to_string(),
            source_position: None,
        });

        assert!(error.to_string().starts_with("InternalError"));
    }

    #[test]
    fn test_js_error_clone() {
        let error = JsError {
            kind: ErrorKind::SyntaxError,
            message: "test".to_string(),
            source_position: Some(SourcePosition::new(1, 1, 0)),
        };

        assert_eq!(error.clone(), error);
    }
}
