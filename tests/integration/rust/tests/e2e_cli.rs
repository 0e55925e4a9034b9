//! End-to-End CLI Integration Tests
//!
//! Drives the literal_cli Inspector the way `corten-lit` does and checks
//! the rendered output.

use literal_cli::Inspector;
use literals::LiteralKind;

fn inspect(inspector: &Inspector, items: &[&str]) -> (bool, String) {
    let lexemes: Vec<String> = items.iter().map(|s| s.to_string()).collect();
    let mut out = Vec::new();
    let report = inspector.inspect(&lexemes, &mut out).expect("inspect failed");
    (report.is_success(), String::from_utf8(out).unwrap())
}

/// Test: Numbers render the way JavaScript prints them
#[test]
fn test_e2e_number_rendering() {
    let (ok, out) = inspect(&Inspector::new(), &["0x1F", "3.14", "1e21", "0.0000001"]);

    assert!(ok);
    let values: Vec<&str> = out
        .lines()
        .map(|line| line.rsplit(' ').next().unwrap())
        .collect();
    assert_eq!(values, vec!["31", "3.14", "1e+21", "1e-7"]);
}

/// Test: Line continuation inside a string
#[test]
fn test_e2e_line_continuation() {
    let (ok, out) = inspect(&Inspector::new().with_json(true), &["'a\\\nb'"]);

    assert!(ok);
    let record: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
    assert_eq!(record["value"], "ab");
}

/// Test: Forcing the string kind on an unquoted lexeme fails cleanly
#[test]
fn test_e2e_forced_kind_error() {
    let (ok, out) = inspect(
        &Inspector::new().with_kind(Some(LiteralKind::String)),
        &["abc"],
    );

    assert!(!ok);
    assert!(out.contains("not enclosed in matching quotes"));
}
