//! Tests for error reporting: locations, messages and the nesting limit.

use crate::{parse_source, ParseErrorKind, ParserState};

#[test]
fn test_error_display_has_location_and_found_token() {
    let err = parse_source("test.ts", "let x = ;").expect_err("missing initializer");
    assert_eq!(err.kind, ParseErrorKind::Syntax);
    assert_eq!(err.location.line(), 1);
    assert_eq!(err.location.column(), 9);
    assert_eq!(err.to_string(), "test.ts:1:9: expected an expression (found `;`)");
}

#[test]
fn test_error_on_later_line() {
    let err = parse_source("main.ts", "a();\nb(;\n").expect_err("bad call");
    assert_eq!(err.location.line(), 2);
    assert_eq!(err.location.column(), 3);
    assert!(err.to_string().starts_with("main.ts:2:3: "));
}

#[test]
fn test_scan_errors_surface_as_syntax_errors() {
    let err = parse_source("test.ts", "let s = \"open").expect_err("unterminated string");
    assert_eq!(err.kind, ParseErrorKind::Syntax);
}

#[test]
fn test_unsupported_is_distinguished() {
    let err = parse_source("test.ts", "function* g() {}").expect_err("generator");
    assert!(err.is_unsupported());
    assert_eq!(err.kind, ParseErrorKind::Unsupported);

    let err = parse_source("test.ts", "function g(a b) {}").expect_err("syntax");
    assert!(!err.is_unsupported());
}

#[test]
fn test_expect_end_reports_leftover_tokens() {
    let mut parser = ParserState::from_source("test.ts", "a b").expect("scan");
    parser.parse_expression().expect("parse");
    let err = parser.expect_end().expect_err("leftover");
    assert_eq!(err.message, "expected end of input");
    assert_eq!(err.found, "b");
}

/// Run `f` on a thread with room for the deepest nesting the parser allows.
fn with_large_stack(f: impl FnOnce() + Send + 'static) {
    std::thread::Builder::new()
        .stack_size(64 * 1024 * 1024)
        .spawn(f)
        .expect("spawn")
        .join()
        .expect("join");
}

#[test]
fn test_deep_expression_nesting_is_an_error() {
    with_large_stack(|| {
        let depth = 1000;
        let source = format!("x = {}1{};", "(".repeat(depth), ")".repeat(depth));
        let err = parse_source("test.ts", &source).expect_err("too deep");
        assert_eq!(err.message, "nesting too deep");
    });
}

#[test]
fn test_deep_statement_nesting_is_an_error() {
    with_large_stack(|| {
        let depth = 1000;
        let source = format!("{}{}", "{".repeat(depth), "}".repeat(depth));
        let err = parse_source("test.ts", &source).expect_err("too deep");
        assert_eq!(err.message, "nesting too deep");
    });
}

#[test]
fn test_deep_type_nesting_is_an_error() {
    with_large_stack(|| {
        let depth = 1000;
        let source = format!("type T = {}string{};", "Array<".repeat(depth), ">".repeat(depth));
        let err = parse_source("test.ts", &source).expect_err("too deep");
        assert_eq!(err.message, "nesting too deep");
    });
}

#[test]
fn test_moderate_nesting_is_fine() {
    let source = format!("x = {}1{};", "(".repeat(20), ")".repeat(20));
    assert!(parse_source("test.ts", &source).is_ok());
}
