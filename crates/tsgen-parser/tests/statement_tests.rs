//! Tests for statement parsing: loops, switch, labels and automatic semicolon
//! insertion.

use crate::parse_source;
use tsgen_ast::display_statements;

fn display(source: &str) -> String {
    let statements = parse_source("test.ts", source).expect("parse");
    display_statements(&statements)
}

fn parse_error(source: &str) -> crate::ParseError {
    match parse_source("test.ts", source) {
        Ok(statements) => panic!("expected an error, parsed {}", display_statements(&statements)),
        Err(err) => err,
    }
}

// =============================================================================
// Loops
// =============================================================================

#[test]
fn test_for_with_typed_declaration() {
    assert_eq!(
        display("for (const x: number = 0; x < 10; x++) {}"),
        "(for (const x: number = 0); (< x 10); (post++ x) (block))"
    );
}

#[test]
fn test_for_with_empty_clauses() {
    assert_eq!(display("for (;;) ;"), "(for _; _; _ (empty))");
}

#[test]
fn test_for_in_and_for_of() {
    assert_eq!(display("for (const k in o) {}"), "(for-in (const k) o (block))");
    assert_eq!(display("for (x of xs);"), "(for-of x xs (empty))");
}

#[test]
fn test_in_is_allowed_inside_for_initializer_parentheses() {
    assert_eq!(
        display("for (let x = (a in b); x; ) {}"),
        "(for (let x = (paren (in a b))); x; _ (block))"
    );
}

#[test]
fn test_for_in_left_side_is_checked() {
    let err = parse_error("for (let a, b in o) {}");
    assert_eq!(err.message, "a for-in statement declares exactly one variable");
    let err = parse_error("for (const a = 1 of xs) {}");
    assert_eq!(
        err.message,
        "the variable of a for-of statement cannot have an initializer"
    );
}

#[test]
fn test_while_and_do_while() {
    assert_eq!(display("while (a) b();"), "(while a (expr (call b)))");
    assert_eq!(
        display("do x++; while (x < 3)"),
        "(do (expr (post++ x)) (< x 3))"
    );
}

// =============================================================================
// Control flow
// =============================================================================

#[test]
fn test_if_else_chain() {
    assert_eq!(
        display("if (a) b; else if (c) d; else e;"),
        "(if a (expr b) (if c (expr d) (expr e)))"
    );
}

#[test]
fn test_switch_clauses() {
    assert_eq!(
        display("switch (x) { case 1: a(); break; case 2: default: }"),
        "(switch x (case 1 (expr (call a)) (break)) (case 2) (default))"
    );
}

#[test]
fn test_switch_rejects_second_default() {
    let err = parse_error("switch (x) { default: break; default: }");
    assert_eq!(err.message, "a switch statement may have only one default clause");
}

#[test]
fn test_try_catch_finally() {
    assert_eq!(
        display("try { a(); } catch (e) { } finally { }"),
        "(try (block (expr (call a))) (catch e (block)) (finally (block)))"
    );
    assert_eq!(
        display("try {} catch { }"),
        "(try (block) (catch (block)))"
    );
    let err = parse_error("try {}");
    assert_eq!(err.message, "expected `catch` or `finally`");
}

#[test]
fn test_throw_requires_expression_on_same_line() {
    assert_eq!(display("throw new Error(\"x\");"), "(throw (new Error \"x\"))");
    parse_error("throw\nnew Error();");
}

// =============================================================================
// Automatic semicolon insertion
// =============================================================================

#[test]
fn test_line_breaks_end_statements() {
    assert_eq!(display("let a = 1\nlet b = 2"), "(let a = 1)\n(let b = 2)");
    assert_eq!(display("a\n++b"), "(expr a)\n(expr (++ b))");
}

#[test]
fn test_return_ends_at_line_break() {
    assert_eq!(
        display("function f() {\n    return\n    1\n}"),
        "(function f() (block (return) (expr 1)))"
    );
}

#[test]
fn test_missing_semicolon_on_one_line_is_an_error() {
    let err = parse_error("let a = 1 let b = 2");
    assert!(!err.is_unsupported());
}

#[test]
fn test_let_can_be_an_identifier() {
    assert_eq!(display("let = 1;"), "(expr (= let 1))");
}

// =============================================================================
// Labels
// =============================================================================

#[test]
fn test_labelled_break() {
    assert_eq!(
        display("outer: for (;;) { break outer; }"),
        "(label outer (for _; _; _ (block (break outer))))"
    );
}

#[test]
fn test_undefined_label() {
    let err = parse_error("for (;;) { continue nope; }");
    assert_eq!(err.message, "undefined label `nope`");
}

#[test]
fn test_duplicate_nested_label() {
    parse_error("target:\ntarget:\nwhile (true) {}");
}

#[test]
fn test_sequential_labels_are_allowed() {
    assert_eq!(
        display("a: while (true) {}\na: while (true) {}"),
        "(label a (while true (block)))\n(label a (while true (block)))"
    );
}

#[test]
fn test_labels_do_not_cross_function_boundaries() {
    let err = parse_error("a: { function f() { break a; } }");
    assert_eq!(err.message, "undefined label `a`");
}

// =============================================================================
// Unsupported statements
// =============================================================================

#[test]
fn test_unsupported_statements() {
    for source in [
        "debugger;",
        "with (o) {}",
        "for await (const x of xs) {}",
        "const { a } = o;",
        "let x!: number;",
        "try {} catch ({ message }) {}",
    ] {
        let err = parse_error(source);
        assert!(err.is_unsupported(), "{source}: {err}");
    }
}
