//! Tests for comment attachment: which node each comment lands on.

use crate::parse_source;
use tsgen_ast::{ClassMember, Decl, Expr, HasTrivia, Stmt, Trivia};

fn parse(source: &str) -> Vec<Stmt> {
    parse_source("test.ts", source).expect("parse")
}

fn line(text: &str) -> Trivia {
    Trivia::line_comment(text)
}

fn function_body(stmt: &Stmt) -> &tsgen_ast::Block {
    match stmt {
        Stmt::Declaration(Decl::Function(f)) => f.body.as_ref().expect("function body"),
        other => panic!("expected a function declaration, got {other:?}"),
    }
}

// =============================================================================
// Statements
// =============================================================================

#[test]
fn test_statement_comments_and_blank_lines() {
    let stmts = parse("// one\nfoo();\n\n// two\nbar(); // tail\n");
    assert_eq!(stmts.len(), 2);
    assert_eq!(stmts[0].leading_trivia(), [line(" one")]);
    assert!(stmts[0].trailing_trivia().is_empty());
    assert_eq!(stmts[1].leading_trivia(), [Trivia::BlankLine, line(" two")]);
    assert_eq!(stmts[1].trailing_trivia(), [line(" tail")]);
}

#[test]
fn test_file_header_keeps_its_blank_line() {
    let stmts = parse("// header\n\nfoo();");
    assert_eq!(stmts[0].leading_trivia(), [line(" header"), Trivia::BlankLine]);
}

#[test]
fn test_comment_after_opening_brace_leads_first_statement() {
    let stmts = parse("function f() { // note\n    a();\n}");
    let body = function_body(&stmts[0]);
    assert_eq!(body.statements[0].leading_trivia(), [line(" note")]);
}

#[test]
fn test_dangling_comment_goes_to_last_statement() {
    let stmts = parse("function f() {\n    a();\n    // end\n}");
    let body = function_body(&stmts[0]);
    assert_eq!(body.statements[0].trailing_trivia(), [line(" end")]);
    assert!(body.trailing_trivia().is_empty());
}

#[test]
fn test_dangling_comment_of_empty_block_goes_to_block() {
    let stmts = parse("function f() {\n    // nothing yet\n}");
    let body = function_body(&stmts[0]);
    assert!(body.statements.is_empty());
    assert_eq!(body.trailing_trivia(), [line(" nothing yet")]);
}

#[test]
fn test_trailing_file_comment_goes_to_last_statement() {
    let stmts = parse("a();\n// end of file\n");
    assert_eq!(stmts[0].trailing_trivia(), [line(" end of file")]);
}

#[test]
fn test_comments_only_file() {
    assert!(parse("// only a comment\n").is_empty());
}

// =============================================================================
// Documentation comments
// =============================================================================

#[test]
fn test_jsdoc_is_parsed_onto_declaration() {
    let stmts = parse("/**\n * Adds.\n * @param a first\n */\nfunction add(a: number) {}");
    let [Trivia::JsDoc(doc)] = stmts[0].leading_trivia() else {
        panic!("expected one doc comment, got {:?}", stmts[0].leading_trivia());
    };
    assert_eq!(doc.description.as_deref(), Some("Adds."));
    assert_eq!(doc.params.len(), 1);
    assert_eq!(doc.params[0].name, "a");
    assert_eq!(doc.params[0].description.as_deref(), Some("first"));
}

#[test]
fn test_exported_declaration_keeps_its_doc() {
    let stmts = parse("/** The answer. */\nexport const answer = 42;");
    assert!(matches!(stmts[0].leading_trivia(), [Trivia::JsDoc(_)]));
}

// =============================================================================
// Members, clauses and properties
// =============================================================================

#[test]
fn test_class_member_comments() {
    let stmts = parse("class A {\n    // x doc\n    x = 1;\n    /** m doc */\n    m() {}\n    // end\n}");
    let Stmt::Declaration(Decl::Class(class)) = &stmts[0] else {
        panic!("expected a class");
    };
    assert_eq!(class.members[0].leading_trivia(), [line(" x doc")]);
    assert!(matches!(class.members[1], ClassMember::Method(_)));
    assert!(matches!(class.members[1].leading_trivia(), [Trivia::JsDoc(_)]));
    assert_eq!(class.members[1].trailing_trivia(), [line(" end")]);
}

#[test]
fn test_interface_member_comments() {
    let stmts = parse("interface I {\n    // a\n    a: string; // after a\n    b: number;\n}");
    let Stmt::Declaration(Decl::Interface(iface)) = &stmts[0] else {
        panic!("expected an interface");
    };
    assert_eq!(iface.members[0].leading_trivia(), [line(" a")]);
    assert_eq!(iface.members[0].trailing_trivia(), [line(" after a")]);
    assert!(iface.members[1].leading_trivia().is_empty());
}

#[test]
fn test_enum_member_comments() {
    let stmts = parse("enum E {\n    A, // first\n    B,\n}");
    let Stmt::Declaration(Decl::Enum(e)) = &stmts[0] else {
        panic!("expected an enum");
    };
    assert_eq!(e.members[0].trailing_trivia(), [line(" first")]);
    assert!(e.members[1].trivia().is_empty());
}

#[test]
fn test_switch_clause_comments() {
    let stmts = parse("switch (x) {\n    // one\n    case 1:\n        a();\n    // last\n}");
    let Stmt::Switch(switch) = &stmts[0] else {
        panic!("expected a switch");
    };
    assert_eq!(switch.clauses[0].leading_trivia(), [line(" one")]);
    assert_eq!(switch.clauses[0].statements[0].trailing_trivia(), [line(" last")]);
}

#[test]
fn test_object_property_comments() {
    let stmts = parse("const o = {\n    // a\n    a: 1,\n    b: 2, // b\n};");
    let Stmt::Variable(var) = &stmts[0] else {
        panic!("expected a variable statement");
    };
    let Some(Expr::Object(object)) = &var.declarations[0].init else {
        panic!("expected an object literal");
    };
    assert_eq!(object.properties[0].leading_trivia(), [line(" a")]);
    assert_eq!(object.properties[1].trailing_trivia(), [line(" b")]);
}

#[test]
fn test_dangling_comment_of_empty_object_goes_to_object() {
    let stmts = parse("const o = {\n    // nothing\n};");
    let Stmt::Variable(var) = &stmts[0] else {
        panic!("expected a variable statement");
    };
    let init = var.declarations[0].init.as_ref().expect("initializer");
    assert_eq!(init.trailing_trivia(), [line(" nothing")]);
}

// =============================================================================
// Speculation
// =============================================================================

#[test]
fn test_failed_arrow_attempt_releases_claimed_comments() {
    // `(a = function ...)` is first tried as an arrow head, which claims the
    // comment inside the function body before failing at `;`.
    let stmts = parse("(a = function () {\n    // c\n    return 1;\n});");
    let Stmt::Expression(stmt) = &stmts[0] else {
        panic!("expected an expression statement");
    };
    let Expr::Paren(paren) = &stmt.expr else {
        panic!("expected a parenthesized expression");
    };
    let Expr::Binary(assign) = &paren.expr else {
        panic!("expected an assignment");
    };
    let Expr::Function(function) = &assign.right else {
        panic!("expected a function expression");
    };
    assert_eq!(function.body.statements[0].leading_trivia(), [line(" c")]);
}
