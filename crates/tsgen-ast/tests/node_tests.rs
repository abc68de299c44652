//! Tests for node immutability, structural sharing and trivia helpers.

use crate::factory;
use crate::{
    AstNode, BinaryOp, Decl, Expr, HasTrivia, JsDoc, Modifiers, NodeKind, ParameterList, Stmt,
    Trivia, TsType,
};
use std::sync::Arc;

fn ident(name: &str) -> Expr {
    factory::identifier(name).expect("valid identifier")
}

#[test]
fn test_with_trivia_leaves_original_untouched() {
    let original = ident("a");
    let commented = original.with_leading_trivia(vec![Trivia::line_comment(" note")]);

    assert!(original.leading_trivia().is_empty());
    assert_eq!(commented.leading_trivia(), &[Trivia::line_comment(" note")]);
}

#[test]
fn test_with_trivia_shares_untouched_children() {
    let left = ident("a");
    let right = factory::number_literal("1");
    let sum = factory::binary(left, BinaryOp::Add, right);
    let commented = sum.with_trailing_trivia(vec![Trivia::line_comment(" sum")]);

    let (Expr::Binary(before), Expr::Binary(after)) = (&sum, &commented) else {
        panic!("expected binary expressions");
    };
    assert!(!Arc::ptr_eq(before, after));
    let (Expr::Identifier(l1), Expr::Identifier(l2)) = (&before.left, &after.left) else {
        panic!("expected identifiers");
    };
    assert!(Arc::ptr_eq(l1, l2));
}

#[test]
fn test_with_jsdoc_prepends_structured_comment() {
    let decl = factory::function_decl(
        "f",
        vec![],
        ParameterList::EMPTY,
        None,
        Some(factory::block(vec![])),
        Modifiers::EXPORT,
    )
    .expect("valid function");
    let decl = decl.with_leading_trivia(vec![Trivia::BlankLine]);
    let doc = JsDoc::builder().description("Does things.").build();
    let documented = decl.with_jsdoc(doc.clone());

    assert_eq!(
        documented.leading_trivia(),
        &[Trivia::jsdoc(doc), Trivia::BlankLine]
    );
}

#[test]
fn test_canonical_nodes_are_constants() {
    assert_eq!(factory::this_expr(), Expr::THIS);
    assert_eq!(factory::this_type(), TsType::THIS);
    assert!(ParameterList::EMPTY.is_empty());
    assert!(Expr::THIS.trivia().is_empty());
}

#[test]
fn test_stmt_trivia_reaches_through_declarations() {
    let decl = factory::type_alias_decl("T", vec![], TsType::NUMBER, Modifiers::empty())
        .expect("valid alias");
    let stmt = Stmt::from(decl).with_leading_trivia(vec![Trivia::block_comment(" c ")]);

    let Stmt::Declaration(Decl::TypeAlias(alias)) = &stmt else {
        panic!("expected a type alias statement");
    };
    assert_eq!(alias.trivia.leading, vec![Trivia::block_comment(" c ")]);
}

#[test]
fn test_decl_with_modifiers() {
    let decl = factory::enum_decl("E", vec![], Modifiers::empty()).expect("valid enum");
    let exported = decl.with_modifiers(Modifiers::EXPORT | Modifiers::CONST);

    assert_eq!(decl.modifiers(), Modifiers::empty());
    assert_eq!(exported.modifiers(), Modifiers::EXPORT | Modifiers::CONST);
    assert_eq!(exported.name().as_deref(), Some("E"));
}

#[test]
fn test_modifier_keywords_are_in_canonical_order() {
    let modifiers = Modifiers::READONLY | Modifiers::STATIC | Modifiers::PRIVATE;
    assert_eq!(
        modifiers.keywords().collect::<Vec<_>>(),
        vec!["private", "static", "readonly"]
    );
    assert_eq!(Modifiers::from_keyword("declare"), Some(Modifiers::DECLARE));
    assert_eq!(Modifiers::from_keyword("override"), None);
}

#[test]
fn test_node_kinds() {
    let decl = factory::interface_decl("I", vec![], vec![], vec![], Modifiers::empty())
        .expect("valid interface");
    assert_eq!(ident("a").kind(), NodeKind::Expression);
    assert_eq!(factory::empty_stmt().kind(), NodeKind::Statement);
    assert_eq!(Stmt::from(decl.clone()).kind(), NodeKind::Declaration);
    assert_eq!(decl.kind(), NodeKind::Declaration);
    assert_eq!(TsType::ANY.kind(), NodeKind::Type);
    assert_eq!(Trivia::BlankLine.kind(), NodeKind::Trivia);
}

#[test]
fn test_unparenthesized_strips_all_parens() {
    let inner = ident("x");
    let wrapped = factory::paren(factory::paren(inner.clone()));
    assert_eq!(wrapped.unparenthesized(), &inner);
    assert_eq!(wrapped.as_identifier(), None);
    assert_eq!(inner.as_identifier(), Some("x"));
}

#[test]
fn test_trees_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Stmt>();
    assert_send_sync::<Expr>();
    assert_send_sync::<TsType>();
}

#[test]
fn test_serializes_to_json() {
    let stmt = factory::expression_stmt(factory::binary(
        ident("a"),
        BinaryOp::Add,
        factory::number_literal("1"),
    ));
    let json = serde_json::to_value(&stmt).expect("tree serializes");

    assert_eq!(json["Expression"]["expr"]["Binary"]["op"], "Add");
    assert_eq!(json["Expression"]["expr"]["Binary"]["left"]["Identifier"]["name"], "a");
    // Empty trivia is omitted.
    assert!(json["Expression"]["trivia"].as_object().is_some_and(|t| t.is_empty()));
}

#[test]
fn test_modifiers_serialize_as_keywords() {
    let json = serde_json::to_value(Modifiers::EXPORT | Modifiers::ASYNC).expect("serializes");
    assert_eq!(json, serde_json::json!(["export", "async"]));
}
