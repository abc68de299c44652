//! Tests for visitor dispatch and default traversal.

use crate::expr::{BinaryExpr, Identifier};
use crate::factory;
use crate::types::TypeReference;
use crate::visit::{self, Visit};
use crate::{
    BinaryOp, Expr, Modifiers, ParameterKind, ParameterList, PropertyName, Stmt, TsType,
    VariableKind,
};

fn ident(name: &str) -> Expr {
    factory::identifier(name).expect("valid identifier")
}

#[derive(Default)]
struct IdentifierCollector {
    names: Vec<String>,
}

impl Visit for IdentifierCollector {
    fn visit_identifier(&mut self, node: &Identifier) {
        self.names.push(node.name.clone());
    }
}

#[derive(Default)]
struct TypeNameCollector {
    names: Vec<String>,
}

impl Visit for TypeNameCollector {
    fn visit_type_reference(&mut self, node: &TypeReference) {
        self.names.push(node.name.to_string());
        for arg in &node.type_args {
            self.visit_type(arg);
        }
    }
}

/// Counts additions but does not look inside them.
#[derive(Default)]
struct ShallowAdditions {
    count: usize,
    identifiers: usize,
}

impl Visit for ShallowAdditions {
    fn visit_binary_expr(&mut self, node: &BinaryExpr) {
        if node.op == BinaryOp::Add {
            self.count += 1;
            return;
        }
        visit::walk_binary_expr(self, node);
    }

    fn visit_identifier(&mut self, _node: &Identifier) {
        self.identifiers += 1;
    }
}

fn sample_statements() -> Vec<Stmt> {
    // let x: Map<K, V> = f(a, b.c);
    let map = factory::type_reference(
        factory::entity_name(["Map"]).expect("name"),
        vec![
            factory::simple_type("K").expect("type"),
            factory::simple_type("V").expect("type"),
        ],
    )
    .expect("type reference");
    let init = factory::call(
        ident("f"),
        vec![],
        vec![ident("a"), factory::member(ident("b"), "c").expect("member")],
    );
    let declarator = factory::variable_declarator("x", Some(map), Some(init)).expect("declarator");
    let decl = factory::variable_stmt(VariableKind::Let, vec![declarator], Modifiers::empty())
        .expect("variable statement");

    // if (y) { return z; }
    let branch = factory::if_stmt(
        ident("y"),
        factory::block_stmt(vec![factory::return_stmt(Some(ident("z")))]),
        None,
    );

    vec![decl, branch]
}

#[test]
fn test_default_walk_reaches_every_identifier() {
    let mut collector = IdentifierCollector::default();
    for stmt in &sample_statements() {
        collector.visit_stmt(stmt);
    }
    // Member property names are not identifier expressions.
    assert_eq!(collector.names, vec!["f", "a", "b", "y", "z"]);
}

#[test]
fn test_types_are_visited_in_declarations() {
    let mut collector = TypeNameCollector::default();
    for stmt in &sample_statements() {
        stmt.accept(&mut collector);
    }
    assert_eq!(collector.names, vec!["Map", "K", "V"]);
}

#[test]
fn test_override_can_stop_descent() {
    // (a + b) * (c - d)
    let expr = factory::binary(
        factory::paren(factory::binary(ident("a"), BinaryOp::Add, ident("b"))),
        BinaryOp::Mul,
        factory::paren(factory::binary(ident("c"), BinaryOp::Sub, ident("d"))),
    );
    let mut counter = ShallowAdditions::default();
    counter.visit_expr(&expr);

    assert_eq!(counter.count, 1);
    assert_eq!(counter.identifiers, 2);
}

#[test]
fn test_class_members_and_parameters_are_walked() {
    let params = ParameterList::new(vec![
        factory::parameter(ParameterKind::Required, "p", Some(TsType::NUMBER))
            .expect("parameter")
            .with_initializer(Some(ident("fallback"))),
    ])
    .expect("parameters");
    let method = factory::method_member(
        PropertyName::Computed(ident("key")),
        false,
        vec![],
        params,
        None,
        Some(factory::block(vec![factory::expression_stmt(ident("body"))])),
        Modifiers::empty(),
    );
    let property = factory::property_member(
        PropertyName::ident("field"),
        false,
        None,
        Some(ident("init")),
        Modifiers::STATIC,
    );
    let class = factory::class_decl(
        "C",
        vec![],
        None,
        vec![],
        vec![method, property],
        Modifiers::empty(),
    )
    .expect("class");

    let mut collector = IdentifierCollector::default();
    collector.visit_decl(&class);
    assert_eq!(collector.names, vec!["key", "fallback", "body", "init"]);
}

#[test]
fn test_switch_and_try_are_walked() {
    let switch = factory::switch_stmt(
        ident("s"),
        vec![
            factory::case_clause(ident("one"), vec![]),
            factory::default_clause(vec![factory::break_stmt(None)]),
        ],
    );
    let handler = factory::catch_clause(
        Some("e".into()),
        None,
        factory::block(vec![factory::throw_stmt(ident("e"))]),
    );
    let try_stmt = factory::try_stmt(factory::block(vec![switch]), Some(handler), None)
        .expect("try statement");

    let mut collector = IdentifierCollector::default();
    collector.visit_stmt(&try_stmt);
    assert_eq!(collector.names, vec!["s", "one", "e"]);
}
