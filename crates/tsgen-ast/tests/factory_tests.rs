//! Tests for the node factory and parameter list partitioning.

use crate::factory;
use crate::{
    BuildError, EntityName, LiteralValue, Modifiers, ModuleKeyword, ModuleName, Parameter,
    ParameterKind, ParameterList, TsType, TypeKeyword,
};

fn param(kind: ParameterKind, name: &str) -> Parameter {
    factory::parameter(kind, name, None).expect("valid parameter")
}

fn names(list: &ParameterList) -> Vec<&str> {
    list.iter().map(|p| p.name.as_str()).collect()
}

// =============================================================================
// Arity and name checks
// =============================================================================

#[test]
fn test_empty_identifier_is_rejected() {
    assert_eq!(
        factory::identifier(""),
        Err(BuildError::EmptyName { kind: "identifier" })
    );
    assert!(factory::identifier("  ").is_err());
    assert!(factory::identifier("ok").is_ok());
}

#[test]
fn test_union_needs_two_members() {
    let err = factory::union_type(vec![TsType::STRING]).unwrap_err();
    assert_eq!(
        err,
        BuildError::TooFewElements {
            kind: "union type",
            min: 2,
            found: 1
        }
    );
    assert_eq!(
        err.to_string(),
        "union type requires at least 2 element(s), found 1"
    );
    assert!(factory::union_type(vec![TsType::STRING, TsType::NUMBER]).is_ok());
}

#[test]
fn test_intersection_needs_two_members() {
    assert!(factory::intersection_type(vec![]).is_err());
    assert!(factory::intersection_type(vec![TsType::ANY, TsType::ANY]).is_ok());
}

#[test]
fn test_tuple_needs_one_element() {
    assert!(matches!(
        factory::tuple_type(vec![]),
        Err(BuildError::TooFewElements { min: 1, found: 0, .. })
    ));
    assert!(factory::tuple_type(vec![TsType::BOOLEAN]).is_ok());
}

#[test]
fn test_qualified_names_reject_empty_parts() {
    assert!(factory::entity_name(Vec::<String>::new()).is_err());
    assert!(factory::entity_name(["a", ""]).is_err());
    let name = factory::entity_name(["a", "b", "c"]).expect("valid name");
    assert_eq!(name.to_string(), "a.b.c");
    assert!(factory::type_reference(EntityName(vec![]), vec![]).is_err());
}

#[test]
fn test_module_name_must_be_non_empty() {
    let empty = factory::module_decl(
        ModuleKeyword::Namespace,
        ModuleName::Identifier(EntityName(vec![])),
        vec![],
        Modifiers::empty(),
    );
    assert!(empty.is_err());

    let quoted = factory::module_decl(
        ModuleKeyword::Module,
        ModuleName::String("fs".into()),
        vec![],
        Modifiers::DECLARE,
    )
    .expect("valid module");
    assert_eq!(quoted.name().as_deref(), Some("\"fs\""));
}

#[test]
fn test_try_needs_handler_or_finalizer() {
    let body = factory::block(vec![]);
    assert!(factory::try_stmt(body.clone(), None, None).is_err());
    assert!(factory::try_stmt(body.clone(), None, Some(factory::block(vec![]))).is_ok());
    let handler = factory::catch_clause(Some("e".into()), None, factory::block(vec![]));
    assert!(factory::try_stmt(body, Some(handler), None).is_ok());
}

#[test]
fn test_variable_statement_needs_a_declarator() {
    assert!(
        factory::variable_stmt(crate::VariableKind::Let, vec![], Modifiers::empty()).is_err()
    );
}

#[test]
fn test_null_literal_type_is_the_null_keyword() {
    assert_eq!(
        factory::literal_type(LiteralValue::Null),
        TsType::keyword(TypeKeyword::Null)
    );
    assert!(matches!(
        factory::literal_type(LiteralValue::Boolean(true)),
        TsType::Literal(_)
    ));
}

// =============================================================================
// Parameter lists
// =============================================================================

#[test]
fn test_parameter_list_partitions_by_kind() {
    let list = factory::parameter_list(vec![
        param(ParameterKind::Rest, "rest"),
        param(ParameterKind::Optional, "b"),
        param(ParameterKind::Required, "a"),
        param(ParameterKind::Optional, "c"),
        param(ParameterKind::Required, "d"),
    ])
    .expect("one rest parameter");

    assert_eq!(names(&list), vec!["a", "d", "b", "c", "rest"]);
    assert_eq!(list.required().len(), 2);
    assert_eq!(list.optional().len(), 2);
    assert_eq!(list.rest().map(|p| p.name.as_str()), Some("rest"));
    assert_eq!(list.len(), 5);
}

#[test]
fn test_second_rest_parameter_is_rejected() {
    let result = ParameterList::new(vec![
        param(ParameterKind::Rest, "a"),
        param(ParameterKind::Rest, "b"),
    ]);
    assert_eq!(result, Err(BuildError::MultipleRestParameters));
}

#[test]
fn test_initializer_makes_parameter_optional() {
    let p = param(ParameterKind::Required, "x").with_initializer(Some(factory::number_literal("0")));
    assert_eq!(p.kind, ParameterKind::Optional);

    let rest = param(ParameterKind::Rest, "r").with_initializer(None);
    assert_eq!(rest.kind, ParameterKind::Rest);
}

#[test]
fn test_with_parameter_type_replaces_one_parameter() {
    let list = ParameterList::new(vec![
        param(ParameterKind::Required, "a"),
        param(ParameterKind::Required, "b"),
    ])
    .expect("valid list");
    let typed = list.with_parameter_type("b", Some(TsType::STRING));

    assert_eq!(typed.get("a").and_then(|p| p.ty.clone()), None);
    assert_eq!(typed.get("b").and_then(|p| p.ty.clone()), Some(TsType::STRING));
    assert_eq!(list.get("b").and_then(|p| p.ty.clone()), None);
    assert_eq!(list.with_parameter_type("zzz", None), list);
}

#[test]
fn test_empty_parameter_name_is_rejected() {
    assert!(factory::parameter(ParameterKind::Required, "", None).is_err());
    assert!(factory::type_parameter("", None, None).is_err());
}
