//! Node construction.
//!
//! One function per node kind. Functions whose node carries a grammar
//! invariant (a non-empty name, a minimum number of elements, at most one
//! rest parameter) return `Result<_, BuildError>` and never build a partial
//! node; the rest return the node directly. New nodes start without trivia.

use crate::decl::*;
use crate::error::BuildError;
use crate::expr::*;
use crate::modifiers::Modifiers;
use crate::node::{LiteralValue, PropertyName};
use crate::params::{Parameter, ParameterKind, ParameterList, TypeParameter};
use crate::stmt::*;
use crate::trivia::NodeTrivia;
use crate::types::*;
use std::sync::Arc;

fn require_name(kind: &'static str, name: impl Into<String>) -> Result<String, BuildError> {
    let name = name.into();
    if name.trim().is_empty() {
        return Err(BuildError::EmptyName { kind });
    }
    Ok(name)
}

fn require_len<T>(kind: &'static str, min: usize, items: Vec<T>) -> Result<Vec<T>, BuildError> {
    if items.len() < min {
        return Err(BuildError::TooFewElements {
            kind,
            min,
            found: items.len(),
        });
    }
    Ok(items)
}

fn trivia() -> NodeTrivia {
    NodeTrivia::default()
}

// =============================================================================
// Expressions
// =============================================================================

pub fn identifier(name: impl Into<String>) -> Result<Expr, BuildError> {
    Ok(Expr::Identifier(Arc::new(Identifier {
        name: require_name("identifier", name)?,
        trivia: trivia(),
    })))
}

pub fn this_expr() -> Expr {
    Expr::THIS
}

pub fn super_expr() -> Expr {
    Expr::SUPER
}

pub fn literal(value: LiteralValue) -> Expr {
    Expr::Literal(Arc::new(Literal {
        value,
        trivia: trivia(),
    }))
}

pub fn string_literal(value: impl Into<String>) -> Expr {
    literal(LiteralValue::String(value.into()))
}

/// `raw` is the numeric text as it should be written.
pub fn number_literal(raw: impl Into<String>) -> Expr {
    literal(LiteralValue::Number(raw.into()))
}

pub fn boolean_literal(value: bool) -> Expr {
    literal(LiteralValue::Boolean(value))
}

pub fn null_literal() -> Expr {
    literal(LiteralValue::Null)
}

pub fn array_literal(elements: Vec<Expr>) -> Expr {
    Expr::Array(Arc::new(ArrayLiteral {
        elements,
        trivia: trivia(),
    }))
}

pub fn object_literal(properties: Vec<ObjectProperty>) -> Expr {
    Expr::Object(Arc::new(ObjectLiteral {
        properties,
        trivia: trivia(),
    }))
}

pub fn key_value_property(name: PropertyName, value: Expr) -> ObjectProperty {
    ObjectProperty::KeyValue(Arc::new(KeyValueProperty {
        name,
        value,
        trivia: trivia(),
    }))
}

pub fn shorthand_property(name: impl Into<String>) -> Result<ObjectProperty, BuildError> {
    Ok(ObjectProperty::Shorthand(Arc::new(ShorthandProperty {
        name: require_name("shorthand property", name)?,
        trivia: trivia(),
    })))
}

pub fn spread_property(expr: Expr) -> ObjectProperty {
    ObjectProperty::Spread(Arc::new(SpreadProperty {
        expr,
        trivia: trivia(),
    }))
}

pub fn method_property(
    name: PropertyName,
    type_params: Vec<TypeParameter>,
    params: ParameterList,
    return_type: Option<TsType>,
    body: Block,
    modifiers: Modifiers,
) -> ObjectProperty {
    ObjectProperty::Method(Arc::new(MethodProperty {
        name,
        type_params,
        params,
        return_type,
        body,
        modifiers,
        trivia: trivia(),
    }))
}

pub fn function_expr(
    name: Option<String>,
    type_params: Vec<TypeParameter>,
    params: ParameterList,
    return_type: Option<TsType>,
    body: Block,
    modifiers: Modifiers,
) -> Expr {
    Expr::Function(Arc::new(FunctionExpr {
        name,
        type_params,
        params,
        return_type,
        body,
        modifiers,
        trivia: trivia(),
    }))
}

pub fn arrow_function(
    type_params: Vec<TypeParameter>,
    params: ParameterList,
    return_type: Option<TsType>,
    body: ArrowBody,
    modifiers: Modifiers,
) -> Expr {
    Expr::Arrow(Arc::new(ArrowFunction {
        type_params,
        params,
        return_type,
        body,
        modifiers,
        trivia: trivia(),
    }))
}

pub fn paren(expr: Expr) -> Expr {
    Expr::Paren(Arc::new(ParenExpr {
        expr,
        trivia: trivia(),
    }))
}

pub fn unary(op: UnaryOp, operand: Expr) -> Expr {
    Expr::Unary(Arc::new(UnaryExpr {
        op,
        operand,
        trivia: trivia(),
    }))
}

pub fn postfix(op: PostfixOp, operand: Expr) -> Expr {
    Expr::Postfix(Arc::new(PostfixExpr {
        op,
        operand,
        trivia: trivia(),
    }))
}

pub fn binary(left: Expr, op: BinaryOp, right: Expr) -> Expr {
    Expr::Binary(Arc::new(BinaryExpr {
        left,
        op,
        right,
        trivia: trivia(),
    }))
}

pub fn conditional(test: Expr, consequent: Expr, alternate: Expr) -> Expr {
    Expr::Conditional(Arc::new(ConditionalExpr {
        test,
        consequent,
        alternate,
        trivia: trivia(),
    }))
}

pub fn call(callee: Expr, type_args: Vec<TsType>, args: Vec<Expr>) -> Expr {
    Expr::Call(Arc::new(CallExpr {
        callee,
        type_args,
        args,
        optional: false,
        trivia: trivia(),
    }))
}

/// `callee?.(args)`
pub fn optional_call(callee: Expr, type_args: Vec<TsType>, args: Vec<Expr>) -> Expr {
    Expr::Call(Arc::new(CallExpr {
        callee,
        type_args,
        args,
        optional: true,
        trivia: trivia(),
    }))
}

pub fn new_expr(callee: Expr, type_args: Vec<TsType>, args: Option<Vec<Expr>>) -> Expr {
    Expr::New(Arc::new(NewExpr {
        callee,
        type_args,
        args,
        trivia: trivia(),
    }))
}

pub fn member(object: Expr, property: impl Into<String>) -> Result<Expr, BuildError> {
    member_access(object, property, false)
}

/// `object?.property`
pub fn optional_member(object: Expr, property: impl Into<String>) -> Result<Expr, BuildError> {
    member_access(object, property, true)
}

fn member_access(
    object: Expr,
    property: impl Into<String>,
    optional: bool,
) -> Result<Expr, BuildError> {
    Ok(Expr::Member(Arc::new(MemberExpr {
        object,
        property: require_name("member access", property)?,
        optional,
        trivia: trivia(),
    })))
}

pub fn element_access(object: Expr, index: Expr, optional: bool) -> Expr {
    Expr::ElementAccess(Arc::new(ElementAccessExpr {
        object,
        index,
        optional,
        trivia: trivia(),
    }))
}

pub fn cast(ty: TsType, expr: Expr) -> Expr {
    Expr::Cast(Arc::new(CastExpr {
        ty,
        expr,
        trivia: trivia(),
    }))
}

pub fn as_expr(expr: Expr, ty: TsType) -> Expr {
    Expr::As(Arc::new(AsExpr {
        expr,
        ty,
        trivia: trivia(),
    }))
}

pub fn non_null(expr: Expr) -> Expr {
    Expr::NonNull(Arc::new(NonNullExpr {
        expr,
        trivia: trivia(),
    }))
}

pub fn spread(expr: Expr) -> Expr {
    Expr::Spread(Arc::new(SpreadExpr {
        expr,
        trivia: trivia(),
    }))
}

// =============================================================================
// Statements
// =============================================================================

pub fn block(statements: Vec<Stmt>) -> Block {
    Block::new(statements)
}

pub fn block_stmt(statements: Vec<Stmt>) -> Stmt {
    Stmt::Block(Arc::new(block(statements)))
}

pub fn expression_stmt(expr: Expr) -> Stmt {
    Stmt::Expression(Arc::new(ExpressionStmt {
        expr,
        trivia: trivia(),
    }))
}

pub fn variable_declarator(
    name: impl Into<String>,
    ty: Option<TsType>,
    init: Option<Expr>,
) -> Result<VariableDeclarator, BuildError> {
    Ok(VariableDeclarator {
        name: require_name("variable declarator", name)?,
        ty,
        init,
    })
}

/// The declaration list shared by variable statements and `for` heads.
pub fn variable_declaration_list(
    kind: VariableKind,
    declarations: Vec<VariableDeclarator>,
    modifiers: Modifiers,
) -> Result<Arc<VariableStmt>, BuildError> {
    Ok(Arc::new(VariableStmt {
        kind,
        declarations: require_len("variable declaration", 1, declarations)?,
        modifiers,
        trivia: trivia(),
    }))
}

pub fn variable_stmt(
    kind: VariableKind,
    declarations: Vec<VariableDeclarator>,
    modifiers: Modifiers,
) -> Result<Stmt, BuildError> {
    variable_declaration_list(kind, declarations, modifiers).map(Stmt::Variable)
}

pub fn if_stmt(test: Expr, consequent: Stmt, alternate: Option<Stmt>) -> Stmt {
    Stmt::If(Arc::new(IfStmt {
        test,
        consequent,
        alternate,
        trivia: trivia(),
    }))
}

pub fn for_stmt(
    init: Option<ForInit>,
    test: Option<Expr>,
    update: Option<Expr>,
    body: Stmt,
) -> Stmt {
    Stmt::For(Arc::new(ForStmt {
        init,
        test,
        update,
        body,
        trivia: trivia(),
    }))
}

pub fn for_in_stmt(left: ForInit, right: Expr, body: Stmt) -> Stmt {
    Stmt::ForIn(Arc::new(ForInStmt {
        left,
        right,
        body,
        trivia: trivia(),
    }))
}

pub fn for_of_stmt(left: ForInit, right: Expr, body: Stmt) -> Stmt {
    Stmt::ForOf(Arc::new(ForOfStmt {
        left,
        right,
        body,
        trivia: trivia(),
    }))
}

pub fn while_stmt(test: Expr, body: Stmt) -> Stmt {
    Stmt::While(Arc::new(WhileStmt {
        test,
        body,
        trivia: trivia(),
    }))
}

pub fn do_while_stmt(body: Stmt, test: Expr) -> Stmt {
    Stmt::DoWhile(Arc::new(DoWhileStmt {
        body,
        test,
        trivia: trivia(),
    }))
}

pub fn switch_stmt(discriminant: Expr, clauses: Vec<SwitchClause>) -> Stmt {
    Stmt::Switch(Arc::new(SwitchStmt {
        discriminant,
        clauses,
        trivia: trivia(),
    }))
}

pub fn case_clause(test: Expr, statements: Vec<Stmt>) -> SwitchClause {
    SwitchClause {
        test: Some(test),
        statements,
        trivia: trivia(),
    }
}

pub fn default_clause(statements: Vec<Stmt>) -> SwitchClause {
    SwitchClause {
        test: None,
        statements,
        trivia: trivia(),
    }
}

/// A `try` needs a `catch` clause, a `finally` block, or both.
pub fn try_stmt(
    block: Block,
    handler: Option<CatchClause>,
    finalizer: Option<Block>,
) -> Result<Stmt, BuildError> {
    if handler.is_none() && finalizer.is_none() {
        return Err(BuildError::TooFewElements {
            kind: "try statement handler",
            min: 1,
            found: 0,
        });
    }
    Ok(Stmt::Try(Arc::new(TryStmt {
        block,
        handler,
        finalizer,
        trivia: trivia(),
    })))
}

pub fn catch_clause(param: Option<String>, ty: Option<TsType>, body: Block) -> CatchClause {
    CatchClause { param, ty, body }
}

pub fn throw_stmt(expr: Expr) -> Stmt {
    Stmt::Throw(Arc::new(ThrowStmt {
        expr,
        trivia: trivia(),
    }))
}

pub fn return_stmt(expr: Option<Expr>) -> Stmt {
    Stmt::Return(Arc::new(ReturnStmt {
        expr,
        trivia: trivia(),
    }))
}

pub fn break_stmt(label: Option<String>) -> Stmt {
    Stmt::Break(Arc::new(BreakStmt {
        label,
        trivia: trivia(),
    }))
}

pub fn continue_stmt(label: Option<String>) -> Stmt {
    Stmt::Continue(Arc::new(ContinueStmt {
        label,
        trivia: trivia(),
    }))
}

pub fn labelled_stmt(label: impl Into<String>, body: Stmt) -> Result<Stmt, BuildError> {
    Ok(Stmt::Labelled(Arc::new(LabelledStmt {
        label: require_name("label", label)?,
        body,
        trivia: trivia(),
    })))
}

pub fn empty_stmt() -> Stmt {
    Stmt::EMPTY
}

// =============================================================================
// Types
// =============================================================================

pub fn keyword_type(keyword: TypeKeyword) -> TsType {
    TsType::keyword(keyword)
}

pub fn this_type() -> TsType {
    TsType::THIS
}

pub fn entity_name<I, S>(parts: I) -> Result<EntityName, BuildError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let parts = parts
        .into_iter()
        .map(|part| require_name("qualified name part", part))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(EntityName(require_len("qualified name", 1, parts)?))
}

pub fn type_reference(name: EntityName, type_args: Vec<TsType>) -> Result<TsType, BuildError> {
    let name = entity_name(name.0)?;
    Ok(TsType::Reference(Arc::new(TypeReference {
        name,
        type_args,
        trivia: trivia(),
    })))
}

/// A reference to an unqualified type name without type arguments.
pub fn simple_type(name: impl Into<String>) -> Result<TsType, BuildError> {
    type_reference(EntityName::simple(name), Vec::new())
}

pub fn array_type(element: TsType) -> TsType {
    TsType::Array(Arc::new(ArrayType {
        element,
        trivia: trivia(),
    }))
}

pub fn tuple_type(elements: Vec<TsType>) -> Result<TsType, BuildError> {
    Ok(TsType::Tuple(Arc::new(TupleType {
        elements: require_len("tuple type", 1, elements)?,
        trivia: trivia(),
    })))
}

pub fn union_type(types: Vec<TsType>) -> Result<TsType, BuildError> {
    Ok(TsType::Union(Arc::new(UnionType {
        types: require_len("union type", 2, types)?,
        trivia: trivia(),
    })))
}

pub fn intersection_type(types: Vec<TsType>) -> Result<TsType, BuildError> {
    Ok(TsType::Intersection(Arc::new(IntersectionType {
        types: require_len("intersection type", 2, types)?,
        trivia: trivia(),
    })))
}

pub fn function_type(
    type_params: Vec<TypeParameter>,
    params: ParameterList,
    return_type: TsType,
) -> TsType {
    TsType::Function(Arc::new(FunctionType {
        type_params,
        params,
        return_type,
        trivia: trivia(),
    }))
}

pub fn constructor_type(
    type_params: Vec<TypeParameter>,
    params: ParameterList,
    return_type: TsType,
) -> TsType {
    TsType::Constructor(Arc::new(ConstructorType {
        type_params,
        params,
        return_type,
        trivia: trivia(),
    }))
}

pub fn object_type(members: Vec<TypeMember>) -> TsType {
    TsType::Object(Arc::new(ObjectType {
        members,
        trivia: trivia(),
    }))
}

pub fn type_query(name: EntityName) -> Result<TsType, BuildError> {
    Ok(TsType::Query(Arc::new(TypeQuery {
        name: entity_name(name.0)?,
        trivia: trivia(),
    })))
}

pub fn paren_type(ty: TsType) -> TsType {
    TsType::Paren(Arc::new(ParenType {
        ty,
        trivia: trivia(),
    }))
}

/// `null` is a keyword type, not a literal type.
pub fn literal_type(value: LiteralValue) -> TsType {
    match value {
        LiteralValue::Null => TsType::keyword(TypeKeyword::Null),
        value => TsType::Literal(Arc::new(LiteralType {
            value,
            trivia: trivia(),
        })),
    }
}

// =============================================================================
// Type members
// =============================================================================

pub fn property_signature(
    name: PropertyName,
    optional: bool,
    ty: Option<TsType>,
    modifiers: Modifiers,
) -> TypeMember {
    TypeMember::Property(Arc::new(PropertySignature {
        name,
        optional,
        ty,
        modifiers,
        trivia: trivia(),
    }))
}

pub fn method_signature(
    name: PropertyName,
    optional: bool,
    type_params: Vec<TypeParameter>,
    params: ParameterList,
    return_type: Option<TsType>,
) -> TypeMember {
    TypeMember::Method(Arc::new(MethodSignature {
        name,
        optional,
        type_params,
        params,
        return_type,
        trivia: trivia(),
    }))
}

pub fn call_signature(
    type_params: Vec<TypeParameter>,
    params: ParameterList,
    return_type: Option<TsType>,
) -> TypeMember {
    TypeMember::Call(Arc::new(CallSignature {
        type_params,
        params,
        return_type,
        trivia: trivia(),
    }))
}

pub fn construct_signature(
    type_params: Vec<TypeParameter>,
    params: ParameterList,
    return_type: Option<TsType>,
) -> TypeMember {
    TypeMember::Construct(Arc::new(ConstructSignature {
        type_params,
        params,
        return_type,
        trivia: trivia(),
    }))
}

pub fn index_signature(
    param_name: impl Into<String>,
    param_type: TsType,
    ty: TsType,
    modifiers: Modifiers,
) -> Result<Arc<IndexSignature>, BuildError> {
    Ok(Arc::new(IndexSignature {
        param_name: require_name("index signature parameter", param_name)?,
        param_type,
        ty,
        modifiers,
        trivia: trivia(),
    }))
}

// =============================================================================
// Parameters
// =============================================================================

pub fn parameter(
    kind: ParameterKind,
    name: impl Into<String>,
    ty: Option<TsType>,
) -> Result<Parameter, BuildError> {
    Ok(Parameter::new(kind, require_name("parameter", name)?, ty))
}

pub fn parameter_list(params: Vec<Parameter>) -> Result<ParameterList, BuildError> {
    ParameterList::new(params)
}

pub fn type_parameter(
    name: impl Into<String>,
    constraint: Option<TsType>,
    default: Option<TsType>,
) -> Result<TypeParameter, BuildError> {
    Ok(TypeParameter {
        name: require_name("type parameter", name)?,
        constraint,
        default,
    })
}

// =============================================================================
// Declarations
// =============================================================================

pub fn function_decl(
    name: impl Into<String>,
    type_params: Vec<TypeParameter>,
    params: ParameterList,
    return_type: Option<TsType>,
    body: Option<Block>,
    modifiers: Modifiers,
) -> Result<Decl, BuildError> {
    Ok(Decl::Function(Arc::new(FunctionDecl {
        name: require_name("function declaration", name)?,
        type_params,
        params,
        return_type,
        body,
        modifiers,
        trivia: trivia(),
    })))
}

pub fn class_decl(
    name: impl Into<String>,
    type_params: Vec<TypeParameter>,
    extends: Option<TsType>,
    implements: Vec<TsType>,
    members: Vec<ClassMember>,
    modifiers: Modifiers,
) -> Result<Decl, BuildError> {
    Ok(Decl::Class(Arc::new(ClassDecl {
        name: require_name("class declaration", name)?,
        type_params,
        extends,
        implements,
        members,
        modifiers,
        trivia: trivia(),
    })))
}

pub fn interface_decl(
    name: impl Into<String>,
    type_params: Vec<TypeParameter>,
    extends: Vec<TsType>,
    members: Vec<TypeMember>,
    modifiers: Modifiers,
) -> Result<Decl, BuildError> {
    Ok(Decl::Interface(Arc::new(InterfaceDecl {
        name: require_name("interface declaration", name)?,
        type_params,
        extends,
        members,
        modifiers,
        trivia: trivia(),
    })))
}

pub fn enum_decl(
    name: impl Into<String>,
    members: Vec<EnumMember>,
    modifiers: Modifiers,
) -> Result<Decl, BuildError> {
    Ok(Decl::Enum(Arc::new(EnumDecl {
        name: require_name("enum declaration", name)?,
        members,
        modifiers,
        trivia: trivia(),
    })))
}

pub fn enum_member(name: PropertyName, init: Option<Expr>) -> EnumMember {
    EnumMember {
        name,
        init,
        trivia: trivia(),
    }
}

pub fn module_decl(
    keyword: ModuleKeyword,
    name: ModuleName,
    body: Vec<Stmt>,
    modifiers: Modifiers,
) -> Result<Decl, BuildError> {
    let name = match name {
        ModuleName::Identifier(name) => ModuleName::Identifier(entity_name(name.0)?),
        ModuleName::String(name) => ModuleName::String(require_name("module declaration", name)?),
    };
    Ok(Decl::Module(Arc::new(ModuleDecl {
        keyword,
        name,
        body,
        modifiers,
        trivia: trivia(),
    })))
}

pub fn type_alias_decl(
    name: impl Into<String>,
    type_params: Vec<TypeParameter>,
    ty: TsType,
    modifiers: Modifiers,
) -> Result<Decl, BuildError> {
    Ok(Decl::TypeAlias(Arc::new(TypeAliasDecl {
        name: require_name("type alias", name)?,
        type_params,
        ty,
        modifiers,
        trivia: trivia(),
    })))
}

pub fn import_decl(
    default: Option<String>,
    namespace: Option<String>,
    named: Vec<ImportSpecifier>,
    module: impl Into<String>,
) -> Result<Decl, BuildError> {
    Ok(Decl::Import(Arc::new(ImportDecl {
        default,
        namespace,
        named,
        module: require_name("import module specifier", module)?,
        trivia: trivia(),
    })))
}

pub fn import_specifier(
    name: impl Into<String>,
    alias: Option<String>,
) -> Result<ImportSpecifier, BuildError> {
    Ok(ImportSpecifier {
        name: require_name("import specifier", name)?,
        alias,
    })
}

// =============================================================================
// Class members
// =============================================================================

pub fn property_member(
    name: PropertyName,
    optional: bool,
    ty: Option<TsType>,
    init: Option<Expr>,
    modifiers: Modifiers,
) -> ClassMember {
    ClassMember::Property(Arc::new(PropertyMember {
        name,
        optional,
        ty,
        init,
        modifiers,
        trivia: trivia(),
    }))
}

pub fn method_member(
    name: PropertyName,
    optional: bool,
    type_params: Vec<TypeParameter>,
    params: ParameterList,
    return_type: Option<TsType>,
    body: Option<Block>,
    modifiers: Modifiers,
) -> ClassMember {
    ClassMember::Method(Arc::new(MethodMember {
        name,
        optional,
        type_params,
        params,
        return_type,
        body,
        modifiers,
        trivia: trivia(),
    }))
}

pub fn constructor_member(
    params: ParameterList,
    body: Option<Block>,
    modifiers: Modifiers,
) -> ClassMember {
    ClassMember::Constructor(Arc::new(ConstructorMember {
        params,
        body,
        modifiers,
        trivia: trivia(),
    }))
}

pub fn accessor_member(
    kind: AccessorKind,
    name: PropertyName,
    params: ParameterList,
    return_type: Option<TsType>,
    body: Option<Block>,
    modifiers: Modifiers,
) -> ClassMember {
    ClassMember::Accessor(Arc::new(AccessorMember {
        kind,
        name,
        params,
        return_type,
        body,
        modifiers,
        trivia: trivia(),
    }))
}
