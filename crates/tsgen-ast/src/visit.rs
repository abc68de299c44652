//! Read-only traversal.
//!
//! Every concrete node kind has a `visit_*` method on [`Visit`]. The default
//! implementation of each calls the matching `walk_*` function, which visits
//! the node's children, so a visitor overrides only the kinds it cares about
//! and calls `walk_*` itself when it still wants to descend.
//!
//! `accept` on a sum type dispatches to the method named for the concrete
//! variant. The `walk_*` functions and `accept` match exhaustively, so a new
//! node kind does not compile until it is handled here.
//!
//! Trivia is not traversed by the walkers; a visitor interested in comments
//! reads `leading_trivia()` / `trailing_trivia()` from the nodes it visits.

use crate::decl::*;
use crate::expr::*;
use crate::node::PropertyName;
use crate::params::{Parameter, ParameterList, TypeParameter};
use crate::stmt::*;
use crate::trivia::Trivia;
use crate::types::*;

#[allow(unused_variables)]
pub trait Visit {
    // ===== Category hooks =====

    fn visit_expr(&mut self, expr: &Expr) {
        expr.accept(self);
    }

    fn visit_stmt(&mut self, stmt: &Stmt) {
        stmt.accept(self);
    }

    fn visit_type(&mut self, ty: &TsType) {
        ty.accept(self);
    }

    fn visit_decl(&mut self, decl: &Decl) {
        decl.accept(self);
    }

    fn visit_class_member(&mut self, member: &ClassMember) {
        member.accept(self);
    }

    fn visit_type_member(&mut self, member: &TypeMember) {
        member.accept(self);
    }

    // ===== Expressions =====

    fn visit_identifier(&mut self, node: &Identifier) {}

    fn visit_this_expr(&mut self, node: &ThisExpr) {}

    fn visit_super_expr(&mut self, node: &SuperExpr) {}

    fn visit_literal(&mut self, node: &Literal) {}

    fn visit_array_literal(&mut self, node: &ArrayLiteral) {
        walk_array_literal(self, node);
    }

    fn visit_object_literal(&mut self, node: &ObjectLiteral) {
        walk_object_literal(self, node);
    }

    fn visit_object_property(&mut self, node: &ObjectProperty) {
        walk_object_property(self, node);
    }

    fn visit_function_expr(&mut self, node: &FunctionExpr) {
        walk_function_expr(self, node);
    }

    fn visit_arrow_function(&mut self, node: &ArrowFunction) {
        walk_arrow_function(self, node);
    }

    fn visit_paren_expr(&mut self, node: &ParenExpr) {
        self.visit_expr(&node.expr);
    }

    fn visit_unary_expr(&mut self, node: &UnaryExpr) {
        self.visit_expr(&node.operand);
    }

    fn visit_postfix_expr(&mut self, node: &PostfixExpr) {
        self.visit_expr(&node.operand);
    }

    fn visit_binary_expr(&mut self, node: &BinaryExpr) {
        walk_binary_expr(self, node);
    }

    fn visit_conditional_expr(&mut self, node: &ConditionalExpr) {
        walk_conditional_expr(self, node);
    }

    fn visit_call_expr(&mut self, node: &CallExpr) {
        walk_call_expr(self, node);
    }

    fn visit_new_expr(&mut self, node: &NewExpr) {
        walk_new_expr(self, node);
    }

    fn visit_member_expr(&mut self, node: &MemberExpr) {
        self.visit_expr(&node.object);
    }

    fn visit_element_access_expr(&mut self, node: &ElementAccessExpr) {
        self.visit_expr(&node.object);
        self.visit_expr(&node.index);
    }

    fn visit_cast_expr(&mut self, node: &CastExpr) {
        self.visit_type(&node.ty);
        self.visit_expr(&node.expr);
    }

    fn visit_as_expr(&mut self, node: &AsExpr) {
        self.visit_expr(&node.expr);
        self.visit_type(&node.ty);
    }

    fn visit_non_null_expr(&mut self, node: &NonNullExpr) {
        self.visit_expr(&node.expr);
    }

    fn visit_spread_expr(&mut self, node: &SpreadExpr) {
        self.visit_expr(&node.expr);
    }

    // ===== Statements =====

    fn visit_block(&mut self, node: &Block) {
        walk_block(self, node);
    }

    fn visit_expression_stmt(&mut self, node: &ExpressionStmt) {
        self.visit_expr(&node.expr);
    }

    fn visit_variable_stmt(&mut self, node: &VariableStmt) {
        walk_variable_stmt(self, node);
    }

    fn visit_variable_declarator(&mut self, node: &VariableDeclarator) {
        walk_variable_declarator(self, node);
    }

    fn visit_if_stmt(&mut self, node: &IfStmt) {
        walk_if_stmt(self, node);
    }

    fn visit_for_stmt(&mut self, node: &ForStmt) {
        walk_for_stmt(self, node);
    }

    fn visit_for_in_stmt(&mut self, node: &ForInStmt) {
        walk_for_init(self, &node.left);
        self.visit_expr(&node.right);
        self.visit_stmt(&node.body);
    }

    fn visit_for_of_stmt(&mut self, node: &ForOfStmt) {
        walk_for_init(self, &node.left);
        self.visit_expr(&node.right);
        self.visit_stmt(&node.body);
    }

    fn visit_while_stmt(&mut self, node: &WhileStmt) {
        self.visit_expr(&node.test);
        self.visit_stmt(&node.body);
    }

    fn visit_do_while_stmt(&mut self, node: &DoWhileStmt) {
        self.visit_stmt(&node.body);
        self.visit_expr(&node.test);
    }

    fn visit_switch_stmt(&mut self, node: &SwitchStmt) {
        walk_switch_stmt(self, node);
    }

    fn visit_switch_clause(&mut self, node: &SwitchClause) {
        walk_switch_clause(self, node);
    }

    fn visit_try_stmt(&mut self, node: &TryStmt) {
        walk_try_stmt(self, node);
    }

    fn visit_catch_clause(&mut self, node: &CatchClause) {
        if let Some(ty) = &node.ty {
            self.visit_type(ty);
        }
        self.visit_block(&node.body);
    }

    fn visit_throw_stmt(&mut self, node: &ThrowStmt) {
        self.visit_expr(&node.expr);
    }

    fn visit_return_stmt(&mut self, node: &ReturnStmt) {
        if let Some(expr) = &node.expr {
            self.visit_expr(expr);
        }
    }

    fn visit_break_stmt(&mut self, node: &BreakStmt) {}

    fn visit_continue_stmt(&mut self, node: &ContinueStmt) {}

    fn visit_labelled_stmt(&mut self, node: &LabelledStmt) {
        self.visit_stmt(&node.body);
    }

    fn visit_empty_stmt(&mut self, node: &EmptyStmt) {}

    // ===== Declarations =====

    fn visit_function_decl(&mut self, node: &FunctionDecl) {
        walk_function_decl(self, node);
    }

    fn visit_class_decl(&mut self, node: &ClassDecl) {
        walk_class_decl(self, node);
    }

    fn visit_interface_decl(&mut self, node: &InterfaceDecl) {
        walk_interface_decl(self, node);
    }

    fn visit_enum_decl(&mut self, node: &EnumDecl) {
        for member in &node.members {
            self.visit_enum_member(member);
        }
    }

    fn visit_enum_member(&mut self, node: &EnumMember) {
        walk_property_name(self, &node.name);
        if let Some(init) = &node.init {
            self.visit_expr(init);
        }
    }

    fn visit_module_decl(&mut self, node: &ModuleDecl) {
        for stmt in &node.body {
            self.visit_stmt(stmt);
        }
    }

    fn visit_type_alias_decl(&mut self, node: &TypeAliasDecl) {
        walk_type_params(self, &node.type_params);
        self.visit_type(&node.ty);
    }

    fn visit_import_decl(&mut self, node: &ImportDecl) {}

    // ===== Class members =====

    fn visit_property_member(&mut self, node: &PropertyMember) {
        walk_property_member(self, node);
    }

    fn visit_method_member(&mut self, node: &MethodMember) {
        walk_method_member(self, node);
    }

    fn visit_constructor_member(&mut self, node: &ConstructorMember) {
        self.visit_parameter_list(&node.params);
        if let Some(body) = &node.body {
            self.visit_block(body);
        }
    }

    fn visit_accessor_member(&mut self, node: &AccessorMember) {
        walk_accessor_member(self, node);
    }

    fn visit_index_signature(&mut self, node: &IndexSignature) {
        self.visit_type(&node.param_type);
        self.visit_type(&node.ty);
    }

    // ===== Types =====

    fn visit_keyword_type(&mut self, node: &KeywordType) {}

    fn visit_this_type(&mut self, node: &ThisType) {}

    fn visit_type_reference(&mut self, node: &TypeReference) {
        for arg in &node.type_args {
            self.visit_type(arg);
        }
    }

    fn visit_array_type(&mut self, node: &ArrayType) {
        self.visit_type(&node.element);
    }

    fn visit_tuple_type(&mut self, node: &TupleType) {
        for element in &node.elements {
            self.visit_type(element);
        }
    }

    fn visit_union_type(&mut self, node: &UnionType) {
        for ty in &node.types {
            self.visit_type(ty);
        }
    }

    fn visit_intersection_type(&mut self, node: &IntersectionType) {
        for ty in &node.types {
            self.visit_type(ty);
        }
    }

    fn visit_function_type(&mut self, node: &FunctionType) {
        walk_type_params(self, &node.type_params);
        self.visit_parameter_list(&node.params);
        self.visit_type(&node.return_type);
    }

    fn visit_constructor_type(&mut self, node: &ConstructorType) {
        walk_type_params(self, &node.type_params);
        self.visit_parameter_list(&node.params);
        self.visit_type(&node.return_type);
    }

    fn visit_object_type(&mut self, node: &ObjectType) {
        for member in &node.members {
            self.visit_type_member(member);
        }
    }

    fn visit_type_query(&mut self, node: &TypeQuery) {}

    fn visit_paren_type(&mut self, node: &ParenType) {
        self.visit_type(&node.ty);
    }

    fn visit_literal_type(&mut self, node: &LiteralType) {}

    // ===== Type members =====

    fn visit_property_signature(&mut self, node: &PropertySignature) {
        walk_property_name(self, &node.name);
        if let Some(ty) = &node.ty {
            self.visit_type(ty);
        }
    }

    fn visit_method_signature(&mut self, node: &MethodSignature) {
        walk_property_name(self, &node.name);
        walk_signature(self, &node.type_params, &node.params, node.return_type.as_ref());
    }

    fn visit_call_signature(&mut self, node: &CallSignature) {
        walk_signature(self, &node.type_params, &node.params, node.return_type.as_ref());
    }

    fn visit_construct_signature(&mut self, node: &ConstructSignature) {
        walk_signature(self, &node.type_params, &node.params, node.return_type.as_ref());
    }

    // ===== Shared pieces =====

    fn visit_parameter_list(&mut self, node: &ParameterList) {
        for param in node.iter() {
            self.visit_parameter(param);
        }
    }

    fn visit_parameter(&mut self, node: &Parameter) {
        if let Some(ty) = &node.ty {
            self.visit_type(ty);
        }
        if let Some(init) = &node.initializer {
            self.visit_expr(init);
        }
    }

    fn visit_type_parameter(&mut self, node: &TypeParameter) {
        if let Some(constraint) = &node.constraint {
            self.visit_type(constraint);
        }
        if let Some(default) = &node.default {
            self.visit_type(default);
        }
    }

    fn visit_trivia(&mut self, trivia: &Trivia) {}
}

// =============================================================================
// Dispatch
// =============================================================================

impl Expr {
    pub fn accept<V: Visit + ?Sized>(&self, v: &mut V) {
        match self {
            Expr::Identifier(n) => v.visit_identifier(n),
            Expr::This(n) => v.visit_this_expr(n),
            Expr::Super(n) => v.visit_super_expr(n),
            Expr::Literal(n) => v.visit_literal(n),
            Expr::Array(n) => v.visit_array_literal(n),
            Expr::Object(n) => v.visit_object_literal(n),
            Expr::Function(n) => v.visit_function_expr(n),
            Expr::Arrow(n) => v.visit_arrow_function(n),
            Expr::Paren(n) => v.visit_paren_expr(n),
            Expr::Unary(n) => v.visit_unary_expr(n),
            Expr::Postfix(n) => v.visit_postfix_expr(n),
            Expr::Binary(n) => v.visit_binary_expr(n),
            Expr::Conditional(n) => v.visit_conditional_expr(n),
            Expr::Call(n) => v.visit_call_expr(n),
            Expr::New(n) => v.visit_new_expr(n),
            Expr::Member(n) => v.visit_member_expr(n),
            Expr::ElementAccess(n) => v.visit_element_access_expr(n),
            Expr::Cast(n) => v.visit_cast_expr(n),
            Expr::As(n) => v.visit_as_expr(n),
            Expr::NonNull(n) => v.visit_non_null_expr(n),
            Expr::Spread(n) => v.visit_spread_expr(n),
        }
    }
}

impl Stmt {
    pub fn accept<V: Visit + ?Sized>(&self, v: &mut V) {
        match self {
            Stmt::Block(n) => v.visit_block(n),
            Stmt::Expression(n) => v.visit_expression_stmt(n),
            Stmt::Variable(n) => v.visit_variable_stmt(n),
            Stmt::If(n) => v.visit_if_stmt(n),
            Stmt::For(n) => v.visit_for_stmt(n),
            Stmt::ForIn(n) => v.visit_for_in_stmt(n),
            Stmt::ForOf(n) => v.visit_for_of_stmt(n),
            Stmt::While(n) => v.visit_while_stmt(n),
            Stmt::DoWhile(n) => v.visit_do_while_stmt(n),
            Stmt::Switch(n) => v.visit_switch_stmt(n),
            Stmt::Try(n) => v.visit_try_stmt(n),
            Stmt::Throw(n) => v.visit_throw_stmt(n),
            Stmt::Return(n) => v.visit_return_stmt(n),
            Stmt::Break(n) => v.visit_break_stmt(n),
            Stmt::Continue(n) => v.visit_continue_stmt(n),
            Stmt::Labelled(n) => v.visit_labelled_stmt(n),
            Stmt::Empty(n) => v.visit_empty_stmt(n),
            Stmt::Declaration(decl) => v.visit_decl(decl),
        }
    }
}

impl Decl {
    pub fn accept<V: Visit + ?Sized>(&self, v: &mut V) {
        match self {
            Decl::Function(n) => v.visit_function_decl(n),
            Decl::Class(n) => v.visit_class_decl(n),
            Decl::Interface(n) => v.visit_interface_decl(n),
            Decl::Enum(n) => v.visit_enum_decl(n),
            Decl::Module(n) => v.visit_module_decl(n),
            Decl::TypeAlias(n) => v.visit_type_alias_decl(n),
            Decl::Import(n) => v.visit_import_decl(n),
        }
    }
}

impl ClassMember {
    pub fn accept<V: Visit + ?Sized>(&self, v: &mut V) {
        match self {
            ClassMember::Property(n) => v.visit_property_member(n),
            ClassMember::Method(n) => v.visit_method_member(n),
            ClassMember::Constructor(n) => v.visit_constructor_member(n),
            ClassMember::Accessor(n) => v.visit_accessor_member(n),
            ClassMember::Index(n) => v.visit_index_signature(n),
        }
    }
}

impl TsType {
    pub fn accept<V: Visit + ?Sized>(&self, v: &mut V) {
        match self {
            TsType::Keyword(n) => v.visit_keyword_type(n),
            TsType::This(n) => v.visit_this_type(n),
            TsType::Reference(n) => v.visit_type_reference(n),
            TsType::Array(n) => v.visit_array_type(n),
            TsType::Tuple(n) => v.visit_tuple_type(n),
            TsType::Union(n) => v.visit_union_type(n),
            TsType::Intersection(n) => v.visit_intersection_type(n),
            TsType::Function(n) => v.visit_function_type(n),
            TsType::Constructor(n) => v.visit_constructor_type(n),
            TsType::Object(n) => v.visit_object_type(n),
            TsType::Query(n) => v.visit_type_query(n),
            TsType::Paren(n) => v.visit_paren_type(n),
            TsType::Literal(n) => v.visit_literal_type(n),
        }
    }
}

impl TypeMember {
    pub fn accept<V: Visit + ?Sized>(&self, v: &mut V) {
        match self {
            TypeMember::Property(n) => v.visit_property_signature(n),
            TypeMember::Method(n) => v.visit_method_signature(n),
            TypeMember::Call(n) => v.visit_call_signature(n),
            TypeMember::Construct(n) => v.visit_construct_signature(n),
            TypeMember::Index(n) => v.visit_index_signature(n),
        }
    }
}

impl Parameter {
    pub fn accept<V: Visit + ?Sized>(&self, v: &mut V) {
        v.visit_parameter(self);
    }
}

impl Trivia {
    pub fn accept<V: Visit + ?Sized>(&self, v: &mut V) {
        v.visit_trivia(self);
    }
}

// =============================================================================
// Walkers
// =============================================================================

pub fn walk_array_literal<V: Visit + ?Sized>(v: &mut V, node: &ArrayLiteral) {
    for element in &node.elements {
        v.visit_expr(element);
    }
}

pub fn walk_object_literal<V: Visit + ?Sized>(v: &mut V, node: &ObjectLiteral) {
    for property in &node.properties {
        v.visit_object_property(property);
    }
}

pub fn walk_object_property<V: Visit + ?Sized>(v: &mut V, node: &ObjectProperty) {
    match node {
        ObjectProperty::KeyValue(p) => {
            walk_property_name(v, &p.name);
            v.visit_expr(&p.value);
        }
        ObjectProperty::Shorthand(_) => {}
        ObjectProperty::Spread(p) => v.visit_expr(&p.expr),
        ObjectProperty::Method(p) => {
            walk_property_name(v, &p.name);
            walk_signature(v, &p.type_params, &p.params, p.return_type.as_ref());
            v.visit_block(&p.body);
        }
    }
}

pub fn walk_property_name<V: Visit + ?Sized>(v: &mut V, name: &PropertyName) {
    if let PropertyName::Computed(expr) = name {
        v.visit_expr(expr);
    }
}

pub fn walk_function_expr<V: Visit + ?Sized>(v: &mut V, node: &FunctionExpr) {
    walk_signature(v, &node.type_params, &node.params, node.return_type.as_ref());
    v.visit_block(&node.body);
}

pub fn walk_arrow_function<V: Visit + ?Sized>(v: &mut V, node: &ArrowFunction) {
    walk_signature(v, &node.type_params, &node.params, node.return_type.as_ref());
    match &node.body {
        ArrowBody::Expr(expr) => v.visit_expr(expr),
        ArrowBody::Block(block) => v.visit_block(block),
    }
}

pub fn walk_binary_expr<V: Visit + ?Sized>(v: &mut V, node: &BinaryExpr) {
    v.visit_expr(&node.left);
    v.visit_expr(&node.right);
}

pub fn walk_conditional_expr<V: Visit + ?Sized>(v: &mut V, node: &ConditionalExpr) {
    v.visit_expr(&node.test);
    v.visit_expr(&node.consequent);
    v.visit_expr(&node.alternate);
}

pub fn walk_call_expr<V: Visit + ?Sized>(v: &mut V, node: &CallExpr) {
    v.visit_expr(&node.callee);
    for arg in &node.type_args {
        v.visit_type(arg);
    }
    for arg in &node.args {
        v.visit_expr(arg);
    }
}

pub fn walk_new_expr<V: Visit + ?Sized>(v: &mut V, node: &NewExpr) {
    v.visit_expr(&node.callee);
    for arg in &node.type_args {
        v.visit_type(arg);
    }
    for arg in node.args.iter().flatten() {
        v.visit_expr(arg);
    }
}

pub fn walk_block<V: Visit + ?Sized>(v: &mut V, node: &Block) {
    for stmt in &node.statements {
        v.visit_stmt(stmt);
    }
}

pub fn walk_variable_stmt<V: Visit + ?Sized>(v: &mut V, node: &VariableStmt) {
    for declarator in &node.declarations {
        v.visit_variable_declarator(declarator);
    }
}

pub fn walk_variable_declarator<V: Visit + ?Sized>(v: &mut V, node: &VariableDeclarator) {
    if let Some(ty) = &node.ty {
        v.visit_type(ty);
    }
    if let Some(init) = &node.init {
        v.visit_expr(init);
    }
}

pub fn walk_if_stmt<V: Visit + ?Sized>(v: &mut V, node: &IfStmt) {
    v.visit_expr(&node.test);
    v.visit_stmt(&node.consequent);
    if let Some(alternate) = &node.alternate {
        v.visit_stmt(alternate);
    }
}

pub fn walk_for_init<V: Visit + ?Sized>(v: &mut V, init: &ForInit) {
    match init {
        ForInit::Variable(decl) => v.visit_variable_stmt(decl),
        ForInit::Expression(expr) => v.visit_expr(expr),
    }
}

pub fn walk_for_stmt<V: Visit + ?Sized>(v: &mut V, node: &ForStmt) {
    if let Some(init) = &node.init {
        walk_for_init(v, init);
    }
    if let Some(test) = &node.test {
        v.visit_expr(test);
    }
    if let Some(update) = &node.update {
        v.visit_expr(update);
    }
    v.visit_stmt(&node.body);
}

pub fn walk_switch_stmt<V: Visit + ?Sized>(v: &mut V, node: &SwitchStmt) {
    v.visit_expr(&node.discriminant);
    for clause in &node.clauses {
        v.visit_switch_clause(clause);
    }
}

pub fn walk_switch_clause<V: Visit + ?Sized>(v: &mut V, node: &SwitchClause) {
    if let Some(test) = &node.test {
        v.visit_expr(test);
    }
    for stmt in &node.statements {
        v.visit_stmt(stmt);
    }
}

pub fn walk_try_stmt<V: Visit + ?Sized>(v: &mut V, node: &TryStmt) {
    v.visit_block(&node.block);
    if let Some(handler) = &node.handler {
        v.visit_catch_clause(handler);
    }
    if let Some(finalizer) = &node.finalizer {
        v.visit_block(finalizer);
    }
}

pub fn walk_function_decl<V: Visit + ?Sized>(v: &mut V, node: &FunctionDecl) {
    walk_signature(v, &node.type_params, &node.params, node.return_type.as_ref());
    if let Some(body) = &node.body {
        v.visit_block(body);
    }
}

pub fn walk_class_decl<V: Visit + ?Sized>(v: &mut V, node: &ClassDecl) {
    walk_type_params(v, &node.type_params);
    if let Some(extends) = &node.extends {
        v.visit_type(extends);
    }
    for implemented in &node.implements {
        v.visit_type(implemented);
    }
    for member in &node.members {
        v.visit_class_member(member);
    }
}

pub fn walk_interface_decl<V: Visit + ?Sized>(v: &mut V, node: &InterfaceDecl) {
    walk_type_params(v, &node.type_params);
    for extended in &node.extends {
        v.visit_type(extended);
    }
    for member in &node.members {
        v.visit_type_member(member);
    }
}

pub fn walk_property_member<V: Visit + ?Sized>(v: &mut V, node: &PropertyMember) {
    walk_property_name(v, &node.name);
    if let Some(ty) = &node.ty {
        v.visit_type(ty);
    }
    if let Some(init) = &node.init {
        v.visit_expr(init);
    }
}

pub fn walk_method_member<V: Visit + ?Sized>(v: &mut V, node: &MethodMember) {
    walk_property_name(v, &node.name);
    walk_signature(v, &node.type_params, &node.params, node.return_type.as_ref());
    if let Some(body) = &node.body {
        v.visit_block(body);
    }
}

pub fn walk_accessor_member<V: Visit + ?Sized>(v: &mut V, node: &AccessorMember) {
    walk_property_name(v, &node.name);
    v.visit_parameter_list(&node.params);
    if let Some(return_type) = &node.return_type {
        v.visit_type(return_type);
    }
    if let Some(body) = &node.body {
        v.visit_block(body);
    }
}

pub fn walk_type_params<V: Visit + ?Sized>(v: &mut V, type_params: &[TypeParameter]) {
    for type_param in type_params {
        v.visit_type_parameter(type_param);
    }
}

/// Type parameters, parameters and return type of any callable.
pub fn walk_signature<V: Visit + ?Sized>(
    v: &mut V,
    type_params: &[TypeParameter],
    params: &ParameterList,
    return_type: Option<&TsType>,
) {
    walk_type_params(v, type_params);
    v.visit_parameter_list(params);
    if let Some(return_type) = return_type {
        v.visit_type(return_type);
    }
}
