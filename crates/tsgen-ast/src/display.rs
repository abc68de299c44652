//! `code_display` - a compact debug rendering of nodes.
//!
//! Expressions and statements render as S-expressions that make the tree
//! shape explicit (`1 + 2 * 3` is `(+ 1 (* 2 3))`). Types and parameters render
//! close to their source form since their shape is rarely in question.
//! Trivia is omitted except when displaying a `Trivia` itself.

use crate::decl::*;
use crate::expr::*;
use crate::jsdoc::JsDoc;
use crate::modifiers::Modifiers;
use crate::node::{AstNode, LiteralValue, NodeKind, PropertyName};
use crate::params::{Parameter, ParameterKind, ParameterList, TypeParameter};
use crate::stmt::*;
use crate::trivia::Trivia;
use crate::types::*;

#[derive(Default)]
struct Dump {
    out: String,
}

impl Dump {
    fn push(&mut self, text: &str) {
        self.out.push_str(text);
    }

    fn open(&mut self, head: &str) {
        self.out.push('(');
        self.out.push_str(head);
    }

    fn close(&mut self) {
        self.out.push(')');
    }

    fn space(&mut self) {
        self.out.push(' ');
    }

    fn list<T>(&mut self, items: &[T], separator: &str, mut each: impl FnMut(&mut Self, &T)) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.push(separator);
            }
            each(self, item);
        }
    }

    // ===== Expressions =====

    fn expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Identifier(n) => self.push(&n.name),
            Expr::This(_) => self.push("this"),
            Expr::Super(_) => self.push("super"),
            Expr::Literal(n) => self.literal(&n.value),
            Expr::Array(n) => {
                self.push("[");
                self.list(&n.elements, ", ", Self::expr);
                self.push("]");
            }
            Expr::Object(n) => {
                self.push("{");
                self.list(&n.properties, ", ", Self::object_property);
                self.push("}");
            }
            Expr::Function(n) => {
                self.open("function");
                if let Some(name) = &n.name {
                    self.space();
                    self.push(name);
                }
                self.signature(&n.type_params, &n.params, n.return_type.as_ref());
                self.space();
                self.block(&n.body);
                self.close();
            }
            Expr::Arrow(n) => {
                self.open("=>");
                self.space();
                self.signature(&n.type_params, &n.params, n.return_type.as_ref());
                self.space();
                match &n.body {
                    ArrowBody::Expr(body) => self.expr(body),
                    ArrowBody::Block(body) => self.block(body),
                }
                self.close();
            }
            Expr::Paren(n) => self.unary_form("paren", &n.expr),
            Expr::Unary(n) => self.unary_form(n.op.as_str(), &n.operand),
            Expr::Postfix(n) => {
                let head = format!("post{}", n.op.as_str());
                self.unary_form(&head, &n.operand);
            }
            Expr::Binary(n) => {
                self.open(n.op.as_str());
                self.space();
                self.expr(&n.left);
                self.space();
                self.expr(&n.right);
                self.close();
            }
            Expr::Conditional(n) => {
                self.open("?");
                for part in [&n.test, &n.consequent, &n.alternate] {
                    self.space();
                    self.expr(part);
                }
                self.close();
            }
            Expr::Call(n) => {
                self.open(if n.optional { "call?." } else { "call" });
                self.space();
                self.expr(&n.callee);
                self.type_args(&n.type_args);
                for arg in &n.args {
                    self.space();
                    self.expr(arg);
                }
                self.close();
            }
            Expr::New(n) => {
                self.open("new");
                self.space();
                self.expr(&n.callee);
                self.type_args(&n.type_args);
                for arg in n.args.iter().flatten() {
                    self.space();
                    self.expr(arg);
                }
                self.close();
            }
            Expr::Member(n) => {
                self.open(if n.optional { "?." } else { "." });
                self.space();
                self.expr(&n.object);
                self.space();
                self.push(&n.property);
                self.close();
            }
            Expr::ElementAccess(n) => {
                self.open(if n.optional { "?.[]" } else { "[]" });
                self.space();
                self.expr(&n.object);
                self.space();
                self.expr(&n.index);
                self.close();
            }
            Expr::Cast(n) => {
                self.open("cast ");
                self.ty(&n.ty);
                self.space();
                self.expr(&n.expr);
                self.close();
            }
            Expr::As(n) => {
                self.open("as ");
                self.expr(&n.expr);
                self.space();
                self.ty(&n.ty);
                self.close();
            }
            Expr::NonNull(n) => self.unary_form("non-null", &n.expr),
            Expr::Spread(n) => self.unary_form("...", &n.expr),
        }
    }

    fn unary_form(&mut self, head: &str, operand: &Expr) {
        self.open(head);
        self.space();
        self.expr(operand);
        self.close();
    }

    fn literal(&mut self, value: &LiteralValue) {
        match value {
            LiteralValue::String(text) => self.push(&format!("{text:?}")),
            LiteralValue::Number(raw) => self.push(raw),
            LiteralValue::Boolean(value) => self.push(if *value { "true" } else { "false" }),
            LiteralValue::Null => self.push("null"),
        }
    }

    fn object_property(&mut self, property: &ObjectProperty) {
        match property {
            ObjectProperty::KeyValue(p) => {
                self.property_name(&p.name);
                self.push(": ");
                self.expr(&p.value);
            }
            ObjectProperty::Shorthand(p) => self.push(&p.name),
            ObjectProperty::Spread(p) => {
                self.push("...");
                self.expr(&p.expr);
            }
            ObjectProperty::Method(p) => {
                self.property_name(&p.name);
                self.signature(&p.type_params, &p.params, p.return_type.as_ref());
                self.space();
                self.block(&p.body);
            }
        }
    }

    fn property_name(&mut self, name: &PropertyName) {
        match name {
            PropertyName::Identifier(text) | PropertyName::Number(text) => self.push(text),
            PropertyName::String(text) => self.push(&format!("{text:?}")),
            PropertyName::Computed(expr) => {
                self.push("[");
                self.expr(expr);
                self.push("]");
            }
        }
    }

    // ===== Statements =====

    fn block(&mut self, block: &Block) {
        self.open("block");
        for stmt in &block.statements {
            self.space();
            self.stmt(stmt);
        }
        self.close();
    }

    fn stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Block(n) => self.block(n),
            Stmt::Expression(n) => self.unary_form("expr", &n.expr),
            Stmt::Variable(n) => self.variable(n),
            Stmt::If(n) => {
                self.open("if ");
                self.expr(&n.test);
                self.space();
                self.stmt(&n.consequent);
                if let Some(alternate) = &n.alternate {
                    self.space();
                    self.stmt(alternate);
                }
                self.close();
            }
            Stmt::For(n) => {
                self.open("for ");
                match &n.init {
                    Some(init) => self.for_init(init),
                    None => self.push("_"),
                }
                self.push("; ");
                match &n.test {
                    Some(test) => self.expr(test),
                    None => self.push("_"),
                }
                self.push("; ");
                match &n.update {
                    Some(update) => self.expr(update),
                    None => self.push("_"),
                }
                self.space();
                self.stmt(&n.body);
                self.close();
            }
            Stmt::ForIn(n) => self.for_each("for-in", &n.left, &n.right, &n.body),
            Stmt::ForOf(n) => self.for_each("for-of", &n.left, &n.right, &n.body),
            Stmt::While(n) => {
                self.open("while ");
                self.expr(&n.test);
                self.space();
                self.stmt(&n.body);
                self.close();
            }
            Stmt::DoWhile(n) => {
                self.open("do ");
                self.stmt(&n.body);
                self.space();
                self.expr(&n.test);
                self.close();
            }
            Stmt::Switch(n) => {
                self.open("switch ");
                self.expr(&n.discriminant);
                for clause in &n.clauses {
                    self.space();
                    match &clause.test {
                        Some(test) => {
                            self.open("case ");
                            self.expr(test);
                        }
                        None => self.open("default"),
                    }
                    for stmt in &clause.statements {
                        self.space();
                        self.stmt(stmt);
                    }
                    self.close();
                }
                self.close();
            }
            Stmt::Try(n) => {
                self.open("try ");
                self.block(&n.block);
                if let Some(handler) = &n.handler {
                    self.push(" (catch");
                    if let Some(param) = &handler.param {
                        self.space();
                        self.push(param);
                        if let Some(ty) = &handler.ty {
                            self.push(": ");
                            self.ty(ty);
                        }
                    }
                    self.space();
                    self.block(&handler.body);
                    self.close();
                }
                if let Some(finalizer) = &n.finalizer {
                    self.push(" (finally ");
                    self.block(finalizer);
                    self.close();
                }
                self.close();
            }
            Stmt::Throw(n) => self.unary_form("throw", &n.expr),
            Stmt::Return(n) => {
                self.open("return");
                if let Some(expr) = &n.expr {
                    self.space();
                    self.expr(expr);
                }
                self.close();
            }
            Stmt::Break(n) => self.jump("break", n.label.as_deref()),
            Stmt::Continue(n) => self.jump("continue", n.label.as_deref()),
            Stmt::Labelled(n) => {
                self.open("label ");
                self.push(&n.label);
                self.space();
                self.stmt(&n.body);
                self.close();
            }
            Stmt::Empty(_) => self.push("(empty)"),
            Stmt::Declaration(decl) => self.decl(decl),
        }
    }

    fn jump(&mut self, head: &str, label: Option<&str>) {
        self.open(head);
        if let Some(label) = label {
            self.space();
            self.push(label);
        }
        self.close();
    }

    fn variable(&mut self, node: &VariableStmt) {
        self.open("");
        self.modifiers(node.modifiers);
        self.push(node.kind.as_str());
        for declarator in &node.declarations {
            self.space();
            self.push(&declarator.name);
            if let Some(ty) = &declarator.ty {
                self.push(": ");
                self.ty(ty);
            }
            if let Some(init) = &declarator.init {
                self.push(" = ");
                self.expr(init);
            }
        }
        self.close();
    }

    fn for_init(&mut self, init: &ForInit) {
        match init {
            ForInit::Variable(decl) => self.variable(decl),
            ForInit::Expression(expr) => self.expr(expr),
        }
    }

    fn for_each(&mut self, head: &str, left: &ForInit, right: &Expr, body: &Stmt) {
        self.open(head);
        self.space();
        self.for_init(left);
        self.space();
        self.expr(right);
        self.space();
        self.stmt(body);
        self.close();
    }

    // ===== Declarations =====

    fn modifiers(&mut self, modifiers: Modifiers) {
        for keyword in modifiers.keywords() {
            self.push(keyword);
            self.space();
        }
    }

    fn decl(&mut self, decl: &Decl) {
        match decl {
            Decl::Function(n) => {
                self.open("");
                self.modifiers(n.modifiers);
                self.push("function ");
                self.push(&n.name);
                self.signature(&n.type_params, &n.params, n.return_type.as_ref());
                if let Some(body) = &n.body {
                    self.space();
                    self.block(body);
                }
                self.close();
            }
            Decl::Class(n) => {
                self.open("");
                self.modifiers(n.modifiers);
                self.push("class ");
                self.push(&n.name);
                self.type_params(&n.type_params);
                if let Some(extends) = &n.extends {
                    self.push(" extends ");
                    self.ty(extends);
                }
                if !n.implements.is_empty() {
                    self.push(" implements ");
                    self.list(&n.implements, ", ", Self::ty);
                }
                for member in &n.members {
                    self.space();
                    self.class_member(member);
                }
                self.close();
            }
            Decl::Interface(n) => {
                self.open("");
                self.modifiers(n.modifiers);
                self.push("interface ");
                self.push(&n.name);
                self.type_params(&n.type_params);
                if !n.extends.is_empty() {
                    self.push(" extends ");
                    self.list(&n.extends, ", ", Self::ty);
                }
                for member in &n.members {
                    self.space();
                    self.type_member(member);
                }
                self.close();
            }
            Decl::Enum(n) => {
                self.open("");
                self.modifiers(n.modifiers);
                self.push("enum ");
                self.push(&n.name);
                for member in &n.members {
                    self.space();
                    self.property_name(&member.name);
                    if let Some(init) = &member.init {
                        self.push(" = ");
                        self.expr(init);
                    }
                }
                self.close();
            }
            Decl::Module(n) => {
                self.open("");
                self.modifiers(n.modifiers);
                self.push(n.keyword.as_str());
                self.space();
                self.push(&n.name.to_string());
                for stmt in &n.body {
                    self.space();
                    self.stmt(stmt);
                }
                self.close();
            }
            Decl::TypeAlias(n) => {
                self.open("");
                self.modifiers(n.modifiers);
                self.push("type ");
                self.push(&n.name);
                self.type_params(&n.type_params);
                self.push(" = ");
                self.ty(&n.ty);
                self.close();
            }
            Decl::Import(n) => {
                self.open("import");
                if let Some(default) = &n.default {
                    self.space();
                    self.push(default);
                }
                if let Some(namespace) = &n.namespace {
                    self.push(" * as ");
                    self.push(namespace);
                }
                if !n.named.is_empty() {
                    self.push(" {");
                    self.list(&n.named, ", ", |d, spec| {
                        d.push(&spec.name);
                        if let Some(alias) = &spec.alias {
                            d.push(" as ");
                            d.push(alias);
                        }
                    });
                    self.push("}");
                }
                self.push(&format!(" {:?}", n.module));
                self.close();
            }
        }
    }

    fn class_member(&mut self, member: &ClassMember) {
        match member {
            ClassMember::Property(n) => {
                self.open("property ");
                self.modifiers(n.modifiers);
                self.property_name(&n.name);
                if n.optional {
                    self.push("?");
                }
                if let Some(ty) = &n.ty {
                    self.push(": ");
                    self.ty(ty);
                }
                if let Some(init) = &n.init {
                    self.push(" = ");
                    self.expr(init);
                }
                self.close();
            }
            ClassMember::Method(n) => {
                self.open("method ");
                self.modifiers(n.modifiers);
                self.property_name(&n.name);
                if n.optional {
                    self.push("?");
                }
                self.signature(&n.type_params, &n.params, n.return_type.as_ref());
                if let Some(body) = &n.body {
                    self.space();
                    self.block(body);
                }
                self.close();
            }
            ClassMember::Constructor(n) => {
                self.open("constructor ");
                self.modifiers(n.modifiers);
                self.params(&n.params);
                if let Some(body) = &n.body {
                    self.space();
                    self.block(body);
                }
                self.close();
            }
            ClassMember::Accessor(n) => {
                self.open(n.kind.as_str());
                self.space();
                self.modifiers(n.modifiers);
                self.property_name(&n.name);
                self.signature(&[], &n.params, n.return_type.as_ref());
                if let Some(body) = &n.body {
                    self.space();
                    self.block(body);
                }
                self.close();
            }
            ClassMember::Index(n) => self.index_signature(n),
        }
    }

    // ===== Types =====

    fn ty(&mut self, ty: &TsType) {
        match ty {
            TsType::Keyword(n) => self.push(n.keyword.as_str()),
            TsType::This(_) => self.push("this"),
            TsType::Reference(n) => {
                self.push(&n.name.to_string());
                self.type_args(&n.type_args);
            }
            TsType::Array(n) => {
                self.ty(&n.element);
                self.push("[]");
            }
            TsType::Tuple(n) => {
                self.push("[");
                self.list(&n.elements, ", ", Self::ty);
                self.push("]");
            }
            TsType::Union(n) => {
                self.open("| ");
                self.list(&n.types, " ", Self::ty);
                self.close();
            }
            TsType::Intersection(n) => {
                self.open("& ");
                self.list(&n.types, " ", Self::ty);
                self.close();
            }
            TsType::Function(n) => {
                self.type_params(&n.type_params);
                self.params(&n.params);
                self.push(" => ");
                self.ty(&n.return_type);
            }
            TsType::Constructor(n) => {
                self.push("new ");
                self.type_params(&n.type_params);
                self.params(&n.params);
                self.push(" => ");
                self.ty(&n.return_type);
            }
            TsType::Object(n) => {
                self.push("{");
                for member in &n.members {
                    self.space();
                    self.type_member(member);
                    self.push(";");
                }
                self.push(" }");
            }
            TsType::Query(n) => {
                self.push("typeof ");
                self.push(&n.name.to_string());
            }
            TsType::Paren(n) => {
                self.push("(");
                self.ty(&n.ty);
                self.push(")");
            }
            TsType::Literal(n) => self.literal(&n.value),
        }
    }

    fn type_args(&mut self, args: &[TsType]) {
        if !args.is_empty() {
            self.push("<");
            self.list(args, ", ", Self::ty);
            self.push(">");
        }
    }

    fn type_params(&mut self, type_params: &[TypeParameter]) {
        if !type_params.is_empty() {
            self.push("<");
            self.list(type_params, ", ", Self::type_param);
            self.push(">");
        }
    }

    fn type_param(&mut self, type_param: &TypeParameter) {
        self.push(&type_param.name);
        if let Some(constraint) = &type_param.constraint {
            self.push(" extends ");
            self.ty(constraint);
        }
        if let Some(default) = &type_param.default {
            self.push(" = ");
            self.ty(default);
        }
    }

    fn type_member(&mut self, member: &TypeMember) {
        match member {
            TypeMember::Property(n) => {
                self.modifiers(n.modifiers);
                self.property_name(&n.name);
                if n.optional {
                    self.push("?");
                }
                if let Some(ty) = &n.ty {
                    self.push(": ");
                    self.ty(ty);
                }
            }
            TypeMember::Method(n) => {
                self.property_name(&n.name);
                if n.optional {
                    self.push("?");
                }
                self.signature(&n.type_params, &n.params, n.return_type.as_ref());
            }
            TypeMember::Call(n) => {
                self.signature(&n.type_params, &n.params, n.return_type.as_ref());
            }
            TypeMember::Construct(n) => {
                self.push("new ");
                self.signature(&n.type_params, &n.params, n.return_type.as_ref());
            }
            TypeMember::Index(n) => self.index_signature(n),
        }
    }

    fn index_signature(&mut self, n: &IndexSignature) {
        self.modifiers(n.modifiers);
        self.push("[");
        self.push(&n.param_name);
        self.push(": ");
        self.ty(&n.param_type);
        self.push("]: ");
        self.ty(&n.ty);
    }

    // ===== Signatures =====

    fn signature(
        &mut self,
        type_params: &[TypeParameter],
        params: &ParameterList,
        return_type: Option<&TsType>,
    ) {
        self.type_params(type_params);
        self.params(params);
        if let Some(return_type) = return_type {
            self.push(": ");
            self.ty(return_type);
        }
    }

    fn params(&mut self, params: &ParameterList) {
        self.push("(");
        for (i, param) in params.iter().enumerate() {
            if i > 0 {
                self.push(", ");
            }
            self.param(param);
        }
        self.push(")");
    }

    fn param(&mut self, param: &Parameter) {
        self.modifiers(param.modifiers);
        if param.kind == ParameterKind::Rest {
            self.push("...");
        }
        self.push(&param.name);
        if param.kind == ParameterKind::Optional && param.initializer.is_none() {
            self.push("?");
        }
        if let Some(ty) = &param.ty {
            self.push(": ");
            self.ty(ty);
        }
        if let Some(init) = &param.initializer {
            self.push(" = ");
            self.expr(init);
        }
    }

    fn trivia(&mut self, trivia: &Trivia) {
        match trivia {
            Trivia::LineComment(text) => {
                self.push("//");
                self.push(text);
            }
            Trivia::BlockComment(text) => {
                self.push("/*");
                self.push(text);
                self.push("*/");
            }
            Trivia::JsDoc(doc) => self.jsdoc(doc),
            Trivia::BlankLine => self.push("(blank)"),
        }
    }

    fn jsdoc(&mut self, doc: &JsDoc) {
        self.open("jsdoc");
        for block in doc.blocks(true) {
            self.space();
            match block.tag {
                Some(tag) => self.push(&format!("@{tag} {:?}", block.content)),
                None => self.push(&format!("{:?}", block.content)),
            }
        }
        self.close();
    }
}

fn render(f: impl FnOnce(&mut Dump)) -> String {
    let mut dump = Dump::default();
    f(&mut dump);
    dump.out
}

impl AstNode for Expr {
    fn kind(&self) -> NodeKind {
        NodeKind::Expression
    }

    fn code_display(&self) -> String {
        render(|d| d.expr(self))
    }
}

impl AstNode for Stmt {
    fn kind(&self) -> NodeKind {
        match self {
            Stmt::Declaration(_) => NodeKind::Declaration,
            _ => NodeKind::Statement,
        }
    }

    fn code_display(&self) -> String {
        render(|d| d.stmt(self))
    }
}

impl AstNode for Block {
    fn kind(&self) -> NodeKind {
        NodeKind::Statement
    }

    fn code_display(&self) -> String {
        render(|d| d.block(self))
    }
}

impl AstNode for TsType {
    fn kind(&self) -> NodeKind {
        NodeKind::Type
    }

    fn code_display(&self) -> String {
        render(|d| d.ty(self))
    }
}

impl AstNode for Decl {
    fn kind(&self) -> NodeKind {
        NodeKind::Declaration
    }

    fn code_display(&self) -> String {
        render(|d| d.decl(self))
    }
}

impl AstNode for ClassMember {
    fn kind(&self) -> NodeKind {
        NodeKind::Declaration
    }

    fn code_display(&self) -> String {
        render(|d| d.class_member(self))
    }
}

impl AstNode for TypeMember {
    fn kind(&self) -> NodeKind {
        NodeKind::TypeMember
    }

    fn code_display(&self) -> String {
        render(|d| d.type_member(self))
    }
}

impl AstNode for Parameter {
    fn kind(&self) -> NodeKind {
        NodeKind::Parameter
    }

    fn code_display(&self) -> String {
        render(|d| d.param(self))
    }
}

impl AstNode for ParameterList {
    fn kind(&self) -> NodeKind {
        NodeKind::Parameter
    }

    fn code_display(&self) -> String {
        render(|d| d.params(self))
    }
}

impl AstNode for Trivia {
    fn kind(&self) -> NodeKind {
        NodeKind::Trivia
    }

    fn code_display(&self) -> String {
        render(|d| d.trivia(self))
    }
}

/// Render a whole source file, one top-level statement per line.
pub fn display_statements(statements: &[Stmt]) -> String {
    statements
        .iter()
        .map(AstNode::code_display)
        .collect::<Vec<_>>()
        .join("\n")
}
