//! Statement nodes.

use crate::decl::Decl;
use crate::expr::Expr;
use crate::modifiers::Modifiers;
use crate::trivia::{impl_has_trivia, impl_has_trivia_for_enum, NodeTrivia};
use crate::types::TsType;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Stmt {
    Block(Arc<Block>),
    Expression(Arc<ExpressionStmt>),
    Variable(Arc<VariableStmt>),
    If(Arc<IfStmt>),
    For(Arc<ForStmt>),
    ForIn(Arc<ForInStmt>),
    ForOf(Arc<ForOfStmt>),
    While(Arc<WhileStmt>),
    DoWhile(Arc<DoWhileStmt>),
    Switch(Arc<SwitchStmt>),
    Try(Arc<TryStmt>),
    Throw(Arc<ThrowStmt>),
    Return(Arc<ReturnStmt>),
    Break(Arc<BreakStmt>),
    Continue(Arc<ContinueStmt>),
    Labelled(Arc<LabelledStmt>),
    Empty(EmptyStmt),
    Declaration(Decl),
}

impl_has_trivia_for_enum!(Stmt {
    Block,
    Expression,
    Variable,
    If,
    For,
    ForIn,
    ForOf,
    While,
    DoWhile,
    Switch,
    Try,
    Throw,
    Return,
    Break,
    Continue,
    Labelled,
    Empty,
    Declaration,
});

impl Stmt {
    pub const EMPTY: Stmt = Stmt::Empty(EmptyStmt {
        trivia: NodeTrivia::EMPTY,
    });

    pub fn is_block(&self) -> bool {
        matches!(self, Stmt::Block(_))
    }
}

impl From<Decl> for Stmt {
    fn from(decl: Decl) -> Self {
        Stmt::Declaration(decl)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Block {
    pub statements: Vec<Stmt>,
    pub trivia: NodeTrivia,
}

impl Block {
    pub const EMPTY: Block = Block {
        statements: Vec::new(),
        trivia: NodeTrivia::EMPTY,
    };

    pub fn new(statements: Vec<Stmt>) -> Self {
        Block {
            statements,
            trivia: NodeTrivia::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExpressionStmt {
    pub expr: Expr,
    pub trivia: NodeTrivia,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum VariableKind {
    Var,
    Let,
    Const,
}

impl VariableKind {
    pub fn as_str(self) -> &'static str {
        match self {
            VariableKind::Var => "var",
            VariableKind::Let => "let",
            VariableKind::Const => "const",
        }
    }
}

impl fmt::Display for VariableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `export const a: T = 1, b;` Also the lexical initializer of `for` heads.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VariableStmt {
    pub kind: VariableKind,
    /// At least one.
    pub declarations: Vec<VariableDeclarator>,
    /// `export` and `declare`.
    pub modifiers: Modifiers,
    pub trivia: NodeTrivia,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VariableDeclarator {
    pub name: String,
    pub ty: Option<TsType>,
    pub init: Option<Expr>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IfStmt {
    pub test: Expr,
    pub consequent: Stmt,
    pub alternate: Option<Stmt>,
    pub trivia: NodeTrivia,
}

/// The initializer of a `for` statement, or the left side of `for-in` /
/// `for-of`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum ForInit {
    Variable(Arc<VariableStmt>),
    Expression(Expr),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ForStmt {
    pub init: Option<ForInit>,
    pub test: Option<Expr>,
    pub update: Option<Expr>,
    pub body: Stmt,
    pub trivia: NodeTrivia,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ForInStmt {
    pub left: ForInit,
    pub right: Expr,
    pub body: Stmt,
    pub trivia: NodeTrivia,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ForOfStmt {
    pub left: ForInit,
    pub right: Expr,
    pub body: Stmt,
    pub trivia: NodeTrivia,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WhileStmt {
    pub test: Expr,
    pub body: Stmt,
    pub trivia: NodeTrivia,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DoWhileStmt {
    pub body: Stmt,
    pub test: Expr,
    pub trivia: NodeTrivia,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SwitchStmt {
    pub discriminant: Expr,
    pub clauses: Vec<SwitchClause>,
    pub trivia: NodeTrivia,
}

/// `case test:` or, with no test, `default:`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SwitchClause {
    pub test: Option<Expr>,
    pub statements: Vec<Stmt>,
    pub trivia: NodeTrivia,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TryStmt {
    pub block: Block,
    pub handler: Option<CatchClause>,
    pub finalizer: Option<Block>,
    pub trivia: NodeTrivia,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CatchClause {
    pub param: Option<String>,
    pub ty: Option<TsType>,
    pub body: Block,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ThrowStmt {
    pub expr: Expr,
    pub trivia: NodeTrivia,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReturnStmt {
    pub expr: Option<Expr>,
    pub trivia: NodeTrivia,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BreakStmt {
    pub label: Option<String>,
    pub trivia: NodeTrivia,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContinueStmt {
    pub label: Option<String>,
    pub trivia: NodeTrivia,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LabelledStmt {
    pub label: String,
    pub body: Stmt,
    pub trivia: NodeTrivia,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EmptyStmt {
    pub trivia: NodeTrivia,
}

impl_has_trivia!(
    Block,
    ExpressionStmt,
    VariableStmt,
    IfStmt,
    ForStmt,
    ForInStmt,
    ForOfStmt,
    WhileStmt,
    DoWhileStmt,
    SwitchStmt,
    SwitchClause,
    TryStmt,
    ThrowStmt,
    ReturnStmt,
    BreakStmt,
    ContinueStmt,
    LabelledStmt,
    EmptyStmt,
);
