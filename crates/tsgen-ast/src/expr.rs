//! Expression nodes.

use crate::modifiers::Modifiers;
use crate::node::{LiteralValue, PropertyName};
use crate::params::{ParameterList, TypeParameter};
use crate::stmt::Block;
use crate::trivia::{impl_has_trivia, impl_has_trivia_for_enum, NodeTrivia};
use crate::types::TsType;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Expr {
    Identifier(Arc<Identifier>),
    This(ThisExpr),
    Super(SuperExpr),
    Literal(Arc<Literal>),
    Array(Arc<ArrayLiteral>),
    Object(Arc<ObjectLiteral>),
    Function(Arc<FunctionExpr>),
    Arrow(Arc<ArrowFunction>),
    Paren(Arc<ParenExpr>),
    Unary(Arc<UnaryExpr>),
    Postfix(Arc<PostfixExpr>),
    Binary(Arc<BinaryExpr>),
    Conditional(Arc<ConditionalExpr>),
    Call(Arc<CallExpr>),
    New(Arc<NewExpr>),
    Member(Arc<MemberExpr>),
    ElementAccess(Arc<ElementAccessExpr>),
    Cast(Arc<CastExpr>),
    As(Arc<AsExpr>),
    NonNull(Arc<NonNullExpr>),
    Spread(Arc<SpreadExpr>),
}

impl_has_trivia_for_enum!(Expr {
    Identifier,
    This,
    Super,
    Literal,
    Array,
    Object,
    Function,
    Arrow,
    Paren,
    Unary,
    Postfix,
    Binary,
    Conditional,
    Call,
    New,
    Member,
    ElementAccess,
    Cast,
    As,
    NonNull,
    Spread,
});

impl Expr {
    /// The canonical `this` expression.
    pub const THIS: Expr = Expr::This(ThisExpr {
        trivia: NodeTrivia::EMPTY,
    });

    pub const SUPER: Expr = Expr::Super(SuperExpr {
        trivia: NodeTrivia::EMPTY,
    });

    /// The identifier name, for identifier expressions.
    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            Expr::Identifier(ident) => Some(&ident.name),
            _ => None,
        }
    }

    /// Strip any number of enclosing parentheses.
    pub fn unparenthesized(&self) -> &Expr {
        let mut expr = self;
        while let Expr::Paren(paren) = expr {
            expr = &paren.expr;
        }
        expr
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Identifier {
    pub name: String,
    pub trivia: NodeTrivia,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ThisExpr {
    pub trivia: NodeTrivia,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SuperExpr {
    pub trivia: NodeTrivia,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Literal {
    pub value: LiteralValue,
    pub trivia: NodeTrivia,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ArrayLiteral {
    pub elements: Vec<Expr>,
    pub trivia: NodeTrivia,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ObjectLiteral {
    pub properties: Vec<ObjectProperty>,
    pub trivia: NodeTrivia,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum ObjectProperty {
    /// `key: value`
    KeyValue(Arc<KeyValueProperty>),
    /// `key`
    Shorthand(Arc<ShorthandProperty>),
    /// `...expr`
    Spread(Arc<SpreadProperty>),
    /// `key(a) { ... }`
    Method(Arc<MethodProperty>),
}

impl_has_trivia_for_enum!(ObjectProperty {
    KeyValue,
    Shorthand,
    Spread,
    Method,
});

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct KeyValueProperty {
    pub name: PropertyName,
    pub value: Expr,
    pub trivia: NodeTrivia,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShorthandProperty {
    pub name: String,
    pub trivia: NodeTrivia,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SpreadProperty {
    pub expr: Expr,
    pub trivia: NodeTrivia,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MethodProperty {
    pub name: PropertyName,
    pub type_params: Vec<TypeParameter>,
    pub params: ParameterList,
    pub return_type: Option<TsType>,
    pub body: Block,
    /// Only `async` applies.
    pub modifiers: Modifiers,
    pub trivia: NodeTrivia,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FunctionExpr {
    pub name: Option<String>,
    pub type_params: Vec<TypeParameter>,
    pub params: ParameterList,
    pub return_type: Option<TsType>,
    pub body: Block,
    pub modifiers: Modifiers,
    pub trivia: NodeTrivia,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ArrowFunction {
    pub type_params: Vec<TypeParameter>,
    pub params: ParameterList,
    pub return_type: Option<TsType>,
    pub body: ArrowBody,
    pub modifiers: Modifiers,
    pub trivia: NodeTrivia,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum ArrowBody {
    Expr(Expr),
    Block(Block),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ParenExpr {
    pub expr: Expr,
    pub trivia: NodeTrivia,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum UnaryOp {
    Plus,
    Minus,
    Not,
    BitNot,
    PreIncrement,
    PreDecrement,
    TypeOf,
    Void,
    Delete,
    Await,
}

impl UnaryOp {
    pub fn as_str(self) -> &'static str {
        match self {
            UnaryOp::Plus => "+",
            UnaryOp::Minus => "-",
            UnaryOp::Not => "!",
            UnaryOp::BitNot => "~",
            UnaryOp::PreIncrement => "++",
            UnaryOp::PreDecrement => "--",
            UnaryOp::TypeOf => "typeof",
            UnaryOp::Void => "void",
            UnaryOp::Delete => "delete",
            UnaryOp::Await => "await",
        }
    }

    /// Keyword operators are separated from their operand by a space.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            UnaryOp::TypeOf | UnaryOp::Void | UnaryOp::Delete | UnaryOp::Await
        )
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UnaryExpr {
    pub op: UnaryOp,
    pub operand: Expr,
    pub trivia: NodeTrivia,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum PostfixOp {
    Increment,
    Decrement,
}

impl PostfixOp {
    pub fn as_str(self) -> &'static str {
        match self {
            PostfixOp::Increment => "++",
            PostfixOp::Decrement => "--",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PostfixExpr {
    pub op: PostfixOp,
    pub operand: Expr,
    pub trivia: NodeTrivia,
}

/// Binary operators, including assignment and the comma operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum BinaryOp {
    // Multiplicative
    Mul,
    Div,
    Mod,
    Exp,
    // Additive
    Add,
    Sub,
    // Shift
    Shl,
    Shr,
    UShr,
    // Relational
    Lt,
    Gt,
    LtEq,
    GtEq,
    In,
    InstanceOf,
    // Equality
    Eq,
    NotEq,
    StrictEq,
    StrictNotEq,
    // Bitwise
    BitAnd,
    BitXor,
    BitOr,
    // Logical
    And,
    Or,
    Coalesce,
    // Assignment
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    ModAssign,
    ExpAssign,
    ShlAssign,
    ShrAssign,
    UShrAssign,
    BitAndAssign,
    BitXorAssign,
    BitOrAssign,
    AndAssign,
    OrAssign,
    CoalesceAssign,
    Comma,
}

impl BinaryOp {
    pub fn as_str(self) -> &'static str {
        use BinaryOp::*;
        match self {
            Mul => "*",
            Div => "/",
            Mod => "%",
            Exp => "**",
            Add => "+",
            Sub => "-",
            Shl => "<<",
            Shr => ">>",
            UShr => ">>>",
            Lt => "<",
            Gt => ">",
            LtEq => "<=",
            GtEq => ">=",
            In => "in",
            InstanceOf => "instanceof",
            Eq => "==",
            NotEq => "!=",
            StrictEq => "===",
            StrictNotEq => "!==",
            BitAnd => "&",
            BitXor => "^",
            BitOr => "|",
            And => "&&",
            Or => "||",
            Coalesce => "??",
            Assign => "=",
            AddAssign => "+=",
            SubAssign => "-=",
            MulAssign => "*=",
            DivAssign => "/=",
            ModAssign => "%=",
            ExpAssign => "**=",
            ShlAssign => "<<=",
            ShrAssign => ">>=",
            UShrAssign => ">>>=",
            BitAndAssign => "&=",
            BitXorAssign => "^=",
            BitOrAssign => "|=",
            AndAssign => "&&=",
            OrAssign => "||=",
            CoalesceAssign => "??=",
            Comma => ",",
        }
    }

    pub fn from_assignment_text(text: &str) -> Option<BinaryOp> {
        use BinaryOp::*;
        let op = match text {
            "=" => Assign,
            "+=" => AddAssign,
            "-=" => SubAssign,
            "*=" => MulAssign,
            "/=" => DivAssign,
            "%=" => ModAssign,
            "**=" => ExpAssign,
            "<<=" => ShlAssign,
            ">>=" => ShrAssign,
            ">>>=" => UShrAssign,
            "&=" => BitAndAssign,
            "^=" => BitXorAssign,
            "|=" => BitOrAssign,
            "&&=" => AndAssign,
            "||=" => OrAssign,
            "??=" => CoalesceAssign,
            _ => return None,
        };
        Some(op)
    }

    pub fn is_assignment(self) -> bool {
        use BinaryOp::*;
        matches!(
            self,
            Assign
                | AddAssign
                | SubAssign
                | MulAssign
                | DivAssign
                | ModAssign
                | ExpAssign
                | ShlAssign
                | ShrAssign
                | UShrAssign
                | BitAndAssign
                | BitXorAssign
                | BitOrAssign
                | AndAssign
                | OrAssign
                | CoalesceAssign
        )
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BinaryExpr {
    pub left: Expr,
    pub op: BinaryOp,
    pub right: Expr,
    pub trivia: NodeTrivia,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ConditionalExpr {
    pub test: Expr,
    pub consequent: Expr,
    pub alternate: Expr,
    pub trivia: NodeTrivia,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CallExpr {
    pub callee: Expr,
    pub type_args: Vec<TsType>,
    pub args: Vec<Expr>,
    /// `f?.()`
    pub optional: bool,
    pub trivia: NodeTrivia,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewExpr {
    pub callee: Expr,
    pub type_args: Vec<TsType>,
    /// `None` for `new Foo` without an argument list.
    pub args: Option<Vec<Expr>>,
    pub trivia: NodeTrivia,
}

/// `a.b`, `a?.b`, `this.#b`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MemberExpr {
    pub object: Expr,
    pub property: String,
    pub optional: bool,
    pub trivia: NodeTrivia,
}

/// `a[b]`, `a?.[b]`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ElementAccessExpr {
    pub object: Expr,
    pub index: Expr,
    pub optional: bool,
    pub trivia: NodeTrivia,
}

/// `<T>expr`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CastExpr {
    pub ty: TsType,
    pub expr: Expr,
    pub trivia: NodeTrivia,
}

/// `expr as T`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AsExpr {
    pub expr: Expr,
    pub ty: TsType,
    pub trivia: NodeTrivia,
}

/// `expr!`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NonNullExpr {
    pub expr: Expr,
    pub trivia: NodeTrivia,
}

/// `...expr` in array literals and argument lists.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SpreadExpr {
    pub expr: Expr,
    pub trivia: NodeTrivia,
}

impl_has_trivia!(
    Identifier,
    ThisExpr,
    SuperExpr,
    Literal,
    ArrayLiteral,
    ObjectLiteral,
    KeyValueProperty,
    ShorthandProperty,
    SpreadProperty,
    MethodProperty,
    FunctionExpr,
    ArrowFunction,
    ParenExpr,
    UnaryExpr,
    PostfixExpr,
    BinaryExpr,
    ConditionalExpr,
    CallExpr,
    NewExpr,
    MemberExpr,
    ElementAccessExpr,
    CastExpr,
    AsExpr,
    NonNullExpr,
    SpreadExpr,
);
