//! Shared node vocabulary: node kinds, literal values and property names.

use crate::expr::Expr;
use serde::Serialize;

/// The coarse category of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum NodeKind {
    Expression,
    Statement,
    Type,
    Declaration,
    Parameter,
    TypeMember,
    Trivia,
}

/// Operations every node category supports.
pub trait AstNode {
    fn kind(&self) -> NodeKind;

    /// A compact, single-line rendering for debugging and diagnostics.
    ///
    /// This is not formatted source text; use the emitter for that.
    fn code_display(&self) -> String;
}

/// The value of a literal expression or literal type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum LiteralValue {
    /// Unescaped string contents.
    String(String),
    /// Numeric literal as written (`0x1F`, `1e3`, `-1` in literal types).
    Number(String),
    Boolean(bool),
    Null,
}

/// The name of a property, method, enum member or object literal key.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum PropertyName {
    Identifier(String),
    /// A quoted name; holds the unescaped contents.
    String(String),
    Number(String),
    /// `[expr]`
    Computed(Expr),
}

impl PropertyName {
    pub fn ident(name: impl Into<String>) -> Self {
        PropertyName::Identifier(name.into())
    }

    /// The name as plain text, when it is not computed.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyName::Identifier(text)
            | PropertyName::String(text)
            | PropertyName::Number(text) => Some(text),
            PropertyName::Computed(_) => None,
        }
    }
}
