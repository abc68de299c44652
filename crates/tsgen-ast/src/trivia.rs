//! Trivia - comments and blank lines attached to nodes.

use crate::jsdoc::JsDoc;
use serde::Serialize;
use std::sync::Arc;
use tsgen_common::{CommentKind, CommentTrivia};

/// A comment or blank-line marker attached to the leading or trailing edge of
/// a node. Trivia is not part of a node's semantic content.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Trivia {
    /// `// text`; `text` excludes the `//`.
    LineComment(String),
    /// `/* text */`; `text` excludes the delimiters.
    BlockComment(String),
    /// A structured documentation comment.
    JsDoc(Arc<JsDoc>),
    /// One empty source line.
    BlankLine,
}

impl Trivia {
    pub fn line_comment(text: impl Into<String>) -> Self {
        Trivia::LineComment(text.into())
    }

    pub fn block_comment(text: impl Into<String>) -> Self {
        Trivia::BlockComment(text.into())
    }

    pub fn jsdoc(doc: JsDoc) -> Self {
        Trivia::JsDoc(Arc::new(doc))
    }

    pub fn is_comment(&self) -> bool {
        !matches!(self, Trivia::BlankLine)
    }
}

impl From<&CommentTrivia> for Trivia {
    fn from(raw: &CommentTrivia) -> Self {
        match raw {
            CommentTrivia::Comment {
                kind: CommentKind::Line,
                text,
            } => Trivia::LineComment(text.clone()),
            CommentTrivia::Comment {
                kind: CommentKind::Block,
                text,
            } => Trivia::BlockComment(text.clone()),
            CommentTrivia::Comment {
                kind: CommentKind::Doc,
                text,
            } => Trivia::JsDoc(Arc::new(JsDoc::parse(text))),
            CommentTrivia::BlankLine => Trivia::BlankLine,
        }
    }
}

/// The leading and trailing trivia of one node.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NodeTrivia {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub leading: Vec<Trivia>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub trailing: Vec<Trivia>,
}

impl NodeTrivia {
    pub const EMPTY: NodeTrivia = NodeTrivia {
        leading: Vec::new(),
        trailing: Vec::new(),
    };

    pub fn is_empty(&self) -> bool {
        self.leading.is_empty() && self.trailing.is_empty()
    }
}

/// Access to a node's trivia, plus the record-update helpers built on it.
///
/// `trivia_mut` on an `Arc`-held node is copy-on-write (`Arc::make_mut`), so
/// the `with_*` helpers never modify a node that another parent still
/// references.
pub trait HasTrivia: Clone {
    fn trivia(&self) -> &NodeTrivia;

    fn trivia_mut(&mut self) -> &mut NodeTrivia;

    fn leading_trivia(&self) -> &[Trivia] {
        &self.trivia().leading
    }

    fn trailing_trivia(&self) -> &[Trivia] {
        &self.trivia().trailing
    }

    fn with_leading_trivia(&self, leading: Vec<Trivia>) -> Self {
        let mut node = self.clone();
        node.trivia_mut().leading = leading;
        node
    }

    fn with_trailing_trivia(&self, trailing: Vec<Trivia>) -> Self {
        let mut node = self.clone();
        node.trivia_mut().trailing = trailing;
        node
    }

    fn with_trivia(&self, trivia: NodeTrivia) -> Self {
        let mut node = self.clone();
        *node.trivia_mut() = trivia;
        node
    }

    /// Prepend a documentation comment to the leading trivia.
    fn with_jsdoc(&self, doc: JsDoc) -> Self {
        let mut node = self.clone();
        node.trivia_mut().leading.insert(0, Trivia::jsdoc(doc));
        node
    }
}

impl<T: HasTrivia> HasTrivia for Arc<T> {
    fn trivia(&self) -> &NodeTrivia {
        (**self).trivia()
    }

    fn trivia_mut(&mut self) -> &mut NodeTrivia {
        Arc::make_mut(self).trivia_mut()
    }
}

/// Implement [`HasTrivia`] for structs with a `trivia: NodeTrivia` field.
macro_rules! impl_has_trivia {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::trivia::HasTrivia for $ty {
                fn trivia(&self) -> &$crate::trivia::NodeTrivia {
                    &self.trivia
                }

                fn trivia_mut(&mut self) -> &mut $crate::trivia::NodeTrivia {
                    &mut self.trivia
                }
            }
        )*
    };
}

/// Implement [`HasTrivia`] for a sum type whose every variant wraps a node.
macro_rules! impl_has_trivia_for_enum {
    ($enum:ident { $($variant:ident),* $(,)? }) => {
        impl $crate::trivia::HasTrivia for $enum {
            fn trivia(&self) -> &$crate::trivia::NodeTrivia {
                match self {
                    $($enum::$variant(node) => $crate::trivia::HasTrivia::trivia(node),)*
                }
            }

            fn trivia_mut(&mut self) -> &mut $crate::trivia::NodeTrivia {
                match self {
                    $($enum::$variant(node) => $crate::trivia::HasTrivia::trivia_mut(node),)*
                }
            }
        }
    };
}

pub(crate) use {impl_has_trivia, impl_has_trivia_for_enum};
