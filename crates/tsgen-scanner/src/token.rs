use crate::SyntaxKind;
use tsgen_common::{CommentTrivia, SourceLocation};

/// A scanned token.
///
/// Comments never become tokens; they ride on the neighbouring token in
/// `leading_comments` / `trailing_comments`.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: SyntaxKind,
    /// Source text of the token, including quotes for string literals.
    pub text: String,
    /// Unescaped contents of a string literal.
    pub value: Option<String>,
    pub location: SourceLocation,
    /// Byte offsets into the source text.
    pub start: u32,
    pub end: u32,
    pub has_preceding_line_break: bool,
    pub leading_comments: Vec<CommentTrivia>,
    pub trailing_comments: Vec<CommentTrivia>,
}

impl Token {
    /// Create a token without trivia. Intended for token sources other
    /// than [`crate::Scanner`].
    pub fn new(kind: SyntaxKind, text: impl Into<String>, location: SourceLocation) -> Self {
        Token {
            kind,
            text: text.into(),
            value: None,
            location,
            start: 0,
            end: 0,
            has_preceding_line_break: false,
            leading_comments: Vec::new(),
            trailing_comments: Vec::new(),
        }
    }

    pub fn is(&self, kind: SyntaxKind) -> bool {
        self.kind == kind
    }

    /// True for an identifier token spelling the given contextual keyword.
    pub fn is_contextual(&self, keyword: &str) -> bool {
        self.kind == SyntaxKind::Identifier && self.text == keyword
    }

    /// Whether `next` starts exactly where this token ends (no whitespace or
    /// comments in between).
    pub fn is_adjacent_to(&self, next: &Token) -> bool {
        self.end == next.start && self.end != 0
    }

    /// Human readable rendering for error messages.
    pub fn describe(&self) -> String {
        match self.kind {
            SyntaxKind::EndOfFileToken => SyntaxKind::EndOfFileToken.text().to_string(),
            _ => self.text.clone(),
        }
    }
}
