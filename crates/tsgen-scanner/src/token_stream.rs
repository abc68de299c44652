//! Token stream - the parser's view of a scanned source.
//!
//! The whole text is scanned up front; the parser then moves an explicit
//! cursor over the buffer. Look-ahead is a [`TokenStream::snapshot`] of the
//! cursor followed by [`TokenStream::restore`], so speculative parses never
//! re-scan text.

use crate::{ScanError, Scanner, SyntaxKind, Token};
use std::sync::Arc;
use tsgen_common::SourceLocation;

/// A saved cursor position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Snapshot(usize);

#[derive(Clone, Debug)]
pub struct TokenStream {
    tokens: Vec<Token>,
    cursor: usize,
}

impl TokenStream {
    /// Wrap an existing token buffer. An `EndOfFileToken` is appended when the
    /// buffer does not already end with one, so `peek` never runs dry.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().is_none_or(|t| t.kind != SyntaxKind::EndOfFileToken) {
            let location = match tokens.last() {
                Some(last) => last.location.clone(),
                None => SourceLocation::new(Arc::from(""), 1, 1),
            };
            tokens.push(Token::new(SyntaxKind::EndOfFileToken, "", location));
        }
        TokenStream { tokens, cursor: 0 }
    }

    /// Scan `text` and wrap the result.
    pub fn from_source(source_name: impl Into<Arc<str>>, text: &str) -> Result<Self, ScanError> {
        let tokens = Scanner::new(source_name, text).scan_all()?;
        Ok(TokenStream::new(tokens))
    }

    /// The token `n` positions past the cursor. Peeking past the end yields
    /// the end-of-file token.
    pub fn peek(&self, n: usize) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.cursor + n).min(last)]
    }

    /// Consume and return the current token. Reading at the end keeps
    /// returning the end-of-file token.
    pub fn read(&mut self) -> &Token {
        let index = self.cursor;
        if index + 1 < self.tokens.len() {
            self.cursor += 1;
        }
        &self.tokens[index]
    }

    pub fn is_next(&self, kind: SyntaxKind) -> bool {
        self.peek(0).kind == kind
    }

    pub fn is_at_end(&self) -> bool {
        self.is_next(SyntaxKind::EndOfFileToken)
    }

    /// The most recently consumed token, if any.
    pub fn previous(&self) -> Option<&Token> {
        self.cursor.checked_sub(1).map(|i| &self.tokens[i])
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot(self.cursor)
    }

    pub fn restore(&mut self, snapshot: Snapshot) {
        self.cursor = snapshot.0.min(self.tokens.len() - 1);
    }

    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.len() <= 1
    }
}
