use crate::{SyntaxKind, Token, TokenStream};
use std::sync::Arc;
use tsgen_common::SourceLocation;

fn stream(text: &str) -> TokenStream {
    TokenStream::from_source("test.ts", text).expect("source should scan")
}

#[test]
fn test_peek_does_not_consume() {
    let tokens = stream("a + b");
    assert_eq!(tokens.peek(0).text, "a");
    assert_eq!(tokens.peek(1).text, "+");
    assert_eq!(tokens.peek(2).text, "b");
    assert_eq!(tokens.peek(0).text, "a");
}

#[test]
fn test_peek_past_end_yields_eof() {
    let tokens = stream("a");
    assert_eq!(tokens.peek(1).kind, SyntaxKind::EndOfFileToken);
    assert_eq!(tokens.peek(100).kind, SyntaxKind::EndOfFileToken);
}

#[test]
fn test_read_advances_and_sticks_at_eof() {
    let mut tokens = stream("a b");
    assert_eq!(tokens.read().text, "a");
    assert_eq!(tokens.previous().map(|t| t.text.as_str()), Some("a"));
    assert_eq!(tokens.read().text, "b");
    assert!(tokens.is_at_end());
    assert_eq!(tokens.read().kind, SyntaxKind::EndOfFileToken);
    assert_eq!(tokens.read().kind, SyntaxKind::EndOfFileToken);
    assert!(tokens.is_at_end());
}

#[test]
fn test_snapshot_and_restore() {
    let mut tokens = stream("(x) => x");
    let snapshot = tokens.snapshot();
    tokens.read();
    tokens.read();
    assert!(tokens.is_next(SyntaxKind::CloseParenToken));
    tokens.restore(snapshot);
    assert!(tokens.is_next(SyntaxKind::OpenParenToken));
    assert_eq!(tokens.position(), 0);
}

#[test]
fn test_new_appends_eof() {
    let location = SourceLocation::new(Arc::from("synthetic"), 1, 1);
    let tokens = TokenStream::new(vec![Token::new(SyntaxKind::Identifier, "a", location)]);
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens.peek(1).kind, SyntaxKind::EndOfFileToken);

    let empty = TokenStream::new(Vec::new());
    assert!(empty.is_at_end());
    assert!(empty.is_empty());
}

#[test]
fn test_previous_before_first_read() {
    let tokens = stream("a");
    assert!(tokens.previous().is_none());
}
