//! Tests for the scanner: token kinds, positions, literals and comment trivia.

use crate::{ScanErrorKind, Scanner, SyntaxKind, Token};
use tsgen_common::CommentTrivia;

fn scan(text: &str) -> Vec<Token> {
    Scanner::new("test.ts", text)
        .scan_all()
        .expect("source should scan")
}

fn kinds(text: &str) -> Vec<SyntaxKind> {
    scan(text).iter().map(|t| t.kind).collect()
}

#[test]
fn test_scan_simple_statement() {
    use SyntaxKind::*;
    assert_eq!(
        kinds("let x = 1;"),
        vec![
            Identifier,
            Identifier,
            EqualsToken,
            NumericLiteral,
            SemicolonToken,
            EndOfFileToken
        ]
    );
}

#[test]
fn test_contextual_keywords_are_identifiers() {
    let tokens = scan("type interface readonly as");
    assert!(tokens[..4].iter().all(|t| t.kind == SyntaxKind::Identifier));
    assert!(tokens[0].is_contextual("type"));
    assert!(!tokens[1].is_contextual("type"));
}

#[test]
fn test_reserved_words_have_their_own_kind() {
    use SyntaxKind::*;
    assert_eq!(
        kinds("if else instanceof typeof"),
        vec![IfKeyword, ElseKeyword, InstanceOfKeyword, TypeOfKeyword, EndOfFileToken]
    );
}

#[test]
fn test_token_locations() {
    let tokens = scan("let x = 1;\n  foo");
    assert_eq!(tokens[1].location.line(), 1);
    assert_eq!(tokens[1].location.column(), 5);
    assert_eq!(tokens[5].text, "foo");
    assert_eq!(tokens[5].location.line(), 2);
    assert_eq!(tokens[5].location.column(), 3);
    assert!(tokens[5].has_preceding_line_break);
    assert!(!tokens[1].has_preceding_line_break);
}

#[test]
fn test_greater_than_is_scanned_alone() {
    let tokens = scan("a >>= b");
    assert_eq!(tokens[1].kind, SyntaxKind::GreaterThanToken);
    assert_eq!(tokens[2].kind, SyntaxKind::GreaterThanToken);
    assert_eq!(tokens[3].kind, SyntaxKind::EqualsToken);
    assert!(tokens[1].is_adjacent_to(&tokens[2]));
    assert!(tokens[2].is_adjacent_to(&tokens[3]));
    assert!(!tokens[0].is_adjacent_to(&tokens[1]));
}

#[test]
fn test_longest_punctuator_wins() {
    use SyntaxKind::*;
    assert_eq!(
        kinds("=== !== ... ?? ??= **= => ?."),
        vec![
            EqualsEqualsEqualsToken,
            ExclamationEqualsEqualsToken,
            DotDotDotToken,
            QuestionQuestionToken,
            QuestionQuestionEqualsToken,
            AsteriskAsteriskEqualsToken,
            EqualsGreaterThanToken,
            QuestionDotToken,
            EndOfFileToken
        ]
    );
}

#[test]
fn test_question_dot_before_digit_is_conditional() {
    use SyntaxKind::*;
    let tokens = scan("a?.5:b");
    assert_eq!(
        tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![Identifier, QuestionToken, NumericLiteral, ColonToken, Identifier, EndOfFileToken]
    );
    assert_eq!(tokens[2].text, ".5");
}

#[test]
fn test_numeric_literals() {
    let tokens = scan("0x1F 1.5e-3 .5 10n 1_000 42");
    let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["0x1F", "1.5e-3", ".5", "10n", "1_000", "42", ""]);
    assert_eq!(tokens[3].kind, SyntaxKind::BigIntLiteral);
    assert_eq!(tokens[5].kind, SyntaxKind::NumericLiteral);
}

#[test]
fn test_member_access_on_number_is_not_a_fraction() {
    use SyntaxKind::*;
    assert_eq!(
        kinds("a[1].b"),
        vec![
            Identifier,
            OpenBracketToken,
            NumericLiteral,
            CloseBracketToken,
            DotToken,
            Identifier,
            EndOfFileToken
        ]
    );
}

#[test]
fn test_string_literal_values() {
    let tokens = scan(r#"'it\'s' "a\nb" "\x41B\u{43}""#);
    assert_eq!(tokens[0].text, r"'it\'s'");
    assert_eq!(tokens[0].value.as_deref(), Some("it's"));
    assert_eq!(tokens[1].value.as_deref(), Some("a\nb"));
    assert_eq!(tokens[2].value.as_deref(), Some("ABC"));
}

#[test]
fn test_unterminated_string_reports_opening_quote() {
    let err = Scanner::new("test.ts", "let s = \"abc").scan_all().unwrap_err();
    assert_eq!(err.kind, ScanErrorKind::UnterminatedString);
    assert_eq!(err.location.line(), 1);
    assert_eq!(err.location.column(), 9);
    assert_eq!(err.to_string(), "test.ts:1:9: unterminated string literal");
}

#[test]
fn test_string_cannot_span_lines() {
    let err = Scanner::new("test.ts", "'abc\ndef'").scan_all().unwrap_err();
    assert_eq!(err.kind, ScanErrorKind::UnterminatedString);
}

#[test]
fn test_unterminated_comment() {
    let err = Scanner::new("test.ts", "a /* open").scan_all().unwrap_err();
    assert_eq!(err.kind, ScanErrorKind::UnterminatedComment);
    assert_eq!(err.location.column(), 3);
}

#[test]
fn test_invalid_character() {
    let err = Scanner::new("test.ts", "a \\ b").scan_all().unwrap_err();
    assert_eq!(err.kind, ScanErrorKind::InvalidCharacter('\\'));
}

#[test]
fn test_template_literal_is_one_token() {
    let tokens = scan("`a ${ `b` } c` x");
    assert_eq!(tokens[0].kind, SyntaxKind::TemplateLiteral);
    assert_eq!(tokens[0].text, "`a ${ `b` } c`");
    assert_eq!(tokens[1].text, "x");
}

#[test]
fn test_private_identifier() {
    let tokens = scan("this.#count");
    assert_eq!(tokens[2].kind, SyntaxKind::PrivateIdentifier);
    assert_eq!(tokens[2].text, "#count");
}

// =============================================================================
// Comment trivia
// =============================================================================

#[test]
fn test_same_line_comment_trails_previous_token() {
    let tokens = scan("a; // one\nb;");
    assert_eq!(tokens[1].trailing_comments, vec![CommentTrivia::line(" one")]);
    assert!(tokens[2].leading_comments.is_empty());
}

#[test]
fn test_comment_on_own_line_leads_next_token() {
    let tokens = scan("a;\n// two\nb;");
    assert!(tokens[1].trailing_comments.is_empty());
    assert_eq!(tokens[2].leading_comments, vec![CommentTrivia::line(" two")]);
}

#[test]
fn test_inline_block_comment_leads_next_token() {
    let tokens = scan("a = /* note */ b;");
    assert!(tokens[1].trailing_comments.is_empty());
    assert_eq!(tokens[2].leading_comments, vec![CommentTrivia::block(" note ")]);
}

#[test]
fn test_block_comment_at_line_end_trails() {
    let tokens = scan("a; /* note */\nb;");
    assert_eq!(tokens[1].trailing_comments, vec![CommentTrivia::block(" note ")]);
}

#[test]
fn test_doc_comment_is_classified() {
    let tokens = scan("/** Hello */\nfoo();");
    assert_eq!(tokens[0].leading_comments, vec![CommentTrivia::doc(" Hello ")]);
}

#[test]
fn test_blank_lines_collapse_to_one_marker() {
    let tokens = scan("a;\n\n\n\nb;");
    assert_eq!(tokens[2].leading_comments, vec![CommentTrivia::BlankLine]);

    let tokens = scan("a;\nb;");
    assert!(tokens[2].leading_comments.is_empty());
}

#[test]
fn test_blank_line_after_file_header() {
    let tokens = scan("// header\n\nfoo;");
    assert_eq!(
        tokens[0].leading_comments,
        vec![CommentTrivia::line(" header"), CommentTrivia::BlankLine]
    );
}

#[test]
fn test_leading_blank_lines_of_file_are_dropped() {
    let tokens = scan("\n\n\nfoo;");
    assert!(tokens[0].leading_comments.is_empty());
}

#[test]
fn test_trailing_file_comments_ride_on_eof() {
    let tokens = scan("a;\n// end");
    let eof = tokens.last().expect("eof token");
    assert_eq!(eof.kind, SyntaxKind::EndOfFileToken);
    assert_eq!(eof.leading_comments, vec![CommentTrivia::line(" end")]);
}

#[test]
fn test_crlf_line_endings() {
    let tokens = scan("a;\r\n// two\r\nb;");
    assert_eq!(tokens[2].leading_comments, vec![CommentTrivia::line(" two")]);
    assert_eq!(tokens[2].location.line(), 3);
}
