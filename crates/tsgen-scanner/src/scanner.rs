//! Scanner - converts source text into a token buffer.
//!
//! The scanner is a single forward pass over the text. It tracks line and
//! column (1-based, counted in characters) for every token, and collects the
//! comments and blank lines it skips as trivia on the neighbouring tokens:
//!
//! - A comment on the same line as the previous token, and with nothing but
//!   whitespace after it on that line, trails the previous token.
//! - Everything else leads the next token.
//! - An empty source line becomes a `BlankLine` marker.

use crate::{SyntaxKind, Token};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;
use tsgen_common::comments::{classify_block_comment, find_block_comment_end};
use tsgen_common::{CommentKind, CommentTrivia, SourceLocation};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ScanErrorKind {
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unterminated comment")]
    UnterminatedComment,
    #[error("unterminated template literal")]
    UnterminatedTemplate,
    #[error("invalid character `{0}`")]
    InvalidCharacter(char),
    #[error("invalid escape sequence")]
    InvalidEscape,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{location}: {kind}")]
pub struct ScanError {
    pub kind: ScanErrorKind,
    pub location: SourceLocation,
}

/// Punctuators ordered so that longer spellings are tried first.
///
/// `>` is deliberately absent from every compound entry; see
/// [`SyntaxKind::GreaterThanToken`].
const PUNCTUATORS: &[(&str, SyntaxKind)] = &[
    ("...", SyntaxKind::DotDotDotToken),
    ("===", SyntaxKind::EqualsEqualsEqualsToken),
    ("!==", SyntaxKind::ExclamationEqualsEqualsToken),
    ("**=", SyntaxKind::AsteriskAsteriskEqualsToken),
    ("<<=", SyntaxKind::LessThanLessThanEqualsToken),
    ("&&=", SyntaxKind::AmpersandAmpersandEqualsToken),
    ("||=", SyntaxKind::BarBarEqualsToken),
    ("??=", SyntaxKind::QuestionQuestionEqualsToken),
    ("==", SyntaxKind::EqualsEqualsToken),
    ("!=", SyntaxKind::ExclamationEqualsToken),
    ("=>", SyntaxKind::EqualsGreaterThanToken),
    ("<=", SyntaxKind::LessThanEqualsToken),
    ("<<", SyntaxKind::LessThanLessThanToken),
    ("++", SyntaxKind::PlusPlusToken),
    ("+=", SyntaxKind::PlusEqualsToken),
    ("--", SyntaxKind::MinusMinusToken),
    ("-=", SyntaxKind::MinusEqualsToken),
    ("**", SyntaxKind::AsteriskAsteriskToken),
    ("*=", SyntaxKind::AsteriskEqualsToken),
    ("/=", SyntaxKind::SlashEqualsToken),
    ("%=", SyntaxKind::PercentEqualsToken),
    ("&&", SyntaxKind::AmpersandAmpersandToken),
    ("&=", SyntaxKind::AmpersandEqualsToken),
    ("||", SyntaxKind::BarBarToken),
    ("|=", SyntaxKind::BarEqualsToken),
    ("^=", SyntaxKind::CaretEqualsToken),
    ("??", SyntaxKind::QuestionQuestionToken),
    ("{", SyntaxKind::OpenBraceToken),
    ("}", SyntaxKind::CloseBraceToken),
    ("(", SyntaxKind::OpenParenToken),
    (")", SyntaxKind::CloseParenToken),
    ("[", SyntaxKind::OpenBracketToken),
    ("]", SyntaxKind::CloseBracketToken),
    (".", SyntaxKind::DotToken),
    (";", SyntaxKind::SemicolonToken),
    (",", SyntaxKind::CommaToken),
    ("<", SyntaxKind::LessThanToken),
    (">", SyntaxKind::GreaterThanToken),
    ("=", SyntaxKind::EqualsToken),
    ("!", SyntaxKind::ExclamationToken),
    ("+", SyntaxKind::PlusToken),
    ("-", SyntaxKind::MinusToken),
    ("*", SyntaxKind::AsteriskToken),
    ("/", SyntaxKind::SlashToken),
    ("%", SyntaxKind::PercentToken),
    ("&", SyntaxKind::AmpersandToken),
    ("|", SyntaxKind::BarToken),
    ("^", SyntaxKind::CaretToken),
    ("~", SyntaxKind::TildeToken),
    ("?", SyntaxKind::QuestionToken),
    (":", SyntaxKind::ColonToken),
    ("@", SyntaxKind::AtToken),
];

pub struct Scanner<'a> {
    source_name: Arc<str>,
    text: &'a str,
    pos: usize,
    line: u32,
    column: u32,
    tokens: Vec<Token>,
}

impl<'a> Scanner<'a> {
    pub fn new(source_name: impl Into<Arc<str>>, text: &'a str) -> Self {
        Scanner {
            source_name: source_name.into(),
            text,
            pos: 0,
            line: 1,
            column: 1,
            tokens: Vec::new(),
        }
    }

    /// Scan the whole text. The returned buffer always ends with an
    /// `EndOfFileToken` that carries the trailing comments of the file.
    pub fn scan_all(mut self) -> Result<Vec<Token>, ScanError> {
        loop {
            let (leading, line_break) = self.scan_trivia()?;
            let start = self.pos;
            let location = self.location();

            let (kind, value) = if self.pos >= self.text.len() {
                (SyntaxKind::EndOfFileToken, None)
            } else {
                self.scan_token()?
            };

            self.tokens.push(Token {
                kind,
                text: self.text[start..self.pos].to_string(),
                value,
                location,
                start: start as u32,
                end: self.pos as u32,
                has_preceding_line_break: line_break,
                leading_comments: leading,
                trailing_comments: Vec::new(),
            });

            if kind == SyntaxKind::EndOfFileToken {
                break;
            }
        }

        debug!(
            source = %self.source_name,
            tokens = self.tokens.len(),
            "scanned source"
        );
        Ok(self.tokens)
    }

    // =========================================================================
    // Character helpers
    // =========================================================================

    fn location(&self) -> SourceLocation {
        SourceLocation::new(Arc::clone(&self.source_name), self.line, self.column)
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek_char_at(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn advance_by(&mut self, bytes: usize) {
        let target = self.pos + bytes;
        while self.pos < target {
            self.advance();
        }
    }

    fn error(&self, kind: ScanErrorKind) -> ScanError {
        ScanError {
            kind,
            location: self.location(),
        }
    }

    // =========================================================================
    // Trivia
    // =========================================================================

    /// Skip whitespace and comments before the next token.
    ///
    /// Returns the trivia leading the next token and whether a line break was
    /// crossed since the previous token.
    fn scan_trivia(&mut self) -> Result<(Vec<CommentTrivia>, bool), ScanError> {
        let mut leading = Vec::new();
        let mut saw_line_break = false;
        // Line breaks since the previous token or comment.
        let mut newlines = 0u32;

        while let Some(ch) = self.peek_char() {
            match ch {
                '\n' => {
                    self.advance();
                    saw_line_break = true;
                    newlines += 1;
                    if newlines == 2 && (!self.tokens.is_empty() || !leading.is_empty()) {
                        leading.push(CommentTrivia::BlankLine);
                    }
                }
                '/' if self.peek_char_at(1) == Some('/') => {
                    let trivia = self.scan_line_comment();
                    self.place_comment(trivia, saw_line_break, &mut leading);
                    newlines = 0;
                }
                '/' if self.peek_char_at(1) == Some('*') => {
                    let trivia = self.scan_block_comment()?;
                    let trails = self.rest_of_line_is_blank();
                    if trails {
                        self.place_comment(trivia, saw_line_break, &mut leading);
                    } else {
                        leading.push(trivia);
                    }
                    newlines = 0;
                }
                '\u{feff}' => {
                    self.advance();
                }
                c if c.is_whitespace() => {
                    self.advance();
                }
                _ => break,
            }
        }

        Ok((leading, saw_line_break))
    }

    fn place_comment(
        &mut self,
        trivia: CommentTrivia,
        saw_line_break: bool,
        leading: &mut Vec<CommentTrivia>,
    ) {
        match self.tokens.last_mut() {
            Some(previous) if !saw_line_break => previous.trailing_comments.push(trivia),
            _ => leading.push(trivia),
        }
    }

    fn rest_of_line_is_blank(&self) -> bool {
        for ch in self.rest().chars() {
            match ch {
                '\n' => return true,
                c if c.is_whitespace() => continue,
                _ => return false,
            }
        }
        true
    }

    fn scan_line_comment(&mut self) -> CommentTrivia {
        self.advance_by(2);
        let start = self.pos;
        while let Some(ch) = self.peek_char() {
            if ch == '\n' {
                break;
            }
            self.advance();
        }
        CommentTrivia::line(self.text[start..self.pos].trim_end())
    }

    fn scan_block_comment(&mut self) -> Result<CommentTrivia, ScanError> {
        let open = self.location();
        self.advance_by(2);
        let body_start = self.pos;
        let Some(body_end) = find_block_comment_end(self.text.as_bytes(), body_start) else {
            return Err(ScanError {
                kind: ScanErrorKind::UnterminatedComment,
                location: open,
            });
        };
        self.advance_by(body_end + 2 - self.pos);

        let body = &self.text[body_start..body_end];
        let (kind, text) = classify_block_comment(body);
        Ok(CommentTrivia::Comment {
            kind,
            text: match kind {
                CommentKind::Doc => text.to_string(),
                _ => body.to_string(),
            },
        })
    }

    // =========================================================================
    // Tokens
    // =========================================================================

    fn scan_token(&mut self) -> Result<(SyntaxKind, Option<String>), ScanError> {
        let Some(ch) = self.peek_char() else {
            return Ok((SyntaxKind::EndOfFileToken, None));
        };

        if is_identifier_start(ch) {
            let text = self.scan_identifier_part();
            let kind = SyntaxKind::from_keyword(text).unwrap_or(SyntaxKind::Identifier);
            return Ok((kind, None));
        }

        if ch.is_ascii_digit()
            || (ch == '.' && self.peek_char_at(1).is_some_and(|c| c.is_ascii_digit()))
        {
            return Ok((self.scan_number(), None));
        }

        match ch {
            '"' | '\'' => {
                let value = self.scan_string(ch)?;
                Ok((SyntaxKind::StringLiteral, Some(value)))
            }
            '`' => {
                self.scan_template()?;
                Ok((SyntaxKind::TemplateLiteral, None))
            }
            '#' if self.peek_char_at(1).is_some_and(is_identifier_start) => {
                self.advance();
                self.scan_identifier_part();
                Ok((SyntaxKind::PrivateIdentifier, None))
            }
            // `a?.5:b` is a conditional, not an optional chain.
            '?' if self.rest().starts_with("?.")
                && !self.peek_char_at(2).is_some_and(|c| c.is_ascii_digit()) =>
            {
                self.advance_by(2);
                Ok((SyntaxKind::QuestionDotToken, None))
            }
            _ => {
                let rest = self.rest();
                match PUNCTUATORS.iter().find(|(text, _)| rest.starts_with(text)) {
                    Some(&(text, kind)) => {
                        self.advance_by(text.len());
                        Ok((kind, None))
                    }
                    None => Err(self.error(ScanErrorKind::InvalidCharacter(ch))),
                }
            }
        }
    }

    fn scan_identifier_part(&mut self) -> &'a str {
        let start = self.pos;
        while let Some(ch) = self.peek_char() {
            if !is_identifier_part(ch) {
                break;
            }
            self.advance();
        }
        &self.text[start..self.pos]
    }

    fn scan_number(&mut self) -> SyntaxKind {
        let radix_prefix = self.peek_char() == Some('0')
            && matches!(
                self.peek_char_at(1),
                Some('x' | 'X' | 'b' | 'B' | 'o' | 'O')
            );

        if radix_prefix {
            self.advance_by(2);
            while self
                .peek_char()
                .is_some_and(|c| c.is_ascii_hexdigit() || c == '_')
            {
                self.advance();
            }
        } else {
            self.scan_digits();
            if self.peek_char() == Some('.')
                && self.peek_char_at(1).is_some_and(|c| c.is_ascii_digit())
            {
                self.advance();
                self.scan_digits();
            }
            if matches!(self.peek_char(), Some('e' | 'E')) {
                let sign = matches!(self.peek_char_at(1), Some('+' | '-'));
                let digit_at = if sign { 2 } else { 1 };
                if self.peek_char_at(digit_at).is_some_and(|c| c.is_ascii_digit()) {
                    self.advance_by(digit_at);
                    self.scan_digits();
                }
            }
        }

        if self.peek_char() == Some('n') {
            self.advance();
            return SyntaxKind::BigIntLiteral;
        }
        SyntaxKind::NumericLiteral
    }

    fn scan_digits(&mut self) {
        // A leading `.` (as in `.5`) is consumed by the fraction branch.
        if self.peek_char() == Some('.') {
            self.advance();
        }
        while self
            .peek_char()
            .is_some_and(|c| c.is_ascii_digit() || c == '_')
        {
            self.advance();
        }
    }

    fn scan_string(&mut self, quote: char) -> Result<String, ScanError> {
        let open = self.location();
        let unterminated = ScanError {
            kind: ScanErrorKind::UnterminatedString,
            location: open,
        };
        self.advance();

        let mut value = String::new();
        loop {
            let Some(ch) = self.advance() else {
                return Err(unterminated);
            };
            match ch {
                '\n' => return Err(unterminated),
                c if c == quote => break,
                '\\' => self.scan_escape(&mut value)?,
                c => value.push(c),
            }
        }
        Ok(value)
    }

    fn scan_escape(&mut self, value: &mut String) -> Result<(), ScanError> {
        let Some(ch) = self.advance() else {
            return Err(self.error(ScanErrorKind::UnterminatedString));
        };
        match ch {
            'n' => value.push('\n'),
            't' => value.push('\t'),
            'r' => value.push('\r'),
            'b' => value.push('\u{8}'),
            'f' => value.push('\u{c}'),
            'v' => value.push('\u{b}'),
            '0' if !self.peek_char().is_some_and(|c| c.is_ascii_digit()) => value.push('\0'),
            'x' => {
                let ch = self.scan_hex_escape(2)?;
                value.push(ch);
            }
            'u' => {
                let ch = if self.peek_char() == Some('{') {
                    self.advance();
                    let start = self.pos;
                    while self.peek_char().is_some_and(|c| c.is_ascii_hexdigit()) {
                        self.advance();
                    }
                    let digits = &self.text[start..self.pos];
                    if self.advance() != Some('}') {
                        return Err(self.error(ScanErrorKind::InvalidEscape));
                    }
                    u32::from_str_radix(digits, 16)
                        .ok()
                        .and_then(char::from_u32)
                        .ok_or_else(|| self.error(ScanErrorKind::InvalidEscape))?
                } else {
                    self.scan_hex_escape(4)?
                };
                value.push(ch);
            }
            // Line continuation.
            '\r' => {
                if self.peek_char() == Some('\n') {
                    self.advance();
                }
            }
            '\n' | '\u{2028}' | '\u{2029}' => {}
            other => value.push(other),
        }
        Ok(())
    }

    fn scan_hex_escape(&mut self, digits: usize) -> Result<char, ScanError> {
        let start = self.pos;
        for _ in 0..digits {
            match self.peek_char() {
                Some(c) if c.is_ascii_hexdigit() => {
                    self.advance();
                }
                _ => return Err(self.error(ScanErrorKind::InvalidEscape)),
            }
        }
        u32::from_str_radix(&self.text[start..self.pos], 16)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| self.error(ScanErrorKind::InvalidEscape))
    }

    /// Skip over a template literal. Templates are not parsed, but the
    /// scanner still has to find where they end to report them precisely.
    fn scan_template(&mut self) -> Result<(), ScanError> {
        let open = self.location();
        self.advance();
        let mut depth = 0usize;
        loop {
            let Some(ch) = self.advance() else {
                return Err(ScanError {
                    kind: ScanErrorKind::UnterminatedTemplate,
                    location: open,
                });
            };
            match ch {
                '\\' => {
                    self.advance();
                }
                '$' if self.peek_char() == Some('{') => {
                    self.advance();
                    depth += 1;
                }
                '}' if depth > 0 => depth -= 1,
                '`' if depth == 0 => return Ok(()),
                _ => {}
            }
        }
    }
}

fn is_identifier_start(ch: char) -> bool {
    ch == '_' || ch == '$' || ch.is_alphabetic()
}

fn is_identifier_part(ch: char) -> bool {
    ch == '_' || ch == '$' || ch.is_alphanumeric() || ch == '\u{200c}' || ch == '\u{200d}'
}
