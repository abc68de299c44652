//! Parser state - token access, speculation, recursion limits and trivia
//! claiming shared by every parse method.
//!
//! The grammar itself lives in the `state_*` modules, each adding methods to
//! [`ParserState`]:
//! - `state_statements` - statements and the source file
//! - `state_declarations` - declarations and class members
//! - `state_expressions` - the expression layers, primary to assignment
//! - `state_types` - types, type members, parameters and type parameters

use crate::error::ParseError;
use rustc_hash::FxHashSet;
use tracing::trace;
use tsgen_ast::{BuildError, HasTrivia, Trivia};
use tsgen_common::limits::MAX_PARSER_DEPTH;
use tsgen_scanner::{Snapshot, SyntaxKind, Token, TokenStream};

pub type ParseResult<T> = Result<T, ParseError>;

/// Which edge of a token a trivia claim refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Edge {
    Leading,
    Trailing,
}

/// Token trivia already moved onto a node.
///
/// Every comment belongs to at most one node: the first node to claim a
/// token edge gets its trivia, later claims get nothing. Claims are
/// journaled so a failed speculative parse can release them again.
#[derive(Debug, Default)]
struct TriviaClaims {
    claimed: FxHashSet<(Edge, usize)>,
    journal: Vec<(Edge, usize)>,
}

impl TriviaClaims {
    fn claim(&mut self, edge: Edge, index: usize) -> bool {
        if self.claimed.insert((edge, index)) {
            self.journal.push((edge, index));
            true
        } else {
            false
        }
    }

    fn mark(&self) -> usize {
        self.journal.len()
    }

    fn rollback(&mut self, mark: usize) {
        for claim in self.journal.drain(mark..) {
            self.claimed.remove(&claim);
        }
    }
}

/// A binary or assignment operator spelled by one or more adjacent tokens.
///
/// `>` is always scanned alone, so `>>=` arrives as three tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct GluedOperator {
    pub text: &'static str,
    pub width: usize,
}

pub struct ParserState {
    pub(crate) tokens: TokenStream,
    depth: u32,
    /// When set, `in` is not a binary operator (the head of a `for`).
    pub(crate) disallow_in: bool,
    /// Labels of the enclosing labelled statements in the current function.
    pub(crate) labels: FxHashSet<String>,
    /// Token positions (with the `in` flag) where an arrow function head
    /// failed to parse. Nested parenthesized initializers would otherwise
    /// retry the same heads once per enclosing level.
    pub(crate) failed_arrow_heads: FxHashSet<(usize, bool)>,
    claims: TriviaClaims,
}

impl ParserState {
    pub fn new(tokens: TokenStream) -> Self {
        ParserState {
            tokens,
            depth: 0,
            disallow_in: false,
            labels: FxHashSet::default(),
            failed_arrow_heads: FxHashSet::default(),
            claims: TriviaClaims::default(),
        }
    }

    /// Scan `text` and create a parser over it. Scan errors are reported as
    /// syntax errors.
    pub fn from_source(source_name: &str, text: &str) -> ParseResult<Self> {
        let tokens = TokenStream::from_source(source_name, text)?;
        Ok(ParserState::new(tokens))
    }

    /// Fail unless every token has been consumed.
    pub fn expect_end(&self) -> ParseResult<()> {
        if self.tokens.is_at_end() {
            Ok(())
        } else {
            Err(self.error("expected end of input"))
        }
    }

    // =========================================================================
    // Token access
    // =========================================================================

    #[inline]
    pub(crate) fn token(&self) -> &Token {
        self.tokens.peek(0)
    }

    #[inline]
    pub(crate) fn peek(&self, n: usize) -> &Token {
        self.tokens.peek(n)
    }

    #[inline]
    pub(crate) fn is_token(&self, kind: SyntaxKind) -> bool {
        self.tokens.is_next(kind)
    }

    #[inline]
    pub(crate) fn is_contextual(&self, keyword: &str) -> bool {
        self.token().is_contextual(keyword)
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.tokens.is_at_end()
    }

    /// Consume the current token and return a copy of it.
    pub(crate) fn next_token(&mut self) -> Token {
        self.tokens.read().clone()
    }

    pub(crate) fn skip_tokens(&mut self, count: usize) {
        for _ in 0..count {
            self.tokens.read();
        }
    }

    pub(crate) fn parse_optional(&mut self, kind: SyntaxKind) -> bool {
        if self.is_token(kind) {
            self.tokens.read();
            true
        } else {
            false
        }
    }

    pub(crate) fn parse_expected(&mut self, kind: SyntaxKind) -> ParseResult<Token> {
        if self.is_token(kind) {
            Ok(self.next_token())
        } else {
            Err(self.error(format!("expected `{}`", kind.text())))
        }
    }

    pub(crate) fn parse_optional_contextual(&mut self, keyword: &str) -> bool {
        if self.is_contextual(keyword) {
            self.tokens.read();
            true
        } else {
            false
        }
    }

    pub(crate) fn parse_expected_contextual(&mut self, keyword: &str) -> ParseResult<()> {
        if self.parse_optional_contextual(keyword) {
            Ok(())
        } else {
            Err(self.error(format!("expected `{keyword}`")))
        }
    }

    /// An identifier in a binding or reference position. Contextual keywords
    /// are identifiers; reserved words are not.
    pub(crate) fn parse_identifier(&mut self, what: &str) -> ParseResult<String> {
        if self.is_token(SyntaxKind::Identifier) {
            Ok(self.next_token().text)
        } else {
            Err(self.error(format!("expected {what}")))
        }
    }

    /// A name after `.` or in a property position, where reserved words are
    /// allowed too.
    pub(crate) fn parse_identifier_name(&mut self, what: &str) -> ParseResult<String> {
        if self.token().kind.is_identifier_or_keyword() {
            Ok(self.next_token().text)
        } else {
            Err(self.error(format!("expected {what}")))
        }
    }

    /// Automatic semicolon insertion: a `;` is optional before `}`, at the end
    /// of input, and after a line break.
    pub(crate) fn parse_semicolon(&mut self) -> ParseResult<()> {
        if self.parse_optional(SyntaxKind::SemicolonToken)
            || self.is_token(SyntaxKind::CloseBraceToken)
            || self.is_at_end()
            || self.token().has_preceding_line_break
        {
            Ok(())
        } else {
            Err(self.error("expected `;`"))
        }
    }

    pub(crate) fn has_line_break_before_token(&self) -> bool {
        self.token().has_preceding_line_break
    }

    // =========================================================================
    // Glued `>` operators
    // =========================================================================

    /// Recognise an operator starting with `>` at the cursor: `>`, `>=`, `>>`,
    /// `>>=`, `>>>`, `>>>=`. The pieces must be adjacent.
    pub(crate) fn glued_greater_than(&self) -> Option<GluedOperator> {
        if !self.is_token(SyntaxKind::GreaterThanToken) {
            return None;
        }
        let mut greater = 1;
        while greater < 3
            && self.peek(greater).kind == SyntaxKind::GreaterThanToken
            && self.peek(greater - 1).is_adjacent_to(self.peek(greater))
        {
            greater += 1;
        }
        let equals = self.peek(greater).kind == SyntaxKind::EqualsToken
            && self.peek(greater - 1).is_adjacent_to(self.peek(greater));
        let text = match (greater, equals) {
            (1, false) => ">",
            (1, true) => ">=",
            (2, false) => ">>",
            (2, true) => ">>=",
            (3, false) => ">>>",
            _ => ">>>=",
        };
        Some(GluedOperator {
            text,
            width: greater + usize::from(equals),
        })
    }

    // =========================================================================
    // Errors
    // =========================================================================

    /// A syntax error at the current token.
    pub(crate) fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError::syntax(message, self.token())
    }

    /// An unsupported-construct error at the current token.
    pub(crate) fn unsupported(&self, message: impl Into<String>) -> ParseError {
        ParseError::unsupported(message, self.token())
    }

    /// Turn a factory rejection into a syntax error at the current token.
    pub(crate) fn build<T>(&self, result: Result<T, BuildError>) -> ParseResult<T> {
        result.map_err(|err| ParseError::invalid_node(&err, self.token()))
    }

    // =========================================================================
    // Recursion and speculation
    // =========================================================================

    /// Run `f` one nesting level deeper, failing instead of overflowing the
    /// stack on pathological input.
    pub(crate) fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        if self.depth >= MAX_PARSER_DEPTH {
            return Err(self.error("nesting too deep"));
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Run `f` speculatively. On failure the cursor and any trivia claims are
    /// restored and `None` is returned; on success the parse is committed.
    pub(crate) fn try_parse<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> Option<T> {
        let snapshot: Snapshot = self.tokens.snapshot();
        let mark = self.claims.mark();
        let depth = self.depth;
        let disallow_in = self.disallow_in;
        match f(self) {
            Ok(value) => Some(value),
            Err(err) => {
                trace!(
                    position = self.tokens.position(),
                    error = %err,
                    "speculative parse rolled back"
                );
                self.tokens.restore(snapshot);
                self.claims.rollback(mark);
                self.depth = depth;
                self.disallow_in = disallow_in;
                None
            }
        }
    }

    /// Run `f` with `in` allowed or disallowed as a binary operator.
    pub(crate) fn with_in_allowed<T>(
        &mut self,
        allowed: bool,
        f: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        let saved = std::mem::replace(&mut self.disallow_in, !allowed);
        let result = f(self);
        self.disallow_in = saved;
        result
    }

    /// Run `f` as a function body: labels of the enclosing function are not
    /// visible inside it.
    pub(crate) fn in_function_body<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        let saved_labels = std::mem::take(&mut self.labels);
        let result = self.with_in_allowed(true, f);
        self.labels = saved_labels;
        result
    }

    // =========================================================================
    // Trivia
    // =========================================================================

    /// Claim the trivia in front of the current token: comments left on the
    /// line of the previous token (`{ // note`) and the current token's own
    /// leading trivia. With `at_list_start`, blank-line markers before the
    /// first element of a list are dropped.
    pub(crate) fn claim_leading_trivia(&mut self, at_list_start: bool) -> Vec<Trivia> {
        let mut trivia = self.claim_trailing_trivia();
        let index = self.tokens.position();
        if self.claims.claim(Edge::Leading, index) {
            trivia.extend(self.token().leading_comments.iter().map(Trivia::from));
        }
        if at_list_start {
            let blank = trivia
                .iter()
                .take_while(|t| matches!(t, Trivia::BlankLine))
                .count();
            trivia.drain(..blank);
        }
        if !trivia.is_empty() {
            trace!(index, count = trivia.len(), "claimed leading trivia");
        }
        trivia
    }

    /// Claim the trailing trivia of the most recently consumed token.
    pub(crate) fn claim_trailing_trivia(&mut self) -> Vec<Trivia> {
        let Some(index) = self.tokens.position().checked_sub(1) else {
            return Vec::new();
        };
        if !self.claims.claim(Edge::Trailing, index) {
            return Vec::new();
        }
        match self.tokens.previous() {
            Some(token) => token.trailing_comments.iter().map(Trivia::from).collect(),
            None => Vec::new(),
        }
    }

    /// Parse one element of a trivia-carrying list (statements, members,
    /// clauses, enum members, object properties). `f` parses the element and
    /// its separator; comments around it move onto the element.
    pub(crate) fn parse_list_element<T: HasTrivia>(
        &mut self,
        first: bool,
        f: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        let leading = self.claim_leading_trivia(first);
        let node = f(self)?;
        let trailing = self.claim_trailing_trivia();
        Ok(attach_trivia(node, leading, trailing))
    }

    /// Claim the comments in front of a closing token (`}` or end of input)
    /// that no element follows. Trailing blank lines are dropped, and so are
    /// leading ones when the list is empty.
    pub(crate) fn claim_dangling_trivia(&mut self, list_is_empty: bool) -> Vec<Trivia> {
        let mut trivia = self.claim_leading_trivia(list_is_empty);
        while matches!(trivia.last(), Some(Trivia::BlankLine)) {
            trivia.pop();
        }
        trivia
    }

    /// Claim the dangling comments before a closing token and move them onto
    /// the last element of `items`. When `items` is empty the comments are
    /// returned for the caller to place.
    pub(crate) fn claim_dangling_into<T: HasTrivia>(&mut self, items: &mut [T]) -> Vec<Trivia> {
        let dangling = self.claim_dangling_trivia(items.is_empty());
        attach_dangling(items, dangling)
    }
}

/// Add claimed trivia around whatever trivia the node already carries.
pub(crate) fn attach_trivia<T: HasTrivia>(
    mut node: T,
    leading: Vec<Trivia>,
    trailing: Vec<Trivia>,
) -> T {
    if leading.is_empty() && trailing.is_empty() {
        return node;
    }
    let trivia = node.trivia_mut();
    trivia.leading.splice(0..0, leading);
    trivia.trailing.extend(trailing);
    node
}

/// Append dangling comments to the last element of a list, if there is one.
/// Returns the comments back when the list is empty.
fn attach_dangling<T: HasTrivia>(items: &mut [T], dangling: Vec<Trivia>) -> Vec<Trivia> {
    if dangling.is_empty() {
        return dangling;
    }
    match items.last_mut() {
        Some(last) => {
            last.trivia_mut().trailing.extend(dangling);
            Vec::new()
        }
        None => dangling,
    }
}
