//! Parser state - statement parsing methods

use crate::state::{ParseResult, ParserState, attach_trivia};
use std::sync::Arc;
use tracing::{debug, trace};
use tsgen_ast::factory;
use tsgen_ast::stmt::VariableStmt;
use tsgen_ast::{Block, Expr, ForInit, Modifiers, Stmt, SwitchClause, VariableKind};
use tsgen_scanner::SyntaxKind;

impl ParserState {
    // =========================================================================
    // Source file and statement lists
    // =========================================================================

    /// Parse statements up to the end of input.
    pub fn parse_source_file(&mut self) -> ParseResult<Vec<Stmt>> {
        debug!(tokens = self.tokens.len(), "parse_source_file");
        let mut statements = Vec::new();
        while !self.is_at_end() {
            let first = statements.is_empty();
            statements.push(self.parse_statement_in_list(first)?);
        }
        let orphaned = self.claim_dangling_into(&mut statements);
        if !orphaned.is_empty() {
            trace!(count = orphaned.len(), "dropped comments of a file without statements");
        }
        debug!(statements = statements.len(), "parsed source file");
        Ok(statements)
    }

    /// Statements until `}` (or, in a switch clause, the next `case` /
    /// `default`).
    fn parse_statement_list(&mut self, in_switch_clause: bool) -> ParseResult<Vec<Stmt>> {
        let mut statements = Vec::new();
        loop {
            let kind = self.token().kind;
            let at_end = kind == SyntaxKind::CloseBraceToken
                || kind == SyntaxKind::EndOfFileToken
                || (in_switch_clause
                    && matches!(kind, SyntaxKind::CaseKeyword | SyntaxKind::DefaultKeyword));
            if at_end {
                return Ok(statements);
            }
            let first = statements.is_empty();
            statements.push(self.parse_statement_in_list(first)?);
        }
    }

    /// `{ statements }`
    pub fn parse_block(&mut self) -> ParseResult<Block> {
        self.parse_expected(SyntaxKind::OpenBraceToken)?;
        let mut statements = self.parse_statement_list(false)?;
        let dangling = self.claim_dangling_into(&mut statements);
        self.parse_expected(SyntaxKind::CloseBraceToken)?;
        Ok(attach_trivia(factory::block(statements), Vec::new(), dangling))
    }

    // =========================================================================
    // Statements
    // =========================================================================

    /// Parse one statement together with the comments around it.
    pub fn parse_statement(&mut self) -> ParseResult<Stmt> {
        self.parse_statement_in_list(false)
    }

    pub(crate) fn parse_statement_in_list(&mut self, first: bool) -> ParseResult<Stmt> {
        self.parse_list_element(first, |p| p.nested(|p| p.parse_statement_worker()))
    }

    fn parse_statement_worker(&mut self) -> ParseResult<Stmt> {
        match self.token().kind {
            SyntaxKind::OpenBraceToken => Ok(Stmt::Block(Arc::new(self.parse_block()?))),
            SyntaxKind::SemicolonToken => {
                self.next_token();
                Ok(factory::empty_stmt())
            }
            SyntaxKind::VarKeyword => self.parse_variable_statement(Modifiers::empty()),
            SyntaxKind::ConstKeyword if self.peek(1).kind != SyntaxKind::EnumKeyword => {
                self.parse_variable_statement(Modifiers::empty())
            }
            SyntaxKind::Identifier if self.is_let_declaration() => {
                self.parse_variable_statement(Modifiers::empty())
            }
            SyntaxKind::IfKeyword => self.parse_if_statement(),
            SyntaxKind::ForKeyword => self.parse_for_statement(),
            SyntaxKind::WhileKeyword => self.parse_while_statement(),
            SyntaxKind::DoKeyword => self.parse_do_statement(),
            SyntaxKind::SwitchKeyword => self.parse_switch_statement(),
            SyntaxKind::TryKeyword => self.parse_try_statement(),
            SyntaxKind::ThrowKeyword => self.parse_throw_statement(),
            SyntaxKind::ReturnKeyword => self.parse_return_statement(),
            SyntaxKind::BreakKeyword | SyntaxKind::ContinueKeyword => {
                self.parse_break_or_continue_statement()
            }
            SyntaxKind::Identifier if self.peek(1).kind == SyntaxKind::ColonToken => {
                self.parse_labelled_statement()
            }
            SyntaxKind::DebuggerKeyword => {
                Err(self.unsupported("`debugger` statements are not supported"))
            }
            SyntaxKind::WithKeyword => {
                Err(self.unsupported("`with` statements are not supported"))
            }
            SyntaxKind::AtToken => Err(self.unsupported("decorators are not supported")),
            _ if self.is_start_of_declaration() => self.parse_declaration_worker(),
            _ => self.parse_expression_statement(),
        }
    }

    /// `let` followed by a binding starts a declaration; otherwise `let` is an
    /// identifier.
    pub(crate) fn is_let_declaration(&self) -> bool {
        self.is_contextual("let")
            && matches!(
                self.peek(1).kind,
                SyntaxKind::Identifier | SyntaxKind::OpenBracketToken | SyntaxKind::OpenBraceToken
            )
    }

    fn parse_expression_statement(&mut self) -> ParseResult<Stmt> {
        let expr = self.parse_expression()?;
        self.parse_semicolon()?;
        Ok(factory::expression_stmt(expr))
    }

    // =========================================================================
    // Variables
    // =========================================================================

    pub(crate) fn parse_variable_statement(&mut self, modifiers: Modifiers) -> ParseResult<Stmt> {
        let list = self.parse_variable_declaration_list(modifiers)?;
        self.parse_semicolon()?;
        Ok(Stmt::Variable(list))
    }

    /// `const a: T = 1, b` without the terminating `;`.
    fn parse_variable_declaration_list(
        &mut self,
        modifiers: Modifiers,
    ) -> ParseResult<Arc<VariableStmt>> {
        let kind = match self.token().kind {
            SyntaxKind::VarKeyword => VariableKind::Var,
            SyntaxKind::ConstKeyword => VariableKind::Const,
            _ if self.is_contextual("let") => VariableKind::Let,
            _ => return Err(self.error("expected `var`, `let` or `const`")),
        };
        self.next_token();

        let mut declarations = Vec::new();
        loop {
            if matches!(
                self.token().kind,
                SyntaxKind::OpenBraceToken | SyntaxKind::OpenBracketToken
            ) {
                return Err(self.unsupported("destructuring declarations are not supported"));
            }
            let name = self.parse_identifier("a variable name")?;
            if self.is_token(SyntaxKind::ExclamationToken) {
                return Err(self.unsupported("definite assignment assertions are not supported"));
            }
            let ty = self.parse_type_annotation()?;
            let init = if self.parse_optional(SyntaxKind::EqualsToken) {
                Some(self.parse_assignment_expression()?)
            } else {
                None
            };
            declarations.push(self.build(factory::variable_declarator(name, ty, init))?);
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
        }
        self.build(factory::variable_declaration_list(kind, declarations, modifiers))
    }

    // =========================================================================
    // Control flow
    // =========================================================================

    fn parse_condition(&mut self) -> ParseResult<Expr> {
        self.parse_expected(SyntaxKind::OpenParenToken)?;
        let test = self.with_in_allowed(true, |p| p.parse_expression())?;
        self.parse_expected(SyntaxKind::CloseParenToken)?;
        Ok(test)
    }

    fn parse_if_statement(&mut self) -> ParseResult<Stmt> {
        self.parse_expected(SyntaxKind::IfKeyword)?;
        let test = self.parse_condition()?;
        let consequent = self.parse_statement()?;
        let alternate = if self.parse_optional(SyntaxKind::ElseKeyword) {
            Some(self.parse_statement()?)
        } else {
            None
        };
        Ok(factory::if_stmt(test, consequent, alternate))
    }

    fn parse_while_statement(&mut self) -> ParseResult<Stmt> {
        self.parse_expected(SyntaxKind::WhileKeyword)?;
        let test = self.parse_condition()?;
        let body = self.parse_statement()?;
        Ok(factory::while_stmt(test, body))
    }

    fn parse_do_statement(&mut self) -> ParseResult<Stmt> {
        self.parse_expected(SyntaxKind::DoKeyword)?;
        let body = self.parse_statement()?;
        self.parse_expected(SyntaxKind::WhileKeyword)?;
        let test = self.parse_condition()?;
        // A `;` after `do ... while (x)` is always optional.
        self.parse_optional(SyntaxKind::SemicolonToken);
        Ok(factory::do_while_stmt(body, test))
    }

    /// `for (init; test; update)`, `for (x in o)` and `for (const x of xs)`.
    fn parse_for_statement(&mut self) -> ParseResult<Stmt> {
        self.parse_expected(SyntaxKind::ForKeyword)?;
        if self.is_contextual("await") {
            return Err(self.unsupported("`for await` loops are not supported"));
        }
        self.parse_expected(SyntaxKind::OpenParenToken)?;

        let init = if self.is_token(SyntaxKind::SemicolonToken) {
            None
        } else if self.is_token(SyntaxKind::VarKeyword)
            || self.is_token(SyntaxKind::ConstKeyword)
            || self.is_let_declaration()
        {
            let list = self.with_in_allowed(false, |p| {
                p.parse_variable_declaration_list(Modifiers::empty())
            })?;
            Some(ForInit::Variable(list))
        } else {
            let expr = self.with_in_allowed(false, |p| p.parse_expression())?;
            Some(ForInit::Expression(expr))
        };

        if let Some(left) = init.clone() {
            if self.is_token(SyntaxKind::InKeyword) {
                self.check_for_in_of_left(&left, "for-in")?;
                self.next_token();
                let right = self.with_in_allowed(true, |p| p.parse_expression())?;
                self.parse_expected(SyntaxKind::CloseParenToken)?;
                let body = self.parse_statement()?;
                return Ok(factory::for_in_stmt(left, right, body));
            }
            if self.is_contextual("of") {
                self.check_for_in_of_left(&left, "for-of")?;
                self.next_token();
                let right = self.with_in_allowed(true, |p| p.parse_assignment_expression())?;
                self.parse_expected(SyntaxKind::CloseParenToken)?;
                let body = self.parse_statement()?;
                return Ok(factory::for_of_stmt(left, right, body));
            }
        }

        self.parse_expected(SyntaxKind::SemicolonToken)?;
        let test = if self.is_token(SyntaxKind::SemicolonToken) {
            None
        } else {
            Some(self.with_in_allowed(true, |p| p.parse_expression())?)
        };
        self.parse_expected(SyntaxKind::SemicolonToken)?;
        let update = if self.is_token(SyntaxKind::CloseParenToken) {
            None
        } else {
            Some(self.with_in_allowed(true, |p| p.parse_expression())?)
        };
        self.parse_expected(SyntaxKind::CloseParenToken)?;
        let body = self.parse_statement()?;
        Ok(factory::for_stmt(init, test, update, body))
    }

    /// The left side of `for-in` / `for-of` binds a single name without an
    /// initializer, or is an assignment target.
    fn check_for_in_of_left(&self, left: &ForInit, loop_kind: &str) -> ParseResult<()> {
        match left {
            ForInit::Variable(list) => {
                if list.declarations.len() != 1 {
                    return Err(self.error(format!(
                        "a {loop_kind} statement declares exactly one variable"
                    )));
                }
                if list.declarations[0].init.is_some() {
                    return Err(self.error(format!(
                        "the variable of a {loop_kind} statement cannot have an initializer"
                    )));
                }
                Ok(())
            }
            ForInit::Expression(expr) => match expr.unparenthesized() {
                Expr::Identifier(_)
                | Expr::Member(_)
                | Expr::ElementAccess(_) => Ok(()),
                Expr::Object(_) | Expr::Array(_) => {
                    Err(self.unsupported("destructuring assignments are not supported"))
                }
                _ => Err(self.error(format!(
                    "invalid left-hand side in a {loop_kind} statement"
                ))),
            },
        }
    }

    fn parse_switch_statement(&mut self) -> ParseResult<Stmt> {
        self.parse_expected(SyntaxKind::SwitchKeyword)?;
        let discriminant = self.parse_condition()?;
        self.parse_expected(SyntaxKind::OpenBraceToken)?;

        let mut clauses: Vec<SwitchClause> = Vec::new();
        let mut seen_default = false;
        while !self.is_token(SyntaxKind::CloseBraceToken) && !self.is_at_end() {
            if self.is_token(SyntaxKind::DefaultKeyword) {
                if seen_default {
                    return Err(self.error("a switch statement may have only one default clause"));
                }
                seen_default = true;
            }
            let first = clauses.is_empty();
            clauses.push(self.parse_switch_clause(first)?);
        }

        // Comments before the closing `}` follow the last statement of the
        // last clause.
        let last_has_statements = clauses.last().is_some_and(|c| !c.statements.is_empty());
        if last_has_statements && let Some(last) = clauses.last_mut() {
            self.claim_dangling_into(&mut last.statements);
        } else {
            self.claim_dangling_into(&mut clauses);
        }
        self.parse_expected(SyntaxKind::CloseBraceToken)?;
        Ok(factory::switch_stmt(discriminant, clauses))
    }

    /// `case x:` or `default:` and the statements up to the next clause. The
    /// clause keeps comments on the line of its colon.
    fn parse_switch_clause(&mut self, first: bool) -> ParseResult<SwitchClause> {
        let leading = self.claim_leading_trivia(first);
        let test = if self.parse_optional(SyntaxKind::DefaultKeyword) {
            None
        } else {
            self.parse_expected(SyntaxKind::CaseKeyword)?;
            Some(self.with_in_allowed(true, |p| p.parse_expression())?)
        };
        self.parse_expected(SyntaxKind::ColonToken)?;
        let trailing = self.claim_trailing_trivia();
        let statements = self.parse_statement_list(true)?;
        let clause = match test {
            Some(test) => factory::case_clause(test, statements),
            None => factory::default_clause(statements),
        };
        Ok(attach_trivia(clause, leading, trailing))
    }

    fn parse_try_statement(&mut self) -> ParseResult<Stmt> {
        self.parse_expected(SyntaxKind::TryKeyword)?;
        let block = self.parse_block()?;

        let handler = if self.parse_optional(SyntaxKind::CatchKeyword) {
            let (param, ty) = if self.parse_optional(SyntaxKind::OpenParenToken) {
                if matches!(
                    self.token().kind,
                    SyntaxKind::OpenBraceToken | SyntaxKind::OpenBracketToken
                ) {
                    return Err(self.unsupported("destructuring catch bindings are not supported"));
                }
                let name = self.parse_identifier("a catch binding")?;
                let ty = self.parse_type_annotation()?;
                self.parse_expected(SyntaxKind::CloseParenToken)?;
                (Some(name), ty)
            } else {
                (None, None)
            };
            let body = self.parse_block()?;
            Some(factory::catch_clause(param, ty, body))
        } else {
            None
        };

        let finalizer = if self.parse_optional(SyntaxKind::FinallyKeyword) {
            Some(self.parse_block()?)
        } else {
            None
        };

        if handler.is_none() && finalizer.is_none() {
            return Err(self.error("expected `catch` or `finally`"));
        }
        self.build(factory::try_stmt(block, handler, finalizer))
    }

    fn parse_throw_statement(&mut self) -> ParseResult<Stmt> {
        self.parse_expected(SyntaxKind::ThrowKeyword)?;
        if self.has_line_break_before_token() {
            return Err(self.error("line break not permitted after `throw`"));
        }
        let expr = self.parse_expression()?;
        self.parse_semicolon()?;
        Ok(factory::throw_stmt(expr))
    }

    fn parse_return_statement(&mut self) -> ParseResult<Stmt> {
        self.parse_expected(SyntaxKind::ReturnKeyword)?;
        let expr = if self.is_token(SyntaxKind::SemicolonToken)
            || self.is_token(SyntaxKind::CloseBraceToken)
            || self.is_at_end()
            || self.has_line_break_before_token()
        {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.parse_semicolon()?;
        Ok(factory::return_stmt(expr))
    }

    fn parse_break_or_continue_statement(&mut self) -> ParseResult<Stmt> {
        let keyword = self.next_token();
        let label = if self.is_token(SyntaxKind::Identifier) && !self.has_line_break_before_token()
        {
            let label = self.token().text.clone();
            if !self.labels.contains(&label) {
                return Err(self.error(format!("undefined label `{label}`")));
            }
            self.next_token();
            Some(label)
        } else {
            None
        };
        self.parse_semicolon()?;
        if keyword.kind == SyntaxKind::BreakKeyword {
            Ok(factory::break_stmt(label))
        } else {
            Ok(factory::continue_stmt(label))
        }
    }

    fn parse_labelled_statement(&mut self) -> ParseResult<Stmt> {
        let label = self.token().text.clone();
        if self.labels.contains(&label) {
            return Err(self.error(format!("duplicate label `{label}`")));
        }
        self.next_token();
        self.parse_expected(SyntaxKind::ColonToken)?;
        self.labels.insert(label.clone());
        let body = self.parse_statement();
        self.labels.remove(&label);
        self.build(factory::labelled_stmt(label, body?))
    }
}

