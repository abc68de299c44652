use super::Printer;
use crate::list_format::ListFormat;
use tsgen_ast::stmt::{
    DoWhileStmt, ForStmt, IfStmt, SwitchClause, SwitchStmt, TryStmt, VariableStmt,
};
use tsgen_ast::{Block, ForInit, HasTrivia, Stmt, Trivia};

impl Printer {
    // =========================================================================
    // Statements
    // =========================================================================

    /// A statement without its own comments; list items get those from the
    /// list routine.
    pub(super) fn emit_statement_body(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Block(block) => self.emit_block_statements(block),
            Stmt::Expression(stmt) => {
                self.emit_expression(&stmt.expr);
                self.write_semicolon();
            }
            Stmt::Variable(stmt) => {
                self.emit_modifiers(stmt.modifiers);
                self.emit_variable_declaration_list(stmt);
                self.write_semicolon();
            }
            Stmt::If(stmt) => self.emit_if_statement(stmt),
            Stmt::For(stmt) => self.emit_for_statement(stmt),
            Stmt::ForIn(stmt) => {
                self.write("for (");
                self.emit_for_init(&stmt.left);
                self.write(" in ");
                self.emit_expression(&stmt.right);
                self.write(")");
                self.emit_embedded_statement(&stmt.body);
            }
            Stmt::ForOf(stmt) => {
                self.write("for (");
                self.emit_for_init(&stmt.left);
                self.write(" of ");
                self.emit_expression(&stmt.right);
                self.write(")");
                self.emit_embedded_statement(&stmt.body);
            }
            Stmt::While(stmt) => {
                self.write("while (");
                self.emit_expression(&stmt.test);
                self.write(")");
                self.emit_embedded_statement(&stmt.body);
            }
            Stmt::DoWhile(stmt) => self.emit_do_while_statement(stmt),
            Stmt::Switch(stmt) => self.emit_switch_statement(stmt),
            Stmt::Try(stmt) => self.emit_try_statement(stmt),
            Stmt::Throw(stmt) => {
                self.write("throw ");
                self.emit_expression(&stmt.expr);
                self.write_semicolon();
            }
            Stmt::Return(stmt) => {
                self.write("return");
                if let Some(expr) = &stmt.expr {
                    self.write_space();
                    self.emit_expression(expr);
                }
                self.write_semicolon();
            }
            Stmt::Break(stmt) => self.emit_jump("break", stmt.label.as_deref()),
            Stmt::Continue(stmt) => self.emit_jump("continue", stmt.label.as_deref()),
            Stmt::Labelled(stmt) => {
                self.write(&stmt.label);
                self.write(": ");
                self.emit_statement_inline(&stmt.body);
            }
            Stmt::Empty(_) => self.write_semicolon(),
            Stmt::Declaration(decl) => self.emit_declaration(decl),
        }
    }

    /// A statement that continues the current line, with its comments.
    fn emit_statement_inline(&mut self, stmt: &Stmt) {
        self.emit_leading_comments_inline(stmt.leading_trivia());
        self.emit_statement_body(stmt);
        self.emit_trailing_comments(stmt.trailing_trivia());
    }

    /// The body of `if`, `else`, `for`, `while` and `do`. A block or a bare
    /// `;` stays on the header line; anything else goes on its own indented
    /// line. Returns whether the body stayed on the header line.
    pub(super) fn emit_embedded_statement(&mut self, stmt: &Stmt) -> bool {
        match stmt {
            Stmt::Block(block) => {
                self.write_space();
                self.emit_leading_comments_inline(block.leading_trivia());
                self.emit_block(block);
                if !block.statements.is_empty() {
                    self.emit_trailing_comments(block.trailing_trivia());
                }
                true
            }
            Stmt::Empty(empty) if empty.trivia.is_empty() => {
                self.write_semicolon();
                true
            }
            _ => {
                self.increase_indent();
                self.write_line();
                self.emit_leading_comment_lines(stmt.leading_trivia(), false);
                self.emit_statement_body(stmt);
                self.emit_trailing_comments(stmt.trailing_trivia());
                self.decrease_indent();
                false
            }
        }
    }

    // =========================================================================
    // Blocks
    // =========================================================================

    /// A function, method or `try` body. Comments of an empty body are kept
    /// inside the braces.
    pub(super) fn emit_block(&mut self, block: &Block) {
        let dangling = block.trailing_trivia();
        if block.statements.is_empty() && dangling.iter().any(Trivia::is_comment) {
            self.emit_comment_only_body(dangling);
        } else {
            self.emit_block_statements(block);
        }
    }

    fn emit_block_statements(&mut self, block: &Block) {
        self.emit_list(&block.statements, ListFormat::BLOCK_STATEMENTS, |p, stmt| {
            p.emit_statement_body(stmt)
        });
    }

    // =========================================================================
    // Variables
    // =========================================================================

    /// `const a: T = 1, b` without modifiers or terminator.
    pub(super) fn emit_variable_declaration_list(&mut self, stmt: &VariableStmt) {
        self.write(stmt.kind.as_str());
        self.write_space();
        self.emit_list(&stmt.declarations, ListFormat::VARIABLE_DECLARATORS, |p, declarator| {
            p.write(&declarator.name);
            p.emit_type_annotation(declarator.ty.as_ref());
            if let Some(init) = &declarator.init {
                p.write(" = ");
                p.emit_expression(init);
            }
        });
    }

    // =========================================================================
    // Control flow
    // =========================================================================

    fn emit_if_statement(&mut self, stmt: &IfStmt) {
        self.write("if (");
        self.emit_expression(&stmt.test);
        self.write(")");
        let same_line = self.emit_embedded_statement(&stmt.consequent);

        let Some(alternate) = &stmt.alternate else {
            return;
        };
        if same_line {
            self.write_space();
        } else {
            self.write_line();
        }
        self.write("else");
        if let Stmt::If(_) = alternate {
            self.write_space();
            self.emit_statement_inline(alternate);
        } else {
            self.emit_embedded_statement(alternate);
        }
    }

    fn emit_for_statement(&mut self, stmt: &ForStmt) {
        self.write("for (");
        if let Some(init) = &stmt.init {
            self.emit_for_init(init);
        }
        self.write(";");
        if let Some(test) = &stmt.test {
            self.write_space();
            self.emit_expression(test);
        }
        self.write(";");
        if let Some(update) = &stmt.update {
            self.write_space();
            self.emit_expression(update);
        }
        self.write(")");
        self.emit_embedded_statement(&stmt.body);
    }

    fn emit_for_init(&mut self, init: &ForInit) {
        match init {
            ForInit::Variable(variable) => self.emit_variable_declaration_list(variable),
            ForInit::Expression(expr) => self.emit_expression(expr),
        }
    }

    fn emit_do_while_statement(&mut self, stmt: &DoWhileStmt) {
        self.write("do");
        if self.emit_embedded_statement(&stmt.body) {
            self.write_space();
        } else {
            self.write_line();
        }
        self.write("while (");
        self.emit_expression(&stmt.test);
        self.write(")");
        self.write_semicolon();
    }

    fn emit_jump(&mut self, keyword: &str, label: Option<&str>) {
        self.write(keyword);
        if let Some(label) = label {
            self.write_space();
            self.write(label);
        }
        self.write_semicolon();
    }

    // =========================================================================
    // Switch
    // =========================================================================

    fn emit_switch_statement(&mut self, stmt: &SwitchStmt) {
        self.write("switch (");
        self.emit_expression(&stmt.discriminant);
        self.write(") ");
        // One blank line after every clause that has statements, none after
        // a clause that falls through.
        self.emit_list_separated(
            &stmt.clauses,
            ListFormat::SWITCH_CLAUSES,
            |previous, _| !previous.statements.is_empty(),
            |p, clause| p.emit_switch_clause(clause),
        );
    }

    fn emit_switch_clause(&mut self, clause: &SwitchClause) {
        match &clause.test {
            Some(test) => {
                self.write("case ");
                self.emit_expression(test);
                self.write(":");
            }
            None => self.write("default:"),
        }
        if clause.statements.is_empty() {
            return;
        }
        self.increase_indent();
        self.emit_list(&clause.statements, ListFormat::STATEMENT_SEQUENCE, |p, stmt| {
            p.emit_statement_body(stmt)
        });
        self.decrease_indent();
    }

    // =========================================================================
    // Try
    // =========================================================================

    fn emit_try_statement(&mut self, stmt: &TryStmt) {
        self.write("try ");
        self.emit_block(&stmt.block);
        if let Some(handler) = &stmt.handler {
            self.write(" catch ");
            if let Some(param) = &handler.param {
                self.write("(");
                self.write(param);
                self.emit_type_annotation(handler.ty.as_ref());
                self.write(") ");
            }
            self.emit_block(&handler.body);
        }
        if let Some(finalizer) = &stmt.finalizer {
            self.write(" finally ");
            self.emit_block(finalizer);
        }
    }
}
