//! The formatting printer.
//!
//! `Printer` is a single struct whose methods are spread over submodules:
//! - `helpers` - writer delegation, the list routine, names and literals
//! - `comments` - trivia and documentation comment layout
//! - `expressions`, `statements`, `declarations`, `types` - one per node
//!   category
//!
//! Each `print_*` method appends to the printer's buffer; `finish` returns
//! the text. The tree is never validated or re-parsed: whatever shape it has,
//! including every `Paren` node and no others, is what gets printed.

mod comments;
mod declarations;
mod expressions;
mod helpers;
mod statements;
mod types;

use crate::error::EmitError;
use crate::list_format::ListFormat;
use crate::options::PrintOptions;
use crate::source_writer::SourceWriter;
use std::io;
use tracing::debug;
use tsgen_ast::{
    ClassMember, Decl, Expr, HasTrivia, JsDoc, ParameterList, Stmt, TsType, TypeMember,
    TypeParameter,
};

pub struct Printer {
    writer: SourceWriter,
    options: PrintOptions,
}

impl Printer {
    pub fn new(options: PrintOptions) -> Self {
        Printer {
            writer: SourceWriter::new(&options),
            options,
        }
    }

    pub fn options(&self) -> &PrintOptions {
        &self.options
    }

    /// The text printed so far.
    pub fn finish(self) -> String {
        self.writer.into_string()
    }

    // =========================================================================
    // Whole files
    // =========================================================================

    /// Print top-level statements, one per line, each followed by a line
    /// break.
    pub fn print_statements(&mut self, statements: &[Stmt]) {
        debug!(statements = statements.len(), "print_statements");
        self.emit_list(statements, ListFormat::STATEMENT_SEQUENCE, |p, stmt| {
            p.emit_statement_body(stmt)
        });
    }

    /// Print top-level statements to `sink`, writing each statement as soon
    /// as it is formatted. Anything printed before is written first.
    pub fn emit_to(
        &mut self,
        statements: &[Stmt],
        mut sink: impl io::Write,
    ) -> Result<(), EmitError> {
        debug!(statements = statements.len(), "emit_to");
        sink.write_all(self.writer.take_output().as_bytes())?;
        for (i, stmt) in statements.iter().enumerate() {
            let is_last = i + 1 == statements.len();
            self.emit_list_item(
                stmt,
                ListFormat::STATEMENT_SEQUENCE,
                is_last,
                &mut |p: &mut Printer, stmt: &Stmt| p.emit_statement_body(stmt),
            );
            self.write_line();
            sink.write_all(self.writer.take_output().as_bytes())?;
        }
        sink.flush()?;
        Ok(())
    }

    // =========================================================================
    // Single nodes
    // =========================================================================

    /// Print one statement with its comments, ending the line after it.
    pub fn print_statement(&mut self, stmt: &Stmt) {
        self.emit_list_item(
            stmt,
            ListFormat::STATEMENT_SEQUENCE,
            true,
            &mut |p: &mut Printer, stmt: &Stmt| p.emit_statement_body(stmt),
        );
        self.write_line();
    }

    pub fn print_declaration(&mut self, decl: &Decl) {
        self.emit_leading_comment_lines(decl.leading_trivia(), false);
        self.emit_declaration(decl);
        self.emit_trailing_comments(decl.trailing_trivia());
        self.write_line();
    }

    /// Print an expression inline, with any comments it carries.
    pub fn print_expression(&mut self, expr: &Expr) {
        self.emit_expression(expr);
    }

    pub fn print_type(&mut self, ty: &TsType) {
        self.emit_type(ty);
    }

    pub fn print_class_member(&mut self, member: &ClassMember) {
        self.emit_list_item(
            member,
            ListFormat::CLASS_MEMBERS,
            true,
            &mut |p: &mut Printer, member: &ClassMember| p.emit_class_member(member),
        );
        self.write_line();
    }

    /// Print a type member with its `;` terminator.
    pub fn print_type_member(&mut self, member: &TypeMember) {
        self.emit_list_item(
            member,
            ListFormat::TYPE_MEMBERS,
            true,
            &mut |p: &mut Printer, member: &TypeMember| p.emit_type_member(member),
        );
        self.write_line();
    }

    /// `(a: T, b?: U, ...rest: V[])`
    pub fn print_parameters(&mut self, params: &ParameterList) {
        self.emit_parameters(params);
    }

    /// `<T extends C = D>`; nothing for an empty list.
    pub fn print_type_parameters(&mut self, type_params: &[TypeParameter]) {
        self.emit_type_parameters(type_params);
    }

    pub fn print_jsdoc(&mut self, doc: &JsDoc) {
        self.emit_jsdoc(doc);
        self.write_line();
    }
}

/// Format top-level statements into a string.
pub fn print_to_string(statements: &[Stmt], options: PrintOptions) -> String {
    let mut printer = Printer::new(options);
    printer.print_statements(statements);
    printer.finish()
}
