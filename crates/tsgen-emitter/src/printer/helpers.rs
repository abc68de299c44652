use super::Printer;
use crate::list_format::ListFormat;
use tsgen_ast::decl::{EnumMember, ImportSpecifier};
use tsgen_ast::stmt::{SwitchClause, VariableDeclarator};
use tsgen_ast::{
    ClassMember, Expr, HasTrivia, LiteralValue, Modifiers, NodeTrivia, ObjectProperty, Parameter,
    PropertyName, Stmt, TsType, TypeMember, TypeParameter,
};

// =============================================================================
// List items
// =============================================================================

static NO_TRIVIA: NodeTrivia = NodeTrivia::EMPTY;

/// Anything that can be an item of a printed list.
pub(super) trait ListItem {
    fn list_trivia(&self) -> &NodeTrivia {
        &NO_TRIVIA
    }
}

macro_rules! list_items_with_trivia {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ListItem for $ty {
                fn list_trivia(&self) -> &NodeTrivia {
                    self.trivia()
                }
            }
        )*
    };
}

list_items_with_trivia!(
    Stmt,
    ClassMember,
    TypeMember,
    EnumMember,
    SwitchClause,
    ObjectProperty,
    Expr,
    TsType,
    Parameter,
);

impl ListItem for TypeParameter {}
impl ListItem for ImportSpecifier {}
impl ListItem for VariableDeclarator {}

impl<T: ListItem> ListItem for &T {
    fn list_trivia(&self) -> &NodeTrivia {
        (**self).list_trivia()
    }
}

impl Printer {
    // =========================================================================
    // Output Helpers (delegate to SourceWriter)
    // pub(super) for access from the node category submodules
    // =========================================================================

    pub(super) fn write(&mut self, text: &str) {
        self.writer.write(text);
    }

    pub(super) fn write_space(&mut self) {
        self.writer.write_space();
    }

    pub(super) fn write_line(&mut self) {
        self.writer.write_line();
    }

    pub(super) fn write_semicolon(&mut self) {
        self.writer.write(";");
    }

    pub(super) fn increase_indent(&mut self) {
        self.writer.increase_indent();
    }

    pub(super) fn decrease_indent(&mut self) {
        self.writer.decrease_indent();
    }

    // =========================================================================
    // Lists
    // =========================================================================

    pub(super) fn emit_list<T: ListItem>(
        &mut self,
        items: &[T],
        format: ListFormat,
        emit_item: impl FnMut(&mut Printer, &T),
    ) {
        self.emit_list_separated(items, format, |_, _| false, emit_item);
    }

    /// Lay out `items` as `format` describes. In a multi-line list,
    /// `blank_line_between(previous, next)` inserts an empty line between two
    /// items.
    ///
    /// Each item's leading comments are written before it and its trailing
    /// comments after its delimiter, so `a: 1, // note` keeps the comma
    /// before the comment.
    pub(super) fn emit_list_separated<T: ListItem>(
        &mut self,
        items: &[T],
        format: ListFormat,
        blank_line_between: impl Fn(&T, &T) -> bool,
        mut emit_item: impl FnMut(&mut Printer, &T),
    ) {
        if items.is_empty() {
            self.write(format.empty);
            return;
        }

        let indented = format.multi_line && !format.prefix.is_empty();
        self.write(format.prefix);
        if format.multi_line {
            self.write_line();
            self.writer.discard_blank_line();
        }
        if indented {
            self.increase_indent();
        }

        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                if format.multi_line {
                    self.write_line();
                    if blank_line_between(&items[i - 1], item) {
                        self.writer.write_blank_line();
                    }
                } else {
                    self.write_space();
                }
            }
            self.emit_list_item(item, format, i + 1 == items.len(), &mut emit_item);
        }

        if format.multi_line {
            self.write_line();
            self.writer.cancel_blank_line();
        }
        if indented {
            self.decrease_indent();
        }
        if self.writer.is_at_line_start() {
            self.write(format.suffix.trim_start());
        } else {
            self.write(format.suffix);
        }
    }

    /// One list item: comments, the item itself and its delimiter.
    pub(super) fn emit_list_item<T: ListItem>(
        &mut self,
        item: &T,
        format: ListFormat,
        is_last: bool,
        emit_item: &mut impl FnMut(&mut Printer, &T),
    ) {
        let trivia = item.list_trivia();
        if format.multi_line {
            self.emit_leading_comment_lines(&trivia.leading, format.preserve_blank_lines);
        } else {
            self.emit_leading_comments_inline(&trivia.leading);
        }
        emit_item(self, item);
        if !is_last || format.trailing_delimiter {
            self.write(format.delimiter);
        }
        self.emit_trailing_comments(&trivia.trailing);
    }

    // =========================================================================
    // Modifiers, names and literals
    // =========================================================================

    /// Modifier keywords in canonical order, each followed by a space.
    pub(super) fn emit_modifiers(&mut self, modifiers: Modifiers) {
        for keyword in modifiers.keywords() {
            self.write(keyword);
            self.write_space();
        }
    }

    pub(super) fn emit_property_name(&mut self, name: &PropertyName) {
        match name {
            PropertyName::Identifier(text) | PropertyName::Number(text) => self.write(text),
            PropertyName::String(text) => self.write(&quote_string(text)),
            PropertyName::Computed(expr) => {
                self.write("[");
                self.emit_expression(expr);
                self.write("]");
            }
        }
    }

    pub(super) fn emit_literal_value(&mut self, value: &LiteralValue) {
        match value {
            LiteralValue::String(text) => self.write(&quote_string(text)),
            LiteralValue::Number(text) => self.write(text),
            LiteralValue::Boolean(true) => self.write("true"),
            LiteralValue::Boolean(false) => self.write("false"),
            LiteralValue::Null => self.write("null"),
        }
    }

    /// `: T` when a type annotation is present.
    pub(super) fn emit_type_annotation(&mut self, ty: Option<&TsType>) {
        if let Some(ty) = ty {
            self.write(": ");
            self.emit_type(ty);
        }
    }
}

/// Quote `text` as a double-quoted string literal.
pub(crate) fn quote_string(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for ch in text.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            '\u{8}' => quoted.push_str("\\b"),
            '\u{c}' => quoted.push_str("\\f"),
            '\u{b}' => quoted.push_str("\\v"),
            '\0' => quoted.push_str("\\x00"),
            '\u{2028}' | '\u{2029}' => quoted.push_str(&format!("\\u{:04X}", ch as u32)),
            ch if ch.is_control() => quoted.push_str(&format!("\\x{:02X}", ch as u32)),
            ch => quoted.push(ch),
        }
    }
    quoted.push('"');
    quoted
}
