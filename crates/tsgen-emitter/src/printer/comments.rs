//! Comment and documentation comment emission.
//!
//! Leading comments of statements and members sit on their own lines above
//! the node; leading comments of anything else are written inline. A
//! trailing comment follows its node on the same line when the line is still
//! open, and a trailing `//` comment always ends the line.

use super::Printer;
use tsgen_ast::{JsDoc, Trivia};
use tsgen_common::comments::reindent_block_comment;

impl Printer {
    // =========================================================================
    // Trivia
    // =========================================================================

    /// Leading trivia of a statement or member: each comment on its own line.
    pub(super) fn emit_leading_comment_lines(
        &mut self,
        trivia: &[Trivia],
        preserve_blank_lines: bool,
    ) {
        for item in trivia {
            match item {
                Trivia::BlankLine => {
                    if preserve_blank_lines {
                        self.writer.write_blank_line();
                    }
                }
                comment => {
                    self.emit_comment(comment);
                    self.write_line();
                }
            }
        }
    }

    /// Leading trivia of an inline node. Blank lines are dropped.
    pub(super) fn emit_leading_comments_inline(&mut self, trivia: &[Trivia]) {
        for comment in trivia.iter().filter(|t| t.is_comment()) {
            self.emit_comment(comment);
            if matches!(comment, Trivia::LineComment(_)) {
                self.write_line();
            } else {
                self.write_space();
            }
        }
    }

    pub(super) fn emit_trailing_comments(&mut self, trivia: &[Trivia]) {
        for item in trivia {
            match item {
                Trivia::BlankLine => self.writer.write_blank_line(),
                comment if self.writer.is_at_line_start() => {
                    self.emit_comment(comment);
                    self.write_line();
                }
                comment => {
                    self.write_space();
                    self.emit_comment(comment);
                    if matches!(comment, Trivia::LineComment(_)) {
                        self.write_line();
                    }
                }
            }
        }
    }

    /// An empty braced body holding only comments:
    ///
    /// ```text
    /// {
    ///     // nothing yet
    /// }
    /// ```
    pub(super) fn emit_comment_only_body(&mut self, trivia: &[Trivia]) {
        self.write("{");
        self.write_line();
        self.increase_indent();
        self.emit_leading_comment_lines(trivia, false);
        self.decrease_indent();
        self.write_line();
        self.write("}");
    }

    fn emit_comment(&mut self, comment: &Trivia) {
        match comment {
            Trivia::LineComment(text) => {
                self.write("//");
                self.write(text);
            }
            Trivia::BlockComment(text) => {
                let comment = format!("/*{text}*/");
                self.write(&reindent_block_comment(&comment, ""));
            }
            Trivia::JsDoc(doc) => self.emit_jsdoc(doc),
            Trivia::BlankLine => {}
        }
    }

    // =========================================================================
    // Documentation comments
    // =========================================================================

    /// Write a documentation comment, without a line break after it.
    pub(super) fn emit_jsdoc(&mut self, doc: &JsDoc) {
        let lines = jsdoc_lines(doc, self.options.emit_synthetic_typeparam_tags);

        if self.options.collapse_single_line_comments && lines.len() <= 1 {
            match lines.first() {
                Some(line) => {
                    self.write("/** ");
                    self.write(line);
                    self.write(" */");
                }
                None => self.write("/** */"),
            }
            return;
        }

        self.write("/**");
        for line in &lines {
            self.write_line();
            if line.is_empty() {
                self.write(" *");
            } else {
                self.write(" * ");
                self.write(line);
            }
        }
        self.write_line();
        self.write(" */");
    }
}

/// The content lines of a documentation comment, without the ` * ` leader.
///
/// A tag name prefixes only the first line of its block; continuation lines
/// carry the content alone. Blocks with no content were never recorded, so
/// every line here belongs to a non-empty block.
pub(crate) fn jsdoc_lines(doc: &JsDoc, include_synthetic: bool) -> Vec<String> {
    let mut lines = Vec::new();
    for block in doc.blocks(include_synthetic) {
        let mut content = block.content.split('\n');
        let first = content.next().unwrap_or_default();
        let first = match block.tag {
            Some(tag) if first.is_empty() => format!("@{tag}"),
            Some(tag) => format!("@{tag} {first}"),
            None => first.to_string(),
        };
        lines.push(first);
        lines.extend(content.map(str::to_string));
    }
    lines
        .into_iter()
        .map(|line| line.trim_end().replace("*/", "*\\/"))
        .collect()
}
