//! Text sink with indentation tracking.
//!
//! Indentation is a level counter; the indent text is written lazily, when
//! the first non-empty text of a line arrives, so a line that is never
//! written to never carries trailing whitespace.
//!
//! Blank lines are also lazy. `write_blank_line` only records that one is
//! wanted; it is materialized when the next text is written, and dropped if a
//! list closes first. This keeps blank lines from appearing directly after
//! an opening brace or before a closing one.

use crate::options::PrintOptions;

pub struct SourceWriter {
    output: String,
    indent_unit: String,
    new_line: String,
    indent: u32,
    line_start: bool,
    /// Cleared at the start of output and after every opening list
    /// delimiter; set again by any written text.
    blank_line_allowed: bool,
    pending_blank_line: bool,
}

impl SourceWriter {
    pub fn new(options: &PrintOptions) -> Self {
        SourceWriter {
            output: String::new(),
            indent_unit: options.indent_unit(),
            new_line: options.new_line.clone(),
            indent: 0,
            line_start: true,
            blank_line_allowed: false,
            pending_blank_line: false,
        }
    }

    /// Write text. Embedded `\n` (optionally preceded by `\r`) start new
    /// lines at the current indentation.
    pub fn write(&mut self, text: &str) {
        for (i, segment) in text.split('\n').enumerate() {
            if i > 0 {
                self.raw_new_line();
            }
            self.write_segment(segment.strip_suffix('\r').unwrap_or(segment));
        }
    }

    /// Write a single space, unless at a line start or after another space.
    pub fn write_space(&mut self) {
        if !self.line_start && !self.output.ends_with(' ') {
            self.output.push(' ');
        }
    }

    /// End the current line. Does nothing at a line start.
    pub fn write_line(&mut self) {
        if !self.line_start {
            self.raw_new_line();
        }
    }

    /// End the current line and request one empty line before the next text.
    pub fn write_blank_line(&mut self) {
        self.write_line();
        if self.blank_line_allowed {
            self.pending_blank_line = true;
            self.blank_line_allowed = false;
        }
    }

    /// Drop a requested blank line and refuse new ones until text is written.
    pub fn discard_blank_line(&mut self) {
        self.pending_blank_line = false;
        self.blank_line_allowed = false;
    }

    /// Drop a requested blank line; a later request may still add one.
    pub fn cancel_blank_line(&mut self) {
        if self.pending_blank_line {
            self.pending_blank_line = false;
            self.blank_line_allowed = true;
        }
    }

    pub fn increase_indent(&mut self) {
        self.indent += 1;
    }

    pub fn decrease_indent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    pub fn indent_level(&self) -> u32 {
        self.indent
    }

    pub fn is_at_line_start(&self) -> bool {
        self.line_start
    }

    /// Length of the text not yet taken.
    pub fn len(&self) -> usize {
        self.output.len()
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    /// Take the text written so far, keeping the line and indent state.
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }

    pub fn into_string(self) -> String {
        self.output
    }

    fn write_segment(&mut self, segment: &str) {
        if segment.is_empty() {
            return;
        }
        if self.pending_blank_line {
            self.output.push_str(&self.new_line);
            self.pending_blank_line = false;
        }
        if self.line_start {
            for _ in 0..self.indent {
                self.output.push_str(&self.indent_unit);
            }
            self.line_start = false;
        }
        self.output.push_str(segment);
        self.blank_line_allowed = true;
    }

    fn raw_new_line(&mut self) {
        self.output.push_str(&self.new_line);
        self.line_start = true;
    }
}
