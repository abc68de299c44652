//! Unit tests for the output buffer.

use crate::options::PrintOptions;
use crate::source_writer::SourceWriter;

fn writer() -> SourceWriter {
    SourceWriter::new(&PrintOptions::default())
}

#[test]
fn test_indent_is_written_lazily() {
    let mut w = writer();
    w.write("a {");
    w.increase_indent();
    w.write_line();
    w.write_line();
    w.write("b;");
    w.decrease_indent();
    w.write_line();
    w.write("}");
    assert_eq!(w.into_string(), "a {\n    b;\n}");
}

#[test]
fn test_write_line_at_line_start_is_a_no_op() {
    let mut w = writer();
    w.write_line();
    w.write("x");
    w.write_line();
    w.write_line();
    assert_eq!(w.into_string(), "x\n");
}

#[test]
fn test_write_space_never_doubles_or_leads() {
    let mut w = writer();
    w.write_space();
    w.write("a");
    w.write_space();
    w.write_space();
    w.write("b");
    assert_eq!(w.into_string(), "a b");
}

#[test]
fn test_embedded_newlines_are_indented() {
    let mut w = writer();
    w.increase_indent();
    w.write("/* one\r\ntwo */");
    assert_eq!(w.into_string(), "    /* one\n    two */");
}

#[test]
fn test_blank_line_is_materialized_by_next_text() {
    let mut w = writer();
    w.write("a;");
    w.write_blank_line();
    w.write("b;");
    assert_eq!(w.into_string(), "a;\n\nb;");
}

#[test]
fn test_discarded_blank_line_never_appears() {
    let mut w = writer();
    w.write("a;");
    w.write_blank_line();
    w.discard_blank_line();
    w.write("}");
    assert_eq!(w.into_string(), "a;\n}");
}

#[test]
fn test_no_blank_line_at_start_of_output_or_twice() {
    let mut w = writer();
    w.write_blank_line();
    w.write("a;");
    w.write_blank_line();
    w.write_blank_line();
    w.write("b;");
    assert_eq!(w.into_string(), "a;\n\nb;");
}

#[test]
fn test_custom_new_line_and_indent() {
    let options = PrintOptions {
        new_line: "\r\n".to_string(),
        indent_size: 1,
        indent_char: '\t',
        ..PrintOptions::default()
    };
    let mut w = SourceWriter::new(&options);
    w.write("{");
    w.increase_indent();
    w.write_line();
    w.write("x;");
    w.decrease_indent();
    w.write_line();
    w.write("}");
    assert_eq!(w.into_string(), "{\r\n\tx;\r\n}");
}

#[test]
fn test_take_output_keeps_line_state() {
    let mut w = writer();
    w.increase_indent();
    w.write("a");
    assert_eq!(w.take_output(), "    a");
    assert!(w.is_empty());
    w.write("b");
    assert_eq!(w.len(), 1);
    assert_eq!(w.indent_level(), 1);
    assert!(!w.is_at_line_start());
}

#[test]
fn test_decrease_indent_saturates() {
    let mut w = writer();
    w.decrease_indent();
    assert_eq!(w.indent_level(), 0);
}

#[test]
fn test_cancelled_blank_line_can_be_requested_again() {
    let mut w = writer();
    w.write("a;");
    w.write_blank_line();
    w.cancel_blank_line();
    w.write_blank_line();
    w.write("b;");
    assert_eq!(w.into_string(), "a;\n\nb;");
}
