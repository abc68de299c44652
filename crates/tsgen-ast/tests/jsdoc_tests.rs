//! Tests for the structured documentation comment model.

use crate::{JsDoc, JsDocBlock};

fn tags(doc: &JsDoc, include_synthetic: bool) -> Vec<Option<&'static str>> {
    doc.blocks(include_synthetic).iter().map(|b| b.tag).collect()
}

#[test]
fn test_blocks_follow_fixed_order() {
    // Entries added in reverse emission order.
    let doc = JsDoc::builder()
        .see("Other")
        .example("f(1)")
        .throws("Error", "when empty")
        .returns("the result")
        .param("a", "first")
        .type_param("T", "element type")
        .package_private(true)
        .copyright("ACME")
        .file("entry point")
        .summary("short")
        .description("Long text.")
        .build();

    assert_eq!(
        tags(&doc, false),
        vec![
            None,
            Some("summary"),
            Some("file"),
            Some("copyright"),
            Some("package"),
            Some("typeparam"),
            Some("param"),
            Some("returns"),
            Some("throws"),
            Some("example"),
            Some("see"),
        ]
    );
}

#[test]
fn test_blank_text_is_absent() {
    let doc = JsDoc::builder()
        .description("   ")
        .returns("")
        .example("\n")
        .throws("", " ")
        .param("", "orphan")
        .build();

    assert!(doc.is_empty());
    assert_eq!(doc, JsDoc::default());
}

#[test]
fn test_param_without_description_keeps_name() {
    let doc = JsDoc::builder().param("x", "").build();
    assert_eq!(
        doc.blocks(false),
        vec![JsDocBlock {
            tag: Some("param"),
            content: "x".into()
        }]
    );
}

#[test]
fn test_throws_content_formats_type_in_braces() {
    let doc = JsDoc::builder()
        .throws("RangeError", "if negative")
        .throws("TypeError", "")
        .throws("", "sometimes")
        .build();
    let contents: Vec<String> = doc.blocks(false).into_iter().map(|b| b.content).collect();
    assert_eq!(contents, vec!["{RangeError} if negative", "{TypeError}", "sometimes"]);
}

#[test]
fn test_synthetic_type_params_are_optional() {
    let doc = JsDoc::builder()
        .type_param("T", "documented")
        .synthetic_type_param("U")
        .build();

    assert_eq!(doc.blocks(false).len(), 1);
    let with_synthetic = doc.blocks(true);
    assert_eq!(with_synthetic.len(), 2);
    assert_eq!(with_synthetic[1].content, "U");
}

#[test]
fn test_parse_description_and_tags() {
    let body = "\n * Adds two numbers.\n *\n * More detail.\n * @param a the first\n * @param b\n * @return the sum\n ";
    let doc = JsDoc::parse(body);

    assert_eq!(
        doc.description.as_deref(),
        Some("Adds two numbers.\n\nMore detail.")
    );
    assert_eq!(doc.params.len(), 2);
    assert_eq!(doc.params[0].name, "a");
    assert_eq!(doc.params[0].description.as_deref(), Some("the first"));
    assert_eq!(doc.params[1].description, None);
    assert_eq!(doc.returns.as_deref(), Some("the sum"));
}

#[test]
fn test_parse_tag_aliases() {
    let doc = JsDoc::parse(
        "\n * @fileoverview Entry.\n * @template T item\n * @exception {Error} bad\n * @package\n",
    );
    assert_eq!(doc.file.as_deref(), Some("Entry."));
    assert_eq!(doc.type_params[0].name, "T");
    assert_eq!(doc.throws[0].ty.as_deref(), Some("Error"));
    assert_eq!(doc.throws[0].description.as_deref(), Some("bad"));
    assert!(doc.package_private);
}

#[test]
fn test_parse_keeps_unknown_tags_in_description() {
    let doc = JsDoc::parse(" Text.\n * @deprecated use g\n");
    assert_eq!(doc.description.as_deref(), Some("Text.\n@deprecated use g"));
}

#[test]
fn test_parse_multiline_example() {
    let doc = JsDoc::parse("\n * @example\n * const x = f();\n *   x.go();\n");
    assert_eq!(doc.examples, vec!["\nconst x = f();\n  x.go();"]);
}

#[test]
fn test_single_line_doc() {
    let doc = JsDoc::parse(" Hello ");
    assert_eq!(doc.description.as_deref(), Some("Hello"));
    assert_eq!(tags(&doc, true), vec![None]);
}

#[test]
fn test_blank_fields_set_directly_are_absent() {
    use crate::{JsDocParam, JsDocThrows};

    let doc = JsDoc {
        description: Some("Desc".into()),
        summary: Some("   ".into()),
        returns: Some("\n".into()),
        params: vec![JsDocParam {
            name: "a".into(),
            description: Some(" ".into()),
        }],
        throws: vec![JsDocThrows {
            ty: Some(" ".into()),
            description: None,
        }],
        examples: vec![String::new()],
        see: vec!["  ".into()],
        ..JsDoc::default()
    };

    assert_eq!(
        doc.blocks(true),
        vec![
            JsDocBlock {
                tag: None,
                content: "Desc".into(),
            },
            JsDocBlock {
                tag: Some("param"),
                content: "a".into(),
            },
        ]
    );

    let blank = JsDoc {
        summary: Some("  ".into()),
        ..JsDoc::default()
    };
    assert!(blank.is_empty());
}
