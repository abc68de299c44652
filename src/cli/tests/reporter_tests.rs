use tsgen_parser::parse_source;

use super::reporter::Reporter;

#[test]
fn renders_syntax_error_with_snippet() {
    let source = "a();\nlet x = ;\n";
    let error = parse_source("main.ts", source).expect_err("syntax error");
    let output = Reporter::new(false).render(&error, source);

    assert_eq!(
        output,
        concat!(
            "main.ts:2:9 - error: expected an expression (found `;`)\n",
            "    2   let x = ;\n",
            "                ^",
        )
    );
}

#[test]
fn marks_unsupported_input() {
    let source = "function* g() {}";
    let error = parse_source("gen.ts", source).expect_err("generator");
    let output = Reporter::new(false).render(&error, source);

    assert!(output.starts_with("gen.ts:1:"));
    assert!(output.contains(" - unsupported: "));
}

#[test]
fn omits_snippet_past_end_of_source() {
    let error = parse_source("a.ts", "let x = ;").expect_err("syntax error");
    let output = Reporter::new(false).render(&error, "");
    assert_eq!(output, "a.ts:1:9 - error: expected an expression (found `;`)");
}
