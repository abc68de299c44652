use clap::Parser;
use std::fs;
use tempfile::TempDir;

use tsgen_emitter::PrintOptions;
use tsgen_parser::ParseError;

use super::args::{CliArgs, OutputMode};
use super::driver::{load_config, render, resolve_options, run};

fn args(list: &[&str]) -> CliArgs {
    let mut full = vec!["tsgen"];
    full.extend_from_slice(list);
    CliArgs::try_parse_from(full).expect("args should parse")
}

#[test]
fn resolve_options_defaults() {
    let options = resolve_options(&args(&[])).expect("options");
    assert_eq!(options, PrintOptions::default());
}

#[test]
fn flags_override_config_file() {
    let temp = TempDir::new().expect("temp dir");
    let config = temp.path().join("tsgen.json");
    fs::write(&config, r#"{ "indentSize": 8, "newLine": "\r\n" }"#).expect("write config");

    let from_file = load_config(&config).expect("config should load");
    assert_eq!(from_file.indent_size, 8);
    assert_eq!(from_file.new_line, "\r\n");

    let config_arg = config.display().to_string();
    let options = resolve_options(&args(&[
        "--config",
        &config_arg,
        "--indent-size",
        "2",
        "--synthetic-typeparams",
    ]))
    .expect("options");
    assert_eq!(options.indent_size, 2);
    assert_eq!(options.new_line, "\r\n");
    assert!(options.emit_synthetic_typeparam_tags);
    assert!(options.collapse_single_line_comments);
}

#[test]
fn bad_config_is_reported() {
    let temp = TempDir::new().expect("temp dir");
    let config = temp.path().join("broken.json");
    fs::write(&config, "{ indentSize: ").expect("write config");

    let err = load_config(&config).expect_err("invalid json");
    assert!(err.to_string().starts_with("failed to parse config"));

    let missing = temp.path().join("missing.json");
    let err = load_config(&missing).expect_err("missing file");
    assert!(err.to_string().starts_with("failed to read config"));
}

#[test]
fn render_formats_source() {
    let output = render(
        OutputMode::Format,
        "a.ts",
        "let x=1;\n\nfunction f(){return x}",
        PrintOptions::default(),
    )
    .expect("render");
    assert_eq!(output, "let x = 1;\n\nfunction f() {\n    return x;\n}\n");
}

#[test]
fn render_dumps_tree() {
    let ast = render(OutputMode::DumpAst, "a.ts", "x;", PrintOptions::default())
        .expect("dump ast");
    assert!(ast.ends_with('\n'));
    assert!(!ast.trim().is_empty());

    let json = render(OutputMode::DumpJson, "a.ts", "x;", PrintOptions::default())
        .expect("dump json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value.as_array().map(Vec::len), Some(1));
}

#[test]
fn render_surfaces_parse_error() {
    let err = render(OutputMode::Format, "a.ts", "let x = ;", PrintOptions::default())
        .expect_err("syntax error");
    let parse_error = err.downcast_ref::<ParseError>().expect("parse error");
    assert_eq!(parse_error.location.position.line, 1);
    assert_eq!(parse_error.location.position.column, 9);
}

#[test]
fn run_reads_file_and_keeps_source() {
    let temp = TempDir::new().expect("temp dir");
    let file = temp.path().join("input.ts");
    fs::write(&file, "const a = 1;").expect("write source");

    let file_arg = file.display().to_string();
    let (source, output) = run(&args(&["--crlf", &file_arg])).expect("run");
    assert_eq!(source, "const a = 1;");
    assert_eq!(output.expect("formatted"), "const a = 1;\r\n");
}

#[test]
fn run_fails_on_missing_file() {
    let temp = TempDir::new().expect("temp dir");
    let file = temp.path().join("nope.ts").display().to_string();
    let err = run(&args(&[&file])).expect_err("missing input");
    assert!(err.to_string().starts_with("failed to read"));
}
