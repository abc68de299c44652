//! End-to-end tests for the tsgen pipeline
//!
//! These tests drive the public facade and the CLI driver:
//! - Parsing and printing through `format_source`
//! - Option resolution from a config file plus flags
//! - Error reporting for syntax and unsupported input

use clap::Parser;
use std::fs;
use tempfile::TempDir;

use tsgen::cli::args::CliArgs;
use tsgen::cli::driver;
use tsgen::cli::reporter::Reporter;
use tsgen::emitter::PrintOptions;
use tsgen::format_source;
use tsgen::parser::ParseError;

const MESSY: &str = r#"
/** Shapes we know how to draw.
 * @param kind which one */
export   function draw(kind:string,size=1):void{
  // dispatch
  if(kind==='square'){square(size);}else{circle(size);}
}
"#;

const FORMATTED: &str = concat!(
    "/**\n",
    " * Shapes we know how to draw.\n",
    " * @param kind which one\n",
    " */\n",
    "export function draw(kind: string, size = 1): void {\n",
    "    // dispatch\n",
    "    if (kind === \"square\") {\n",
    "        square(size);\n",
    "    } else {\n",
    "        circle(size);\n",
    "    }\n",
    "}\n",
);

#[test]
fn test_format_source_normalizes_layout() {
    let output = format_source("draw.ts", MESSY, PrintOptions::default()).expect("format");
    assert_eq!(output, FORMATTED);
}

#[test]
fn test_formatted_output_is_stable() {
    let output = format_source("draw.ts", FORMATTED, PrintOptions::default()).expect("format");
    assert_eq!(output, FORMATTED);
}

#[test]
fn test_driver_with_config_file() {
    let temp = TempDir::new().expect("temp dir");
    let input = temp.path().join("draw.ts");
    let config = temp.path().join("tsgen.json");
    fs::write(&input, MESSY).expect("write input");
    fs::write(&config, r#"{ "indentSize": 2, "collapseSingleLineComments": false }"#)
        .expect("write config");

    let input_arg = input.display().to_string();
    let config_arg = config.display().to_string();
    let args = CliArgs::try_parse_from(["tsgen", "--config", &config_arg, &input_arg])
        .expect("args");

    let (_, output) = driver::run(&args).expect("run");
    let output = output.expect("formatted");
    assert!(output.contains("\n  if (kind === \"square\") {\n    square(size);\n"));
}

#[test]
fn test_driver_reports_unsupported_input() {
    let temp = TempDir::new().expect("temp dir");
    let input = temp.path().join("gen.ts");
    fs::write(&input, "function* numbers() {}\n").expect("write input");

    let input_arg = input.display().to_string();
    let args = CliArgs::try_parse_from(["tsgen", &input_arg]).expect("args");
    let (source, output) = driver::run(&args).expect("run");

    let err = output.expect_err("generators are unsupported");
    let parse_error = err.downcast_ref::<ParseError>().expect("parse error");
    assert!(parse_error.is_unsupported());

    let rendered = Reporter::new(false).render(parse_error, &source);
    assert!(rendered.starts_with(&format!("{input_arg}:1:")));
    assert!(rendered.contains("unsupported"));
    assert!(rendered.contains("function* numbers() {}"));
}
