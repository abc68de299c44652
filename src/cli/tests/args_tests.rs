use clap::Parser;

use super::args::{CliArgs, IndentChar, OutputMode};

#[test]
fn parses_defaults() {
    let args = CliArgs::try_parse_from(["tsgen"]).expect("default args should parse");

    assert!(args.file.is_none());
    assert!(args.config.is_none());
    assert_eq!(args.indent_size, None);
    assert_eq!(args.indent_char, None);
    assert!(!args.crlf);
    assert!(!args.no_collapse_comments);
    assert!(!args.synthetic_typeparams);
    assert_eq!(args.output_mode(), OutputMode::Format);
    assert_eq!(args.source_name(), "<stdin>");
}

#[test]
fn parses_layout_flags() {
    let args = CliArgs::try_parse_from([
        "tsgen",
        "--indent-size",
        "2",
        "--indent-char",
        "tab",
        "--crlf",
        "--no-collapse-comments",
        "--synthetic-typeparams",
        "src/index.ts",
    ])
    .expect("flagged args should parse");

    assert_eq!(args.indent_size, Some(2));
    assert_eq!(args.indent_char, Some(IndentChar::Tab));
    assert_eq!(IndentChar::Tab.as_char(), '\t');
    assert!(args.crlf);
    assert!(args.no_collapse_comments);
    assert!(args.synthetic_typeparams);
    assert_eq!(args.source_name(), "src/index.ts");
}

#[test]
fn selects_dump_modes() {
    let args = CliArgs::try_parse_from(["tsgen", "--dump-ast"]).expect("dump-ast");
    assert_eq!(args.output_mode(), OutputMode::DumpAst);

    let args = CliArgs::try_parse_from(["tsgen", "--dump-json"]).expect("dump-json");
    assert_eq!(args.output_mode(), OutputMode::DumpJson);
}

#[test]
fn rejects_conflicting_dumps_and_bad_values() {
    assert!(CliArgs::try_parse_from(["tsgen", "--dump-ast", "--dump-json"]).is_err());
    assert!(CliArgs::try_parse_from(["tsgen", "--indent-char", "dot"]).is_err());
    assert!(CliArgs::try_parse_from(["tsgen", "--indent-size", "wide"]).is_err());
}
