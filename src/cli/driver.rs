//! The format pipeline behind the `tsgen` binary.
//!
//! Reading input and resolving options is fallible in the usual I/O ways;
//! a parse failure travels as a [`ParseError`] inside the `anyhow::Error` so
//! the binary can downcast it and render it with the source text.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info_span};

use tsgen_ast::display_statements;
use tsgen_emitter::{PrintOptions, print_to_string};
use tsgen_parser::parse_source;

use super::args::{CliArgs, OutputMode};

/// Load printer options from `--config` (if any) and apply flag overrides.
pub fn resolve_options(args: &CliArgs) -> Result<PrintOptions> {
    let mut options = match &args.config {
        Some(path) => load_config(path)?,
        None => PrintOptions::default(),
    };

    if let Some(size) = args.indent_size {
        options.indent_size = size;
    }
    if let Some(indent_char) = args.indent_char {
        options.indent_char = indent_char.as_char();
    }
    if args.crlf {
        options.new_line = "\r\n".to_string();
    }
    if args.no_collapse_comments {
        options.collapse_single_line_comments = false;
    }
    if args.synthetic_typeparams {
        options.emit_synthetic_typeparam_tags = true;
    }

    Ok(options)
}

pub fn load_config(path: &Path) -> Result<PrintOptions> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse config {}", path.display()))
}

/// Read the input file, or all of stdin when no file was given.
pub fn read_input(args: &CliArgs) -> Result<String> {
    match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Parse `text` and produce the output selected by `mode`.
pub fn render(
    mode: OutputMode,
    source_name: &str,
    text: &str,
    options: PrintOptions,
) -> Result<String> {
    let _span = info_span!("render", source_name, ?mode).entered();

    let statements = parse_source(source_name, text)?;
    debug!(statements = statements.len(), "parsed");

    let output = match mode {
        OutputMode::Format => print_to_string(&statements, options),
        OutputMode::DumpAst => {
            let mut dump = display_statements(&statements);
            dump.push('\n');
            dump
        }
        OutputMode::DumpJson => {
            let mut dump = serde_json::to_string_pretty(&statements)
                .context("failed to serialize syntax tree")?;
            dump.push('\n');
            dump
        }
    };
    Ok(output)
}

/// Resolve options, read the input and render it.
///
/// Returns the source text alongside the result so a parse error can be
/// reported against it.
pub fn run(args: &CliArgs) -> Result<(String, Result<String>)> {
    let options = resolve_options(args)?;
    let text = read_input(args)?;
    let output = render(args.output_mode(), &args.source_name(), &text, options);
    Ok((text, output))
}
