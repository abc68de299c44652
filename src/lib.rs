//! tsgen - a TypeScript syntax toolkit.
//!
//! Re-exports the workspace crates under short names and adds the pieces of
//! the `tsgen` binary:
//! - `ast` - immutable syntax tree, factory and visitor
//! - `parser` - recursive-descent parser producing that tree
//! - `emitter` - formatting printer that keeps comments and JSDoc
//! - `cli` - argument parsing, the format driver and error reporting
//! - `tracing_config` - opt-in tracing subscriber setup

pub use tsgen_ast as ast;
pub use tsgen_common as common;
pub use tsgen_emitter as emitter;
pub use tsgen_parser as parser;
pub use tsgen_scanner as scanner;

pub mod cli;
pub mod tracing_config;

use tsgen_emitter::{PrintOptions, print_to_string};
use tsgen_parser::{ParseError, parse_source};

/// Parse `text` and print it back with `options`.
pub fn format_source(
    source_name: &str,
    text: &str,
    options: PrintOptions,
) -> Result<String, ParseError> {
    let statements = parse_source(source_name, text)?;
    Ok(print_to_string(&statements, options))
}
