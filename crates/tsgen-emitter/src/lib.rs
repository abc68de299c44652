//! Formatting emitter for the tsgen syntax tree.
//!
//! `Printer` walks a tree and produces TypeScript text with a fixed layout:
//! - `SourceWriter` - output buffer with lazy indentation and blank lines
//! - `ListFormat` - the description every list site passes to the single
//!   list routine
//! - `PrintOptions` - line terminator, indentation and comment layout
//!
//! Comments and documentation comments attached to nodes are printed where
//! they were found; parentheses come only from the tree's `Paren` nodes.

pub mod options;
pub use options::PrintOptions;

pub mod error;
pub use error::EmitError;

pub mod source_writer;
pub use source_writer::SourceWriter;

pub mod list_format;
pub use list_format::ListFormat;

pub mod printer;
pub use printer::{Printer, print_to_string};

#[cfg(test)]
#[path = "../tests/source_writer_tests.rs"]
mod source_writer_tests;
