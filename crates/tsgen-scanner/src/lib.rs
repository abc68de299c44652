//! TypeScript scanner/tokenizer for the tsgen syntax toolkit.
//!
//! This crate provides the lexical analysis phase:
//! - `SyntaxKind` - Token types
//! - `Scanner` - Text to token conversion with line/column tracking
//! - `TokenStream` - Pre-tokenized buffer with an explicit cursor that the
//!   parser peeks, reads and rewinds

pub mod syntax_kind;
pub use syntax_kind::SyntaxKind;

pub mod token;
pub use token::Token;

pub mod scanner;
pub use scanner::{ScanError, ScanErrorKind, Scanner};

pub mod token_stream;
pub use token_stream::{Snapshot, TokenStream};

#[cfg(test)]
#[path = "../tests/scanner_tests.rs"]
mod scanner_tests;

#[cfg(test)]
#[path = "../tests/token_stream_tests.rs"]
mod token_stream_tests;
