//! Recursive-descent parser for the tsgen TypeScript subset.
//!
//! Statements and declarations are parsed top-down; binary expressions use
//! precedence climbing. Comments travel with the tokens and are claimed onto
//! the statements, members, clauses and properties they surround.
//!
//! Input outside the modelled subset (generators, decorators, destructuring,
//! template literals, conditional and mapped types, ...) is rejected with an
//! [`ParseErrorKind::Unsupported`] error rather than a syntax error.

pub mod error;
pub use error::{ParseError, ParseErrorKind};

pub mod state;
pub use state::{ParseResult, ParserState};

mod state_declarations;
mod state_expressions;
mod state_statements;
mod state_types;

use tsgen_ast::Stmt;

/// Parse a whole source file into its top-level statements.
pub fn parse_source(source_name: &str, text: &str) -> ParseResult<Vec<Stmt>> {
    let mut parser = ParserState::from_source(source_name, text)?;
    parser.parse_source_file()
}

#[cfg(test)]
#[path = "../tests/expression_tests.rs"]
mod expression_tests;

#[cfg(test)]
#[path = "../tests/statement_tests.rs"]
mod statement_tests;

#[cfg(test)]
#[path = "../tests/declaration_tests.rs"]
mod declaration_tests;

#[cfg(test)]
#[path = "../tests/type_tests.rs"]
mod type_tests;

#[cfg(test)]
#[path = "../tests/trivia_tests.rs"]
mod trivia_tests;

#[cfg(test)]
#[path = "../tests/error_tests.rs"]
mod error_tests;
