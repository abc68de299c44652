use thiserror::Error;
use tsgen_ast::BuildError;
use tsgen_common::SourceLocation;
use tsgen_scanner::{ScanError, ScanErrorKind, Token};

/// Whether the input is malformed or just outside the supported subset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// The input is not valid TypeScript.
    Syntax,
    /// Valid TypeScript that this parser does not model (generators,
    /// decorators, template literals, destructuring, ...).
    Unsupported,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{location}: {message}{}", found_suffix(.found))]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    pub location: SourceLocation,
    /// Text of the offending token; empty when there is no token to show.
    pub found: String,
}

fn found_suffix(found: &str) -> String {
    if found.is_empty() {
        String::new()
    } else {
        format!(" (found `{found}`)")
    }
}

impl ParseError {
    pub fn syntax(message: impl Into<String>, token: &Token) -> Self {
        ParseError {
            kind: ParseErrorKind::Syntax,
            message: message.into(),
            location: token.location.clone(),
            found: token.describe(),
        }
    }

    pub fn unsupported(message: impl Into<String>, token: &Token) -> Self {
        ParseError {
            kind: ParseErrorKind::Unsupported,
            message: message.into(),
            location: token.location.clone(),
            found: token.describe(),
        }
    }

    /// A node rejected by the factory, reported at `token`.
    pub fn invalid_node(error: &BuildError, token: &Token) -> Self {
        ParseError::syntax(error.to_string(), token)
    }

    pub fn is_unsupported(&self) -> bool {
        self.kind == ParseErrorKind::Unsupported
    }
}

impl From<ScanError> for ParseError {
    fn from(error: ScanError) -> Self {
        let found = match error.kind {
            ScanErrorKind::InvalidCharacter(c) => c.to_string(),
            _ => String::new(),
        };
        ParseError {
            kind: ParseErrorKind::Syntax,
            message: error.kind.to_string(),
            location: error.location,
            found,
        }
    }
}
