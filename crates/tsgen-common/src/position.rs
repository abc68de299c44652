//! Line/column source locations.
//!
//! Lines and columns are 1-based and counted in characters, which is what a
//! user expects to see in an error message.

use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// A line/column pair within a single source text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub const START: Position = Position { line: 1, column: 1 };

    pub const fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A position tagged with the name of the source it belongs to.
///
/// The source name is shared between all tokens of one file.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct SourceLocation {
    pub source_name: Arc<str>,
    pub position: Position,
}

impl SourceLocation {
    pub fn new(source_name: Arc<str>, line: u32, column: u32) -> Self {
        SourceLocation {
            source_name,
            position: Position::new(line, column),
        }
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.position.line
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.position.column
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.source_name, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_display() {
        let loc = SourceLocation::new(Arc::from("main.ts"), 3, 14);
        assert_eq!(loc.to_string(), "main.ts:3:14");
        assert_eq!(loc.line(), 3);
        assert_eq!(loc.column(), 14);
    }

    #[test]
    fn test_position_ordering() {
        assert!(Position::new(1, 10) < Position::new(2, 1));
        assert!(Position::new(2, 1) < Position::new(2, 2));
        assert_eq!(Position::START, Position::new(1, 1));
    }
}
