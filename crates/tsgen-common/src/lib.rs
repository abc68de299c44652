//! Common types and utilities for the tsgen TypeScript syntax toolkit.
//!
//! This crate provides foundational types used across all tsgen crates:
//! - Source locations (`SourceLocation`, `Position`)
//! - Raw comment trivia attached to tokens (`CommentTrivia`)
//! - Parser limits and thresholds

// Position types for line/column source locations
pub mod position;
pub use position::{Position, SourceLocation};

// Comment trivia shared between the scanner and the parser
pub mod comments;
pub use comments::{CommentKind, CommentTrivia};

// Centralized limits and thresholds
pub mod limits;
