//! Centralized limits and thresholds.

// =============================================================================
// Recursion Depth Limits
// =============================================================================

/// Maximum nesting depth for the parser.
///
/// The parser counts nested expressions, statements and types and reports a
/// syntax error when this limit is exceeded instead of overflowing the stack.
///
/// # TypeScript example
///
/// ```typescript
/// // Deeply nested parenthesized expressions:
/// const x = ((((((((((((((((((((((((((((((1)))))))))))))))))))))))))))))));
///
/// // Deeply nested generic type arguments:
/// type T = Promise<Promise<Promise<Promise<Promise</* ... */>>>>>;
/// ```
pub const MAX_PARSER_DEPTH: u32 = 256;

// =============================================================================
// Capacity Limits
// =============================================================================

/// Maximum number of properties an object literal may have and still be
/// printed on a single line by the emitter.
pub const MAX_INLINE_OBJECT_LITERAL_PROPERTIES: usize = 4;
