//! Emitter configuration.

use serde::{Deserialize, Serialize};

/// Options controlling the layout of emitted text.
///
/// Deserializes from camelCase keys; missing keys take their default, so
/// `{}` is a valid configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PrintOptions {
    /// Line terminator written at the end of every line.
    pub new_line: String,
    /// Number of `indent_char`s per indentation level.
    pub indent_size: usize,
    pub indent_char: char,
    /// Render a documentation comment with at most one line of content as
    /// `/** text */` instead of a multi-line block.
    pub collapse_single_line_comments: bool,
    /// Emit `@typeparam` entries generated for undocumented type parameters.
    pub emit_synthetic_typeparam_tags: bool,
}

impl Default for PrintOptions {
    fn default() -> Self {
        PrintOptions {
            new_line: "\n".to_string(),
            indent_size: 4,
            indent_char: ' ',
            collapse_single_line_comments: true,
            emit_synthetic_typeparam_tags: false,
        }
    }
}

impl PrintOptions {
    /// The text of one indentation level.
    pub fn indent_unit(&self) -> String {
        std::iter::repeat_n(self.indent_char, self.indent_size).collect()
    }
}
