//! Comment trivia
//!
//! Comments are not tokens. The scanner collects them between tokens and
//! hangs them on the neighbouring token as raw `CommentTrivia`; the parser
//! later turns them into AST trivia attached to nodes.

use serde::Serialize;

/// The syntactic form of a comment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CommentKind {
    /// `// text`
    Line,
    /// `/* text */`
    Block,
    /// `/** text */`
    Doc,
}

/// A comment or a blank-line marker found between two tokens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum CommentTrivia {
    /// `text` excludes the comment delimiters (`//`, `/*`, `*/`, `/**`).
    Comment { kind: CommentKind, text: String },
    /// One or more empty source lines.
    BlankLine,
}

impl CommentTrivia {
    pub fn line(text: impl Into<String>) -> Self {
        CommentTrivia::Comment {
            kind: CommentKind::Line,
            text: text.into(),
        }
    }

    pub fn block(text: impl Into<String>) -> Self {
        CommentTrivia::Comment {
            kind: CommentKind::Block,
            text: text.into(),
        }
    }

    pub fn doc(text: impl Into<String>) -> Self {
        CommentTrivia::Comment {
            kind: CommentKind::Doc,
            text: text.into(),
        }
    }

    pub fn is_blank_line(&self) -> bool {
        matches!(self, CommentTrivia::BlankLine)
    }
}

/// Classify the body of a `/* ... */` comment (the text between the
/// delimiters). `/**/` is a plain block comment, not a doc comment.
pub fn classify_block_comment(body: &str) -> (CommentKind, &str) {
    match body.strip_prefix('*') {
        Some(rest) if !rest.is_empty() && !rest.starts_with('*') => (CommentKind::Doc, rest),
        Some("") => (CommentKind::Doc, ""),
        _ => (CommentKind::Block, body),
    }
}

/// Find the byte offset of the `*/` closing a block comment whose body starts
/// at `from`. Returns `None` for an unterminated comment.
pub fn find_block_comment_end(source: &[u8], from: usize) -> Option<usize> {
    if from > source.len() {
        return None;
    }
    memchr::memmem::find(&source[from..], b"*/").map(|offset| from + offset)
}

/// Split the body of a doc comment into its content lines, stripping the
/// conventional ` * ` leader and surrounding blank lines.
///
/// ```text
/// /**
///  * First
///  *   indented
///  */
/// ```
/// yields `["First", "  indented"]`.
pub fn doc_comment_lines(body: &str) -> Vec<String> {
    let mut lines: Vec<String> = body
        .lines()
        .map(|line| {
            let trimmed = line.trim_start();
            let content = match trimmed.strip_prefix('*') {
                Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
                None => trimmed,
            };
            content.trim_end().to_string()
        })
        .collect();

    while lines.first().is_some_and(|l| l.is_empty()) {
        lines.remove(0);
    }
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}

/// Re-indent continuation lines of a multi-line block comment.
///
/// The first line is kept as is; following lines lose their original
/// indentation and get `indent` instead, so a comment moved to a different
/// nesting depth stays aligned with its node.
pub fn reindent_block_comment(text: &str, indent: &str) -> String {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() <= 1 {
        return text.to_string();
    }

    let mut result = String::new();
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            result.push('\n');
            let trimmed = line.trim_start();
            if !trimmed.is_empty() {
                result.push_str(indent);
                // Keep the ` * ` leader aligned under the opening `/*`.
                if trimmed.starts_with('*') {
                    result.push(' ');
                }
            }
            result.push_str(trimmed);
        } else {
            result.push_str(line);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_block_comment() {
        assert_eq!(classify_block_comment(" plain "), (CommentKind::Block, " plain "));
        assert_eq!(classify_block_comment("* doc "), (CommentKind::Doc, " doc "));
        assert_eq!(classify_block_comment("*"), (CommentKind::Doc, ""));
        assert_eq!(classify_block_comment("** banner **"), (CommentKind::Block, "** banner **"));
        assert_eq!(classify_block_comment(""), (CommentKind::Block, ""));
    }

    #[test]
    fn test_find_block_comment_end() {
        let src = b"/* a */ b";
        assert_eq!(find_block_comment_end(src, 2), Some(5));
        assert_eq!(find_block_comment_end(b"/* open", 2), None);
    }

    #[test]
    fn test_doc_comment_lines_strips_leaders() {
        let body = "\n * First\n *   indented\n *\n * Last\n ";
        assert_eq!(
            doc_comment_lines(body),
            vec!["First", "  indented", "", "Last"]
        );
    }

    #[test]
    fn test_doc_comment_lines_single_line() {
        assert_eq!(doc_comment_lines(" Hello "), vec!["Hello"]);
        assert!(doc_comment_lines("   ").is_empty());
    }

    #[test]
    fn test_reindent_block_comment() {
        let text = "/* first\n        * second\n        */";
        assert_eq!(
            reindent_block_comment(text, "    "),
            "/* first\n     * second\n     */"
        );
        assert_eq!(reindent_block_comment("/* one */", "  "), "/* one */");
    }
}
