use colored::Colorize;

use tsgen_parser::{ParseError, ParseErrorKind};

pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter { color }
    }

    /// Render `error` as `file:line:col - kind: message`, followed by the
    /// offending source line with a caret under the error column.
    pub fn render(&self, error: &ParseError, source: &str) -> String {
        let mut output = String::new();
        output.push_str(&error.location.to_string());
        output.push_str(" - ");
        output.push_str(&self.format_kind(error.kind));
        output.push_str(": ");
        output.push_str(&error.message);
        if !error.found.is_empty() {
            output.push_str(&format!(" (found `{}`)", error.found));
        }

        if let Some(snippet) = self.format_snippet(
            source,
            error.location.position.line,
            error.location.position.column,
        ) {
            output.push_str(&snippet);
        }

        output
    }

    /// Format a source line with a caret under `column`.
    /// Example:
    ///     2   let x = ;
    ///                 ^
    fn format_snippet(&self, source: &str, line: u32, column: u32) -> Option<String> {
        let line_idx = usize::try_from(line.checked_sub(1)?).ok()?;
        let line_text = source.lines().nth(line_idx)?;

        let mut underline = String::new();
        for ch in line_text.chars().take(column.saturating_sub(1) as usize) {
            // Keep tabs so the caret lines up with the echoed line.
            underline.push(if ch == '\t' { '\t' } else { ' ' });
        }
        underline.push('^');

        let underline_display = if self.color {
            underline.red().to_string()
        } else {
            underline
        };

        let mut snippet = String::new();
        snippet.push('\n');
        snippet.push_str(&format!("  {line:>3}   {line_text}"));
        snippet.push('\n');
        snippet.push_str(&format!("        {underline_display}"));
        Some(snippet)
    }

    fn format_kind(&self, kind: ParseErrorKind) -> String {
        let label = match kind {
            ParseErrorKind::Syntax => "error",
            ParseErrorKind::Unsupported => "unsupported",
        };

        if !self.color {
            return label.to_string();
        }

        match kind {
            ParseErrorKind::Syntax => label.red().bold().to_string(),
            ParseErrorKind::Unsupported => label.yellow().bold().to_string(),
        }
    }
}
