use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the tsgen binary.
#[derive(Parser, Debug)]
#[command(
    name = "tsgen",
    version,
    about = "Parse a TypeScript file and print it back in canonical layout"
)]
pub struct CliArgs {
    /// Source file to format. Reads stdin when omitted.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// JSON file with printer options (camelCase keys).
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of indent characters per level.
    #[arg(long = "indent-size", value_name = "N")]
    pub indent_size: Option<usize>,

    /// Character used for indentation.
    #[arg(long = "indent-char", value_enum)]
    pub indent_char: Option<IndentChar>,

    /// Terminate lines with CRLF.
    #[arg(long)]
    pub crlf: bool,

    /// Always print documentation comments as multi-line blocks.
    #[arg(long = "no-collapse-comments")]
    pub no_collapse_comments: bool,

    /// Print `@typeparam` tags for undocumented type parameters.
    #[arg(long = "synthetic-typeparams")]
    pub synthetic_typeparams: bool,

    /// Print the parsed tree in its debug notation instead of formatting.
    #[arg(long = "dump-ast", conflicts_with = "dump_json")]
    pub dump_ast: bool,

    /// Print the parsed tree as JSON instead of formatting.
    #[arg(long = "dump-json")]
    pub dump_json: bool,

    /// Disable colored error output.
    #[arg(long = "no-color")]
    pub no_color: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum IndentChar {
    Space,
    Tab,
}

impl IndentChar {
    pub fn as_char(self) -> char {
        match self {
            IndentChar::Space => ' ',
            IndentChar::Tab => '\t',
        }
    }
}

/// What the driver should write for a successfully parsed input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputMode {
    Format,
    DumpAst,
    DumpJson,
}

impl CliArgs {
    pub fn output_mode(&self) -> OutputMode {
        if self.dump_json {
            OutputMode::DumpJson
        } else if self.dump_ast {
            OutputMode::DumpAst
        } else {
            OutputMode::Format
        }
    }

    /// Display name used in error locations.
    pub fn source_name(&self) -> String {
        self.file
            .as_ref()
            .map_or_else(|| "<stdin>".to_string(), |path| path.display().to_string())
    }
}
