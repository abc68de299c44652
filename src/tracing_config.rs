//! Opt-in diagnostics output for parse and print runs.
//!
//! Nothing is installed unless a filter is given through `TSGEN_LOG` (or the
//! usual `RUST_LOG`). `TSGEN_LOG_FORMAT` picks the layout:
//!
//! ```bash
//! TSGEN_LOG=tsgen_parser=trace TSGEN_LOG_FORMAT=tree tsgen file.ts
//! TSGEN_LOG=debug TSGEN_LOG_FORMAT=json tsgen file.ts > /dev/null
//! ```
//!
//! Events always go to stderr; stdout carries only the formatted source.

use std::str::FromStr;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Layout of the emitted events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One line per event.
    #[default]
    Text,
    /// Spans as an indented tree (`tracing-tree`).
    Tree,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "text" => Ok(LogFormat::Text),
            "tree" => Ok(LogFormat::Tree),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format `{other}`")),
        }
    }
}

/// Filter directives plus output layout, resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub directives: String,
    pub format: LogFormat,
}

impl LogConfig {
    /// Resolve from raw variable values. `TSGEN_LOG` wins over `RUST_LOG`;
    /// with neither set there is nothing to configure. An unknown format
    /// falls back to text.
    pub fn from_vars(
        tsgen_log: Option<String>,
        rust_log: Option<String>,
        format: Option<String>,
    ) -> Option<LogConfig> {
        let directives = tsgen_log.or(rust_log)?;
        let format = format
            .as_deref()
            .map(|value| value.parse::<LogFormat>().unwrap_or_default())
            .unwrap_or_default();
        Some(LogConfig { directives, format })
    }

    pub fn from_env() -> Option<LogConfig> {
        LogConfig::from_vars(
            std::env::var("TSGEN_LOG").ok(),
            std::env::var("RUST_LOG").ok(),
            std::env::var("TSGEN_LOG_FORMAT").ok(),
        )
    }

    /// Install the global subscriber. Only the layer for the selected
    /// format is present; the others are `None`.
    pub fn install(&self) {
        let filter = EnvFilter::builder().parse_lossy(&self.directives);

        let text = (self.format == LogFormat::Text)
            .then(|| fmt::layer().with_writer(std::io::stderr));
        let json = (self.format == LogFormat::Json)
            .then(|| fmt::layer().json().with_writer(std::io::stderr));
        let tree = (self.format == LogFormat::Tree).then(|| {
            tracing_tree::HierarchicalLayer::new(2)
                .with_writer(std::io::stderr)
                .with_indent_lines(true)
                .with_targets(true)
        });

        Registry::default()
            .with(filter)
            .with(text)
            .with(json)
            .with(tree)
            .init();
    }
}

/// Install tracing when `TSGEN_LOG` or `RUST_LOG` is set; otherwise a no-op.
pub fn init_tracing() {
    if let Some(config) = LogConfig::from_env() {
        config.install();
    }
}

#[cfg(test)]
mod tests {
    use super::{LogConfig, LogFormat};

    fn vars(tsgen: Option<&str>, rust: Option<&str>, format: Option<&str>) -> Option<LogConfig> {
        LogConfig::from_vars(
            tsgen.map(String::from),
            rust.map(String::from),
            format.map(String::from),
        )
    }

    #[test]
    fn test_no_filter_means_no_subscriber() {
        assert_eq!(vars(None, None, Some("tree")), None);
    }

    #[test]
    fn test_tsgen_log_takes_precedence() {
        let config = vars(Some("tsgen_parser=trace"), Some("warn"), None).expect("config");
        assert_eq!(config.directives, "tsgen_parser=trace");
        assert_eq!(config.format, LogFormat::Text);

        let config = vars(None, Some("warn"), Some("JSON")).expect("config");
        assert_eq!(config.directives, "warn");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn test_log_format_parsing() {
        assert_eq!("tree".parse::<LogFormat>(), Ok(LogFormat::Tree));
        assert_eq!(" text ".parse::<LogFormat>(), Ok(LogFormat::Text));
        assert!("fancy".parse::<LogFormat>().is_err());
        assert_eq!(
            vars(Some("debug"), None, Some("fancy")).map(|c| c.format),
            Some(LogFormat::Text)
        );
    }
}
