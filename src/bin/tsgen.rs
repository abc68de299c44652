#![allow(clippy::print_stderr)]

use anyhow::Result;
use clap::Parser;
use std::io::{IsTerminal, Write};

use tsgen::cli::args::CliArgs;
use tsgen::cli::{driver, reporter::Reporter};
use tsgen::parser::ParseError;

const EXIT_PARSE_ERROR: i32 = 1;

fn main() -> Result<()> {
    // Initialize tracing if TSGEN_LOG or RUST_LOG is set (zero cost otherwise).
    // Supports TSGEN_LOG_FORMAT=tree|json|text (see src/tracing_config.rs).
    tsgen::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let (source, output) = driver::run(&args)?;

    match output {
        Ok(text) => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
        Err(err) => {
            let Some(parse_error) = err.downcast_ref::<ParseError>() else {
                return Err(err);
            };
            let color = !args.no_color && std::io::stderr().is_terminal();
            let reporter = Reporter::new(color);
            eprintln!("{}", reporter.render(parse_error, &source));
            std::process::exit(EXIT_PARSE_ERROR);
        }
    }
}
