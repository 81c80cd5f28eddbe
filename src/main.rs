//! ruby-ebuildgen CLI entry point.

use std::error::Error as _;
use std::process::ExitCode;

use clap::Parser;
use ruby_ebuildgen::cli::{Cli, GenerateCommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Logs go to stderr so `-o` output stays clean. Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("ruby_ebuildgen=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ruby_ebuildgen=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("ruby-ebuildgen starting with args: {:?}", cli);

    let output_dir = std::env::current_dir().unwrap_or_default();
    let command = GenerateCommand::new(cli, &output_dir);
    let mut stdout = std::io::stdout().lock();

    match command.execute(&mut stdout) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {}", cause);
                source = cause.source();
            }
            ExitCode::from(1)
        }
    }
}
