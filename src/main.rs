//! mycli
//!
//! Interactive terminal counter: ↑/k and ↓/j change the value, q quits.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use mycli::config::{Config, DEFAULT_LOG_LEVEL};
use mycli::error::SessionError;
use mycli::logging::init_tracing;
use mycli::tui::run::run;
use mycli::tui::state::App;

#[derive(Parser)]
#[command(name = "mycli")]
#[command(about = "Interactive terminal counter")]
#[command(version)]
struct Cli {
    /// Write diagnostic logs to this file (off by default)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log filter directive, e.g. "debug" or "mycli=trace"
    #[arg(long, value_name = "LEVEL", default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config::new(cli.log_file, cli.log_level)
    }
}

fn main() -> ExitCode {
    let config = Config::from(Cli::parse());
    init_tracing(&config.log);

    let result = run(&config);
    if let Err(e) = &result {
        tracing::error!(error = %e, "session failed");
        eprintln!("{}", error_line(e));
    }
    exit_code(&result)
}

/// 0 on a normal quit, 1 on any terminal failure.
fn exit_code(result: &Result<App, SessionError>) -> ExitCode {
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

/// Message printed on stderr once the terminal is restored.
fn error_line(error: &SessionError) -> String {
    format!("Error: {}", error)
}
