//! `skilldb` command-line front end.
//!
//! # Responsibility
//! - Map flags onto store configuration and logging setup.
//! - Turn every failure into a message and a non-zero exit code.

mod args;
mod commands;

use anyhow::{Context, Result};
use args::Cli;
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("event=cli_command module=cli status=error error={err:#}");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Some(log_dir) = &cli.log_dir {
        let log_dir = std::path::absolute(log_dir)
            .with_context(|| format!("invalid log directory `{}`", log_dir.display()))?;
        let level = cli
            .log_level
            .as_deref()
            .unwrap_or(skilldb_core::default_log_level());
        skilldb_core::init_logging(level, &log_dir.to_string_lossy())
            .map_err(anyhow::Error::msg)?;
    }

    let mut stdout = std::io::stdout().lock();
    commands::execute(cli, &mut stdout)
}
