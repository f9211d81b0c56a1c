//! wordiff - word-level text diff

mod cli;
mod config;
mod input;
mod views;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::{Config, Settings};
use crossterm::tty::IsTty;
use std::io::Write;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use wordiff_core::DiffEngine;

const LOG_ENV: &str = "WORDIFF_LOG";

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // diff(1) convention: 0 same, 1 different, 2 trouble
    match run(&cli) {
        Ok(false) => ExitCode::SUCCESS,
        Ok(true) => ExitCode::from(1),
        Err(err) => {
            eprintln!("wordiff: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Returns whether the inputs differ
fn run(cli: &Cli) -> Result<bool> {
    let config = Config::load(cli.config.as_deref())?;
    let settings = Settings::resolve(cli, &config, std::io::stdout().is_tty());
    let (old, new) = input::load_pair(cli)?;

    let engine = DiffEngine::new()
        .with_options(settings.options)
        .with_max_cells(settings.max_cells);
    let result = engine.diff_strings(&old, &new)?;

    tracing::info!(
        additions = result.additions,
        deletions = result.deletions,
        modifications = result.modifications,
        "compared inputs"
    );

    let rendered = views::render(&result, &settings)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;

    Ok(result.has_changes())
}
