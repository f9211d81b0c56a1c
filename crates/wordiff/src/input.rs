//! Loading the two texts to compare

use crate::cli::Cli;
use anyhow::{bail, Context, Result};
use std::io::Read;

const STDIN_ARG: &str = "-";

/// Resolve OLD and NEW into their contents
pub fn load_pair(cli: &Cli) -> Result<(String, String)> {
    if cli.text {
        return Ok((cli.old.clone(), cli.new.clone()));
    }
    if cli.old == STDIN_ARG && cli.new == STDIN_ARG {
        bail!("only one of OLD and NEW can be read from stdin");
    }
    Ok((read_input(&cli.old)?, read_input(&cli.new)?))
}

fn read_input(arg: &str) -> Result<String> {
    if arg == STDIN_ARG {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(arg).with_context(|| format!("failed to read {arg}"))
}
