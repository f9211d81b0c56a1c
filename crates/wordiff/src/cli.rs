//! Command-line arguments

use crate::config::ColorMode;
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// How the diff is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Coloured inline diff (falls back to markup without colour)
    Inline,
    /// `[-old-]{+new+}` word-diff markup
    Markup,
    /// Inline `<span>` elements
    Html,
    /// Ops and counters as JSON
    Json,
    /// Only the stats panel
    Stats,
}

#[derive(Parser, Debug)]
#[command(name = "wordiff", version, about = "Word-level text diff")]
pub struct Cli {
    /// Old file (or `-` for stdin, or literal text with --text)
    pub old: String,

    /// New file (or `-` for stdin, or literal text with --text)
    pub new: String,

    /// Treat OLD and NEW as literal text instead of paths
    #[arg(long)]
    pub text: bool,

    /// Collapse whitespace runs and trim before comparing
    #[arg(short = 'w', long)]
    pub ignore_whitespace: bool,

    /// Compare case-insensitively
    #[arg(short = 'i', long)]
    pub ignore_case: bool,

    /// Refuse inputs whose token counts multiply past N (0 = no limit)
    #[arg(long, value_name = "N")]
    pub max_cells: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Inline)]
    pub format: OutputFormat,

    /// When to colour output
    #[arg(long, value_enum)]
    pub color: Option<ColorMode>,

    /// Append the stats panel to inline and markup output
    #[arg(long)]
    pub stats: bool,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
