//! Command-line definition

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Interpolate a brace template with positional arguments
#[derive(Parser, Debug)]
#[command(name = "bracefmt", version, about)]
pub struct Cli {
    /// Template text, e.g. "Hello {:-^11}!"
    pub template: String,

    /// Arguments in order; valid JSON (42, [1,2], {"a":1}, "\"quoted\"") is
    /// parsed, anything else is taken as text
    #[arg(allow_negative_numbers = true)]
    pub args: Vec<String>,

    /// Fail on stray braces and missing arguments instead of skipping them
    #[arg(long)]
    pub strict: bool,

    /// Render into a buffer of this many bytes
    #[arg(long, value_name = "BYTES")]
    pub capacity: Option<usize>,

    /// Show how each placeholder resolves instead of rendering
    #[arg(long)]
    pub explain: bool,

    /// Config file (default: <config dir>/bracefmt/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log filter implied by the verbosity flag
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}
