#![forbid(unsafe_code)]

//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

/// Present a slide deck in the terminal.
#[derive(Debug, Parser)]
#[command(name = "slidedeck", version, about)]
pub struct Cli {
    /// Path to a deck JSON file (an array of slide objects). The
    /// built-in sample deck is shown when omitted.
    pub deck: Option<PathBuf>,

    /// Append structured logs to this file. Filtered by the
    /// SLIDEDECK_LOG environment variable (tracing env-filter syntax).
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
