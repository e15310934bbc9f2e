//! Command-line argument definitions for the archviz CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. The diagram data is embedded in the binary, so every
//! argument is optional: a bare `archviz` invocation renders the default
//! PNG into the working directory.

use clap::Parser;

/// Command-line arguments for the architecture diagram generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the output file (defaults to the diagram title, slugified,
    /// with the format's extension)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format (png, svg, dot)
    #[arg(short, long, default_value = "png")]
    pub format: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
