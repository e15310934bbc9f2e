//! Archviz CLI entry point.

use std::str::FromStr;

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use archviz_cli::Args;

fn main() {
    // Parse configuration first
    let args = Args::parse();

    // Initialize the logger with the specified log level
    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting archviz");
    debug!(args:?; "Parsed arguments");

    // Run the generator. Failures are reported and swallowed: the process
    // exits 0 either way.
    match archviz_cli::run(&args) {
        Ok(report) => {
            println!(
                "✅ Architecture diagram generated as '{}'",
                report.output.display()
            );
            println!(
                "📊 {} nodes and {} edges across the frontend, backend, and database layers",
                report.nodes, report.edges
            );
        }
        Err(err) => {
            error!(err:%; "Diagram generation failed");
            println!("❌ Error generating diagram: {err}");
            println!(
                "💡 Make sure Graphviz is installed and `dot` is on your PATH: https://graphviz.org/download/"
            );
        }
    }
}
