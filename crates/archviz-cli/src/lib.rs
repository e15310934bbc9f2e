//! CLI logic for the architecture diagram generator.

mod args;
mod config;

pub use args::Args;

use std::path::PathBuf;

use log::info;

use archviz::{ArchvizError, DiagramRenderer, OutputFormat, architecture};

/// Summary of a successful generation run, used for console reporting.
#[derive(Debug)]
pub struct Report {
    /// Path of the written diagram file.
    pub output: PathBuf,
    /// Number of nodes in the diagram.
    pub nodes: usize,
    /// Number of edges in the diagram.
    pub edges: usize,
}

/// Run the diagram generator.
///
/// This builds the embedded Smart Coach architecture description, lowers it
/// to DOT, and writes the rendered output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `ArchvizError` for:
/// - Configuration loading errors
/// - An unknown output format
/// - Validation errors in the architecture description
/// - Rendering errors (including a missing Graphviz installation)
/// - File I/O errors
pub fn run(args: &Args) -> Result<Report, ArchvizError> {
    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    let format: OutputFormat = args.format.parse()?;

    // Build the embedded architecture description
    let diagram = architecture::smart_coach();
    let output = args
        .output
        .clone()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(format!("{}.{}", diagram.slug(), format.extension())));

    info!(
        output_path = output.display().to_string(),
        format:%;
        "Generating architecture diagram"
    );

    // Render through Graphviz
    let renderer = DiagramRenderer::new(app_config);
    renderer.render_file(&diagram, &output, format)?;

    info!(output_file = output.display().to_string(); "Diagram exported successfully");

    Ok(Report {
        output,
        nodes: diagram.node_count(),
        edges: diagram.edges().len(),
    })
}
