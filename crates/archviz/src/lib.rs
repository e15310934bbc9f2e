//! Archviz - renders the Smart Coach system architecture diagram.
//!
//! The architecture is a fixed, declarative description of a three-tier web
//! application ([`architecture::smart_coach`]). This crate validates it,
//! lowers it to the DOT graph language, and delegates layout, rendering, and
//! image export to Graphviz.

pub mod architecture;
pub mod config;

mod dot;
mod error;
mod export;

pub use archviz_core::{color, identifier, semantic};

pub use error::ArchvizError;
pub use export::OutputFormat;

use std::path::Path;

use log::{debug, info};

use config::AppConfig;

/// Validates, lowers, and renders semantic diagrams.
///
/// # Examples
///
/// ```rust,no_run
/// use archviz::{DiagramRenderer, OutputFormat, architecture};
///
/// let diagram = architecture::smart_coach();
/// let renderer = DiagramRenderer::default();
///
/// // Inspect the DOT text
/// let dot = renderer.to_dot(&diagram).expect("Failed to lower diagram");
/// assert!(dot.starts_with("digraph"));
///
/// // Or render straight to a file (requires the Graphviz `dot` binary for
/// // png/svg output)
/// renderer
///     .render_file(&diagram, "architecture.png", OutputFormat::Png)
///     .expect("Failed to render");
/// ```
#[derive(Default)]
pub struct DiagramRenderer {
    config: AppConfig,
}

impl DiagramRenderer {
    /// Create a new renderer with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Validate a diagram and lower it to DOT text.
    ///
    /// # Errors
    ///
    /// Returns `ArchvizError` if an edge references an undeclared node or
    /// the configured background color is invalid.
    pub fn to_dot(&self, diagram: &semantic::Diagram) -> Result<String, ArchvizError> {
        let graph = self.lower(diagram)?;
        Ok(export::print_dot(graph))
    }

    /// Validate a diagram and render it to a file in the given format.
    ///
    /// The `dot` format is written in-process; `png` and `svg` require the
    /// Graphviz `dot` binary on the PATH.
    ///
    /// # Errors
    ///
    /// Returns `ArchvizError` for validation failures, configuration errors,
    /// I/O errors, or Graphviz execution failures.
    pub fn render_file(
        &self,
        diagram: &semantic::Diagram,
        path: impl AsRef<Path>,
        format: OutputFormat,
    ) -> Result<(), ArchvizError> {
        let graph = self.lower(diagram)?;
        export::write_file(graph, format, path.as_ref())
    }

    fn lower(&self, diagram: &semantic::Diagram) -> Result<dot_structures::Graph, ArchvizError> {
        info!(title = diagram.title(); "Validating diagram structure");
        diagram.validate()?;

        let background = self
            .config
            .style()
            .background_color()
            .map_err(ArchvizError::Config)?;

        debug!(
            nodes = diagram.node_count(),
            edges = diagram.edges().len(),
            clusters = diagram.cluster_count();
            "Lowering diagram to DOT"
        );
        Ok(dot::lower(diagram, background.as_ref()))
    }
}
