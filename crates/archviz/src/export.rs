//! Output formats and file export.
//!
//! The `dot` format is printed entirely in-process; `png` and `svg` delegate
//! layout and rasterization to the Graphviz `dot` binary through
//! [`graphviz_rust::exec`].

use std::{fmt, fs, path::Path, str::FromStr};

use dot_structures::Graph;
use graphviz_rust::{
    cmd::{CommandArg, Format},
    exec,
    printer::{DotPrinter, PrinterContext},
};
use log::info;

use crate::error::ArchvizError;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Svg,
    Dot,
}

impl OutputFormat {
    /// The file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
            OutputFormat::Dot => "dot",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = ArchvizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "svg" => Ok(OutputFormat::Svg),
            "dot" => Ok(OutputFormat::Dot),
            other => Err(ArchvizError::Format(other.to_string())),
        }
    }
}

/// Print a graph to DOT text.
pub(crate) fn print_dot(graph: Graph) -> String {
    graph.print(&mut PrinterContext::default())
}

/// Write a graph to `path` in the requested format.
pub(crate) fn write_file(
    graph: Graph,
    format: OutputFormat,
    path: &Path,
) -> Result<(), ArchvizError> {
    match format {
        OutputFormat::Dot => {
            fs::write(path, print_dot(graph))?;
        }
        OutputFormat::Png | OutputFormat::Svg => {
            let graphviz_format = match format {
                OutputFormat::Png => Format::Png,
                _ => Format::Svg,
            };
            exec(
                graph,
                &mut PrinterContext::default(),
                vec![
                    graphviz_format.into(),
                    CommandArg::Output(path.display().to_string()),
                ],
            )
            .map_err(|err| ArchvizError::Render(err.to_string()))?;
        }
    }

    info!(path = path.display().to_string(), format:%; "Diagram exported");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_formats() {
        assert_eq!("png".parse::<OutputFormat>().unwrap(), OutputFormat::Png);
        assert_eq!("SVG".parse::<OutputFormat>().unwrap(), OutputFormat::Svg);
        assert_eq!("dot".parse::<OutputFormat>().unwrap(), OutputFormat::Dot);
    }

    #[test]
    fn rejects_unknown_formats() {
        assert!("jpeg".parse::<OutputFormat>().is_err());
    }
}
