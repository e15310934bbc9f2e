//! Error types for diagram generation.
//!
//! This module provides the main error type [`ArchvizError`] which wraps
//! the error conditions that can occur while building, lowering, and
//! rendering the architecture diagram.

use std::io;

use thiserror::Error;

use archviz_core::semantic::SemanticError;

/// The main error type for diagram generation.
#[derive(Debug, Error)]
pub enum ArchvizError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid diagram: {0}")]
    Semantic(#[from] SemanticError),

    #[error("unsupported output format `{0}` (expected png, svg, or dot)")]
    Format(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("Graphviz rendering failed: {0}")]
    Render(String),
}
