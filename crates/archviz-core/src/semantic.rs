//! Semantic diagram model types.
//!
//! This module contains the semantic representation of an architecture
//! diagram: labeled nodes, nested clusters, directed edges, and the layout
//! hints that travel with them. The model is purely declarative; layout and
//! rendering are delegated to Graphviz further down the pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Architecture description (hard-coded)
//!     ↓ build
//! Semantic Model (these types) - validated node references
//!     ↓ lower
//! DOT Graph (dot-structures)
//!     ↓ graphviz
//! PNG / SVG / DOT file
//! ```

use std::fmt;

use thiserror::Error;

use crate::{color::Color, identifier::Id};

/// Errors raised while checking a diagram's structure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SemanticError {
    /// An edge endpoint names a node that was never declared in the diagram.
    #[error("edge references undeclared node `{0}`")]
    UndeclaredNode(Id),
}

/// Visual category of a node.
///
/// The category only selects a Graphviz shape and fill color; it carries no
/// semantic weight beyond making the tiers easy to tell apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// External users of the system.
    Client,
    /// A frontend or backend application framework.
    Framework,
    /// A frontend script-level component.
    Script,
    /// A backend service-level component.
    Service,
    /// A container runtime.
    Container,
    /// A database server.
    Database,
    /// A stored data entity.
    Entity,
}

impl NodeKind {
    /// The Graphviz `shape` attribute for this kind.
    pub fn shape(self) -> &'static str {
        match self {
            NodeKind::Client => "oval",
            NodeKind::Framework | NodeKind::Script | NodeKind::Service => "box",
            NodeKind::Container => "box3d",
            NodeKind::Database => "cylinder",
            NodeKind::Entity => "note",
        }
    }

    /// The Graphviz `fillcolor` attribute for this kind.
    pub fn fill_color(self) -> &'static str {
        match self {
            NodeKind::Client => "lightgoldenrod1",
            NodeKind::Framework => "lightskyblue",
            NodeKind::Script => "khaki1",
            NodeKind::Service => "lightsalmon",
            NodeKind::Container => "lightsteelblue",
            NodeKind::Database => "lightblue",
            NodeKind::Entity => "whitesmoke",
        }
    }
}

/// A diagram node: an identifier, a display label, and a visual category.
///
/// Labels may span multiple lines (including bullet-style sub-text for the
/// entity schema nodes); the lowering step takes care of DOT escaping.
#[derive(Debug, Clone)]
pub struct Node {
    id: Id,
    label: String,
    kind: NodeKind,
}

impl Node {
    /// Create a new Node.
    pub fn new(id: Id, label: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id,
            label: label.into(),
            kind,
        }
    }

    /// Get the node identifier.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Get the display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the visual category.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// Layout hints attached to a single cluster.
///
/// All hints are optional; unset hints fall back to Graphviz defaults or to
/// values inherited from the enclosing scope.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClusterHints {
    margin: Option<f64>,
    node_spacing: Option<f64>,
    rank_spacing: Option<f64>,
}

impl ClusterHints {
    /// Set the cluster margin, in points.
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = Some(margin);
        self
    }

    /// Set the separation between nodes in the same rank, in inches.
    pub fn with_node_spacing(mut self, spacing: f64) -> Self {
        self.node_spacing = Some(spacing);
        self
    }

    /// Set the separation between ranks, in inches.
    pub fn with_rank_spacing(mut self, spacing: f64) -> Self {
        self.rank_spacing = Some(spacing);
        self
    }

    /// Get the cluster margin hint.
    pub fn margin(&self) -> Option<f64> {
        self.margin
    }

    /// Get the node spacing hint.
    pub fn node_spacing(&self) -> Option<f64> {
        self.node_spacing
    }

    /// Get the rank spacing hint.
    pub fn rank_spacing(&self) -> Option<f64> {
        self.rank_spacing
    }
}

/// A named, possibly nested, grouping of nodes and sub-clusters.
///
/// Clusters are purely organizational; they carry a label and layout hints
/// and own their children for the lifetime of the diagram.
#[derive(Debug, Clone)]
pub struct Cluster {
    id: Id,
    label: String,
    hints: ClusterHints,
    children: Vec<Element>,
}

impl Cluster {
    /// Create a new Cluster owning the given children.
    pub fn new(
        id: Id,
        label: impl Into<String>,
        hints: ClusterHints,
        children: Vec<Element>,
    ) -> Self {
        Self {
            id,
            label: label.into(),
            hints,
            children,
        }
    }

    /// Get the cluster identifier.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Get the display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the layout hints.
    pub fn hints(&self) -> &ClusterHints {
        &self.hints
    }

    /// Borrow the cluster's children.
    pub fn children(&self) -> &[Element] {
        &self.children
    }
}

/// A diagram element: either a leaf node or a nested cluster.
#[derive(Debug, Clone)]
pub enum Element {
    Node(Node),
    Cluster(Cluster),
}

/// Line style for an edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
}

/// A directed edge between two declared nodes.
///
/// Edges optionally carry a label, a color (also applied to the label text),
/// and a line style. Multiple edges may connect the same pair of nodes.
#[derive(Debug, Clone)]
pub struct Edge {
    source: Id,
    target: Id,
    label: Option<String>,
    color: Option<Color>,
    line_style: LineStyle,
}

impl Edge {
    /// Create a new unlabeled, solid edge.
    pub fn new(source: Id, target: Id) -> Self {
        Self {
            source,
            target,
            label: None,
            color: None,
            line_style: LineStyle::Solid,
        }
    }

    /// Attach a label to the edge.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Color the edge (and its label text).
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Draw the edge dashed instead of solid.
    pub fn dashed(mut self) -> Self {
        self.line_style = LineStyle::Dashed;
        self
    }

    /// Get the source node Id of this edge.
    pub fn source(&self) -> Id {
        self.source
    }

    /// Get the target node Id of this edge.
    pub fn target(&self) -> Id {
        self.target
    }

    /// Get the edge label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Get the edge color, if any.
    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }

    /// Get the line style.
    pub fn line_style(&self) -> LineStyle {
        self.line_style
    }
}

/// Diagram flow direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    TopToBottom,
    LeftToRight,
}

impl Direction {
    /// The Graphviz `rankdir` value for this direction.
    pub fn as_dot(self) -> &'static str {
        match self {
            Direction::TopToBottom => "TB",
            Direction::LeftToRight => "LR",
        }
    }
}

/// Edge routing style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Splines {
    #[default]
    Ortho,
    Curved,
    Line,
}

impl Splines {
    /// The Graphviz `splines` value for this routing style.
    pub fn as_dot(self) -> &'static str {
        match self {
            Splines::Ortho => "ortho",
            Splines::Curved => "curved",
            Splines::Line => "line",
        }
    }
}

/// Global layout hints for the whole diagram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphHints {
    direction: Direction,
    splines: Splines,
    node_spacing: f64,
    rank_spacing: f64,
    padding: f64,
}

impl Default for GraphHints {
    fn default() -> Self {
        Self {
            direction: Direction::default(),
            splines: Splines::default(),
            node_spacing: 0.8,
            rank_spacing: 1.2,
            padding: 0.5,
        }
    }
}

impl GraphHints {
    /// Set the flow direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set the edge routing style.
    pub fn with_splines(mut self, splines: Splines) -> Self {
        self.splines = splines;
        self
    }

    /// Set the separation between nodes in the same rank, in inches.
    pub fn with_node_spacing(mut self, spacing: f64) -> Self {
        self.node_spacing = spacing;
        self
    }

    /// Set the separation between ranks, in inches.
    pub fn with_rank_spacing(mut self, spacing: f64) -> Self {
        self.rank_spacing = spacing;
        self
    }

    /// Set the padding around the drawing, in inches.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Get the flow direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Get the edge routing style.
    pub fn splines(&self) -> Splines {
        self.splines
    }

    /// Get the node spacing.
    pub fn node_spacing(&self) -> f64 {
        self.node_spacing
    }

    /// Get the rank spacing.
    pub fn rank_spacing(&self) -> f64 {
        self.rank_spacing
    }

    /// Get the drawing padding.
    pub fn padding(&self) -> f64 {
        self.padding
    }
}

/// The root diagram container.
///
/// Owns every node, cluster, and edge for the duration of a single
/// generation run. Elements are kept in declaration order so that repeated
/// runs produce identical output.
#[derive(Debug, Clone)]
pub struct Diagram {
    title: String,
    hints: GraphHints,
    elements: Vec<Element>,
    edges: Vec<Edge>,
}

impl Diagram {
    /// Create an empty diagram with the given title and global hints.
    pub fn new(title: impl Into<String>, hints: GraphHints) -> Self {
        Self {
            title: title.into(),
            hints,
            elements: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Append a top-level element (node or cluster).
    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Append an edge.
    pub fn connect(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    /// Append several edges in order.
    pub fn connect_all(&mut self, edges: impl IntoIterator<Item = Edge>) {
        self.edges.extend(edges);
    }

    /// Get the diagram title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the global layout hints.
    pub fn hints(&self) -> &GraphHints {
        &self.hints
    }

    /// Borrow the top-level elements.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Borrow the edges.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The diagram title lowercased with non-alphanumeric runs collapsed to
    /// `_`, used as the default output file stem.
    ///
    /// # Examples
    ///
    /// ```
    /// use archviz_core::semantic::{Diagram, GraphHints};
    ///
    /// let diagram = Diagram::new("Smart Coach System Architecture", GraphHints::default());
    /// assert_eq!(diagram.slug(), "smart_coach_system_architecture");
    /// ```
    pub fn slug(&self) -> String {
        let mut slug = String::with_capacity(self.title.len());
        let mut gap = false;
        for ch in self.title.chars() {
            if ch.is_alphanumeric() {
                if gap && !slug.is_empty() {
                    slug.push('_');
                }
                gap = false;
                // Lowercasing can expand to combining marks; keep only the
                // alphanumeric parts.
                slug.extend(ch.to_lowercase().filter(|c| c.is_alphanumeric()));
            } else {
                gap = true;
            }
        }
        slug
    }

    /// Every node identifier in the diagram, in declaration order.
    pub fn node_ids(&self) -> Vec<Id> {
        fn collect(elements: &[Element], ids: &mut Vec<Id>) {
            for element in elements {
                match element {
                    Element::Node(node) => ids.push(node.id()),
                    Element::Cluster(cluster) => collect(cluster.children(), ids),
                }
            }
        }

        let mut ids = Vec::new();
        collect(&self.elements, &mut ids);
        ids
    }

    /// Total number of nodes, including those nested in clusters.
    pub fn node_count(&self) -> usize {
        self.node_ids().len()
    }

    /// Total number of clusters, including nested ones.
    pub fn cluster_count(&self) -> usize {
        fn count(elements: &[Element]) -> usize {
            elements
                .iter()
                .map(|element| match element {
                    Element::Node(_) => 0,
                    Element::Cluster(cluster) => 1 + count(cluster.children()),
                })
                .sum()
        }

        count(&self.elements)
    }

    /// Check that every edge endpoint references a declared node.
    ///
    /// # Errors
    ///
    /// Returns [`SemanticError::UndeclaredNode`] naming the first endpoint
    /// that does not correspond to any declared node.
    pub fn validate(&self) -> Result<(), SemanticError> {
        let declared: std::collections::HashSet<Id> = self.node_ids().into_iter().collect();

        for edge in &self.edges {
            for endpoint in [edge.source(), edge.target()] {
                if !declared.contains(&endpoint) {
                    return Err(SemanticError::UndeclaredNode(endpoint));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn two_node_diagram() -> Diagram {
        let mut diagram = Diagram::new("Test Diagram", GraphHints::default());
        diagram.push(Element::Node(Node::new(
            Id::new("alpha"),
            "Alpha",
            NodeKind::Service,
        )));
        diagram.push(Element::Cluster(Cluster::new(
            Id::new("grouping"),
            "Grouping",
            ClusterHints::default().with_margin(10.0),
            vec![Element::Node(Node::new(
                Id::new("beta"),
                "Beta",
                NodeKind::Database,
            ))],
        )));
        diagram
    }

    #[test]
    fn slug_collapses_non_alphanumeric_runs() {
        let diagram = Diagram::new("Smart Coach System Architecture", GraphHints::default());
        assert_eq!(diagram.slug(), "smart_coach_system_architecture");

        let diagram = Diagram::new("  A -- (b) c!  ", GraphHints::default());
        assert_eq!(diagram.slug(), "a_b_c");
    }

    #[test]
    fn counts_nodes_through_nested_clusters() {
        let diagram = two_node_diagram();
        assert_eq!(diagram.node_count(), 2);
        assert_eq!(diagram.cluster_count(), 1);
        assert_eq!(diagram.node_ids(), vec![Id::new("alpha"), Id::new("beta")]);
    }

    #[test]
    fn validates_edges_between_declared_nodes() {
        let mut diagram = two_node_diagram();
        diagram.connect(Edge::new(Id::new("alpha"), Id::new("beta")).with_label("uses"));
        assert_eq!(diagram.validate(), Ok(()));
    }

    #[test]
    fn rejects_edge_to_undeclared_node() {
        let mut diagram = two_node_diagram();
        diagram.connect(Edge::new(Id::new("alpha"), Id::new("ghost")));
        assert_eq!(
            diagram.validate(),
            Err(SemanticError::UndeclaredNode(Id::new("ghost")))
        );
    }

    #[test]
    fn edge_builder_accumulates_attributes() {
        let edge = Edge::new(Id::new("a"), Id::new("b"))
            .with_label("1:N\ngoals")
            .with_color(crate::color::Color::new("darkblue").unwrap())
            .dashed();

        assert_eq!(edge.label(), Some("1:N\ngoals"));
        assert_eq!(edge.color().unwrap().as_css(), "darkblue");
        assert_eq!(edge.line_style(), LineStyle::Dashed);
    }

    proptest! {
        #[test]
        fn slug_is_always_filename_safe(title in ".{0,64}") {
            let diagram = Diagram::new(title, GraphHints::default());
            let slug = diagram.slug();
            prop_assert!(slug.chars().all(|c| c.is_alphanumeric() || c == '_'));
            prop_assert!(!slug.starts_with('_'));
        }
    }
}
