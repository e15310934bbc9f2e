//! Lowering from the semantic model to the DOT graph language.
//!
//! This module maps the declarative diagram model onto `dot-structures`
//! statements. Clusters become `cluster_`-prefixed subgraphs (the prefix is
//! what makes Graphviz draw a box around them), layout hints become graph
//! attributes, and every label is quote-escaped on the way through.

use dot_generator::*;
use dot_structures::*;

use archviz_core::{color::Color, semantic as sem};

/// Lower a semantic diagram into a DOT graph.
///
/// The caller is expected to have validated the diagram already; lowering
/// itself never fails.
pub(crate) fn lower(diagram: &sem::Diagram, background: Option<&Color>) -> Graph {
    let slug = diagram.slug();
    let id = if slug.is_empty() { id!() } else { id!(slug) };

    let mut stmts = vec![
        Stmt::GAttribute(GraphAttributes::Graph(graph_attrs(diagram, background))),
        Stmt::GAttribute(GraphAttributes::Node(vec![
            attr!("style", "filled"),
            esc_attr("fontname", "Helvetica"),
        ])),
        Stmt::GAttribute(GraphAttributes::Edge(vec![
            esc_attr("fontname", "Helvetica"),
            attr!("fontsize", 11),
        ])),
    ];

    for element in diagram.elements() {
        stmts.push(lower_element(element));
    }
    for edge in diagram.edges() {
        stmts.push(lower_edge(edge));
    }

    Graph::DiGraph {
        id,
        strict: false,
        stmts,
    }
}

fn graph_attrs(diagram: &sem::Diagram, background: Option<&Color>) -> Vec<Attribute> {
    let hints = diagram.hints();
    let mut attrs = vec![
        esc_attr("label", diagram.title()),
        attr!("labelloc", "t"),
        attr!("fontsize", 20),
        esc_attr("fontname", "Helvetica"),
        attr!("rankdir", hints.direction().as_dot()),
        attr!("splines", hints.splines().as_dot()),
        attr!("nodesep", hints.node_spacing()),
        attr!("ranksep", hints.rank_spacing()),
        attr!("pad", hints.padding()),
    ];
    if let Some(color) = background {
        attrs.push(esc_attr("bgcolor", color.as_css()));
    }
    attrs
}

fn lower_element(element: &sem::Element) -> Stmt {
    match element {
        sem::Element::Node(node) => lower_node(node),
        sem::Element::Cluster(cluster) => lower_cluster(cluster),
    }
}

fn lower_node(node: &sem::Node) -> Stmt {
    Stmt::Node(Node {
        id: node_id!(node.id()),
        attributes: vec![
            esc_attr("label", node.label()),
            attr!("shape", node.kind().shape()),
            attr!("fillcolor", node.kind().fill_color()),
        ],
    })
}

fn lower_cluster(cluster: &sem::Cluster) -> Stmt {
    let mut stmts = vec![Stmt::Attribute(esc_attr("label", cluster.label()))];

    let hints = cluster.hints();
    if let Some(margin) = hints.margin() {
        stmts.push(Stmt::Attribute(attr!("margin", margin)));
    }
    if let Some(spacing) = hints.node_spacing() {
        stmts.push(Stmt::Attribute(attr!("nodesep", spacing)));
    }
    if let Some(spacing) = hints.rank_spacing() {
        stmts.push(Stmt::Attribute(attr!("ranksep", spacing)));
    }

    for child in cluster.children() {
        stmts.push(lower_element(child));
    }

    Stmt::Subgraph(Subgraph {
        id: id!(format!("cluster_{}", cluster.id())),
        stmts,
    })
}

fn lower_edge(edge: &sem::Edge) -> Stmt {
    let mut attributes = Vec::new();
    if let Some(label) = edge.label() {
        attributes.push(esc_attr("label", label));
    }
    if let Some(color) = edge.color() {
        attributes.push(esc_attr("color", color.as_css()));
        attributes.push(esc_attr("fontcolor", color.as_css()));
    }
    if edge.line_style() == sem::LineStyle::Dashed {
        attributes.push(attr!("style", "dashed"));
    }

    Stmt::Edge(Edge {
        ty: EdgeTy::Pair(
            Vertex::N(node_id!(edge.source())),
            Vertex::N(node_id!(edge.target())),
        ),
        attributes,
    })
}

/// An attribute whose value is carried as a quote-escaped DOT string.
fn esc_attr(key: &str, value: &str) -> Attribute {
    Attribute(Id::Plain(key.to_string()), Id::Escaped(quoted(value)))
}

/// Quote a label for DOT: wrap in double quotes and escape backslashes,
/// quotes, and embedded newlines.
fn quoted(text: &str) -> String {
    let escaped = text
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n");
    format!("\"{escaped}\"")
}

#[cfg(test)]
mod tests {
    use archviz_core::{
        identifier::Id,
        semantic::{Cluster, ClusterHints, Diagram, Edge, Element, GraphHints, Node, NodeKind},
    };
    use graphviz_rust::printer::{DotPrinter, PrinterContext};

    use super::*;

    fn sample_diagram() -> sem::Diagram {
        let mut diagram = Diagram::new("Sample", GraphHints::default());
        diagram.push(Element::Node(Node::new(
            Id::new("outside"),
            "Outside",
            NodeKind::Client,
        )));
        diagram.push(Element::Cluster(Cluster::new(
            Id::new("tier"),
            "Tier (Port 1234)",
            ClusterHints::default().with_margin(15.0),
            vec![Element::Node(Node::new(
                Id::new("inside"),
                "Inside\n(Nested)",
                NodeKind::Service,
            ))],
        )));
        diagram.connect(
            Edge::new(Id::new("outside"), Id::new("inside"))
                .with_label("calls")
                .with_color(Color::new("red").unwrap()),
        );
        diagram
    }

    #[test]
    fn quoted_escapes_quotes_and_newlines() {
        assert_eq!(quoted("plain"), "\"plain\"");
        assert_eq!(quoted("two\nlines"), "\"two\\nlines\"");
        assert_eq!(quoted("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(quoted("back\\slash"), "\"back\\\\slash\"");
    }

    #[test]
    fn clusters_get_the_cluster_prefix() {
        let graph = lower(&sample_diagram(), None);
        let printed = graph.print(&mut PrinterContext::default());
        assert!(printed.contains("digraph sample"));
        assert!(printed.contains("subgraph cluster_tier"));
        assert!(printed.contains("\"Tier (Port 1234)\""));
    }

    #[test]
    fn edges_carry_label_and_color() {
        let graph = lower(&sample_diagram(), None);
        let printed = graph.print(&mut PrinterContext::default());
        assert!(printed.contains("outside -> inside"));
        assert!(printed.contains("label=\"calls\""));
        assert!(printed.contains("color=\"red\""));
        assert!(printed.contains("fontcolor=\"red\""));
    }

    #[test]
    fn background_color_becomes_bgcolor() {
        let background = Color::new("ivory").unwrap();
        let graph = lower(&sample_diagram(), Some(&background));
        let printed = graph.print(&mut PrinterContext::default());
        assert!(printed.contains("bgcolor=\"ivory\""));
    }

    #[test]
    fn multiline_labels_use_dot_escapes() {
        let graph = lower(&sample_diagram(), None);
        let printed = graph.print(&mut PrinterContext::default());
        assert!(printed.contains("\"Inside\\n(Nested)\""));
    }
}
