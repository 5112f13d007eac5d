//! Graph extraction over workflow documents.
//!
//! The wire format addresses nodes by name through a nested connection
//! map. Rendering wants a flat list of endpoint pairs, and the gallery
//! wants per-document summary stats. Both views are derived here; the
//! document itself is never mutated.

use crate::document::{WorkflowDocument, WorkflowNode};
use amber_relay_core::Bounds;
use petgraph::Direction;
use petgraph::graph::DiGraph;
use std::collections::HashMap;

/// A renderable edge with both endpoints resolved.
///
/// Ephemeral: recomputed whenever the document changes, with no identity
/// beyond the endpoint pair. Duplicate edges are legitimate (several
/// connection groups may point at the same node) and each is rendered
/// independently.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedEdge<'a> {
    pub from: &'a WorkflowNode,
    pub to: &'a WorkflowNode,
}

/// Name -> node lookup. On duplicate names the first node wins, matching
/// the resolution order documented in DESIGN.md.
fn name_lookup(nodes: &[WorkflowNode]) -> HashMap<&str, &WorkflowNode> {
    let mut lookup = HashMap::with_capacity(nodes.len());
    for node in nodes {
        lookup.entry(node.name.as_str()).or_insert(node);
    }
    lookup
}

/// Flattens the nested connection map into renderable edges.
///
/// Targets referencing names absent from `nodes` are skipped silently:
/// exported documents may reference pruned or renamed nodes, and one
/// dangling reference must not abort rendering of the rest of the graph.
#[must_use]
pub fn resolve_edges(document: &WorkflowDocument) -> Vec<ResolvedEdge<'_>> {
    let lookup = name_lookup(&document.nodes);
    let mut edges = Vec::new();

    for (source_name, outputs) in &document.connections {
        let Some(&from) = lookup.get(source_name.as_str()) else {
            continue;
        };
        for groups in outputs.values() {
            for group in groups {
                for target in group {
                    if let Some(&to) = lookup.get(target.node.as_str()) {
                        edges.push(ResolvedEdge { from, to });
                    }
                }
            }
        }
    }

    edges
}

/// Axis-aligned bounding box of all node positions.
///
/// Returns the zero-sized box at the origin for an empty slice, so
/// centering logic downstream always has a defined target.
#[must_use]
pub fn compute_bounds(nodes: &[WorkflowNode]) -> Bounds {
    let mut iter = nodes.iter();
    let Some(first) = iter.next() else {
        return Bounds::ZERO;
    };
    iter.fold(Bounds::at_point(first.position.to_point()), |bounds, node| {
        bounds.expanded_to(node.position.to_point())
    })
}

/// Builds a petgraph view of the document for structural queries.
///
/// Node weights borrow from the document; edges follow the resolved-edge
/// view (unresolvable targets are absent here too).
#[must_use]
pub fn document_graph(document: &WorkflowDocument) -> DiGraph<&WorkflowNode, ()> {
    let mut graph = DiGraph::new();
    let mut indices = HashMap::with_capacity(document.nodes.len());

    for node in &document.nodes {
        let index = graph.add_node(node);
        indices.entry(node.name.as_str()).or_insert(index);
    }

    for edge in resolve_edges(document) {
        if let (Some(&from), Some(&to)) = (
            indices.get(edge.from.name.as_str()),
            indices.get(edge.to.name.as_str()),
        ) {
            graph.add_edge(from, to, ());
        }
    }

    graph
}

/// Structural summary shown in the viewer header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphSummary {
    /// Total nodes in the document.
    pub node_count: usize,
    /// Resolved edges (unresolvable connection targets excluded).
    pub edge_count: usize,
    /// Nodes with no incoming edges (triggers and orphans).
    pub entry_count: usize,
    /// Nodes with no outgoing edges.
    pub terminal_count: usize,
}

impl GraphSummary {
    /// Computes the summary for a document.
    #[must_use]
    pub fn of(document: &WorkflowDocument) -> Self {
        let graph = document_graph(document);
        let entry_count = graph
            .node_indices()
            .filter(|&idx| graph.edges_directed(idx, Direction::Incoming).count() == 0)
            .count();
        let terminal_count = graph
            .node_indices()
            .filter(|&idx| graph.edges_directed(idx, Direction::Outgoing).count() == 0)
            .count();

        Self {
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            entry_count,
            terminal_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(json: &str) -> WorkflowDocument {
        WorkflowDocument::from_json(json).expect("parse")
    }

    fn two_node_doc(target_name: &str) -> WorkflowDocument {
        document(&format!(
            r#"{{
                "name": "Pair",
                "nodes": [
                    {{"id": "1", "name": "A", "type": "t", "position": [0, 0]}},
                    {{"id": "2", "name": "B", "type": "t", "position": [200, 50]}}
                ],
                "connections": {{
                    "A": {{"out": [[{{"node": "{target_name}", "type": "main", "index": 0}}]]}}
                }}
            }}"#
        ))
    }

    #[test]
    fn resolves_single_edge() {
        let doc = two_node_doc("B");
        let edges = resolve_edges(&doc);
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].from.name, "A");
        assert_eq!(edges[0].to.name, "B");
    }

    #[test]
    fn skips_unresolvable_target() {
        let doc = two_node_doc("C");
        assert!(resolve_edges(&doc).is_empty());
    }

    #[test]
    fn skips_unknown_source() {
        let doc = document(
            r#"{
                "name": "Ghost",
                "nodes": [{"id": "1", "name": "A", "type": "t", "position": [0, 0]}],
                "connections": {
                    "Ghost": {"out": [[{"node": "A", "type": "main", "index": 0}]]}
                }
            }"#,
        );
        assert!(resolve_edges(&doc).is_empty());
    }

    #[test]
    fn edges_only_reference_document_nodes() {
        let doc = document(
            r#"{
                "name": "Mixed",
                "nodes": [
                    {"id": "1", "name": "A", "type": "t", "position": [0, 0]},
                    {"id": "2", "name": "B", "type": "t", "position": [100, 0]},
                    {"id": "3", "name": "C", "type": "t", "position": [200, 0]}
                ],
                "connections": {
                    "A": {"out": [
                        [{"node": "B", "type": "main", "index": 0},
                         {"node": "Missing", "type": "main", "index": 0}],
                        [{"node": "C", "type": "main", "index": 0}]
                    ]},
                    "B": {"out": [[{"node": "C", "type": "main", "index": 0}]]}
                }
            }"#,
        );
        let edges = resolve_edges(&doc);
        assert_eq!(edges.len(), 3);
        for edge in &edges {
            assert!(doc.nodes.iter().any(|n| std::ptr::eq(n, edge.from)));
            assert!(doc.nodes.iter().any(|n| std::ptr::eq(n, edge.to)));
        }
    }

    #[test]
    fn duplicate_groups_yield_duplicate_edges() {
        let doc = document(
            r#"{
                "name": "Fanout",
                "nodes": [
                    {"id": "1", "name": "A", "type": "t", "position": [0, 0]},
                    {"id": "2", "name": "B", "type": "t", "position": [100, 0]}
                ],
                "connections": {
                    "A": {"out": [
                        [{"node": "B", "type": "main", "index": 0}],
                        [{"node": "B", "type": "main", "index": 1}]
                    ]}
                }
            }"#,
        );
        assert_eq!(resolve_edges(&doc).len(), 2);
    }

    #[test]
    fn bounds_cover_every_position() {
        let doc = document(
            r#"{
                "name": "Spread",
                "nodes": [
                    {"id": "1", "name": "A", "type": "t", "position": [-50, 300]},
                    {"id": "2", "name": "B", "type": "t", "position": [420, -80]},
                    {"id": "3", "name": "C", "type": "t", "position": [10, 10]}
                ],
                "connections": {}
            }"#,
        );
        let bounds = compute_bounds(&doc.nodes);
        assert!(bounds.min_x <= bounds.max_x);
        assert!(bounds.min_y <= bounds.max_y);
        for node in &doc.nodes {
            assert!(bounds.contains(node.position.to_point()));
        }
        assert_eq!(bounds, Bounds::new(-50.0, -80.0, 420.0, 300.0));
    }

    #[test]
    fn empty_document_has_zero_bounds() {
        assert_eq!(compute_bounds(&[]), Bounds::ZERO);
    }

    #[test]
    fn summary_counts_entries_and_terminals() {
        let doc = document(
            r#"{
                "name": "Chain",
                "nodes": [
                    {"id": "1", "name": "A", "type": "t", "position": [0, 0]},
                    {"id": "2", "name": "B", "type": "t", "position": [100, 0]},
                    {"id": "3", "name": "C", "type": "t", "position": [200, 0]}
                ],
                "connections": {
                    "A": {"out": [[{"node": "B", "type": "main", "index": 0}]]},
                    "B": {"out": [[{"node": "C", "type": "main", "index": 0}]]}
                }
            }"#,
        );
        let summary = GraphSummary::of(&doc);
        assert_eq!(summary.node_count, 3);
        assert_eq!(summary.edge_count, 2);
        assert_eq!(summary.entry_count, 1);
        assert_eq!(summary.terminal_count, 1);
    }

    #[test]
    fn summary_of_empty_document() {
        let doc = document(r#"{"name": "Empty", "nodes": [], "connections": {}}"#);
        let summary = GraphSummary::of(&doc);
        assert_eq!(summary.node_count, 0);
        assert_eq!(summary.edge_count, 0);
        assert_eq!(summary.entry_count, 0);
        assert_eq!(summary.terminal_count, 0);
    }
}
