//! The n8n workflow document wire format.
//!
//! Documents are exported by the n8n editor and consumed read-only. The
//! shape here is a structural contract: the triple-nested `connections`
//! map (output slot -> connection group -> targets) models n8n's
//! branching semantics and is preserved as-is so a document can round-trip
//! through this model. Only the derived edge view in [`crate::graph`]
//! flattens it, and only for rendering.
//!
//! Fields this viewer does not understand (`typeVersion`, `settings`,
//! newer export keys) are retained in `extra` maps rather than dropped.

use crate::error::{DocumentError, ValidationWarning};
use amber_relay_core::Point;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::{BTreeMap, HashSet};

/// The nested connection map: source node *name* -> output slot ->
/// ordered connection groups -> ordered targets.
pub type Connections = BTreeMap<String, BTreeMap<String, Vec<Vec<ConnectionTarget>>>>;

/// A node position in document/world coordinates.
///
/// Serialized as a two-element `[x, y]` array, matching the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Creates a position from its coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The position as a geometry point.
    #[must_use]
    pub const fn to_point(self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl From<[f64; 2]> for Position {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Position> for [f64; 2] {
    fn from(position: Position) -> Self {
        [position.x, position.y]
    }
}

/// One target of a connection group.
///
/// `node` references the target by its display name; `kind` and `index`
/// are n8n's connection type and input index, carried verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionTarget {
    pub node: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub index: u32,
}

/// A single node of a workflow document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowNode {
    /// Unique identifier within the document.
    pub id: String,
    /// Display name; also the key `connections` uses to address this node.
    pub name: String,
    /// Free-text category (e.g. `n8n-nodes-base.webhook`), used only to
    /// pick a display icon.
    #[serde(rename = "type")]
    pub kind: String,
    /// Position in world coordinates, independent of any viewport.
    pub position: Position,
    /// Open-ended attribute bag, display-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<JsonValue>,
    /// Credential slot name -> opaque reference. Only the slot *names*
    /// are ever rendered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<BTreeMap<String, JsonValue>>,
    /// Fields this viewer does not model, retained for round-tripping.
    #[serde(flatten)]
    pub extra: BTreeMap<String, JsonValue>,
}

/// A complete exported workflow document.
///
/// Treated as immutable for the lifetime of a viewer session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowDocument {
    /// Display label.
    pub name: String,
    /// Nodes in source-document order. Order does not affect rendering;
    /// positions are absolute.
    pub nodes: Vec<WorkflowNode>,
    /// The nested connection map, preserved exactly.
    #[serde(default)]
    pub connections: Connections,
    /// Top-level fields this viewer does not model.
    #[serde(flatten)]
    pub extra: BTreeMap<String, JsonValue>,
}

impl WorkflowDocument {
    /// Parses a document from exported JSON and checks the id-uniqueness
    /// invariant.
    ///
    /// # Errors
    ///
    /// Returns an error when the JSON does not match the wire format or
    /// two nodes share an `id`. Loaders should fail fast on these rather
    /// than hand a corrupted document to the renderer.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let document: Self = serde_json::from_str(json).map_err(|e| DocumentError::Parse {
            details: e.to_string(),
        })?;

        let mut seen = HashSet::with_capacity(document.nodes.len());
        for node in &document.nodes {
            if !seen.insert(node.id.as_str()) {
                return Err(DocumentError::DuplicateNodeId {
                    id: node.id.clone(),
                });
            }
        }

        Ok(document)
    }

    /// Checks the document for conditions worth surfacing to whoever
    /// loaded it.
    ///
    /// Duplicate node names make connection resolution ambiguous (targets
    /// are addressed by name); resolution keeps the first match, and the
    /// loader decides whether to log the warning. The core itself never
    /// reports anything at render time.
    #[must_use]
    pub fn validate(&self) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();
        let mut seen = HashSet::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if !seen.insert(node.name.as_str()) {
                warnings.push(ValidationWarning::DuplicateNodeName {
                    name: node.name.clone(),
                });
            }
        }
        warnings
    }

    /// Looks up a node by its display name (first match wins).
    #[must_use]
    pub fn node_by_name(&self, name: &str) -> Option<&WorkflowNode> {
        self.nodes.iter().find(|n| n.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "name": "Sample",
            "nodes": [
                {
                    "id": "1",
                    "name": "Webhook",
                    "type": "n8n-nodes-base.webhook",
                    "typeVersion": 1.1,
                    "position": [0, 100],
                    "parameters": {"path": "incoming"}
                },
                {
                    "id": "2",
                    "name": "Slack",
                    "type": "n8n-nodes-base.slack",
                    "position": [260, 100],
                    "credentials": {"slackApi": {"id": "9", "name": "bot"}}
                }
            ],
            "connections": {
                "Webhook": {
                    "main": [[{"node": "Slack", "type": "main", "index": 0}]]
                }
            },
            "active": false
        }"#
    }

    #[test]
    fn parses_wire_format() {
        let document = WorkflowDocument::from_json(sample_json()).expect("parse");
        assert_eq!(document.name, "Sample");
        assert_eq!(document.nodes.len(), 2);
        assert_eq!(document.nodes[0].position, Position::new(0.0, 100.0));
        assert_eq!(document.nodes[0].kind, "n8n-nodes-base.webhook");

        let targets = &document.connections["Webhook"]["main"][0];
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].node, "Slack");
        assert_eq!(targets[0].index, 0);
    }

    #[test]
    fn retains_unknown_fields() {
        let document = WorkflowDocument::from_json(sample_json()).expect("parse");
        assert!(document.extra.contains_key("active"));
        assert!(document.nodes[0].extra.contains_key("typeVersion"));
    }

    #[test]
    fn roundtrip_preserves_connections() {
        let document = WorkflowDocument::from_json(sample_json()).expect("parse");
        let json = serde_json::to_string(&document).expect("serialize");
        let reparsed = WorkflowDocument::from_json(&json).expect("reparse");
        assert_eq!(document, reparsed);
    }

    #[test]
    fn rejects_malformed_json() {
        let result = WorkflowDocument::from_json("{\"name\": ");
        assert!(matches!(result, Err(DocumentError::Parse { .. })));
    }

    #[test]
    fn rejects_duplicate_node_ids() {
        let json = r#"{
            "name": "Broken",
            "nodes": [
                {"id": "1", "name": "A", "type": "t", "position": [0, 0]},
                {"id": "1", "name": "B", "type": "t", "position": [10, 0]}
            ],
            "connections": {}
        }"#;
        let result = WorkflowDocument::from_json(json);
        assert!(matches!(
            result,
            Err(DocumentError::DuplicateNodeId { id }) if id == "1"
        ));
    }

    #[test]
    fn missing_connections_defaults_to_empty() {
        let json = r#"{
            "name": "Lonely",
            "nodes": [{"id": "1", "name": "A", "type": "t", "position": [0, 0]}]
        }"#;
        let document = WorkflowDocument::from_json(json).expect("parse");
        assert!(document.connections.is_empty());
    }

    #[test]
    fn duplicate_names_surface_a_warning() {
        let json = r#"{
            "name": "Ambiguous",
            "nodes": [
                {"id": "1", "name": "Twin", "type": "t", "position": [0, 0]},
                {"id": "2", "name": "Twin", "type": "t", "position": [10, 0]}
            ],
            "connections": {}
        }"#;
        let document = WorkflowDocument::from_json(json).expect("parse");
        let warnings = document.validate();
        assert_eq!(warnings.len(), 1);
        assert!(matches!(
            &warnings[0],
            ValidationWarning::DuplicateNodeName { name } if name == "Twin"
        ));
    }

    #[test]
    fn unique_names_validate_clean() {
        let document = WorkflowDocument::from_json(sample_json()).expect("parse");
        assert!(document.validate().is_empty());
    }

    #[test]
    fn node_by_name_returns_first_match() {
        let document = WorkflowDocument::from_json(sample_json()).expect("parse");
        let node = document.node_by_name("Slack").expect("node");
        assert_eq!(node.id, "2");
        assert!(document.node_by_name("Missing").is_none());
    }
}
