//! Workflow document model for the amber-relay portfolio site.
//!
//! This crate understands exported n8n workflow definitions:
//!
//! - **Document model**: the external JSON wire format, preserved exactly
//!   (including the nested connection map) so documents round-trip
//! - **Graph extraction**: flattening the connection map into renderable
//!   edges, node bounding boxes, and a petgraph view for summary stats
//! - **Icon classification**: mapping free-text node types to display icons
//! - **Catalog**: the built-in gallery of showcased workflows
//!
//! Everything here is pure data transformation; rendering and viewport
//! state live elsewhere.

pub mod catalog;
pub mod document;
pub mod error;
pub mod graph;
pub mod icon;

pub use catalog::{CATALOG, WorkflowEntry};
pub use document::{ConnectionTarget, Connections, Position, WorkflowDocument, WorkflowNode};
pub use error::{DocumentError, ValidationWarning};
pub use graph::{GraphSummary, ResolvedEdge, compute_bounds, document_graph, resolve_edges};
pub use icon::IconKind;
