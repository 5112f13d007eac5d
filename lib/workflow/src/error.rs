//! Error types for the workflow document model.
//!
//! Parse failures are hard errors: the loader must fail fast rather than
//! hand a corrupted document to the renderer. Conditions the viewer can
//! live with (ambiguous node names) are warnings the loader may log.

use std::fmt;

/// Errors from parsing or shape-checking a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// The JSON did not match the wire format.
    Parse { details: String },
    /// Two nodes share an `id`, violating the format's invariant.
    DuplicateNodeId { id: String },
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse { details } => {
                write!(f, "document does not match the workflow format: {details}")
            }
            Self::DuplicateNodeId { id } => {
                write!(f, "duplicate node id '{id}'")
            }
        }
    }
}

impl std::error::Error for DocumentError {}

/// Conditions worth reporting to whoever loaded the document, without
/// blocking the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationWarning {
    /// Two nodes share a display name; connection resolution keeps the
    /// first match.
    DuplicateNodeName { name: String },
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateNodeName { name } => {
                write!(
                    f,
                    "duplicate node name '{name}': connections to it resolve to the first occurrence"
                )
            }
        }
    }
}
