//! Domain error types for server operations.
//!
//! Typed error variants for the site's server functions. Internal detail
//! stays in the variant (and in the server logs); `into_server_error`
//! maps each variant to a user-safe message.

use leptos::server_fn::error::ServerFnError;
use std::fmt;

/// Errors from loading a workflow document for the viewer.
#[derive(Debug)]
pub enum WorkflowLoadError {
    /// The requested filename is not in the gallery catalog.
    UnknownWorkflow { filename: String },
    /// The document file does not exist in the workflows directory.
    NotFound { filename: String },
    /// The document file could not be read.
    ReadFailed { filename: String, details: String },
    /// The file exists but does not parse as a workflow document.
    InvalidDocument { filename: String, details: String },
}

impl fmt::Display for WorkflowLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownWorkflow { filename } => {
                write!(f, "workflow '{}' is not in the catalog", filename)
            }
            Self::NotFound { filename } => {
                write!(f, "workflow document '{}' not found", filename)
            }
            Self::ReadFailed { filename, details } => {
                write!(f, "failed to read workflow document '{}': {}", filename, details)
            }
            Self::InvalidDocument { filename, details } => {
                write!(f, "invalid workflow document '{}': {}", filename, details)
            }
        }
    }
}

impl std::error::Error for WorkflowLoadError {}

impl WorkflowLoadError {
    /// Convert to a user-safe ServerFnError.
    pub fn into_server_error(self) -> ServerFnError {
        match &self {
            WorkflowLoadError::UnknownWorkflow { .. } => ServerFnError::new("Unknown workflow"),
            WorkflowLoadError::NotFound { .. } => ServerFnError::new("Workflow not found"),
            WorkflowLoadError::ReadFailed { .. } => ServerFnError::new("Failed to read workflow"),
            WorkflowLoadError::InvalidDocument { .. } => {
                ServerFnError::new("Workflow document is invalid")
            }
        }
    }
}

/// Errors from the contact form.
#[derive(Debug)]
pub enum ContactError {
    /// A required field was empty.
    MissingField { field: &'static str },
    /// The email address does not look like one.
    InvalidEmail,
    /// The message exceeds the configured size limit.
    MessageTooLong { limit: usize },
}

impl fmt::Display for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { field } => write!(f, "missing required field '{}'", field),
            Self::InvalidEmail => write!(f, "invalid email address"),
            Self::MessageTooLong { limit } => {
                write!(f, "message exceeds the {} byte limit", limit)
            }
        }
    }
}

impl std::error::Error for ContactError {}

impl ContactError {
    /// Convert to a user-safe ServerFnError.
    pub fn into_server_error(self) -> ServerFnError {
        match &self {
            ContactError::MissingField { field } => {
                ServerFnError::new(format!("Please fill in the {} field", field))
            }
            ContactError::InvalidEmail => ServerFnError::new("Please enter a valid email address"),
            ContactError::MessageTooLong { .. } => ServerFnError::new("Message is too long"),
        }
    }
}
