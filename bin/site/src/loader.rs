//! Filesystem loading of workflow documents.
//!
//! The viewer itself never touches I/O; this is the loading collaborator
//! that reads an exported document from disk, shape-checks it, and hands
//! back any validation warnings for the caller to log. The gallery
//! catalog acts as the allow-list: a filename not listed there is
//! rejected before any path is built, which also rules out traversal.

use crate::error::WorkflowLoadError;
use amber_relay_workflow::{ValidationWarning, WorkflowDocument, catalog};
use std::io::ErrorKind;
use std::path::Path;

/// Reads and validates a catalog document from `workflows_dir`.
///
/// # Errors
///
/// Returns an error when the filename is not in the catalog, the file is
/// missing or unreadable, or the contents do not parse as a workflow
/// document. A document that parses is returned even when validation
/// warnings are present; surfacing those is the caller's decision.
pub fn read_document(
    workflows_dir: &Path,
    filename: &str,
) -> Result<(WorkflowDocument, Vec<ValidationWarning>), WorkflowLoadError> {
    let entry = catalog::entry_by_filename(filename).ok_or_else(|| {
        WorkflowLoadError::UnknownWorkflow {
            filename: filename.to_string(),
        }
    })?;

    let path = workflows_dir.join(entry.filename);
    let json = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => WorkflowLoadError::NotFound {
            filename: filename.to_string(),
        },
        _ => WorkflowLoadError::ReadFailed {
            filename: filename.to_string(),
            details: e.to_string(),
        },
    })?;

    let document = WorkflowDocument::from_json(&json).map_err(|e| {
        WorkflowLoadError::InvalidDocument {
            filename: filename.to_string(),
            details: e.to_string(),
        }
    })?;

    let warnings = document.validate();
    Ok((document, warnings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    // A filename that is actually in the catalog.
    const CATALOG_FILENAME: &str = "gitlab_cicd_pipeline.json";

    fn write_fixture(dir: &Path, contents: &str) {
        fs::write(dir.join(CATALOG_FILENAME), contents).expect("write fixture");
    }

    #[test]
    fn loads_a_catalog_document() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_fixture(
            dir.path(),
            r#"{
                "name": "Pipeline",
                "nodes": [
                    {"id": "1", "name": "Webhook", "type": "n8n-nodes-base.webhook", "position": [0, 0]},
                    {"id": "2", "name": "Build", "type": "n8n-nodes-base.gitlab", "position": [260, 0]}
                ],
                "connections": {
                    "Webhook": {"main": [[{"node": "Build", "type": "main", "index": 0}]]}
                }
            }"#,
        );

        let (document, warnings) =
            read_document(dir.path(), CATALOG_FILENAME).expect("load document");
        assert_eq!(document.name, "Pipeline");
        assert_eq!(document.nodes.len(), 2);
        assert!(warnings.is_empty());
    }

    #[test]
    fn reports_duplicate_name_warnings() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_fixture(
            dir.path(),
            r#"{
                "name": "Pipeline",
                "nodes": [
                    {"id": "1", "name": "Twin", "type": "t", "position": [0, 0]},
                    {"id": "2", "name": "Twin", "type": "t", "position": [100, 0]}
                ],
                "connections": {}
            }"#,
        );

        let (_, warnings) = read_document(dir.path(), CATALOG_FILENAME).expect("load document");
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn rejects_filenames_outside_the_catalog() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = read_document(dir.path(), "../../etc/passwd");
        assert!(matches!(
            result,
            Err(WorkflowLoadError::UnknownWorkflow { .. })
        ));
    }

    #[test]
    fn rejects_missing_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = read_document(dir.path(), CATALOG_FILENAME);
        assert!(matches!(result, Err(WorkflowLoadError::NotFound { .. })));
    }

    #[test]
    fn rejects_malformed_documents() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_fixture(dir.path(), "{ not json");
        let result = read_document(dir.path(), CATALOG_FILENAME);
        assert!(matches!(
            result,
            Err(WorkflowLoadError::InvalidDocument { .. })
        ));
    }
}
