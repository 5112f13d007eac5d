//! UI components: the portfolio sections and the workflow viewer.

pub mod about;
pub mod certifications;
pub mod contact;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod languages;
pub mod navbar;
pub mod node_icon;
pub mod projects;
pub mod skills;
pub mod workflow_viewer;
pub mod workflows;
