//! Centralized site configuration.
//!
//! This module provides strongly-typed configuration for the server,
//! loaded via the `config` crate from environment variables.

use serde::Deserialize;
use std::path::PathBuf;

/// Site configuration.
#[derive(Debug, Deserialize)]
pub struct SiteConfig {
    /// Directory containing the exported workflow documents the gallery
    /// serves. Only filenames listed in the built-in catalog are ever
    /// read from it.
    #[serde(default = "default_workflows_dir")]
    pub workflows_dir: PathBuf,

    /// Contact form configuration.
    #[serde(default)]
    pub contact: ContactConfig,
}

/// Contact form related configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactConfig {
    /// Maximum accepted message length in bytes.
    #[serde(default = "default_max_message_bytes")]
    pub max_message_bytes: usize,
}

fn default_workflows_dir() -> PathBuf {
    PathBuf::from("workflows")
}

fn default_max_message_bytes() -> usize {
    4096
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            max_message_bytes: default_max_message_bytes(),
        }
    }
}

impl SiteConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if present configuration values are invalid.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_config_has_correct_defaults() {
        let config = ContactConfig::default();
        assert_eq!(config.max_message_bytes, 4096);
    }

    #[test]
    fn workflows_dir_defaults_to_local_directory() {
        assert_eq!(default_workflows_dir(), PathBuf::from("workflows"));
    }
}
