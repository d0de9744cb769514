//! Configuration for audit behavior

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

/// Main configuration for the audit process.
///
/// Passed by value into the walker and reconciler; there is no process-wide
/// mutable state. Deserializable from a TOML file via the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Modules excluded from resolution, by name
    #[serde(default)]
    pub ignored_modules: HashSet<String>,
    /// Artifact groups excluded from record collection
    #[serde(default)]
    pub ignored_groups: HashSet<String>,
    /// Path to the hand-maintained library manifest
    pub manifest_path: PathBuf,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            ignored_modules: HashSet::new(),
            ignored_groups: HashSet::new(),
            manifest_path: PathBuf::from("libraries.toml"),
        }
    }
}

impl AuditConfig {
    /// Create a new builder for AuditConfig
    pub fn builder() -> AuditConfigBuilder {
        AuditConfigBuilder::default()
    }
}

/// Builder for AuditConfig
#[derive(Default)]
pub struct AuditConfigBuilder {
    ignored_modules: HashSet<String>,
    ignored_groups: HashSet<String>,
    manifest_path: Option<PathBuf>,
}

impl AuditConfigBuilder {
    pub fn ignore_module(mut self, name: impl Into<String>) -> Self {
        self.ignored_modules.insert(name.into());
        self
    }

    pub fn ignore_group(mut self, group: impl Into<String>) -> Self {
        self.ignored_groups.insert(group.into());
        self
    }

    pub fn manifest_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.manifest_path = Some(path.into());
        self
    }

    pub fn build(self) -> AuditConfig {
        AuditConfig {
            ignored_modules: self.ignored_modules,
            ignored_groups: self.ignored_groups,
            manifest_path: self
                .manifest_path
                .unwrap_or_else(|| PathBuf::from("libraries.toml")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_ignores() {
        let config = AuditConfig::builder()
            .ignore_module("sample-app")
            .ignore_group("com.example.internal")
            .manifest_path("docs/libraries.toml")
            .build();

        assert!(config.ignored_modules.contains("sample-app"));
        assert!(config.ignored_groups.contains("com.example.internal"));
        assert_eq!(config.manifest_path, PathBuf::from("docs/libraries.toml"));
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: AuditConfig =
            toml::from_str("manifest_path = \"libraries.toml\"").unwrap();
        assert!(config.ignored_modules.is_empty());
        assert!(config.ignored_groups.is_empty());
    }
}
