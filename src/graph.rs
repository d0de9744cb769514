//! Module-graph model and the snapshot-backed provider
//!
//! The build system is treated as an external graph-query service. The core
//! only needs to enumerate modules, enumerate a module's configurations, and
//! read a configuration's resolved artifacts; [`ModuleGraph`] captures exactly
//! that. [`GraphSnapshot`] is the concrete provider used by the CLI and tests,
//! loading a JSON export of the live graph.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// One resolved external dependency at a specific version, plus its backing file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedArtifact {
    pub group: String,
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub file_name: Option<String>,
}

impl ResolvedArtifact {
    /// Formatted `group:name:version` coordinate, the identity used for
    /// deduplication and module lookup.
    pub fn coordinate(&self) -> String {
        format!("{}:{}:{}", self.group, self.name, self.version)
    }
}

/// A named bucket of dependencies within a module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Configuration {
    pub name: String,
    #[serde(default)]
    pub artifacts: Vec<ResolvedArtifact>,
}

/// One buildable unit within the project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    pub name: String,
    /// The module's own publishable coordinate, when it has one. Inter-module
    /// dependencies surface in sibling configurations under this coordinate.
    #[serde(default)]
    pub coordinate: Option<String>,
    #[serde(default)]
    pub configurations: Vec<Configuration>,
}

/// Read-only view of the project's module graph.
pub trait ModuleGraph {
    fn modules(&self) -> &[Module];
}

/// A JSON export of the module graph, standing in for live graph queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub modules: Vec<Module>,
}

impl GraphSnapshot {
    /// Load a snapshot from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let snapshot: GraphSnapshot = serde_json::from_str(&content)?;
        debug!(
            "Loaded graph snapshot from {}: {} modules",
            path.display(),
            snapshot.modules.len()
        );
        Ok(snapshot)
    }
}

impl ModuleGraph for GraphSnapshot {
    fn modules(&self) -> &[Module] {
        &self.modules
    }
}
