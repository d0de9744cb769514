//! File-backed metadata store

use super::{MetadataProvider, PomDocument};
use crate::error::{AuditError, Result};
use crate::identity::ArtifactIdentity;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Metadata documents keyed by `group:name:version`, loaded from a JSON file.
///
/// The file is a single object mapping coordinates to POM documents, typically
/// exported alongside the graph snapshot by the build system.
#[derive(Debug, Clone, Default)]
pub struct MetadataStore {
    documents: HashMap<String, PomDocument>,
}

impl MetadataStore {
    pub fn new(documents: HashMap<String, PomDocument>) -> Self {
        Self { documents }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let documents: HashMap<String, PomDocument> = serde_json::from_str(&content)?;
        debug!(
            "Loaded metadata store from {}: {} documents",
            path.display(),
            documents.len()
        );
        Ok(Self { documents })
    }
}

impl MetadataProvider for MetadataStore {
    fn fetch(&self, identity: &ArtifactIdentity) -> Result<PomDocument> {
        let coordinate = identity.to_string();
        self.documents
            .get(&coordinate)
            .cloned()
            .ok_or_else(|| AuditError::metadata(coordinate, "no metadata document found"))
    }
}
