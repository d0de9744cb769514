//! License metadata retrieval for resolved artifacts
//!
//! POM retrieval is an external concern; the core consumes it through
//! [`MetadataProvider`]. [`store::MetadataStore`] is the file-backed provider
//! used by the CLI and tests.

mod store;

pub use store::MetadataStore;

use crate::error::Result;
use crate::identity::ArtifactIdentity;
use serde::{Deserialize, Serialize};

/// One license entry from an artifact's metadata document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PomLicense {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// The slice of a POM document the audit consumes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PomDocument {
    #[serde(default)]
    pub licenses: Vec<PomLicense>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Provider of license metadata for a `group:name:version` coordinate.
///
/// Fetches are blocking; a failed fetch is recovered by the caller
/// (skip-and-continue), never fatal to the run.
pub trait MetadataProvider {
    fn fetch(&self, identity: &ArtifactIdentity) -> Result<PomDocument>;
}
