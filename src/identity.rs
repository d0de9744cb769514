//! Versioned artifact coordinates with wildcard-version matching

use crate::error::{AuditError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Version token used by manifest entries that cover every version of a
/// `group:name` pair.
pub const WILDCARD_VERSION: &str = "+";

/// A `group:name:version` coordinate. Immutable once constructed.
///
/// The version may be the wildcard token [`WILDCARD_VERSION`], which is only
/// ever written by the manifest (or by [`ArtifactIdentity::with_wildcard_version`]
/// when rendering one); resolution always produces concrete versions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtifactIdentity {
    group: String,
    name: String,
    version: String,
}

impl ArtifactIdentity {
    /// Parse a colon-delimited `group:name:version` triple.
    ///
    /// Fails with [`AuditError::MalformedIdentity`] unless the text splits
    /// into exactly three non-empty segments.
    pub fn parse(text: &str) -> Result<Self> {
        let segments: Vec<&str> = text.split(':').collect();
        match segments.as_slice() {
            [group, name, version]
                if !group.is_empty() && !name.is_empty() && !version.is_empty() =>
            {
                Ok(Self {
                    group: group.to_string(),
                    name: name.to_string(),
                    version: version.to_string(),
                })
            }
            _ => Err(AuditError::MalformedIdentity(text.to_string())),
        }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Copy of this identity with the version replaced by the wildcard token.
    /// Used for manifest-entry rendering and matching, never for resolution.
    pub fn with_wildcard_version(&self) -> Self {
        Self {
            group: self.group.clone(),
            name: self.name.clone(),
            version: WILDCARD_VERSION.to_string(),
        }
    }

    /// Wildcard-aware equality: group and name must be equal, and the
    /// versions must either be equal or one side must be the wildcard token.
    pub fn matches(&self, other: &ArtifactIdentity) -> bool {
        self.group == other.group
            && self.name == other.name
            && (self.version == other.version
                || self.version == WILDCARD_VERSION
                || other.version == WILDCARD_VERSION)
    }
}

impl fmt::Display for ArtifactIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.name, self.version)
    }
}
