//! Core data types for library records

use crate::identity::ArtifactIdentity;
use serde::{Deserialize, Serialize};

/// One documented-or-resolved library.
///
/// Records come from two populations: the hand-authored manifest and live
/// resolution. Neither population is ever mutated; records are only compared.
/// `license` is a plain string with the empty string standing in for
/// "unknown", so license comparison is total.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LibraryRecord {
    /// Artifact coordinate, possibly wildcard-versioned when manifest-authored
    pub identity: ArtifactIdentity,
    /// Human-readable name shown in reports
    pub display_name: String,
    /// Name taken from the artifact's own metadata, when available
    pub library_name: Option<String>,
    /// Project homepage
    pub url: Option<String>,
    /// Backing file of the resolved artifact
    pub file_name: Option<String>,
    /// License name; empty when unknown
    pub license: String,
    pub license_url: Option<String>,
    /// Only ever populated by the hand-authored manifest
    pub copyright_holder: Option<String>,
    /// Only ever populated by the hand-authored manifest
    pub notice: Option<String>,
}

impl LibraryRecord {
    /// Whether two records describe the same library, respecting
    /// wildcard-version semantics.
    pub fn same_library(&self, other: &LibraryRecord) -> bool {
        self.identity.matches(&other.identity)
    }

    /// Case-sensitive license equality; both sides are total strings.
    pub fn same_license(&self, other: &LibraryRecord) -> bool {
        self.license == other.license
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(coordinate: &str, license: &str) -> LibraryRecord {
        LibraryRecord {
            identity: ArtifactIdentity::parse(coordinate).unwrap(),
            display_name: coordinate.to_string(),
            library_name: None,
            url: None,
            file_name: None,
            license: license.to_string(),
            license_url: None,
            copyright_holder: None,
            notice: None,
        }
    }

    #[test]
    fn same_library_respects_wildcard() {
        let documented = record("g:n:+", "MIT");
        let resolved = record("g:n:4.1", "MIT");
        assert!(documented.same_library(&resolved));
        assert!(!documented.same_library(&record("g:other:4.1", "MIT")));
    }

    #[test]
    fn license_comparison_is_case_sensitive() {
        let a = record("g:n:1.0", "MIT");
        assert!(a.same_license(&record("g:n:1.0", "MIT")));
        assert!(!a.same_license(&record("g:n:1.0", "mit")));
        assert!(!a.same_license(&record("g:n:1.0", "")));
    }
}
