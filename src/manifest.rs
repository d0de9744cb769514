//! Parser for the hand-maintained library manifest

use crate::error::Result;
use crate::identity::ArtifactIdentity;
use crate::types::LibraryRecord;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// TOML shape of the manifest file: a list of `[[libraries]]` tables.
#[derive(Debug, Deserialize)]
struct ManifestFile {
    #[serde(default)]
    libraries: Vec<ManifestEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ManifestEntry {
    /// `group:name:version`, usually with the wildcard version `+`
    artifact: String,
    name: String,
    #[serde(default)]
    copyright_holder: Option<String>,
    #[serde(default)]
    license: Option<String>,
    #[serde(default)]
    license_url: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    notice: Option<String>,
}

/// Load the manifest into library records. A malformed artifact coordinate in
/// the manifest is a hard error: the manifest is user-authored and short, so
/// it should be fixed rather than skipped.
pub fn load_manifest(path: &Path) -> Result<Vec<LibraryRecord>> {
    let content = fs::read_to_string(path)?;
    let manifest: ManifestFile = toml::from_str(&content)?;
    debug!(
        "Loaded manifest from {}: {} entries",
        path.display(),
        manifest.libraries.len()
    );

    manifest
        .libraries
        .into_iter()
        .map(|entry| {
            Ok(LibraryRecord {
                identity: ArtifactIdentity::parse(&entry.artifact)?,
                display_name: entry.name,
                library_name: None,
                url: entry.url,
                file_name: None,
                license: entry.license.unwrap_or_default(),
                license_url: entry.license_url,
                copyright_holder: entry.copyright_holder,
                notice: entry.notice,
            })
        })
        .collect()
}
