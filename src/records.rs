//! Conversion of resolved artifacts into library records

use crate::graph::ResolvedArtifact;
use crate::identity::ArtifactIdentity;
use crate::metadata::MetadataProvider;
use crate::types::LibraryRecord;
use std::collections::HashSet;
use tracing::{info, warn};

/// Version sentinel carried by local/project artifacts without real coordinates.
const UNSPECIFIED_VERSION: &str = "unspecified";

/// Turn resolved artifacts into [`LibraryRecord`]s via the metadata provider.
///
/// Every skip here is recover-and-continue: an unparseable coordinate or an
/// unavailable metadata document drops that one artifact with a diagnostic and
/// never aborts the run. The result is deduplicated by value equality with
/// stable order.
pub fn collect_records<P: MetadataProvider>(
    artifacts: &[ResolvedArtifact],
    provider: &P,
    ignored_groups: &HashSet<String>,
) -> Vec<LibraryRecord> {
    let mut seen = HashSet::new();
    let mut records = Vec::new();

    for artifact in artifacts {
        if artifact.version == UNSPECIFIED_VERSION {
            info!("Skipping local artifact without coordinates: {}", artifact.coordinate());
            continue;
        }
        if ignored_groups.contains(&artifact.group) {
            info!("Skipping ignored group: {}", artifact.coordinate());
            continue;
        }

        let identity = match ArtifactIdentity::parse(&artifact.coordinate()) {
            Ok(identity) => identity,
            Err(e) => {
                warn!("Skipping artifact: {}", e);
                continue;
            }
        };

        let document = match provider.fetch(&identity) {
            Ok(document) => document,
            Err(e) => {
                warn!("Skipping artifact: {}", e);
                continue;
            }
        };

        let first_license = document.licenses.first();
        let record = LibraryRecord {
            identity,
            display_name: artifact.display_name.clone(),
            library_name: document.name,
            url: document.url,
            file_name: artifact.file_name.clone(),
            // Empty string, never absent, so license comparison stays total.
            license: first_license.map(|l| l.name.clone()).unwrap_or_default(),
            license_url: first_license.and_then(|l| l.url.clone()),
            copyright_holder: None,
            notice: None,
        };

        if seen.insert(record.clone()) {
            records.push(record);
        }
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::metadata::{PomDocument, PomLicense};
    use std::collections::HashMap;

    struct MapProvider(HashMap<String, PomDocument>);

    impl MetadataProvider for MapProvider {
        fn fetch(&self, identity: &ArtifactIdentity) -> Result<PomDocument> {
            self.0
                .get(&identity.to_string())
                .cloned()
                .ok_or_else(|| crate::error::AuditError::metadata(identity.to_string(), "missing"))
        }
    }

    fn artifact(group: &str, name: &str, version: &str) -> ResolvedArtifact {
        ResolvedArtifact {
            group: group.into(),
            name: name.into(),
            version: version.into(),
            display_name: format!("{}:{}:{}", group, name, version),
            file_name: Some(format!("{}-{}.jar", name, version)),
        }
    }

    fn document(license: &str) -> PomDocument {
        PomDocument {
            licenses: vec![PomLicense {
                name: license.into(),
                url: Some(format!("https://example.com/{}", license)),
            }],
            name: Some("Widget".into()),
            url: Some("https://example.com".into()),
        }
    }

    #[test]
    fn builds_record_from_metadata() {
        let provider = MapProvider(HashMap::from([("g:n:1.0".to_string(), document("MIT"))]));
        let records = collect_records(&[artifact("g", "n", "1.0")], &provider, &HashSet::new());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].license, "MIT");
        assert_eq!(records[0].library_name.as_deref(), Some("Widget"));
        assert_eq!(records[0].file_name.as_deref(), Some("n-1.0.jar"));
        assert!(records[0].copyright_holder.is_none());
        assert!(records[0].notice.is_none());
    }

    #[test]
    fn missing_license_entries_yield_empty_string() {
        let provider = MapProvider(HashMap::from([(
            "g:n:1.0".to_string(),
            PomDocument::default(),
        )]));
        let records = collect_records(&[artifact("g", "n", "1.0")], &provider, &HashSet::new());
        assert_eq!(records[0].license, "");
        assert!(records[0].license_url.is_none());
    }

    #[test]
    fn unspecified_version_is_skipped() {
        let provider = MapProvider(HashMap::from([(
            "g:n:unspecified".to_string(),
            document("MIT"),
        )]));
        let records =
            collect_records(&[artifact("g", "n", "unspecified")], &provider, &HashSet::new());
        assert!(records.is_empty());
    }

    #[test]
    fn ignored_groups_are_skipped() {
        let provider = MapProvider(HashMap::from([("g:n:1.0".to_string(), document("MIT"))]));
        let ignored: HashSet<String> = ["g".to_string()].into();
        let records = collect_records(&[artifact("g", "n", "1.0")], &provider, &ignored);
        assert!(records.is_empty());
    }

    #[test]
    fn unavailable_metadata_skips_only_that_artifact() {
        let provider = MapProvider(HashMap::from([("g:kept:1.0".to_string(), document("MIT"))]));
        let records = collect_records(
            &[artifact("g", "dropped", "1.0"), artifact("g", "kept", "1.0")],
            &provider,
            &HashSet::new(),
        );
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].identity.name(), "kept");
    }

    #[test]
    fn identical_records_collapse_to_one() {
        let provider = MapProvider(HashMap::from([("g:n:1.0".to_string(), document("MIT"))]));
        let records = collect_records(
            &[artifact("g", "n", "1.0"), artifact("g", "n", "1.0")],
            &provider,
            &HashSet::new(),
        );
        assert_eq!(records.len(), 1);
    }
}
