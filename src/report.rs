//! Rendering of reconciliation results

use crate::reconcile::Reconciliation;
use crate::types::LibraryRecord;

/// Render a record in the manifest's canonical `[[libraries]]` syntax, with
/// the version forced to the wildcard token. The result is paste-ready: a
/// maintainer documents a newly discovered library by appending it verbatim.
///
/// `licenseUrl` and `url` lines are emitted only when non-blank; trailing
/// whitespace is trimmed.
pub fn render_manifest_entry(record: &LibraryRecord) -> String {
    let mut out = String::from("[[libraries]]\n");
    out.push_str(&format!(
        "artifact = \"{}\"\n",
        record.identity.with_wildcard_version()
    ));
    out.push_str(&format!("name = \"{}\"\n", record.display_name));
    out.push_str(&format!(
        "copyrightHolder = \"{}\"\n",
        record.copyright_holder.as_deref().unwrap_or_default()
    ));
    out.push_str(&format!("license = \"{}\"\n", record.license));
    if let Some(license_url) = record.license_url.as_deref().filter(|u| !u.trim().is_empty()) {
        out.push_str(&format!("licenseUrl = \"{}\"\n", license_url));
    }
    if let Some(url) = record.url.as_deref().filter(|u| !u.trim().is_empty()) {
        out.push_str(&format!("url = \"{}\"\n", url));
    }
    out.trim_end().to_string()
}

/// The three report sections as plain text, each `None` when its set is empty.
pub fn render_sections(reconciliation: &Reconciliation) -> Vec<String> {
    let mut sections = Vec::new();

    if !reconciliation.undocumented.is_empty() {
        let entries: Vec<String> = reconciliation
            .undocumented
            .iter()
            .map(render_manifest_entry)
            .collect();
        sections.push(format!(
            "# Libraries not listed in the manifest:\n{}",
            entries.join("\n\n")
        ));
    }

    if !reconciliation.stale_manifest_entries.is_empty() {
        let lines: Vec<String> = reconciliation
            .stale_manifest_entries
            .iter()
            .map(|record| format!("artifact: {}", record.identity))
            .collect();
        sections.push(format!(
            "# Manifest entries no longer resolved:\n{}",
            lines.join("\n")
        ));
    }

    if !reconciliation.license_mismatches.is_empty() {
        let lines: Vec<String> = reconciliation
            .license_mismatches
            .iter()
            .map(|record| format!("artifact: {} / license: {}", record.identity, record.license))
            .collect();
        sections.push(format!(
            "# Libraries whose license differs from the manifest:\n{}",
            lines.join("\n")
        ));
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::ArtifactIdentity;

    fn record(coordinate: &str, license: &str) -> LibraryRecord {
        LibraryRecord {
            identity: ArtifactIdentity::parse(coordinate).unwrap(),
            display_name: "Widget".to_string(),
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
    fn entry_forces_wildcard_version_and_skips_blank_urls() {
        let rendered = render_manifest_entry(&record("com.example:widget:4.1", "MIT"));
        assert_eq!(
            rendered,
            "[[libraries]]\n\
             artifact = \"com.example:widget:+\"\n\
             name = \"Widget\"\n\
             copyrightHolder = \"\"\n\
             license = \"MIT\""
        );
    }

    #[test]
    fn entry_includes_urls_when_present() {
        let mut with_urls = record("g:n:1.0", "MIT");
        with_urls.license_url = Some("https://opensource.org/licenses/MIT".into());
        with_urls.url = Some("https://example.com".into());
        with_urls.copyright_holder = Some("Example Inc.".into());

        let rendered = render_manifest_entry(&with_urls);
        assert!(rendered.contains("copyrightHolder = \"Example Inc.\""));
        assert!(rendered.contains("licenseUrl = \"https://opensource.org/licenses/MIT\""));
        assert!(rendered.ends_with("url = \"https://example.com\""));
    }

    #[test]
    fn blank_license_url_is_omitted() {
        let mut blank = record("g:n:1.0", "MIT");
        blank.license_url = Some("   ".into());
        assert!(!render_manifest_entry(&blank).contains("licenseUrl"));
    }

    #[test]
    fn sections_cover_each_non_empty_set() {
        let reconciliation = Reconciliation {
            undocumented: vec![record("g:new:1.0", "MIT")],
            stale_manifest_entries: vec![record("g:old:+", "MIT")],
            license_mismatches: vec![record("g:changed:2.0", "GPL-3.0")],
        };
        let sections = render_sections(&reconciliation);
        assert_eq!(sections.len(), 3);
        assert!(sections[0].contains("artifact = \"g:new:+\""));
        assert!(sections[1].contains("artifact: g:old:+"));
        assert!(sections[2].contains("artifact: g:changed:2.0 / license: GPL-3.0"));
    }

    #[test]
    fn no_sections_for_a_clean_run() {
        assert!(render_sections(&Reconciliation::default()).is_empty());
    }
}
