//! Three-way diff between resolved artifacts and the manifest

use crate::error::{AuditError, Result};
use crate::types::LibraryRecord;
use std::path::Path;
use tracing::debug;

/// Outcome of reconciling the resolved set against the documented set.
///
/// A resolved artifact missing from the manifest lands in exactly one of
/// `undocumented` or `license_mismatches`, never both: mismatches require an
/// identity match, undocumented entries require the absence of one.
#[derive(Debug, Clone, Default)]
pub struct Reconciliation {
    /// Resolved but not covered by any manifest entry
    pub undocumented: Vec<LibraryRecord>,
    /// Documented but no longer resolved
    pub stale_manifest_entries: Vec<LibraryRecord>,
    /// Resolved and documented, but with differing license strings
    pub license_mismatches: Vec<LibraryRecord>,
}

/// Compute the three-way diff. Identity matching is wildcard-aware on both
/// sides; license comparison is verbatim.
pub fn reconcile(resolved: &[LibraryRecord], documented: &[LibraryRecord]) -> Reconciliation {
    let undocumented = resolved
        .iter()
        .filter(|r| !documented.iter().any(|d| d.same_library(r)))
        .cloned()
        .collect();

    let stale_manifest_entries = documented
        .iter()
        .filter(|d| !resolved.iter().any(|r| r.same_library(d)))
        .cloned()
        .collect();

    let license_mismatches = resolved
        .iter()
        .filter(|r| {
            documented
                .iter()
                .any(|d| d.same_library(r) && !d.same_license(r))
        })
        .cloned()
        .collect();

    let reconciliation = Reconciliation {
        undocumented,
        stale_manifest_entries,
        license_mismatches,
    };
    debug!(
        "Reconciliation: {} undocumented, {} stale, {} mismatched",
        reconciliation.undocumented.len(),
        reconciliation.stale_manifest_entries.len(),
        reconciliation.license_mismatches.len()
    );
    reconciliation
}

impl Reconciliation {
    /// The run passes iff all three sets are empty.
    pub fn is_clean(&self) -> bool {
        self.undocumented.is_empty()
            && self.stale_manifest_entries.is_empty()
            && self.license_mismatches.is_empty()
    }

    /// Terminal pass/fail check, carrying the manifest path for remediation.
    /// Callers emit all three reports before invoking this.
    pub fn ensure_clean(&self, manifest: &Path) -> Result<()> {
        if self.is_clean() {
            Ok(())
        } else {
            Err(AuditError::Reconciliation {
                manifest: manifest.to_path_buf(),
            })
        }
    }
}
