//! Main audit orchestration logic

use crate::config::AuditConfig;
use crate::error::Result;
use crate::graph::ModuleGraph;
use crate::manifest::load_manifest;
use crate::metadata::MetadataProvider;
use crate::reconcile::{reconcile, Reconciliation};
use crate::records::collect_records;
use crate::types::LibraryRecord;
use crate::walker::DependencyGraphWalker;
use tracing::info;

/// Everything a caller needs after one audit run. Nothing is persisted
/// between runs; all sets are rebuilt from the providers each time.
#[derive(Debug, Clone)]
pub struct AuditOutcome {
    pub resolved: Vec<LibraryRecord>,
    pub documented: Vec<LibraryRecord>,
    pub reconciliation: Reconciliation,
}

impl AuditOutcome {
    pub fn is_clean(&self) -> bool {
        self.reconciliation.is_clean()
    }
}

/// Run the full audit: walk the module graph, collect library records via the
/// metadata provider, load the manifest, and reconcile the two populations.
pub fn run_audit<G: ModuleGraph, P: MetadataProvider>(
    graph: &G,
    provider: &P,
    config: &AuditConfig,
) -> Result<AuditOutcome> {
    let walker = DependencyGraphWalker::new(graph, config);
    let artifacts = walker.resolve();
    info!("Resolved {} artifacts across the module graph", artifacts.len());

    let resolved = collect_records(&artifacts, provider, &config.ignored_groups);
    let documented = load_manifest(&config.manifest_path)?;
    info!(
        "Reconciling {} resolved libraries against {} manifest entries",
        resolved.len(),
        documented.len()
    );

    let reconciliation = reconcile(&resolved, &documented);
    Ok(AuditOutcome {
        resolved,
        documented,
        reconciliation,
    })
}
