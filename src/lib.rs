//! # dependency_license_audit
//!
//! Audits a multi-module project's third-party dependencies against a
//! hand-maintained manifest of approved libraries and licenses:
//! - **Undocumented libraries**: resolved but missing from the manifest
//! - **Stale entries**: documented but no longer resolved
//! - **License mismatches**: documented license differs from the resolved one
//!
//! ## Quick Start
//!
//! ```no_run
//! use dependency_license_audit::{run_audit, AuditConfig, GraphSnapshot, MetadataStore};
//! use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let graph = GraphSnapshot::load(Path::new("graph.json"))?;
//! let metadata = MetadataStore::load(Path::new("metadata.json"))?;
//! let config = AuditConfig::builder().manifest_path("libraries.toml").build();
//!
//! let outcome = run_audit(&graph, &metadata, &config)?;
//! outcome.reconciliation.ensure_clean(&config.manifest_path)?;
//! # Ok(())
//! # }
//! ```
//!
//! The build system's module graph and the POM metadata source are consumed
//! through the [`ModuleGraph`] and [`MetadataProvider`] traits; file-backed
//! implementations back the CLI and tests. Manifest-entry identities may use
//! the wildcard version `+` to cover any version of a `group:name`.

mod audit;
mod config;
mod error;
mod graph;
mod identity;
mod manifest;
mod metadata;
mod reconcile;
mod records;
mod report;
mod types;
mod walker;

// Re-export public API
pub use audit::{run_audit, AuditOutcome};
pub use config::AuditConfig;
pub use error::{AuditError, Result};
pub use graph::{Configuration, GraphSnapshot, Module, ModuleGraph, ResolvedArtifact};
pub use identity::{ArtifactIdentity, WILDCARD_VERSION};
pub use manifest::load_manifest;
pub use metadata::{MetadataProvider, MetadataStore, PomDocument, PomLicense};
pub use reconcile::{reconcile, Reconciliation};
pub use records::collect_records;
pub use report::{render_manifest_entry, render_sections};
pub use types::LibraryRecord;
pub use walker::{is_dependency_scope, target_modules, DependencyGraphWalker};
