//! Transitive discovery of external artifacts across the module graph

use crate::config::AuditConfig;
use crate::graph::{Module, ModuleGraph, ResolvedArtifact};
use std::collections::{HashMap, HashSet};
use tracing::{debug, trace};

/// Whether a configuration name counts toward dependency resolution.
///
/// Accepts an optional `release` prefix followed by one of `compile`,
/// `compileOnly`, `implementation`, or `api`, case-insensitively. The literal
/// name `releaseUnitTest` is carved out explicitly: it collides with the
/// release-prefix pattern but is test-only, and must never resolve.
pub fn is_dependency_scope(configuration_name: &str) -> bool {
    let lowered = configuration_name.to_lowercase();
    if lowered == "releaseunittest" {
        return false;
    }
    let scope = lowered.strip_prefix("release").unwrap_or(&lowered);
    matches!(scope, "compile" | "compileonly" | "implementation" | "api")
}

/// Filter out ignored modules by name. Order is stable within a run.
pub fn target_modules<'a>(
    all_modules: &'a [Module],
    ignored_module_names: &HashSet<String>,
) -> Vec<&'a Module> {
    all_modules
        .iter()
        .filter(|module| !ignored_module_names.contains(&module.name))
        .collect()
}

/// Discovers every external artifact reachable from the in-scope modules,
/// resolving inter-module edges and deduplicating by formatted identity.
///
/// An artifact whose coordinate names one of the in-scope modules triggers
/// recursion into that module's own dependency-scope configurations; a
/// visited-module set bounds the recursion so a dependency cycle between
/// modules terminates. The lookup table from coordinate to module is built
/// once per walker.
pub struct DependencyGraphWalker<'a> {
    targets: Vec<&'a Module>,
    modules_by_coordinate: HashMap<&'a str, &'a Module>,
}

impl<'a> DependencyGraphWalker<'a> {
    pub fn new<G: ModuleGraph>(graph: &'a G, config: &AuditConfig) -> Self {
        let targets = target_modules(graph.modules(), &config.ignored_modules);
        let modules_by_coordinate = targets
            .iter()
            .filter_map(|module| {
                module
                    .coordinate
                    .as_deref()
                    .map(|coordinate| (coordinate, *module))
            })
            .collect();
        Self {
            targets,
            modules_by_coordinate,
        }
    }

    /// The complete, deduplicated artifact set for all in-scope modules.
    /// First occurrence wins; each artifact appears exactly once however many
    /// configurations or recursion paths reach it.
    pub fn resolve(&self) -> Vec<ResolvedArtifact> {
        let mut visited: HashSet<&str> = HashSet::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut resolved = Vec::new();

        for module in self.targets.iter().copied() {
            self.resolve_module(module, &mut visited, &mut seen, &mut resolved);
        }

        debug!("Resolved {} unique artifacts", resolved.len());
        resolved
    }

    fn resolve_module(
        &self,
        module: &'a Module,
        visited: &mut HashSet<&'a str>,
        seen: &mut HashSet<String>,
        resolved: &mut Vec<ResolvedArtifact>,
    ) {
        if !visited.insert(&module.name) {
            trace!("Module {} already resolved, skipping", module.name);
            return;
        }
        debug!("Resolving module {}", module.name);

        for configuration in &module.configurations {
            if !is_dependency_scope(&configuration.name) {
                continue;
            }
            for artifact in &configuration.artifacts {
                let coordinate = artifact.coordinate();
                if seen.insert(coordinate.clone()) {
                    resolved.push(artifact.clone());
                }
                // An artifact naming an in-scope module pulls in that
                // module's own dependencies.
                if let Some(inner) = self.modules_by_coordinate.get(coordinate.as_str()).copied() {
                    self.resolve_module(inner, visited, seen, resolved);
                }
            }
        }
    }
}
