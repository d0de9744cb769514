//! CLI tool for auditing resolved dependencies against the library manifest

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::*;
use dependency_license_audit::{
    render_manifest_entry, render_sections, run_audit, AuditConfig, AuditOutcome, GraphSnapshot,
    MetadataStore,
};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "license-audit")]
#[command(about = "Audit resolved dependencies against a hand-maintained library manifest", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the module-graph snapshot (JSON)
    #[arg(short = 'g', long)]
    graph: PathBuf,

    /// Path to the license metadata store (JSON)
    #[arg(short = 'm', long)]
    metadata: PathBuf,

    /// Path to custom configuration file (TOML)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Path to the library manifest (overrides the config file)
    #[arg(long)]
    manifest: Option<PathBuf>,

    /// Modules to exclude from resolution (can be specified multiple times)
    #[arg(long = "ignore-module")]
    ignore_modules: Vec<String>,

    /// Artifact groups to exclude from the audit (can be specified multiple times)
    #[arg(long = "ignore-group")]
    ignore_groups: Vec<String>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconcile resolved dependencies against the manifest (exit code based)
    Check,

    /// Print paste-ready manifest entries for undocumented libraries
    Suggest,

    /// List the resolved library set with licenses
    Resolve,
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            process::exit(1);
        }
    };

    let outcome = match load_and_audit(&cli, &config) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("{} Audit failed: {:#}", "Error:".red().bold(), e);
            process::exit(1);
        }
    };

    match cli.command {
        Commands::Check => {
            for section in render_sections(&outcome.reconciliation) {
                println!("{}\n", section);
            }

            if let Err(e) = outcome.reconciliation.ensure_clean(&config.manifest_path) {
                eprintln!("{} {}", "Failed:".red().bold(), e);
                process::exit(1);
            }
            println!(
                "{} {} libraries resolved, manifest is in sync",
                "Success:".green().bold(),
                outcome.resolved.len()
            );
        }

        Commands::Suggest => {
            if outcome.reconciliation.undocumented.is_empty() {
                println!("{} Nothing to add, manifest covers every resolved library", "Success:".green().bold());
                return;
            }
            let entries: Vec<String> = outcome
                .reconciliation
                .undocumented
                .iter()
                .map(render_manifest_entry)
                .collect();
            println!("{}", entries.join("\n\n"));
        }

        Commands::Resolve => {
            println!("{}", "=== Resolved libraries ===".bold());
            for record in &outcome.resolved {
                let license = if record.license.is_empty() {
                    "no license".yellow()
                } else {
                    record.license.normal()
                };
                println!("{} [{}]", record.identity.to_string().cyan(), license);
            }
            println!("Total: {}", outcome.resolved.len());
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn build_config(cli: &Cli) -> anyhow::Result<AuditConfig> {
    let mut config = if let Some(config_path) = &cli.config {
        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read config {}", config_path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", config_path.display()))?
    } else {
        AuditConfig::default()
    };

    if let Some(manifest) = &cli.manifest {
        config.manifest_path = manifest.clone();
    }
    for module in &cli.ignore_modules {
        config.ignored_modules.insert(module.clone());
    }
    for group in &cli.ignore_groups {
        config.ignored_groups.insert(group.clone());
    }

    Ok(config)
}

fn load_and_audit(cli: &Cli, config: &AuditConfig) -> anyhow::Result<AuditOutcome> {
    let graph = GraphSnapshot::load(&cli.graph)
        .with_context(|| format!("failed to load graph snapshot {}", cli.graph.display()))?;
    let metadata = MetadataStore::load(&cli.metadata)
        .with_context(|| format!("failed to load metadata store {}", cli.metadata.display()))?;
    run_audit(&graph, &metadata, config).map_err(Into::into)
}
