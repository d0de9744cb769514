//! Error types for the audit system

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for audit operations
pub type Result<T> = std::result::Result<T, AuditError>;

/// Main error type for audit operations
#[derive(Error, Debug)]
pub enum AuditError {
    /// An artifact coordinate did not split into three non-empty segments.
    /// Recovered locally (skip the artifact), never a run failure.
    #[error("malformed artifact coordinate '{0}': expected group:name:version")]
    MalformedIdentity(String),

    /// License metadata could not be fetched for an artifact.
    /// Recovered locally (skip the artifact), never a run failure.
    #[error("license metadata unavailable for {artifact}: {reason}")]
    MetadataUnavailable { artifact: String, reason: String },

    /// One or more reconciliation sets is non-empty. The only error that
    /// terminates a run, raised after all three reports have been emitted.
    #[error("resolved dependencies are out of sync with {}; update the manifest and re-run", manifest.display())]
    Reconciliation { manifest: PathBuf },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl AuditError {
    /// Create a metadata-unavailable error
    pub fn metadata(artifact: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MetadataUnavailable {
            artifact: artifact.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
