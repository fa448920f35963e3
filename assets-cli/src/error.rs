//! Structured error types for the asset warning CLI

use lib_assets::AssetError;
use thiserror::Error;

/// CLI error types with context
#[derive(Error, Debug)]
pub enum CliError {
    // Configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to load config from {path}: {reason}")]
    ConfigLoadFailed { path: String, reason: String },

    // Snapshot operations
    #[error("Failed to read snapshot {path}: {reason}")]
    SnapshotReadFailed { path: String, reason: String },

    #[error("Failed to write snapshot {path}: {reason}")]
    SnapshotWriteFailed { path: String, reason: String },

    #[error("No snapshot given: pass --snapshot or set defaults.snapshot in the config")]
    SnapshotMissing,

    #[error("Asset '{0}' not found in snapshot")]
    AssetNotFound(String),

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    // Panel
    #[error(transparent)]
    Asset(#[from] AssetError),

    // Serialization
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
