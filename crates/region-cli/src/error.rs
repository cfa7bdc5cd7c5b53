//! Error types for region-cli

use std::path::PathBuf;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from region-meta
    #[error(transparent)]
    Meta(#[from] region_meta::Error),

    /// Failed to read an input file
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Member list is not a valid JSON member array
    #[error("Invalid member list at {path}: {source}")]
    InvalidMembers {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to render JSON output
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
