//! Error types for twinfold.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while fingerprinting a tree.
///
/// Every variant carries the offending path. None of them is recovered
/// locally: a placeholder fingerprint would corrupt every ancestor folder.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Hash provider unavailable for {path:?}: {reason}")]
    HashUnavailable { path: PathBuf, reason: String },

    #[error("Failed to list directory {path:?}: {source}")]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Entry is neither a regular file nor a directory: {path:?}")]
    UnclassifiedEntry { path: PathBuf },

    #[error("Failed to read file {path:?}: {source}")]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory re-entered while still being fingerprinted (symlink loop): {path:?}")]
    SymlinkLoop { path: PathBuf },

    #[error("Invalid scan root {path:?}: {reason}")]
    InvalidRoot { path: PathBuf, reason: String },
}

impl ScanError {
    /// Path the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            ScanError::HashUnavailable { path, .. }
            | ScanError::DirectoryUnreadable { path, .. }
            | ScanError::UnclassifiedEntry { path }
            | ScanError::FileUnreadable { path, .. }
            | ScanError::SymlinkLoop { path }
            | ScanError::InvalidRoot { path, .. } => path,
        }
    }
}

/// Application-level errors surfaced by the CLI
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Scan failed: {0}")]
    Scan(#[from] ScanError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to remove {path:?}: {reason}")]
    RemovalFailed { path: PathBuf, reason: String },

    #[error("Output error: {0}")]
    OutputError(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
