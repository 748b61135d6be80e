//! Error types for treesync

use std::path::PathBuf;
use thiserror::Error;

/// Error types for treesync operations
#[derive(Debug, Error)]
pub enum SyncError {
    /// Standard IO error (automatically converted via #[from])
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration field has the wrong shape (e.g. a string where a
    /// list was expected in the config document)
    #[error("Configuration error: {0}")]
    Config(String),

    /// A source is not an existing directory, or the destination's parent
    /// does not exist
    #[error("Invalid path: {path}")]
    InvalidPath { path: PathBuf },
}

impl SyncError {
    /// Check if this error is a pre-mutation validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(self, SyncError::Config(_) | SyncError::InvalidPath { .. })
    }

    /// Check if this error came from a filesystem operation
    pub fn is_io_error(&self) -> bool {
        matches!(self, SyncError::Io(_))
    }
}

impl From<serde_json::Error> for SyncError {
    fn from(err: serde_json::Error) -> Self {
        SyncError::Config(err.to_string())
    }
}
