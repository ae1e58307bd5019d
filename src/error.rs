//! Error types for the popup core

use thiserror::Error;

/// Failures of a key-value backend
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode or decode stored data: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("store backend error: {0}")]
    Backend(String),
}

/// Top-level error for popup operations
#[derive(Debug, Error)]
pub enum NexusError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Delayed work was requested outside of an async runtime
    #[error("no async runtime available to schedule {0}")]
    NoRuntime(&'static str),

    #[error("failed to open {url}: {reason}")]
    Open { url: String, reason: String },
}

pub type Result<T> = std::result::Result<T, NexusError>;
