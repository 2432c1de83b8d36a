//! Error types for wire format operations.

use ogt_types::RecordId;
use thiserror::Error;

/// Errors that can occur while reading or writing wire formats.
#[derive(Debug, Error)]
pub enum WireError {
    /// JSON serialization or parse failure.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Binary serialization or parse failure.
    #[error("binary format error: {0}")]
    Binary(String),

    /// I/O error during file operations.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// An id named during expansion has no record in the document.
    #[error("no record for reference {0}")]
    UnknownRecord(RecordId),
}

/// Convenience type alias for wire operations.
pub type WireResult<T> = std::result::Result<T, WireError>;
