//! Error handling for consul-store
//!
//! Persistence failures are surfaced, never retried; a failed save leaves
//! the on-disk snapshot at its previous committed state.

use thiserror::Error;

/// Result type alias using StoreError
pub type Result<T> = std::result::Result<T, StoreError>;

/// Persistence-layer error taxonomy
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying SQLite failure
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// A previously applied migration no longer matches its recorded SQL
    #[error("checksum mismatch for migration {id}: expected {expected}, got {actual}")]
    ChecksumMismatch {
        id: String,
        expected: String,
        actual: String,
    },

    /// The database has no registry row to hydrate
    #[error("registry database is not initialized")]
    NotInitialized,

    /// Persisted rows cannot be decoded back into registry state
    #[error("corrupt registry state: {reason}")]
    Corrupt { reason: String },
}

impl StoreError {
    /// Corrupt-state error with context about the offending column
    pub fn corrupt(reason: impl Into<String>) -> Self {
        StoreError::Corrupt {
            reason: reason.into(),
        }
    }
}
