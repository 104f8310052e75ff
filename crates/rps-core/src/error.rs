//! Error types for the game core.

use thiserror::Error;

/// Result type for persistence adapter operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Failures of the key-value persistence adapter.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The store refuses reads or writes (disabled, quota exceeded, ...).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The backing file could not be read or written.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file exists but does not hold a valid key-value document.
    #[error("corrupt storage: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Errors surfaced to callers of the game core.
#[derive(Debug, Error)]
pub enum GameError {
    /// Input text does not name rock, paper or scissors.
    #[error("invalid move: {0:?} (expected rock, paper or scissors)")]
    InvalidMove(String),
}
