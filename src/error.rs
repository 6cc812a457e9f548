//! Error types for kavlo
//!
//! Display operations never fail; these cover loading sessions,
//! configuration I/O and the terminal.

use thiserror::Error;

/// Main error type for history operations
#[derive(Error, Debug)]
pub enum HistoryError {
    /// Two sessions in one collection share an id
    #[error("duplicate session id: {0}")]
    DuplicateSessionId(u32),

    /// Oxygen saturation outside 0..=100
    #[error("session {id}: oxygen saturation {value}% is out of range")]
    OxygenOutOfRange { id: u32, value: u8 },

    /// Average heart rate must be positive
    #[error("session {id}: average heart rate must be positive")]
    HeartRateOutOfRange { id: u32 },

    /// The session repository could not produce a collection
    #[error("failed to load sessions: {0}")]
    Repository(String),

    /// IO errors (config file, terminal)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for history operations
pub type Result<T> = std::result::Result<T, HistoryError>;
