//! Record Store error types
//!
//! - `NotReady`: a read was issued before the load-complete signal
//! - `AlreadyLoaded`: the load-complete signal was given twice
//! - `SourceUnavailable`: ingestion could not open its input (fatal to startup)
//! - `Read`: the source stopped being readable mid-ingestion

use std::path::PathBuf;

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Data not loaded: the record store is not ready")]
    NotReady,

    #[error("Data already loaded: the record store is write-once")]
    AlreadyLoaded,

    #[error("CSV file not found or unreadable at {path}: {reason}")]
    SourceUnavailable { path: PathBuf, reason: String },

    #[error("Failed reading source: {0}")]
    Read(String),
}

impl StoreError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::NotReady => "SALES_NOT_READY",
            StoreError::AlreadyLoaded => "SALES_ALREADY_LOADED",
            StoreError::SourceUnavailable { .. } => "SALES_SOURCE_UNAVAILABLE",
            StoreError::Read(_) => "SALES_SOURCE_READ_FAILED",
        }
    }

    /// Returns true if the process cannot continue serving
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            StoreError::SourceUnavailable { .. } | StoreError::Read(_)
        )
    }
}
