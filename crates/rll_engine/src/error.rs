//! Unified error types for rll_engine

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for rll_engine operations
#[derive(Debug, Error)]
pub enum RllError {
    // === I/O Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to open file '{path}': {message}")]
    OpenFile { path: PathBuf, message: String },

    // === Codec Errors ===
    #[error("Encoded level body is empty")]
    EmptyBody,

    #[error("Run count at offset {offset} is not followed by a symbol")]
    DanglingRunCount { offset: usize },

    #[error("Run count at offset {offset} exceeds the supported maximum")]
    RunCountTooLarge { offset: usize },

    #[error("Row {row} has {found} columns, expected {expected}")]
    ColumnCountMismatch { row: usize, expected: usize, found: usize },

    #[error("Unknown tile symbol '{symbol}' at offset {offset}")]
    UnknownSymbol { symbol: char, offset: usize },

    // === Store Errors ===
    #[error("Record index {index} out of range (store holds {count} records)")]
    RecordOutOfRange { index: usize, count: usize },

    #[error("{0}")]
    Generic(String),
}

/// Result type alias for rll_engine operations
pub type Result<T> = std::result::Result<T, RllError>;

impl RllError {
    /// Create a generic error from any displayable type
    pub fn generic(msg: impl std::fmt::Display) -> Self {
        Self::Generic(msg.to_string())
    }

    /// Create an open file error
    pub fn open_file(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        Self::OpenFile {
            path: path.into(),
            message: msg.into(),
        }
    }
}
