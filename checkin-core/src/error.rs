//! Error types for checkin.

use thiserror::Error;

/// Errors that can occur while picking a stay.
#[derive(Error, Debug)]
pub enum PickerError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Both check-in and check-out must be selected before confirming")]
    IncompleteRange,

    #[error("Picker is closed")]
    NotOpen,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for checkin operations.
pub type PickerResult<T> = Result<T, PickerError>;
