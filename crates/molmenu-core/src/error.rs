//! Error types for molmenu-rs.

use thiserror::Error;

/// The main error type for molmenu-rs operations.
#[derive(Error, Debug)]
pub enum MenuError {
    /// Text entered in a numeric field is not a finite number.
    #[error("invalid number: '{0}'")]
    InvalidNumber(String),

    /// Text from the normal-mode select is not an integer index.
    #[error("invalid normal mode index: '{0}'")]
    InvalidModeIndex(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for molmenu-rs operations.
pub type Result<T> = std::result::Result<T, MenuError>;
