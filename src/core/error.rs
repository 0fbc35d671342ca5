//! Error types and error handling for keylink.
//!
//! Every storage and history failure is converted into one of these
//! variants at the component boundary. "Not found" is deliberately
//! absent: a missing keyword or tag is a zero or empty result, not an
//! error.

use thiserror::Error;

/// Result type alias for keylink operations
pub type Result<T> = std::result::Result<T, KeylinkError>;

/// Main error type for keylink
#[derive(Error, Debug)]
pub enum KeylinkError {
    #[error("Keyword already exists: {0}")]
    DuplicateKeyword(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("History log unwritable: {0}")]
    HistoryLogUnwritable(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl From<rusqlite::Error> for KeylinkError {
    fn from(err: rusqlite::Error) -> Self {
        KeylinkError::StorageUnavailable(err.to_string())
    }
}

impl KeylinkError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a conflict error (keyword already exists)
    pub fn is_conflict(&self) -> bool {
        matches!(self, KeylinkError::DuplicateKeyword(_))
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            KeylinkError::InvalidInput(_) | KeylinkError::ConfigError(_)
        )
    }

    /// Check if the underlying storage failed
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            KeylinkError::StorageUnavailable(_) | KeylinkError::IoError(_)
        )
    }
}
