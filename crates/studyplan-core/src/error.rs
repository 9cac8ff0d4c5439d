//! Core error types for studyplan-core.
//!
//! Admission failures are [`ValidationError`]s. The scheduler itself has no
//! error path; everything else here belongs to storage and configuration.

use std::path::PathBuf;
use thiserror::Error;

use crate::session::TimeOfDay;

/// Core error type for studyplan-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Request admission errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// No session with the given id exists
    #[error("Session not found: {id}")]
    NotFound { id: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while admitting a session request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Start is not strictly before end
    #[error("Invalid interval: start ({start}) must be before end ({end})")]
    InvalidInterval { start: TimeOfDay, end: TimeOfDay },

    /// Name is empty or whitespace only
    #[error("Session name must not be blank")]
    EmptyName,

    /// Text is not a valid HH:MM time of day
    #[error("Invalid time of day '{value}': expected HH:MM between 00:00 and 23:59")]
    InvalidTime { value: String },

    /// Text does not name a weekday
    #[error("Invalid weekday '{value}'")]
    InvalidWeekday { value: String },
}

/// Database-specific errors.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to open database connection
    #[error("Failed to open database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// A stored row cannot be turned back into a session
    #[error("Stored session '{id}' is corrupt: {message}")]
    Corrupt { id: String, message: String },

    /// Database is locked
    #[error("Database is locked")]
    Locked,
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Key does not exist in the configuration tree
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

impl From<rusqlite::Error> for DatabaseError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(code, _msg) => {
                if code.code == rusqlite::ErrorCode::DatabaseBusy
                    || code.code == rusqlite::ErrorCode::DatabaseLocked
                {
                    DatabaseError::Locked
                } else {
                    DatabaseError::QueryFailed(err.to_string())
                }
            }
            _ => DatabaseError::QueryFailed(err.to_string()),
        }
    }
}

impl From<rusqlite::Error> for CoreError {
    fn from(err: rusqlite::Error) -> Self {
        CoreError::Database(err.into())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_interval_message_uses_clock_times() {
        let err = ValidationError::InvalidInterval {
            start: TimeOfDay::from_hm(10, 0).unwrap(),
            end: TimeOfDay::from_hm(9, 30).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid interval: start (10:00) must be before end (09:30)"
        );
    }

    #[test]
    fn validation_error_converts_into_core_error() {
        let err: CoreError = ValidationError::EmptyName.into();
        assert!(matches!(err, CoreError::Validation(ValidationError::EmptyName)));
    }

    #[test]
    fn locked_sqlite_failure_maps_to_locked() {
        let raw = rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_BUSY),
            None,
        );
        assert!(matches!(DatabaseError::from(raw), DatabaseError::Locked));
    }
}
