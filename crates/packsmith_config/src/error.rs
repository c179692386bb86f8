//! Error types for answer validation and configuration derivation.

use thiserror::Error;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while building a project configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid answer for '{key}': {message}")]
    InvalidAnswer { key: String, message: String },

    #[error("Conflicting answers: '{requested}' requires '{conflict}', which was explicitly declined")]
    ConflictingAnswers { requested: String, conflict: String },

    #[error("Unknown target identifier: {0}")]
    UnknownTargetIdentifier(String),

    #[error("Unknown answer key: {0}")]
    UnknownKey(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConfigError {
    pub fn invalid(key: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::InvalidAnswer { key: key.into(), message: message.into() }
    }
}
