//! Error types for the taskboard engine
//!
//! Missing entities have no variant here: looking up an
//! unknown task, column or user yields `None` or a no-op, never an error.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for taskboard operations
pub type Result<T> = std::result::Result<T, TaskboardError>;

/// Errors that can occur in taskboard operations
#[derive(Debug, Error)]
pub enum TaskboardError {
    /// A task or column was given an empty or whitespace-only title
    #[error("{entity} title cannot be empty")]
    EmptyTitle { entity: String },

    /// Invalid field value
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// The storage backend refused the request
    #[error("storage unavailable: {message}")]
    StorageUnavailable { message: String },

    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TaskboardError {
    /// Create an empty-title validation error
    pub fn empty_title(entity: impl Into<String>) -> Self {
        Self::EmptyTitle {
            entity: entity.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::StorageUnavailable {
            message: message.into(),
        }
    }

    /// Whether this error stems from user input rather than the environment
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyTitle { .. } | Self::InvalidValue { .. })
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested configuration file does not exist
    #[error("configuration file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Configuration parsing failed
    #[error("failed to parse configuration: {source}")]
    Parse {
        #[source]
        source: Box<figment::Error>,
    },

    /// Configuration validation failed
    #[error("configuration validation failed: {message}")]
    Validation { message: String },
}

impl ConfigError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        Self::Parse {
            source: Box::new(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TaskboardError::empty_title("task");
        assert_eq!(err.to_string(), "task title cannot be empty");
    }

    #[test]
    fn test_validation_classification() {
        assert!(TaskboardError::empty_title("column").is_validation());
        assert!(TaskboardError::invalid_value("index", "bad").is_validation());
        assert!(!TaskboardError::storage("disk full").is_validation());
    }

    #[test]
    fn test_config_error_wraps() {
        let err: TaskboardError = ConfigError::validation("blank marker").into();
        assert!(err.to_string().contains("blank marker"));
    }
}
