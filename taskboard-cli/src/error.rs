//! Error handling for the taskboard CLI
//!
//! Library errors are wrapped with an exit code while keeping the original
//! error as the source, so the full cause chain can be printed.

use std::error::Error;
use std::fmt;

use taskboard::{ConfigError, TaskboardError};

use crate::exit_codes::{EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE};

/// Result of running one CLI command
pub type CliResult<T> = Result<T, CliError>;

/// A failure to report on stderr, with the exit code it maps to
#[derive(Debug)]
pub struct CliError {
    pub message: String,
    pub exit_code: i32,
    pub source: Option<Box<dyn Error + Send + Sync>>,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: i32) -> Self {
        Self {
            message: message.into(),
            exit_code,
            source: None,
        }
    }

    /// The message followed by one "Caused by" line per underlying error
    pub fn full_chain(&self) -> String {
        std::iter::successors(self.source(), |&err| err.source()).fold(
            self.message.clone(),
            |mut chain, cause| {
                chain.push_str(&format!("\n  Caused by: {cause}"));
                chain
            },
        )
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn Error + 'static))
    }
}

impl From<TaskboardError> for CliError {
    fn from(error: TaskboardError) -> Self {
        let exit_code = if error.is_validation() {
            EXIT_USAGE
        } else {
            EXIT_ERROR
        };
        Self {
            message: error.to_string(),
            exit_code,
            source: Some(Box::new(error)),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        Self {
            message: "could not load configuration".to_string(),
            exit_code: EXIT_ERROR,
            source: Some(Box::new(error)),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(error: serde_json::Error) -> Self {
        Self {
            message: "could not format output".to_string(),
            exit_code: EXIT_ERROR,
            source: Some(Box::new(error)),
        }
    }
}

/// Exit code for a finished command, logging the error chain on failure
pub fn handle_cli_result<T>(result: CliResult<T>) -> i32 {
    match result {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => {
            tracing::error!("Error: {}", e.full_chain());
            e.exit_code
        }
    }
}
