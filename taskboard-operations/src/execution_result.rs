//! What an operation hands back to its processor

use crate::LogEntry;

/// Outcome of one operation run.
///
/// Mutations come back `Logged` with the entry describing the change. Reads,
/// and mutations that found nothing to act on, come back `Unlogged`. Errors
/// come back `Failed`, carrying an entry when the attempt itself is worth
/// keeping in the activity log.
#[derive(Debug)]
pub enum ExecutionResult<T, E> {
    Logged { value: T, log_entry: LogEntry },
    Unlogged { value: T },
    Failed {
        error: E,
        log_entry: Option<LogEntry>,
    },
}

impl<T, E> ExecutionResult<T, E> {
    /// Drop the log entry and keep the outcome
    pub fn into_result(self) -> Result<T, E> {
        self.split().0
    }

    /// Separate the outcome from its log entry
    pub fn split(self) -> (Result<T, E>, Option<LogEntry>) {
        match self {
            Self::Logged { value, log_entry } => (Ok(value), Some(log_entry)),
            Self::Unlogged { value } => (Ok(value), None),
            Self::Failed { error, log_entry } => (Err(error), log_entry),
        }
    }

    /// The entry a processor should record, if any
    pub fn log_entry(&self) -> Option<&LogEntry> {
        match self {
            Self::Logged { log_entry, .. } => Some(log_entry),
            Self::Failed { log_entry, .. } => log_entry.as_ref(),
            Self::Unlogged { .. } => None,
        }
    }

    pub fn should_log(&self) -> bool {
        self.log_entry().is_some()
    }
}
