//! Board operation processor

use crate::context::BoardContext;
use crate::error::TaskboardError;
use serde_json::Value;
use std::time::Instant;
use taskboard_operations::{Execute, ExecutionResult, LogEntry, Operation, OperationProcessor};
use tracing::{debug, warn};

/// Executes board operations and records them in the context's activity log
#[derive(Debug, Clone, Default)]
pub struct BoardOperationProcessor {
    actor: Option<String>,
}

impl BoardOperationProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp every recorded entry with `actor`
    pub fn with_actor(actor: impl Into<String>) -> Self {
        Self {
            actor: Some(actor.into()),
        }
    }
}

impl OperationProcessor<BoardContext, TaskboardError> for BoardOperationProcessor {
    fn process<O>(&self, operation: &O, ctx: &mut BoardContext) -> Result<Value, TaskboardError>
    where
        O: Operation + Execute<BoardContext, TaskboardError>,
    {
        debug!(op = %operation.op_string(), "processing operation");
        let outcome = operation.execute(ctx);
        if !outcome.should_log() {
            debug!(op = %operation.op_string(), "nothing to record");
        }
        let (result, log_entry) = outcome.split();

        if let Some(mut entry) = log_entry {
            if let Some(actor) = &self.actor {
                entry = entry.with_actor(actor.clone());
            }
            ctx.record(entry);
        }

        if let Err(e) = &result {
            warn!(op = %operation.op_string(), error = %e, "operation failed");
        }
        result
    }
}

/// Turn a mutating command's outcome into an execution result.
///
/// `Ok(Some(value))` is a change worth logging, `Ok(None)` is a soft
/// not-found that changed nothing and yields `null`, and errors are logged
/// as failures.
pub(crate) fn mutation_outcome<O: Operation>(
    operation: &O,
    input: Value,
    started: Instant,
    result: Result<Option<Value>, TaskboardError>,
) -> ExecutionResult<Value, TaskboardError> {
    let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    match result {
        Ok(Some(value)) => ExecutionResult::Logged {
            value: value.clone(),
            log_entry: LogEntry::new(operation.op_string(), input, value, None, duration_ms),
        },
        Ok(None) => {
            warn!(op = %operation.op_string(), %input, "target not found, nothing changed");
            ExecutionResult::Unlogged { value: Value::Null }
        }
        Err(error) => {
            let message = error.to_string();
            ExecutionResult::Failed {
                error,
                log_entry: Some(LogEntry::failure(
                    operation.op_string(),
                    input,
                    &message,
                    duration_ms,
                )),
            }
        }
    }
}

/// Serialized command input for log entries
pub(crate) fn operation_input<O: serde::Serialize>(operation: &O) -> Value {
    serde_json::to_value(operation).unwrap_or(Value::Null)
}
