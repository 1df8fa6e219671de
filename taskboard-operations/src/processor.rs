//! Operation processor: execute, then record

use crate::{Execute, Operation};
use serde_json::Value;

/// Runs operations against a context and takes care of audit logging.
///
/// Implementors decide where log entries go and which actor they carry;
/// operations only decide whether they are worth logging.
pub trait OperationProcessor<C, E> {
    /// Execute the operation, record its log entry if it produced one,
    /// and return the plain result.
    fn process<O>(&self, operation: &O, ctx: &mut C) -> Result<Value, E>
    where
        O: Operation + Execute<C, E>;
}
