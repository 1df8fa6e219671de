//! Operation metadata and execution traits

use crate::ExecutionResult;
use serde_json::Value;

/// Metadata every operation carries: a verb and a noun ("move task").
pub trait Operation {
    /// The action, e.g. "add", "move"
    fn verb(&self) -> &'static str;

    /// The entity acted upon, e.g. "task", "column"
    fn noun(&self) -> &'static str;

    /// One-line human description
    fn description(&self) -> &'static str;

    /// Canonical op string used in log entries
    fn op_string(&self) -> String {
        format!("{} {}", self.verb(), self.noun())
    }
}

/// Run an operation against a context.
///
/// Execution is synchronous: the context is borrowed mutably for the whole
/// call, so no other reader can observe a half-applied operation.
pub trait Execute<C, E> {
    fn execute(&self, ctx: &mut C) -> ExecutionResult<Value, E>;
}

/// Implement [`Operation`] for a struct.
///
/// ```ignore
/// operation!(MoveTask, verb = "move", noun = "task", description = "Move a task");
/// ```
#[macro_export]
macro_rules! operation {
    ($ty:ty, verb = $verb:literal, noun = $noun:literal, description = $desc:literal $(,)?) => {
        impl $crate::Operation for $ty {
            fn verb(&self) -> &'static str {
                $verb
            }

            fn noun(&self) -> &'static str {
                $noun
            }

            fn description(&self) -> &'static str {
                $desc
            }
        }
    };
}
