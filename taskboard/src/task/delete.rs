//! DeleteTask command

use crate::context::BoardContext;
use crate::error::{Result, TaskboardError};
use crate::ordering;
use crate::processor::{mutation_outcome, operation_input};
use crate::types::TaskId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use taskboard_operations::{operation, Execute, ExecutionResult};

/// Delete a task. The rest of its column closes ranks over the gap.
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteTask {
    pub id: TaskId,
}

operation!(DeleteTask, verb = "delete", noun = "task", description = "Delete a task");

impl DeleteTask {
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self { id: id.into() }
    }

    fn apply(&self, ctx: &mut BoardContext) -> Result<Option<Value>> {
        let store = ctx.store_mut();
        let Some((tasks, removed)) = ordering::remove_task(store.tasks(), &self.id) else {
            return Ok(None);
        };
        store.set_tasks(tasks);
        Ok(Some(serde_json::to_value(&removed)?))
    }
}

impl Execute<BoardContext, TaskboardError> for DeleteTask {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, TaskboardError> {
        let started = Instant::now();
        let input = operation_input(self);
        let result = self.apply(ctx);
        mutation_outcome(self, input, started, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoardConfig;

    #[test]
    fn test_delete_renumbers_column() {
        let mut ctx = BoardContext::in_memory(BoardConfig::default());

        let removed = DeleteTask::new("task-1")
            .execute(&mut ctx)
            .into_result()
            .unwrap();

        assert_eq!(removed["id"], "task-1");
        assert!(ctx.store().task(&"task-1".into()).is_none());
        assert_eq!(ctx.store().task(&"task-2".into()).unwrap().order, 0);
        assert_eq!(ctx.store().tasks().len(), 3);
    }

    #[test]
    fn test_delete_unknown_task() {
        let mut ctx = BoardContext::in_memory(BoardConfig::default());
        let result = DeleteTask::new("ghost").execute(&mut ctx);
        assert!(!result.should_log());
        assert_eq!(ctx.store().tasks().len(), 4);
    }
}
