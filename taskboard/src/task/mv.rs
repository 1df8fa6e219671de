//! MoveTask command

use crate::context::BoardContext;
use crate::error::{Result, TaskboardError};
use crate::ordering;
use crate::processor::{mutation_outcome, operation_input};
use crate::types::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use taskboard_operations::{operation, Execute, ExecutionResult};

/// Move a task to a position in a column
#[derive(Debug, Deserialize, Serialize)]
pub struct MoveTask {
    pub id: TaskId,
    /// Target column; may be the task's own column for a reorder
    pub column: ColumnId,
    /// Target slot, clamped to the column's bounds
    pub index: i64,
}

operation!(
    MoveTask,
    verb = "move",
    noun = "task",
    description = "Move a task to a different column or position"
);

impl MoveTask {
    pub fn new(id: impl Into<TaskId>, column: impl Into<ColumnId>, index: i64) -> Self {
        Self {
            id: id.into(),
            column: column.into(),
            index,
        }
    }

    /// Move to the bottom of a column
    pub fn to_end(id: impl Into<TaskId>, column: impl Into<ColumnId>) -> Self {
        Self::new(id, column, i64::MAX)
    }

    fn apply(&self, ctx: &mut BoardContext) -> Result<Option<Value>> {
        let store = ctx.store_mut();
        if store.column(&self.column).is_none() {
            return Ok(None);
        }
        let Some(tasks) = ordering::try_move_task(store.tasks(), &self.id, &self.column, self.index)
        else {
            return Ok(None);
        };
        store.set_tasks(tasks);

        store
            .task(&self.id)
            .map(serde_json::to_value)
            .transpose()
            .map_err(Into::into)
    }
}

impl Execute<BoardContext, TaskboardError> for MoveTask {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, TaskboardError> {
        let started = Instant::now();
        let input = operation_input(self);
        let result = self.apply(ctx);
        mutation_outcome(self, input, started, result)
    }
}
