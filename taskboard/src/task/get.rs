//! GetTask command

use crate::context::BoardContext;
use crate::error::{Result, TaskboardError};
use crate::types::TaskId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{operation, Execute, ExecutionResult};

/// Get a task with its assignee resolved
#[derive(Debug, Deserialize, Serialize)]
pub struct GetTask {
    pub id: TaskId,
}

operation!(
    GetTask,
    verb = "get",
    noun = "task",
    description = "Retrieve a task by ID with its assignee"
);

impl GetTask {
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self { id: id.into() }
    }

    fn read(&self, ctx: &BoardContext) -> Result<Value> {
        let store = ctx.store();
        let Some(task) = store.task(&self.id) else {
            return Ok(Value::Null);
        };

        let mut result = serde_json::to_value(task)?;
        result["assignee"] = match store.assigned_user(task) {
            Some(user) => serde_json::to_value(user)?,
            None => Value::Null,
        };
        result["column"] = match store.column(&task.column_id) {
            Some(column) => serde_json::to_value(column)?,
            None => Value::Null,
        };
        Ok(result)
    }
}

impl Execute<BoardContext, TaskboardError> for GetTask {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, TaskboardError> {
        match self.read(ctx) {
            Ok(value) => ExecutionResult::Unlogged { value },
            Err(error) => ExecutionResult::Failed {
                error,
                log_entry: None,
            },
        }
    }
}
