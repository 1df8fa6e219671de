//! AddTask command

use crate::context::BoardContext;
use crate::error::{Result, TaskboardError};
use crate::ordering;
use crate::processor::{mutation_outcome, operation_input};
use crate::types::{ColumnId, Task, UserId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use taskboard_operations::{operation, Execute, ExecutionResult};

/// Add a new task at the bottom of a column
#[derive(Debug, Deserialize, Serialize)]
pub struct AddTask {
    /// Column the task goes into
    pub column: ColumnId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub assigned_to: Option<UserId>,
}

operation!(
    AddTask,
    verb = "add",
    noun = "task",
    description = "Add a new task to the bottom of a column"
);

impl AddTask {
    pub fn new(column: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            title: title.into(),
            description: None,
            assigned_to: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_assignee(mut self, user: impl Into<UserId>) -> Self {
        self.assigned_to = Some(user.into());
        self
    }

    fn apply(&self, ctx: &mut BoardContext) -> Result<Option<Value>> {
        if self.title.trim().is_empty() {
            return Err(TaskboardError::empty_title("task"));
        }

        let store = ctx.store_mut();
        if store.column(&self.column).is_none() {
            return Ok(None);
        }

        let order = ordering::next_task_order(store.tasks(), &self.column);
        let mut task = Task::new(self.title.trim(), self.column.clone(), order)
            .with_description(self.description.clone().unwrap_or_default());
        task.assigned_to = self.assigned_to.clone();

        let value = serde_json::to_value(&task)?;
        store.push_task(task);
        Ok(Some(value))
    }
}

impl Execute<BoardContext, TaskboardError> for AddTask {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, TaskboardError> {
        let started = Instant::now();
        let input = operation_input(self);
        let result = self.apply(ctx);
        mutation_outcome(self, input, started, result)
    }
}
