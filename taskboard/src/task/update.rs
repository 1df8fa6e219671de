//! UpdateTask command

use crate::context::BoardContext;
use crate::error::{Result, TaskboardError};
use crate::processor::{mutation_outcome, operation_input};
use crate::types::TaskId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use taskboard_operations::{operation, Execute, ExecutionResult};

/// Edit a task's text
#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateTask {
    pub id: TaskId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

operation!(
    UpdateTask,
    verb = "update",
    noun = "task",
    description = "Update a task's title or description"
);

impl UpdateTask {
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            description: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    fn apply(&self, ctx: &mut BoardContext) -> Result<Option<Value>> {
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(TaskboardError::empty_title("task"));
            }
        }

        let store = ctx.store_mut();
        let found = store.update_task(&self.id, |task| {
            if let Some(title) = &self.title {
                task.title = title.trim().to_string();
            }
            if let Some(description) = &self.description {
                task.description = description.clone();
            }
        });
        if !found {
            return Ok(None);
        }

        store
            .task(&self.id)
            .map(serde_json::to_value)
            .transpose()
            .map_err(Into::into)
    }
}

impl Execute<BoardContext, TaskboardError> for UpdateTask {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, TaskboardError> {
        let started = Instant::now();
        let input = operation_input(self);
        let result = self.apply(ctx);
        mutation_outcome(self, input, started, result)
    }
}
