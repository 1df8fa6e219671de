//! AssignTask command

use crate::context::BoardContext;
use crate::error::{Result, TaskboardError};
use crate::processor::{mutation_outcome, operation_input};
use crate::types::{TaskId, UserId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use taskboard_operations::{operation, Execute, ExecutionResult};

/// Assign a task to a user, or clear the assignment.
///
/// The user is not looked up: assignments are weak references and may name a
/// user that does not exist (readers then see the task as unassigned).
#[derive(Debug, Deserialize, Serialize)]
pub struct AssignTask {
    pub id: TaskId,
    #[serde(default)]
    pub user: Option<UserId>,
}

operation!(
    AssignTask,
    verb = "assign",
    noun = "task",
    description = "Assign a task to a user or clear its assignee"
);

impl AssignTask {
    pub fn new(id: impl Into<TaskId>, user: impl Into<UserId>) -> Self {
        Self {
            id: id.into(),
            user: Some(user.into()),
        }
    }

    /// Clear the assignee
    pub fn unassign(id: impl Into<TaskId>) -> Self {
        Self {
            id: id.into(),
            user: None,
        }
    }

    fn apply(&self, ctx: &mut BoardContext) -> Result<Option<Value>> {
        let store = ctx.store_mut();
        if !store.update_task(&self.id, |task| task.assigned_to = self.user.clone()) {
            return Ok(None);
        }
        store
            .task(&self.id)
            .map(serde_json::to_value)
            .transpose()
            .map_err(Into::into)
    }
}

impl Execute<BoardContext, TaskboardError> for AssignTask {
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
    fn test_assign_and_unassign() {
        let mut ctx = BoardContext::in_memory(BoardConfig::default());

        let result = AssignTask::new("task-2", "user-3")
            .execute(&mut ctx)
            .into_result()
            .unwrap();
        assert_eq!(result["assignedTo"], "user-3");

        AssignTask::unassign("task-2")
            .execute(&mut ctx)
            .into_result()
            .unwrap();
        assert!(ctx.store().task(&"task-2".into()).unwrap().assigned_to.is_none());
    }

    #[test]
    fn test_assign_unknown_user_is_dangling() {
        let mut ctx = BoardContext::in_memory(BoardConfig::default());
        AssignTask::new("task-1", "user-99")
            .execute(&mut ctx)
            .into_result()
            .unwrap();

        let task = ctx.store().task(&"task-1".into()).unwrap();
        assert_eq!(task.assigned_to.as_ref().map(|u| u.as_str()), Some("user-99"));
        assert!(ctx.store().assigned_user(task).is_none());
    }
}
