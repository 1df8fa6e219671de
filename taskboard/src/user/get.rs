//! GetUser command

use super::user_view;
use crate::context::BoardContext;
use crate::error::TaskboardError;
use crate::types::UserId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{operation, Execute, ExecutionResult};

/// Get a user by ID
#[derive(Debug, Deserialize, Serialize)]
pub struct GetUser {
    pub id: UserId,
}

operation!(GetUser, verb = "get", noun = "user", description = "Retrieve a user by ID");

impl GetUser {
    pub fn new(id: impl Into<UserId>) -> Self {
        Self { id: id.into() }
    }
}

impl Execute<BoardContext, TaskboardError> for GetUser {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, TaskboardError> {
        let value = ctx
            .store()
            .user(&self.id)
            .map_or(Value::Null, user_view);
        ExecutionResult::Unlogged { value }
    }
}
