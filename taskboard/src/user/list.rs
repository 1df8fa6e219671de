//! ListUsers command

use super::user_view;
use crate::context::BoardContext;
use crate::error::TaskboardError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{operation, Execute, ExecutionResult};

/// List all users
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ListUsers;

operation!(ListUsers, verb = "list", noun = "user", description = "List all users");

impl ListUsers {
    pub fn new() -> Self {
        Self
    }
}

impl Execute<BoardContext, TaskboardError> for ListUsers {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, TaskboardError> {
        let users: Vec<Value> = ctx.store().users().iter().map(user_view).collect();
        ExecutionResult::Unlogged {
            value: Value::Array(users),
        }
    }
}
