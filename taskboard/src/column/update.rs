//! UpdateColumn command

use crate::context::BoardContext;
use crate::error::{Result, TaskboardError};
use crate::processor::{mutation_outcome, operation_input};
use crate::types::ColumnId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use taskboard_operations::{operation, Execute, ExecutionResult};

/// Rename a column
#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateColumn {
    pub id: ColumnId,
    pub title: String,
}

operation!(UpdateColumn, verb = "update", noun = "column", description = "Rename a column");

impl UpdateColumn {
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }

    fn apply(&self, ctx: &mut BoardContext) -> Result<Option<Value>> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(TaskboardError::empty_title("column"));
        }

        let store = ctx.store_mut();
        if !store.update_column(&self.id, |column| column.title = title.to_string()) {
            return Ok(None);
        }
        store
            .column(&self.id)
            .map(serde_json::to_value)
            .transpose()
            .map_err(Into::into)
    }
}

impl Execute<BoardContext, TaskboardError> for UpdateColumn {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, TaskboardError> {
        let started = Instant::now();
        let input = operation_input(self);
        let result = self.apply(ctx);
        mutation_outcome(self, input, started, result)
    }
}
