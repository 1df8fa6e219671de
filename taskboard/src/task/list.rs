//! ListTasks command

use crate::context::BoardContext;
use crate::error::{Result, TaskboardError};
use crate::types::ColumnId;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use taskboard_operations::{operation, Execute, ExecutionResult};

/// List tasks in board order.
///
/// With a column, returns that column's tasks top to bottom. Without one,
/// returns every column left to right with its tasks. Tasks whose column no
/// longer exists are listed under `unplaced`.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ListTasks {
    #[serde(default)]
    pub column: Option<ColumnId>,
}

operation!(ListTasks, verb = "list", noun = "task", description = "List tasks by column");

impl ListTasks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_column(column: impl Into<ColumnId>) -> Self {
        Self {
            column: Some(column.into()),
        }
    }

    fn read(&self, ctx: &BoardContext) -> Result<Value> {
        let store = ctx.store();

        if let Some(column) = &self.column {
            return Ok(serde_json::to_value(store.tasks_in_column(column))?);
        }

        let mut columns = Vec::new();
        for column in store.columns_in_order() {
            columns.push(json!({
                "column": column,
                "tasks": store.tasks_in_column(&column.id),
            }));
        }
        let unplaced: Vec<_> = store
            .tasks()
            .iter()
            .filter(|t| store.column(&t.column_id).is_none())
            .collect();

        Ok(json!({
            "columns": columns,
            "unplaced": unplaced,
        }))
    }
}

impl Execute<BoardContext, TaskboardError> for ListTasks {
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
