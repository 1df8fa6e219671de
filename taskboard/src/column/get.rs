//! GetColumn command

use crate::context::BoardContext;
use crate::error::{Result, TaskboardError};
use crate::types::ColumnId;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use taskboard_operations::{operation, Execute, ExecutionResult};

/// Get a column with its task count
#[derive(Debug, Deserialize, Serialize)]
pub struct GetColumn {
    pub id: ColumnId,
}

operation!(GetColumn, verb = "get", noun = "column", description = "Retrieve a column by ID");

impl GetColumn {
    pub fn new(id: impl Into<ColumnId>) -> Self {
        Self { id: id.into() }
    }

    fn read(&self, ctx: &BoardContext) -> Result<Value> {
        let store = ctx.store();
        let Some(column) = store.column(&self.id) else {
            return Ok(Value::Null);
        };
        let mut result = serde_json::to_value(column)?;
        result["task_count"] = json!(store.task_count(&column.id));
        Ok(result)
    }
}

impl Execute<BoardContext, TaskboardError> for GetColumn {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoardConfig;

    #[test]
    fn test_get_column() {
        let mut ctx = BoardContext::in_memory(BoardConfig::default());
        let result = GetColumn::new("column-1").execute(&mut ctx).into_result().unwrap();
        assert_eq!(result["title"], "К выполнению");
        assert_eq!(result["task_count"], 2);

        let missing = GetColumn::new("ghost").execute(&mut ctx).into_result().unwrap();
        assert!(missing.is_null());
    }
}
