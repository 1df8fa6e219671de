//! ListColumns command

use crate::context::BoardContext;
use crate::error::{Result, TaskboardError};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use taskboard_operations::{operation, Execute, ExecutionResult};

/// List columns left to right
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ListColumns;

operation!(
    ListColumns,
    verb = "list",
    noun = "column",
    description = "List all columns in board order"
);

impl ListColumns {
    pub fn new() -> Self {
        Self
    }

    fn read(&self, ctx: &BoardContext) -> Result<Value> {
        let store = ctx.store();
        let columns: Vec<Value> = store
            .columns_in_order()
            .into_iter()
            .map(|column| -> Result<Value> {
                let mut value = serde_json::to_value(column)?;
                value["task_count"] = json!(store.task_count(&column.id));
                Ok(value)
            })
            .collect::<Result<_>>()?;
        let count = columns.len();
        Ok(json!({ "columns": columns, "count": count }))
    }
}

impl Execute<BoardContext, TaskboardError> for ListColumns {
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
    fn test_list_columns_in_order() {
        let mut ctx = BoardContext::in_memory(BoardConfig::default());
        let result = ListColumns::new().execute(&mut ctx).into_result().unwrap();

        assert_eq!(result["count"], 3);
        let titles: Vec<&str> = result["columns"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, vec!["К выполнению", "В процессе", "Выполнено"]);
        assert_eq!(result["columns"][1]["task_count"], 1);
    }
}
