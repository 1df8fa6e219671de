//! AddColumn command

use crate::context::BoardContext;
use crate::error::{Result, TaskboardError};
use crate::ordering;
use crate::processor::{mutation_outcome, operation_input};
use crate::types::Column;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use taskboard_operations::{operation, Execute, ExecutionResult};

/// Add a new column at the right edge of the board
#[derive(Debug, Deserialize, Serialize)]
pub struct AddColumn {
    pub title: String,
}

operation!(
    AddColumn,
    verb = "add",
    noun = "column",
    description = "Add a new column to the board"
);

impl AddColumn {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    fn apply(&self, ctx: &mut BoardContext) -> Result<Option<Value>> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(TaskboardError::empty_title("column"));
        }

        let store = ctx.store_mut();
        let column = Column::new(title, ordering::next_column_order(store.columns()));
        let value = serde_json::to_value(&column)?;
        store.push_column(column);
        Ok(Some(value))
    }
}

impl Execute<BoardContext, TaskboardError> for AddColumn {
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
    fn test_add_column_appends() {
        let mut ctx = BoardContext::in_memory(BoardConfig::default());

        let result = AddColumn::new("  Архив ")
            .execute(&mut ctx)
            .into_result()
            .unwrap();

        assert_eq!(result["title"], "Архив");
        assert_eq!(result["order"], 3);
        assert_eq!(result["id"].as_str().unwrap().len(), 26);
        assert_eq!(ctx.store().columns_in_order().last().unwrap().title, "Архив");
    }

    #[test]
    fn test_add_column_empty_title() {
        let mut ctx = BoardContext::in_memory(BoardConfig::default());
        let err = AddColumn::new("").execute(&mut ctx).into_result().unwrap_err();
        assert_eq!(err.to_string(), "column title cannot be empty");
        assert_eq!(ctx.store().columns().len(), 3);
    }
}
