//! Column type

use super::ids::ColumnId;
use serde::{Deserialize, Serialize};

/// A column defines a workflow stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    /// Dense zero-based rank among all columns, left to right
    pub order: usize,
}

impl Column {
    /// Create a new column with a fresh id
    pub fn new(title: impl Into<String>, order: usize) -> Self {
        Self {
            id: ColumnId::new(),
            title: title.into(),
            order,
        }
    }

    /// Override the identifier
    pub fn with_id(mut self, id: impl Into<ColumnId>) -> Self {
        self.id = id.into();
        self
    }

    /// Case-insensitive substring match against the title
    pub fn title_contains(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(&needle.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_match_is_case_insensitive() {
        let column = Column::new("ВЫПОЛНЕНО", 2);
        assert!(column.title_contains("выполнено"));
        assert!(Column::new("Done!", 0).title_contains("DONE"));
        assert!(!Column::new("Backlog", 0).title_contains("done"));
    }
}
