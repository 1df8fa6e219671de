//! Task type

use super::ids::{ColumnId, TaskId, UserId};
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// A task/card on the board.
///
/// `column_id` and `assigned_to` are weak references: nothing guarantees the
/// column or user still exists, so readers must look them up and treat a
/// miss as "unplaced" / "unassigned".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub column_id: ColumnId,
    /// Set once at creation, kept to the millisecond
    #[serde(with = "millis")]
    pub created_at: DateTime<Utc>,
    /// Dense zero-based rank within `column_id`
    pub order: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<UserId>,
}

impl Task {
    /// Create a new task in a column at the given rank, stamped now
    pub fn new(title: impl Into<String>, column_id: impl Into<ColumnId>, order: usize) -> Self {
        Self {
            id: TaskId::new(),
            title: title.into(),
            description: String::new(),
            column_id: column_id.into(),
            created_at: Utc::now().trunc_subsecs(3),
            order,
            assigned_to: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the assignee
    pub fn with_assignee(mut self, user: impl Into<UserId>) -> Self {
        self.assigned_to = Some(user.into());
        self
    }

    /// Override the identifier
    pub fn with_id(mut self, id: impl Into<TaskId>) -> Self {
        self.id = id.into();
        self
    }

    /// Override the creation instant, dropping anything below a millisecond
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at.trunc_subsecs(3);
        self
    }

    /// Check whether the task sits in the given column
    pub fn is_in(&self, column: &ColumnId) -> bool {
        &self.column_id == column
    }
}

/// RFC 3339 with exactly three fractional digits and a `Z` suffix, the
/// shape browsers produce with `Date.toISOString`
mod millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&at.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        DateTime::<Utc>::deserialize(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_creation() {
        let task = Task::new("Write tests", "column-1", 2);
        assert_eq!(task.title, "Write tests");
        assert!(task.description.is_empty());
        assert_eq!(task.order, 2);
        assert!(task.is_in(&ColumnId::from_string("column-1")));
        assert!(task.assigned_to.is_none());
    }

    #[test]
    fn test_task_uses_camel_case_fields() {
        let task = Task::new("Test", "column-1", 0).with_assignee("user-1");
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["columnId"], "column-1");
        assert_eq!(json["assignedTo"], "user-1");
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn test_unassigned_task_omits_field() {
        let task = Task::new("Test", "column-1", 0);
        let json = serde_json::to_value(&task).unwrap();
        assert!(json.get("assignedTo").is_none());
    }

    #[test]
    fn test_reads_browser_written_task() {
        let json = r#"{
            "id": "task-1",
            "title": "Создать дизайн проекта",
            "description": "Разработать UI/UX",
            "columnId": "column-1",
            "createdAt": "2025-03-10T09:15:00.000Z",
            "order": 0,
            "assignedTo": "user-1"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id.as_str(), "task-1");
        assert_eq!(task.assigned_to, Some(UserId::from_string("user-1")));

        let again: Task = serde_json::from_value(serde_json::to_value(&task).unwrap()).unwrap();
        assert_eq!(again, task);
    }

    #[test]
    fn test_browser_timestamp_text_is_preserved() {
        let json = r#"{"id":"task-1","title":"t","description":"","columnId":"column-1","createdAt":"2025-03-10T09:15:00.000Z","order":0}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(serde_json::to_string(&task).unwrap(), json);
    }

    #[test]
    fn test_created_at_drops_sub_millisecond_digits() {
        let precise = DateTime::parse_from_rfc3339("2025-03-10T09:15:00.123456789Z")
            .unwrap()
            .with_timezone(&Utc);
        let task = Task::new("t", "column-1", 0).with_created_at(precise);
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["createdAt"], "2025-03-10T09:15:00.123Z");

        let back: Task = serde_json::from_value(json).unwrap();
        assert_eq!(back.created_at, task.created_at);
    }
}
