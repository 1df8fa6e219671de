//! Activity log entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One recorded operation: what was asked, what came back, who asked and
/// how long it took.
///
/// Failures are entries whose `output` is an object with an `error` key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// ULID, so entries sort by creation time
    pub id: String,
    pub timestamp: DateTime<Utc>,
    /// Verb and noun, e.g. "move task"
    pub op: String,
    /// The operation's own fields
    pub input: Value,
    pub output: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,
    pub duration_ms: u64,
}

impl LogEntry {
    pub fn new(
        op: impl Into<String>,
        input: Value,
        output: Value,
        actor: Option<String>,
        duration_ms: u64,
    ) -> Self {
        Self {
            id: ulid::Ulid::new().to_string(),
            timestamp: Utc::now(),
            op: op.into(),
            input,
            output,
            actor,
            duration_ms,
        }
    }

    /// An entry recording that `op` failed with `error`
    pub fn failure(op: impl Into<String>, input: Value, error: &str, duration_ms: u64) -> Self {
        Self::new(
            op,
            input,
            serde_json::json!({ "error": error }),
            None,
            duration_ms,
        )
    }

    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    pub fn is_failure(&self) -> bool {
        self.output.get("error").is_some()
    }
}
