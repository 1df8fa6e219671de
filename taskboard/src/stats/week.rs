//! WeeklyStatsCommand

use crate::analytics::weekly_report;
use crate::context::BoardContext;
use crate::error::{Result, TaskboardError};
use chrono::{DateTime, FixedOffset, Local, TimeZone};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{operation, Execute, ExecutionResult};

/// Count this week's tasks: created, completed and remaining.
///
/// `now` fixes both the instant and the calendar the week is measured on.
/// Without it the week follows the local timezone, daylight saving included.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct WeeklyStatsCommand {
    #[serde(default)]
    pub now: Option<DateTime<FixedOffset>>,
}

operation!(
    WeeklyStatsCommand,
    verb = "week",
    noun = "stats",
    description = "Task totals for the current ISO week"
);

impl WeeklyStatsCommand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(now: DateTime<FixedOffset>) -> Self {
        Self { now: Some(now) }
    }

    fn read(&self, ctx: &BoardContext) -> Result<Value> {
        match &self.now {
            Some(now) => report_at(ctx, now),
            None => report_at(ctx, &Local::now()),
        }
    }
}

fn report_at<Tz: TimeZone>(ctx: &BoardContext, now: &DateTime<Tz>) -> Result<Value> {
    let store = ctx.store();
    let report = weekly_report(store.tasks(), store.columns(), now, ctx.done_markers());
    Ok(serde_json::to_value(report)?)
}

impl Execute<BoardContext, TaskboardError> for WeeklyStatsCommand {
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
    use crate::task::MoveTask;
    use crate::types::Task;
    use chrono::Utc;
    use crate::test_support::{with_tz, BERLIN};
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_seeded_board_this_week() {
        let mut ctx = BoardContext::in_memory(BoardConfig::default());

        let result = WeeklyStatsCommand::new()
            .execute(&mut ctx)
            .into_result()
            .unwrap();

        assert_eq!(result["total"], 4);
        assert_eq!(result["completed"], 1);
        assert_eq!(result["remaining"], 3);
        assert_eq!(result["done_column"], "column-3");
    }

    #[test]
    #[serial]
    fn test_moving_into_done_counts_as_completed() {
        let mut ctx = BoardContext::in_memory(BoardConfig::default());
        MoveTask::to_end("task-1", "column-3")
            .execute(&mut ctx)
            .into_result()
            .unwrap();

        let result = WeeklyStatsCommand::new()
            .execute(&mut ctx)
            .into_result()
            .unwrap();

        assert_eq!(result["completed"], 2);
    }

    #[test]
    #[serial]
    fn test_configured_markers() {
        let config = BoardConfig {
            done_markers: vec!["процессе".into()],
            ..BoardConfig::default()
        };
        let mut ctx = BoardContext::in_memory(config);

        let result = WeeklyStatsCommand::new()
            .execute(&mut ctx)
            .into_result()
            .unwrap();

        assert_eq!(result["done_column"], "column-2");
        assert_eq!(result["completed"], 1);
    }

    #[test]
    fn test_explicit_now_outside_seed_week() {
        let mut ctx = BoardContext::in_memory(BoardConfig::default());
        let long_ago = DateTime::parse_from_rfc3339("2001-01-03T10:00:00+03:00").unwrap();

        let result = WeeklyStatsCommand::at(long_ago)
            .execute(&mut ctx)
            .into_result()
            .unwrap();

        assert_eq!(result["total"], 0);
        assert_eq!(result["window"]["start"], "2000-12-31T21:00:00Z");
    }

    #[test]
    #[serial]
    fn test_local_week_spans_daylight_saving_change() {
        with_tz(BERLIN, || {
            let mut ctx = BoardContext::in_memory(BoardConfig::default());
            // Sunday evening of the previous week in Berlin, 23:30 CET
            let last_week = DateTime::parse_from_rfc3339("2026-03-22T22:30:00Z")
                .unwrap()
                .with_timezone(&Utc);
            ctx.store_mut()
                .set_tasks(vec![Task::new("late", "column-1", 0).with_created_at(last_week)]);

            // Clocks went forward at 02:00 this morning
            let now = Local.with_ymd_and_hms(2026, 3, 29, 15, 0, 0).unwrap();
            let result = report_at(&ctx, &now).unwrap();

            assert_eq!(result["window"]["start"], "2026-03-22T23:00:00Z");
            assert_eq!(result["window"]["end"], "2026-03-29T21:59:59.999Z");
            assert_eq!(result["total"], 0);
        });
    }
}
