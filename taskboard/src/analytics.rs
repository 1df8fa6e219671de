//! Weekly completion analytics.
//!
//! The "done" column is found heuristically: the first column whose title
//! contains a completion marker, else the rightmost column. A board whose
//! terminal stage is named something unrecognised, or that has columns to
//! the right of its real done stage, will be misclassified. Callers that
//! display these numbers should present them as an approximation.

use crate::types::{Column, ColumnId, Task};
use chrono::{DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Title fragments that mark a column as the done stage
pub const DEFAULT_DONE_MARKERS: [&str; 3] = ["выполнено", "готово", "done"];

/// The ISO week (Monday through Sunday) containing an instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekWindow {
    /// Monday 00:00:00.000
    pub start: DateTime<Utc>,
    /// Sunday 23:59:59.999
    pub end: DateTime<Utc>,
}

impl WeekWindow {
    /// The week containing `now`, on the calendar of `now`'s own timezone.
    /// A Sunday is the last day of its week.
    pub fn containing<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        let tz = now.timezone();
        let today = now.date_naive();
        let monday = today - Duration::days(i64::from(today.weekday().num_days_from_monday()));
        let sunday = monday + Duration::days(6);

        Self {
            start: local_to_utc(&tz, monday.and_time(NaiveTime::MIN), true),
            end: local_to_utc(&tz, end_of_day(sunday), false),
        }
    }

    /// Inclusive at both ends
    pub fn contains(&self, instant: &DateTime<Utc>) -> bool {
        *instant >= self.start && *instant <= self.end
    }
}

fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    let last_milli = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
    date.and_time(last_milli)
}

/// Resolve a wall-clock time to an instant. Ambiguous times (clocks going
/// back) take the earliest reading for a window start and the latest for a
/// window end. Nonexistent times (clocks going forward) resolve to the first
/// wall-clock reading after the gap, probed in 15 minute steps.
fn local_to_utc<Tz: TimeZone>(tz: &Tz, local: NaiveDateTime, earliest: bool) -> DateTime<Utc> {
    let resolve = |wall: NaiveDateTime| match tz.from_local_datetime(&wall) {
        LocalResult::Single(t) => Some(t.with_timezone(&Utc)),
        LocalResult::Ambiguous(first, last) => {
            let pick = if earliest { first } else { last };
            Some(pick.with_timezone(&Utc))
        }
        LocalResult::None => None,
    };

    (0..=MAX_GAP_STEPS)
        .find_map(|step| resolve(local + Duration::minutes(15 * step)))
        .unwrap_or_else(|| Utc.from_utc_datetime(&local))
}

/// Two days of 15 minute steps; the longest real gap is a skipped calendar day
const MAX_GAP_STEPS: i64 = 192;

/// Find the done column.
///
/// Columns are scanned in collection order and the first title containing
/// any marker (case-insensitive) wins. With no match, the column with the
/// highest `order` is used; ties go to the earliest in collection order.
/// Returns `None` only when there are no columns.
pub fn resolve_done_column<'a, S: AsRef<str>>(
    columns: &'a [Column],
    markers: &[S],
) -> Option<&'a Column> {
    columns
        .iter()
        .find(|column| markers.iter().any(|m| column.title_contains(m.as_ref())))
        .or_else(|| {
            columns
                .iter()
                .fold(None, |best: Option<&Column>, column| match best {
                    Some(b) if b.order >= column.order => Some(b),
                    _ => Some(column),
                })
        })
}

/// Task counts for one week
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyStats {
    pub total: usize,
    pub completed: usize,
    pub remaining: usize,
}

/// Weekly stats together with what they were computed against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyReport {
    #[serde(flatten)]
    pub stats: WeeklyStats,
    pub window: WeekWindow,
    pub done_column: Option<ColumnId>,
}

/// Count this week's tasks using the default completion markers
pub fn compute_weekly_stats<Tz: TimeZone>(
    tasks: &[Task],
    columns: &[Column],
    now: &DateTime<Tz>,
) -> WeeklyStats {
    weekly_report(tasks, columns, now, &DEFAULT_DONE_MARKERS).stats
}

/// Count this week's tasks: total created in the window, how many of those
/// sit in the done column, and the rest.
pub fn weekly_report<Tz: TimeZone, S: AsRef<str>>(
    tasks: &[Task],
    columns: &[Column],
    now: &DateTime<Tz>,
    markers: &[S],
) -> WeeklyReport {
    let window = WeekWindow::containing(now);
    let done_column = resolve_done_column(columns, markers).map(|c| c.id.clone());

    let in_window = tasks.iter().filter(|t| window.contains(&t.created_at));
    let (total, completed) = in_window.fold((0, 0), |(total, completed), task| {
        let done = done_column.as_ref() == Some(&task.column_id);
        (total + 1, completed + usize::from(done))
    });

    debug!(
        start = %window.start,
        end = %window.end,
        done_column = ?done_column,
        total,
        completed,
        "computed weekly stats"
    );

    WeeklyReport {
        stats: WeeklyStats {
            total,
            completed,
            remaining: total - completed,
        },
        window,
        done_column,
    }
}
