//! Ordering engine: dense per-column ranks for tasks.
//!
//! Every function here is pure. It takes the current task collection and
//! returns the next one; the caller swaps it into the store in one step.
//!
//! Invariant maintained: for each column, the `order` values of its tasks
//! are exactly `0..count` with no gaps or duplicates.

use crate::types::{Column, ColumnId, Task, TaskId};
use tracing::trace;

/// Move a task to `target_index` within `target_column`.
///
/// The index is clamped into `[0, n]` where `n` is the number of tasks in
/// the target column not counting the moved one. Moving within the same
/// column is a plain reorder. An unknown task id returns the collection
/// unchanged.
pub fn move_task(
    tasks: &[Task],
    task_id: &TaskId,
    target_column: &ColumnId,
    target_index: i64,
) -> Vec<Task> {
    try_move_task(tasks, task_id, target_column, target_index).unwrap_or_else(|| tasks.to_vec())
}

/// Like [`move_task`] but reports an unknown task id as `None`.
pub fn try_move_task(
    tasks: &[Task],
    task_id: &TaskId,
    target_column: &ColumnId,
    target_index: i64,
) -> Option<Vec<Task>> {
    let position = tasks.iter().position(|t| &t.id == task_id)?;

    let mut moved = tasks[position].clone();
    let source_column = moved.column_id.clone();

    let mut rest: Vec<Task> = Vec::with_capacity(tasks.len());
    rest.extend_from_slice(&tasks[..position]);
    rest.extend_from_slice(&tasks[position + 1..]);

    let (mut lane, mut others): (Vec<Task>, Vec<Task>) =
        rest.into_iter().partition(|t| t.is_in(target_column));
    lane.sort_by_key(|t| t.order);

    let index = clamp_index(target_index, lane.len());
    trace!(
        task = %task_id,
        from = %source_column,
        to = %target_column,
        requested = target_index,
        index,
        "moving task"
    );

    moved.column_id = target_column.clone();
    lane.insert(index, moved);
    for (rank, task) in lane.iter_mut().enumerate() {
        task.order = rank;
    }

    if &source_column != target_column {
        renumber_column(&mut others, &source_column);
    }

    others.extend(lane);
    Some(others)
}

/// Remove a task and close the gap it leaves in its column.
///
/// Returns the new collection and the removed task, or `None` for an
/// unknown id.
pub fn remove_task(tasks: &[Task], task_id: &TaskId) -> Option<(Vec<Task>, Task)> {
    let position = tasks.iter().position(|t| &t.id == task_id)?;
    let mut remaining = tasks.to_vec();
    let removed = remaining.remove(position);
    renumber_column(&mut remaining, &removed.column_id);
    Some((remaining, removed))
}

/// Rewrite the orders of one column's tasks to `0..count`, keeping their
/// relative order. Tasks in other columns are left alone, and so is the
/// collection order.
pub fn renumber_column(tasks: &mut [Task], column: &ColumnId) {
    let mut ranked: Vec<(usize, usize)> = tasks
        .iter()
        .enumerate()
        .filter(|(_, t)| t.is_in(column))
        .map(|(slot, t)| (t.order, slot))
        .collect();
    ranked.sort();
    for (rank, (_, slot)) in ranked.into_iter().enumerate() {
        tasks[slot].order = rank;
    }
}

/// The order a task appended to `column` should get
pub fn next_task_order(tasks: &[Task], column: &ColumnId) -> usize {
    tasks.iter().filter(|t| t.is_in(column)).count()
}

/// The order a column appended to the board should get
pub fn next_column_order(columns: &[Column]) -> usize {
    columns.len()
}

/// Check the dense-rank invariant for one column
pub fn is_dense(tasks: &[Task], column: &ColumnId) -> bool {
    let mut orders: Vec<usize> = tasks
        .iter()
        .filter(|t| t.is_in(column))
        .map(|t| t.order)
        .collect();
    orders.sort_unstable();
    orders.iter().enumerate().all(|(rank, order)| rank == *order)
}

fn clamp_index(requested: i64, len: usize) -> usize {
    if requested <= 0 {
        0
    } else {
        usize::try_from(requested).map_or(len, |index| index.min(len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, column: &str, order: usize) -> Task {
        Task::new(id, column, order).with_id(id)
    }

    fn board() -> Vec<Task> {
        vec![
            task("t1", "A", 0),
            task("t2", "A", 1),
            task("t3", "A", 2),
            task("u1", "B", 0),
            task("u2", "B", 1),
            task("w1", "C", 0),
        ]
    }

    fn lane(tasks: &[Task], column: &str) -> Vec<String> {
        let column = ColumnId::from_string(column);
        let mut lane: Vec<&Task> = tasks.iter().filter(|t| t.is_in(&column)).collect();
        lane.sort_by_key(|t| t.order);
        lane.iter().map(|t| t.id.to_string()).collect()
    }

    #[test]
    fn test_reorder_to_front() {
        let result = move_task(&board(), &"t3".into(), &"A".into(), 0);
        assert_eq!(lane(&result, "A"), vec!["t3", "t1", "t2"]);
        assert!(is_dense(&result, &"A".into()));
    }

    #[test]
    fn test_move_across_columns_renumbers_both() {
        let result = move_task(&board(), &"t1".into(), &"B".into(), 1);
        assert_eq!(lane(&result, "A"), vec!["t2", "t3"]);
        assert_eq!(lane(&result, "B"), vec!["u1", "t1", "u2"]);
        assert!(is_dense(&result, &"A".into()));
        assert!(is_dense(&result, &"B".into()));
        let moved = result.iter().find(|t| t.id.as_str() == "t1").unwrap();
        assert_eq!(moved.column_id.as_str(), "B");
        assert_eq!(moved.order, 1);
    }

    #[test]
    fn test_other_columns_untouched() {
        let before = board();
        let result = move_task(&before, &"t1".into(), &"B".into(), 0);
        let w1_before = before.iter().find(|t| t.id.as_str() == "w1").unwrap();
        let w1_after = result.iter().find(|t| t.id.as_str() == "w1").unwrap();
        assert_eq!(w1_before, w1_after);
    }

    #[test]
    fn test_index_clamped() {
        let tasks = board();
        let low = move_task(&tasks, &"t2".into(), &"B".into(), -5);
        let zero = move_task(&tasks, &"t2".into(), &"B".into(), 0);
        assert_eq!(low, zero);

        let high = move_task(&tasks, &"t2".into(), &"B".into(), 9999);
        let end = move_task(&tasks, &"t2".into(), &"B".into(), 2);
        assert_eq!(high, end);
        assert_eq!(lane(&high, "B"), vec!["u1", "u2", "t2"]);
    }

    #[test]
    fn test_move_to_own_position_keeps_orders() {
        let before = board();
        let result = move_task(&before, &"t2".into(), &"A".into(), 1);
        for task in &before {
            let after = result.iter().find(|t| t.id == task.id).unwrap();
            assert_eq!(after.order, task.order, "order of {} changed", task.id);
            assert_eq!(after.column_id, task.column_id);
        }
    }

    #[test]
    fn test_unknown_task_is_noop() {
        let before = board();
        assert_eq!(move_task(&before, &"missing".into(), &"A".into(), 0), before);
        assert!(try_move_task(&before, &"missing".into(), &"A".into(), 0).is_none());
    }

    #[test]
    fn test_move_into_empty_column() {
        let result = move_task(&board(), &"u2".into(), &"empty".into(), 3);
        assert_eq!(lane(&result, "empty"), vec!["u2"]);
        assert_eq!(lane(&result, "B"), vec!["u1"]);
    }

    #[test]
    fn test_remove_closes_gap() {
        let (rest, removed) = remove_task(&board(), &"t1".into()).unwrap();
        assert_eq!(removed.id.as_str(), "t1");
        assert_eq!(lane(&rest, "A"), vec!["t2", "t3"]);
        assert!(is_dense(&rest, &"A".into()));
        assert!(remove_task(&rest, &"t1".into()).is_none());
    }

    #[test]
    fn test_renumber_repairs_gaps_and_keeps_collection_order() {
        let mut tasks = vec![task("x", "A", 7), task("y", "B", 4), task("z", "A", 3)];
        renumber_column(&mut tasks, &"A".into());
        let ids: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["x", "y", "z"]);
        assert_eq!(tasks[0].order, 1);
        assert_eq!(tasks[2].order, 0);
        assert_eq!(tasks[1].order, 4);
    }

    #[test]
    fn test_next_orders() {
        assert_eq!(next_task_order(&board(), &"A".into()), 3);
        assert_eq!(next_task_order(&board(), &"Z".into()), 0);
        assert_eq!(next_column_order(&[]), 0);
    }
}
