//! Drag position resolver.
//!
//! A drag gesture produces a stream of pointer samples while a card hovers
//! over other cards. Each sample is resolved on its own; the only state
//! carried between samples is the dragged item's tracked position, which is
//! updated after every applied move so the next sample is measured against
//! where the card actually is now.

use crate::ordering;
use crate::store::EntityStore;
use crate::types::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// The card being dragged and where it currently sits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragItem {
    pub task_id: TaskId,
    pub column_id: ColumnId,
    pub index: usize,
}

/// Vertical extent of a rendered card, in pointer coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub top: f64,
    pub bottom: f64,
}

impl Bounds {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn midpoint(&self) -> f64 {
        self.top + (self.bottom - self.top) / 2.0
    }
}

/// The card currently under the pointer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hover {
    pub task_id: TaskId,
    pub column_id: ColumnId,
    /// Position of the hovered card within its column
    pub index: usize,
    pub bounds: Bounds,
}

impl Hover {
    /// Describe a hovered task using its current place in the store.
    /// Returns `None` if the task is unknown.
    pub fn over_task(store: &EntityStore, task_id: &TaskId, bounds: Bounds) -> Option<Self> {
        let task = store.task(task_id)?;
        let index = store
            .tasks_in_column(&task.column_id)
            .iter()
            .position(|t| &t.id == task_id)?;
        Some(Self {
            task_id: task_id.clone(),
            column_id: task.column_id.clone(),
            index,
            bounds,
        })
    }
}

/// What a pointer sample asks for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum DragDecision {
    NoChange,
    MoveTo { column_id: ColumnId, index: usize },
}

/// Decide where a pointer sample over `hover` should place `item`.
///
/// Below the hovered card's midpoint targets the slot after it, otherwise
/// the slot before it. Within one column, a target past the item's own slot
/// is shifted back by one, because taking the item out moves every later
/// card up.
pub fn resolve_hover_target(item: &DragItem, hover: &Hover, pointer_y: f64) -> DragDecision {
    if item.task_id == hover.task_id {
        return DragDecision::NoChange;
    }
    let same_column = item.column_id == hover.column_id;
    if same_column && item.index == hover.index {
        return DragDecision::NoChange;
    }

    let mut index = if pointer_y > hover.bounds.midpoint() {
        hover.index + 1
    } else {
        hover.index
    };
    if same_column && index > item.index {
        index -= 1;
    }

    if same_column && index == item.index {
        return DragDecision::NoChange;
    }

    DragDecision::MoveTo {
        column_id: hover.column_id.clone(),
        index,
    }
}

/// One drag gesture, from pick-up to release
#[derive(Debug, Clone)]
pub struct DragGesture {
    item: DragItem,
}

impl DragGesture {
    /// Pick up a task. Returns `None` if the task is unknown.
    pub fn begin(store: &EntityStore, task_id: &TaskId) -> Option<Self> {
        let task = store.task(task_id)?;
        let index = store
            .tasks_in_column(&task.column_id)
            .iter()
            .position(|t| &t.id == task_id)?;
        debug!(task = %task_id, column = %task.column_id, index, "drag started");
        Some(Self {
            item: DragItem {
                task_id: task_id.clone(),
                column_id: task.column_id.clone(),
                index,
            },
        })
    }

    /// Where the dragged card is tracked to be
    pub fn item(&self) -> &DragItem {
        &self.item
    }

    /// Feed one pointer sample. Applies the resolved move to the store and
    /// updates the tracked position.
    pub fn hover(&mut self, store: &mut EntityStore, hover: &Hover, pointer_y: f64) -> DragDecision {
        let decision = resolve_hover_target(&self.item, hover, pointer_y);
        trace!(task = %self.item.task_id, over = %hover.task_id, pointer_y, ?decision, "hover sample");

        if let DragDecision::MoveTo { column_id, index } = &decision {
            self.apply(store, column_id, *index);
        }
        decision
    }

    /// Release over empty column space: the card goes to the end of that
    /// column.
    pub fn drop_on_column(mut self, store: &mut EntityStore, column_id: &ColumnId) -> DragItem {
        let index = store.task_count(column_id);
        self.apply(store, column_id, index);
        debug!(task = %self.item.task_id, column = %column_id, "dropped on column");
        self.item
    }

    /// Release over a card: the last hover already placed it
    pub fn finish(self) -> DragItem {
        debug!(task = %self.item.task_id, column = %self.item.column_id, index = self.item.index, "drag finished");
        self.item
    }

    fn apply(&mut self, store: &mut EntityStore, column_id: &ColumnId, index: usize) {
        let requested = i64::try_from(index).unwrap_or(i64::MAX);
        if let Some(tasks) =
            ordering::try_move_task(store.tasks(), &self.item.task_id, column_id, requested)
        {
            self.item.index = tasks
                .iter()
                .find(|t| t.id == self.item.task_id)
                .map_or(index, |t| t.order);
            self.item.column_id = column_id.clone();
            store.set_tasks(tasks);
        }
    }
}
