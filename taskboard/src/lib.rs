//! Kanban task board engine
//!
//! Tasks live in ordered columns. This crate keeps their per-column ranks
//! dense through every add, move and delete, turns a stream of drag-hover
//! samples into stable moves, and summarises the current week's progress.
//!
//! ## Overview
//!
//! - **Entity store** - tasks, columns and users in memory, with change
//!   subscriptions
//! - **Ordering engine** - pure functions from one task collection to the next
//! - **Drag resolver** - pointer position over a card to an insertion slot
//! - **Analytics** - weekly total / completed / remaining counts
//! - **Storage** - three JSON collections in a flat key-value store, saved on
//!   every change and seeded when absent
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use taskboard::{BoardConfig, BoardContext, Execute, task::{AddTask, MoveTask}};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut ctx = BoardContext::open(BoardConfig::load()?);
//!
//! let task = AddTask::new("column-1", "Write release notes")
//!     .execute(&mut ctx)
//!     .into_result()?;
//!
//! let id = task["id"].as_str().unwrap_or_default();
//! MoveTask::new(id, "column-3", 0).execute(&mut ctx).into_result()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Storage Layout
//!
//! ```text
//! .taskboard/
//! ├── taskmanager_tasks.json
//! ├── taskmanager_columns.json
//! └── taskmanager_users.json
//! ```

pub mod analytics;
pub mod config;
mod context;
pub mod defaults;
pub mod drag;
mod error;
pub mod ordering;
mod processor;
pub mod storage;
pub mod store;
pub mod types;

#[cfg(test)]
mod test_support;

// Command modules
pub mod column;
pub mod stats;
pub mod task;
pub mod user;

// Re-export Execute trait and types from operations crate
pub use taskboard_operations::{Execute, ExecutionResult, LogEntry, Operation, OperationProcessor};

pub use analytics::{compute_weekly_stats, WeekWindow, WeeklyReport, WeeklyStats};
pub use config::BoardConfig;
pub use context::BoardContext;
pub use drag::{Bounds, DragDecision, DragGesture, DragItem, Hover};
pub use error::{ConfigError, Result, TaskboardError};
pub use processor::BoardOperationProcessor;
pub use store::{EntityStore, StoreChange, SubscriptionId};

// Re-export commonly used types
pub use types::{Column, ColumnId, Task, TaskId, User, UserId, DEFAULT_AVATAR};
