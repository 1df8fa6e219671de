//! Core types for the taskboard engine

mod column;
mod ids;
mod task;
mod user;

// Re-export all types
pub use column::Column;
pub use ids::{ColumnId, TaskId, UserId};
pub use task::Task;
pub use user::{User, DEFAULT_AVATAR};
