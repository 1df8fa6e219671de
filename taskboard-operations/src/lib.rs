//! # Taskboard Operations
//!
//! This crate provides the `Operation` trait for defining board operations.
//! Operations are structs where the fields ARE the parameters - no duplication.
//!
//! ## Example
//!
//! ```ignore
//! use taskboard_operations::*;
//!
//! #[derive(Debug, Deserialize, Serialize)]
//! pub struct AddColumn {
//!     /// The column title
//!     pub title: String,
//! }
//!
//! operation!(AddColumn, verb = "add", noun = "column", description = "Add a column");
//!
//! impl Execute<BoardContext, TaskboardError> for AddColumn {
//!     fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, TaskboardError> {
//!         // implementation returns ExecutionResult::Logged or Unlogged
//!     }
//! }
//! ```

mod execution_result;
mod log;
mod operation;
mod processor;

pub use execution_result::ExecutionResult;
pub use log::LogEntry;
pub use operation::{Execute, Operation};
pub use processor::OperationProcessor;

// Re-export for use in implementations
pub use serde_json::Value;
