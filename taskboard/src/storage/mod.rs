//! Persistence collaborator.
//!
//! The board keeps its three collections under three keys of a flat
//! key-value store. Reads fall back to the seed dataset and writes are
//! best-effort: a failed save is logged and the in-memory board stays the
//! source of truth for the session.

mod board;
mod file;
mod memory;

pub use board::{BoardStorage, COLUMNS_KEY, TASKS_KEY, USERS_KEY};
pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::Result;

/// Flat string key-value storage
pub trait KeyValueStore {
    /// Read a value. A missing key is `Ok(None)`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
