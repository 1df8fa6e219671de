//! BoardContext: the live board an operation runs against.
//!
//! Holds the entity store (with its persistence hook attached), the loaded
//! configuration and the in-memory activity log.

use crate::config::BoardConfig;
use crate::storage::{BoardStorage, FileStore, KeyValueStore, MemoryStore};
use crate::store::EntityStore;
use std::collections::VecDeque;
use taskboard_operations::LogEntry;
use tracing::debug;

/// Everything a command needs to run
#[derive(Debug)]
pub struct BoardContext {
    store: EntityStore,
    config: BoardConfig,
    activity: VecDeque<LogEntry>,
}

impl BoardContext {
    /// Open the board stored under `config.storage_dir`
    pub fn open(config: BoardConfig) -> Self {
        let backend = FileStore::new(&config.storage_dir);
        debug!(root = %backend.root().display(), "opening file-backed board");
        Self::with_backend(backend, config)
    }

    /// A board that lives only as long as this context
    pub fn in_memory(config: BoardConfig) -> Self {
        Self::with_backend(MemoryStore::new(), config)
    }

    /// Open a board over any key-value backend. Changes are saved back to
    /// it as they happen.
    pub fn with_backend(backend: impl KeyValueStore + 'static, config: BoardConfig) -> Self {
        let storage = BoardStorage::new(backend).with_seed_on_empty(config.seed_on_empty);
        let mut store = storage.load_store();
        storage.attach(&mut store);
        Self::new(store, config)
    }

    /// Wrap an existing store without any persistence
    pub fn new(store: EntityStore, config: BoardConfig) -> Self {
        Self {
            store,
            config,
            activity: VecDeque::new(),
        }
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut EntityStore {
        &mut self.store
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Completion markers for the analytics done-column lookup
    pub fn done_markers(&self) -> &[String] {
        &self.config.done_markers
    }

    /// Add an entry to the front of the activity log, dropping the oldest
    /// entries past `activity_limit`
    pub fn record(&mut self, entry: LogEntry) {
        self.activity.push_front(entry);
        self.activity.truncate(self.config.activity_limit);
    }

    /// Most recent entries first, at most `limit` of them
    pub fn activity(&self, limit: Option<usize>) -> Vec<&LogEntry> {
        let limit = limit.unwrap_or(self.activity.len());
        self.activity.iter().take(limit).collect()
    }
}
