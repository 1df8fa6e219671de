//! Board collections over a key-value store

use super::KeyValueStore;
use crate::defaults;
use crate::error::Result;
use crate::store::{EntityStore, StoreChange, SubscriptionId};
use crate::types::{Column, Task, User};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use tracing::{debug, info, warn};

pub const TASKS_KEY: &str = "taskmanager_tasks";
pub const COLUMNS_KEY: &str = "taskmanager_columns";
pub const USERS_KEY: &str = "taskmanager_users";

/// Loads and saves the task, column and user collections.
///
/// Nothing here returns an error to the caller. Load failures fall back to
/// the seed dataset and save failures are logged, so a broken backend costs
/// at most the unsaved changes of the current session.
pub struct BoardStorage {
    backend: Box<dyn KeyValueStore>,
    seed_on_empty: bool,
}

impl fmt::Debug for BoardStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoardStorage")
            .field("seed_on_empty", &self.seed_on_empty)
            .finish_non_exhaustive()
    }
}

impl BoardStorage {
    /// Wrap a backend; absent collections are seeded
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self {
            backend: Box::new(backend),
            seed_on_empty: true,
        }
    }

    /// Whether absent collections fall back to the seed dataset or start
    /// empty
    pub fn with_seed_on_empty(mut self, seed_on_empty: bool) -> Self {
        self.seed_on_empty = seed_on_empty;
        self
    }

    pub fn load_tasks(&self) -> Vec<Task> {
        self.load(TASKS_KEY, defaults::seed_tasks)
    }

    pub fn load_columns(&self) -> Vec<Column> {
        self.load(COLUMNS_KEY, defaults::seed_columns)
    }

    pub fn load_users(&self) -> Vec<User> {
        self.load(USERS_KEY, defaults::seed_users)
    }

    pub fn save_tasks(&mut self, tasks: &[Task]) {
        self.save(TASKS_KEY, tasks);
    }

    pub fn save_columns(&mut self, columns: &[Column]) {
        self.save(COLUMNS_KEY, columns);
    }

    pub fn save_users(&mut self, users: &[User]) {
        self.save(USERS_KEY, users);
    }

    /// Save whichever collection `change` names
    pub fn persist(&mut self, change: StoreChange, store: &EntityStore) {
        match change {
            StoreChange::Tasks => self.save_tasks(store.tasks()),
            StoreChange::Columns => self.save_columns(store.columns()),
            StoreChange::Users => self.save_users(store.users()),
        }
    }

    /// Build an entity store from the stored collections
    pub fn load_store(&self) -> EntityStore {
        let store = EntityStore::from_parts(self.load_tasks(), self.load_columns(), self.load_users());
        info!(
            tasks = store.tasks().len(),
            columns = store.columns().len(),
            users = store.users().len(),
            "loaded board"
        );
        store
    }

    /// Hand this storage to `store` as its save-on-change hook
    pub fn attach(mut self, store: &mut EntityStore) -> SubscriptionId {
        store.subscribe(move |change, store| self.persist(change, store))
    }

    fn load<T, F>(&self, key: &str, seed: F) -> Vec<T>
    where
        T: DeserializeOwned,
        F: FnOnce() -> Vec<T>,
    {
        match self.read(key) {
            Ok(Some(items)) => items,
            Ok(None) if self.seed_on_empty => {
                info!(key, "no stored collection, using seed data");
                seed()
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(key, error = %e, "failed to load collection, using seed data");
                seed()
            }
        }
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<Vec<T>>> {
        match self.backend.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn save<T: Serialize>(&mut self, key: &str, items: &[T]) {
        match self.write(key, items) {
            Ok(()) => debug!(key, count = items.len(), "saved collection"),
            Err(e) => warn!(key, error = %e, "failed to save collection"),
        }
    }

    fn write<T: Serialize>(&mut self, key: &str, items: &[T]) -> Result<()> {
        let json = serde_json::to_string(items)?;
        self.backend.set(key, &json)
    }
}
