//! In-memory key-value store

use super::KeyValueStore;
use crate::error::{Result, TaskboardError};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<String, String>,
    read_only: bool,
}

/// Key-value store held in memory.
///
/// Clones share the same entries, so a test can hand one handle to the board
/// and keep another to inspect what was written.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail, as a full or locked-down backend would
    pub fn set_read_only(&self, read_only: bool) {
        self.inner.borrow_mut().read_only = read_only;
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.inner.borrow().entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut inner = self.inner.borrow_mut();
        if inner.read_only {
            return Err(TaskboardError::storage(format!(
                "memory store is read-only, cannot write '{key}'"
            )));
        }
        inner.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_entries() {
        let observer = MemoryStore::new();
        let mut writer = observer.clone();
        writer.set("k", "v").unwrap();
        assert_eq!(observer.get("k").unwrap().as_deref(), Some("v"));
        assert_eq!(observer.len(), 1);
    }

    #[test]
    fn test_read_only_rejects_writes() {
        let mut store = MemoryStore::new();
        store.set_read_only(true);
        let err = store.set("k", "v").unwrap_err();
        assert!(matches!(err, TaskboardError::StorageUnavailable { .. }));
        assert!(store.is_empty());
    }
}
