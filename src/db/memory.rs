//! In-memory key-value store
//!
//! Clones share the same map, so a test can keep a handle and inspect what a
//! component wrote after handing it a copy.

use super::{DbError, KeyValueStore};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, Vec<u8>>>>,
    reject_writes: Rc<Cell<bool>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `set` fail with `DbError::Unavailable`
    pub fn reject_writes(&self, reject: bool) {
        self.reject_writes.set(reject);
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, DbError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), DbError> {
        if self.reject_writes.get() {
            return Err(DbError::Unavailable(format!("write to '{key}' rejected")));
        }
        self.entries.borrow_mut().insert(key.to_string(), value.to_vec());
        Ok(())
    }
}
