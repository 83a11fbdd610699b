use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::StoreError;

/// Key holding the PNG data URL of the last persisted drawing.
pub const DRAWING_KEY: &str = "drawing";
/// Key holding the raw note text.
pub const NOTE_KEY: &str = "noteText";

/// Last-writer-wins string store, the shape of `window.localStorage`.
///
/// Methods take `&self` because the browser store is shared by every
/// controller in the popup.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// In-memory store used natively and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    writes: RefCell<Vec<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Keys passed to `set`, in call order.
    pub fn write_log(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }

    pub fn writes_to(&self, key: &str) -> usize {
        self.writes.borrow().iter().filter(|k| *k == key).count()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.borrow_mut().push(key.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;
