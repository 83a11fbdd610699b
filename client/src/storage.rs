use web_sys::{Storage, Window};

use quicknote_shared::{KeyValueStore, StoreError};

use crate::util::describe_js_error;

/// `window.localStorage` behind the store port.
pub struct LocalStore {
    storage: Storage,
}

impl LocalStore {
    pub fn from_window(window: &Window) -> Result<Self, StoreError> {
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            _ => Err(StoreError::Unavailable),
        }
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage
            .get_item(key)
            .map_err(|error| StoreError::Read {
                key: key.to_string(),
                reason: describe_js_error(&error),
            })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage
            .set_item(key, value)
            .map_err(|error| StoreError::Write {
                key: key.to_string(),
                reason: describe_js_error(&error),
            })
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.storage
            .remove_item(key)
            .map_err(|error| StoreError::Write {
                key: key.to_string(),
                reason: describe_js_error(&error),
            })
    }
}
