use std::rc::Rc;

use crate::export::Export;
use crate::storage::{KeyValueStore, NOTE_KEY};

/// Holds the note buffer and mirrors it into the store on save.
pub struct NoteController {
    store: Rc<dyn KeyValueStore>,
    buffer: String,
}

impl NoteController {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            buffer: String::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Tracks edits to the visible text field without persisting them.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    /// Persists `text` verbatim, overwriting any previous note.
    pub fn save_note(&mut self, text: &str) {
        self.buffer.clear();
        self.buffer.push_str(text);
        match self.store.set(NOTE_KEY, text) {
            Ok(()) => log::debug!("note saved ({} bytes)", text.len()),
            Err(error) => log::warn!("could not save note: {error}"),
        }
    }

    /// Populates the buffer from the store. A missing or empty note leaves the
    /// buffer as it is. Returns whether the buffer was replaced.
    pub fn load_note(&mut self) -> bool {
        match self.store.get(NOTE_KEY) {
            Ok(Some(text)) if !text.is_empty() => {
                self.buffer = text;
                true
            }
            Ok(_) => false,
            Err(error) => {
                log::warn!("could not read saved note: {error}");
                false
            }
        }
    }

    pub fn export_note(&self, text: &str) -> Export {
        Export::note(text)
    }
}

#[cfg(test)]
#[path = "note_test.rs"]
mod note_test;
