use std::rc::Rc;

use crate::config::PopupConfig;
use crate::drawing::{DrawingController, PendingLoad};
use crate::note::NoteController;
use crate::storage::KeyValueStore;
use crate::surface::Surface;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    Drawing,
    #[default]
    Text,
}

impl Mode {
    pub fn shows_drawing(self) -> bool {
        self == Mode::Drawing
    }

    pub fn shows_note(self) -> bool {
        self == Mode::Text
    }
}

/// Switches the popup between drawing and text views.
///
/// Both controllers share one store, so whichever view is hidden keeps its
/// persisted data. The host applies view visibility after a switch returns;
/// by then the outgoing drawing has already been persisted.
pub struct ModeController<S: Surface> {
    pub drawing: DrawingController<S>,
    pub note: NoteController,
    mode: Mode,
}

impl<S: Surface> ModeController<S> {
    pub fn new(surface: S, store: Rc<dyn KeyValueStore>, config: &PopupConfig) -> Self {
        Self {
            drawing: DrawingController::new(surface, store.clone(), config),
            note: NoteController::new(store),
            mode: Mode::Text,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Initial replay of both persisted values when the popup opens.
    pub fn start(&mut self) -> Option<PendingLoad<S>> {
        let pending = self.drawing.load();
        self.note.load_note();
        pending
    }

    pub fn enter_drawing_mode(&mut self) -> Option<PendingLoad<S>> {
        self.mode = Mode::Drawing;
        self.drawing.set_drawing_active(true);
        log::debug!("switched to drawing mode");
        self.drawing.load()
    }

    pub fn enter_text_mode(&mut self) {
        self.mode = Mode::Text;
        self.drawing.set_drawing_active(false);
        self.drawing.persist();
        self.note.load_note();
        log::debug!("switched to text mode");
    }
}

#[cfg(test)]
#[path = "mode_test.rs"]
mod mode_test;
