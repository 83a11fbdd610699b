//! Browser-independent core of the QuickNote popup.
//!
//! Everything here runs natively as well as in WebAssembly. The popup client
//! supplies a canvas-backed [`Surface`] and a `localStorage`-backed
//! [`KeyValueStore`]; tests use [`RasterSurface`] and [`MemoryStore`].

use serde::{Deserialize, Serialize};

pub mod color;
pub mod config;
pub mod drawing;
pub mod error;
pub mod export;
pub mod mode;
pub mod note;
pub mod overlay;
pub mod raster;
pub mod snapshot;
pub mod storage;
pub mod surface;

pub use color::Color;
pub use config::{PersistPolicy, PopupConfig};
pub use drawing::{DrawingController, PendingLoad, StrokeSession};
pub use error::{ColorParseError, ConfigError, StoreError, SurfaceError};
pub use export::{Export, ExportBody, DRAWING_EXPORT_NAME, NOTE_EXPORT_NAME};
pub use mode::{Mode, ModeController};
pub use note::NoteController;
pub use overlay::{pen_overlay, OverlayBox};
pub use raster::RasterSurface;
pub use storage::{KeyValueStore, MemoryStore, DRAWING_KEY, NOTE_KEY};
pub use surface::{PenSettings, Surface};

/// A position on the drawing surface in surface pixels.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
