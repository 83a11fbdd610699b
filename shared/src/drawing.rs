use std::rc::Rc;

use crate::color::Color;
use crate::config::{PersistPolicy, PopupConfig};
use crate::error::SurfaceError;
use crate::export::Export;
use crate::storage::{KeyValueStore, DRAWING_KEY};
use crate::surface::{PenSettings, Surface};
use crate::Point;

#[cfg(test)]
#[path = "drawing_test.rs"]
mod drawing_test;

/// Transient pointer state of the gesture in progress. Never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StrokeSession {
    pub last: Point,
    pub pressed: bool,
}

/// A snapshot decode started by [`DrawingController::load`].
///
/// Await [`PendingLoad::into_future`] without holding the controller, then
/// hand the result to [`DrawingController::finish_load`]. Loads are never
/// cancelled: when several are in flight each one renders as it resolves, so
/// the last to complete decides what is on screen.
#[must_use = "a pending load does nothing until its decode is awaited and finished"]
pub struct PendingLoad<S: Surface> {
    decode: S::Decode,
}

impl<S: Surface> PendingLoad<S> {
    pub fn into_future(self) -> S::Decode {
        self.decode
    }
}

/// Owns the drawing surface, the pen and the stroke session, and mirrors the
/// surface into the store.
pub struct DrawingController<S: Surface> {
    surface: S,
    store: Rc<dyn KeyValueStore>,
    session: StrokeSession,
    pen: PenSettings,
    background: Color,
    active: bool,
    policy: PersistPolicy,
}

impl<S: Surface> DrawingController<S> {
    pub fn new(surface: S, store: Rc<dyn KeyValueStore>, config: &PopupConfig) -> Self {
        Self {
            surface,
            store,
            session: StrokeSession::default(),
            pen: config.pen(),
            background: config.background_color,
            active: false,
            policy: config.persist_policy,
        }
    }

    // --- Strokes ---

    pub fn begin_stroke(&mut self, point: Point) {
        if !point.is_finite() {
            return;
        }
        self.session = StrokeSession {
            last: point,
            pressed: true,
        };
    }

    /// Renders a segment from the last point to `point`. Returns whether
    /// anything was drawn.
    pub fn extend_stroke(&mut self, point: Point) -> bool {
        if !self.session.pressed || !self.active || !point.is_finite() {
            return false;
        }
        self.surface
            .stroke_segment(self.session.last, point, &self.pen);
        self.session.last = point;
        if self.policy == PersistPolicy::EverySegment {
            self.persist();
        }
        true
    }

    /// Ends the gesture on pointer-up or pointer-out and persists the result.
    pub fn end_stroke(&mut self) {
        self.session.pressed = false;
        self.persist();
    }

    pub fn clear(&mut self) {
        self.surface.fill(self.background);
        if let Err(error) = self.store.remove(DRAWING_KEY) {
            log::warn!("could not remove saved drawing: {error}");
        }
        log::debug!("drawing cleared");
    }

    // --- Persistence ---

    /// Writes the full surface to the store as a PNG data URL.
    pub fn persist(&mut self) {
        let data_url = match self.surface.to_data_url() {
            Ok(data_url) => data_url,
            Err(error) => {
                log::warn!("could not snapshot drawing: {error}");
                return;
            }
        };
        match self.store.set(DRAWING_KEY, &data_url) {
            Ok(()) => log::debug!("drawing saved ({} bytes)", data_url.len()),
            Err(error) => log::warn!("could not save drawing: {error}"),
        }
    }

    /// Starts replaying the persisted snapshot.
    ///
    /// With nothing persisted the surface is filled with the background right
    /// away and `None` is returned. Otherwise the surface is untouched until
    /// the returned decode is finished.
    pub fn load(&mut self) -> Option<PendingLoad<S>> {
        let saved = match self.store.get(DRAWING_KEY) {
            Ok(saved) => saved,
            Err(error) => {
                log::warn!("could not read saved drawing: {error}");
                None
            }
        };
        match saved.filter(|data_url| !data_url.is_empty()) {
            Some(data_url) => {
                log::debug!("decoding saved drawing ({} bytes)", data_url.len());
                Some(PendingLoad {
                    decode: self.surface.decode(&data_url),
                })
            }
            None => {
                self.surface.fill(self.background);
                None
            }
        }
    }

    /// Renders a finished decode: background first, then the snapshot at the origin.
    /// A failed decode leaves a blank background.
    pub fn finish_load(&mut self, decoded: Result<S::Image, SurfaceError>) {
        self.surface.fill(self.background);
        match decoded {
            Ok(image) => self.surface.composite(&image),
            Err(error) => log::warn!("saved drawing is unreadable, starting blank: {error}"),
        }
    }

    /// Loads and waits for the decode in one go, for callers that own the controller.
    pub async fn load_and_wait(&mut self) {
        if let Some(pending) = self.load() {
            let decoded = pending.into_future().await;
            self.finish_load(decoded);
        }
    }

    pub fn export_png(&self) -> Option<Export> {
        match self.surface.to_data_url() {
            Ok(data_url) => Some(Export::drawing(data_url)),
            Err(error) => {
                log::warn!("could not export drawing: {error}");
                None
            }
        }
    }

    // --- Pen ---

    pub fn set_pen_width(&mut self, width: f32) {
        if let Some(width) = PenSettings::clamp_width(width) {
            self.pen.width = width;
        }
    }

    pub fn set_pen_color(&mut self, color: Color) {
        self.pen.color = color;
    }

    /// Applies the raw value of the width range input. Returns whether it was accepted.
    pub fn set_pen_width_input(&mut self, value: &str) -> bool {
        match PenSettings::parse_width(value) {
            Some(width) => {
                self.pen.width = width;
                true
            }
            None => {
                log::warn!("ignoring pen width {value:?}");
                false
            }
        }
    }

    /// Applies the raw value of the color picker. Returns whether it was accepted.
    pub fn set_pen_color_input(&mut self, value: &str) -> bool {
        match Color::parse_hex(value) {
            Ok(color) => {
                self.pen.color = color;
                true
            }
            Err(error) => {
                log::warn!("ignoring pen color: {error}");
                false
            }
        }
    }

    // --- Mode / queries ---

    pub fn set_drawing_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn is_drawing_active(&self) -> bool {
        self.active
    }

    pub fn session(&self) -> StrokeSession {
        self.session
    }

    pub fn pen(&self) -> PenSettings {
        self.pen
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
