use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlElement, HtmlTextAreaElement};

use quicknote_shared::{ModeController, PendingLoad};

use crate::canvas::CanvasSurface;
use crate::dom::apply_mode;

pub type Popup = ModeController<CanvasSurface>;
pub type SharedPopup = Rc<RefCell<Popup>>;

/// Elements whose visibility or content follow the popup mode.
#[derive(Clone)]
pub struct Views {
    pub text_mode: HtmlElement,
    pub draw_mode: HtmlElement,
    pub note_textarea: HtmlTextAreaElement,
    pub overlay: HtmlElement,
}

impl Views {
    pub fn sync(&self, popup: &Popup) {
        apply_mode(popup.mode(), &self.text_mode, &self.draw_mode);
        self.note_textarea.set_value(popup.note.text());
    }
}

/// Finishes a snapshot decode once the browser has decoded the image.
///
/// Loads are not cancelled; whichever finishes last is what stays on the canvas.
pub fn spawn_load(popup: &SharedPopup, pending: Option<PendingLoad<CanvasSurface>>) {
    let Some(pending) = pending else {
        return;
    };
    let popup = popup.clone();
    spawn_local(async move {
        let decoded = pending.into_future().await;
        popup.borrow_mut().drawing.finish_load(decoded);
    });
}
