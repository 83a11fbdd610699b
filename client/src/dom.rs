use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent};

use quicknote_shared::{Mode, OverlayBox, Point};

pub fn get_element<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing element: {id}")))?;
    element
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Invalid element type: {id}")))
}

pub fn set_visible(element: &HtmlElement, visible: bool) {
    let display = if visible { "block" } else { "none" };
    let _ = element.style().set_property("display", display);
}

/// Shows the container for `mode` and hides the other one.
pub fn apply_mode(mode: Mode, text_view: &HtmlElement, draw_view: &HtmlElement) {
    set_visible(draw_view, mode.shows_drawing());
    set_visible(text_view, mode.shows_note());
}

/// Pointer position relative to the canvas.
pub fn event_to_point(event: &MouseEvent) -> Point {
    Point::new(event.offset_x() as f32, event.offset_y() as f32)
}

pub fn place_overlay(overlay: &HtmlElement, placement: Option<OverlayBox>) {
    let Some(placement) = placement else {
        set_visible(overlay, false);
        return;
    };
    let style = overlay.style();
    let _ = style.set_property("display", "block");
    let _ = style.set_property("width", &format!("{}px", placement.size));
    let _ = style.set_property("height", &format!("{}px", placement.size));
    let _ = style.set_property("left", &format!("{}px", placement.left));
    let _ = style.set_property("top", &format!("{}px", placement.top));
    let _ = style.set_property("background-color", &placement.color.to_hex());
}

pub fn tint_overlay(overlay: &HtmlElement, color: &str) {
    let _ = overlay.style().set_property("background-color", color);
}
