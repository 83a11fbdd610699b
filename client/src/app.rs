use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Event, EventTarget, HtmlButtonElement, HtmlCanvasElement, HtmlInputElement,
    HtmlTextAreaElement, PointerEvent,
};

use quicknote_shared::{pen_overlay, KeyValueStore, MemoryStore, PopupConfig};

use crate::canvas::CanvasSurface;
use crate::dom::{event_to_point, get_element, place_overlay, tint_overlay};
use crate::download::download;
use crate::state::{spawn_load, Popup, SharedPopup, Views};
use crate::storage::LocalStore;
use crate::util::{debug_enabled, describe_js_error};

fn init_logging(window: &web_sys::Window) {
    let level = if debug_enabled(window) {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    let _ = console_log::init_with_level(level);
}

fn open_store(window: &web_sys::Window) -> Rc<dyn KeyValueStore> {
    match LocalStore::from_window(window) {
        Ok(store) => Rc::new(store),
        Err(error) => {
            log::warn!("{error}; notes will not outlive this popup");
            Rc::new(MemoryStore::new())
        }
    }
}

fn on_event<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn on_pointer<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(PointerEvent) + 'static,
{
    let closure = Closure::<dyn FnMut(PointerEvent)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

#[wasm_bindgen(start)]
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Missing window"))?;
    init_logging(&window);
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Missing document"))?;

    let canvas: HtmlCanvasElement = get_element(&document, "drawCanvas")?;
    let config = PopupConfig::from_json_or_default(canvas.get_attribute("data-config").as_deref());
    let surface = CanvasSurface::new(canvas.clone(), config.canvas_width, config.canvas_height)?;
    let popup: SharedPopup = Rc::new(RefCell::new(Popup::new(
        surface,
        open_store(&window),
        &config,
    )));

    let views = Views {
        text_mode: get_element(&document, "textMode")?,
        draw_mode: get_element(&document, "drawMode")?,
        note_textarea: get_element(&document, "noteTextarea")?,
        overlay: get_element(&document, "penRadiusOverlay")?,
    };

    bind_canvas(&canvas, &popup, &views)?;
    bind_pen_controls(&document, &popup, &views, &config)?;
    bind_mode_switches(&document, &popup, &views)?;
    bind_note(&popup, &views)?;
    bind_downloads(&document, &popup)?;

    let pending = {
        let mut popup_ref = popup.borrow_mut();
        let pending = popup_ref.start();
        views.sync(&popup_ref);
        pending
    };
    spawn_load(&popup, pending);
    log::debug!(
        "popup ready ({}x{} canvas)",
        config.canvas_width,
        config.canvas_height
    );

    Ok(())
}

fn bind_canvas(
    canvas: &HtmlCanvasElement,
    popup: &SharedPopup,
    views: &Views,
) -> Result<(), JsValue> {
    {
        let popup = popup.clone();
        on_pointer(canvas, "pointerdown", move |event: PointerEvent| {
            popup.borrow_mut().drawing.begin_stroke(event_to_point(&event));
        })?;
    }

    {
        let popup = popup.clone();
        let overlay = views.overlay.clone();
        on_pointer(canvas, "pointermove", move |event: PointerEvent| {
            let mut popup = popup.borrow_mut();
            let drawing = &mut popup.drawing;
            place_overlay(
                &overlay,
                pen_overlay(
                    f64::from(event.client_x()),
                    f64::from(event.client_y()),
                    &drawing.pen(),
                    drawing.is_drawing_active(),
                ),
            );
            drawing.extend_stroke(event_to_point(&event));
        })?;
    }

    {
        let popup = popup.clone();
        on_pointer(canvas, "pointerup", move |_| {
            popup.borrow_mut().drawing.end_stroke();
        })?;
    }

    {
        let popup = popup.clone();
        let overlay = views.overlay.clone();
        on_pointer(canvas, "pointerout", move |_| {
            popup.borrow_mut().drawing.end_stroke();
            place_overlay(&overlay, None);
        })?;
    }

    Ok(())
}

fn bind_pen_controls(
    document: &Document,
    popup: &SharedPopup,
    views: &Views,
    config: &PopupConfig,
) -> Result<(), JsValue> {
    let width_range: HtmlInputElement = get_element(document, "penWidthRange")?;
    let color_picker: HtmlInputElement = get_element(document, "penColorPicker")?;
    width_range.set_value(&config.pen_width.to_string());
    color_picker.set_value(&config.pen_color.to_hex());
    tint_overlay(&views.overlay, &color_picker.value());

    {
        let popup = popup.clone();
        let input = width_range.clone();
        on_event(&width_range, "input", move |_| {
            popup.borrow_mut().drawing.set_pen_width_input(&input.value());
        })?;
    }

    {
        let popup = popup.clone();
        let input = color_picker.clone();
        let overlay = views.overlay.clone();
        on_event(&color_picker, "input", move |_| {
            let value = input.value();
            if popup.borrow_mut().drawing.set_pen_color_input(&value) {
                tint_overlay(&overlay, &value);
            }
        })?;
    }

    let clear_button: HtmlButtonElement = get_element(document, "clearCanvasButton")?;
    {
        let popup = popup.clone();
        on_event(&clear_button, "click", move |_| {
            popup.borrow_mut().drawing.clear();
        })?;
    }

    Ok(())
}

fn bind_mode_switches(
    document: &Document,
    popup: &SharedPopup,
    views: &Views,
) -> Result<(), JsValue> {
    let to_draw: HtmlButtonElement = get_element(document, "switchToDraw")?;
    let to_text: HtmlButtonElement = get_element(document, "switchToText")?;

    {
        let popup = popup.clone();
        let views = views.clone();
        on_event(&to_draw, "click", move |_| {
            let pending = {
                let mut popup_ref = popup.borrow_mut();
                let pending = popup_ref.enter_drawing_mode();
                views.sync(&popup_ref);
                pending
            };
            spawn_load(&popup, pending);
        })?;
    }

    {
        let popup = popup.clone();
        let views = views.clone();
        on_event(&to_text, "click", move |_| {
            let mut popup = popup.borrow_mut();
            popup.enter_text_mode();
            views.sync(&popup);
            place_overlay(&views.overlay, None);
        })?;
    }

    Ok(())
}

fn bind_note(popup: &SharedPopup, views: &Views) -> Result<(), JsValue> {
    let textarea: &HtmlTextAreaElement = &views.note_textarea;

    {
        let popup = popup.clone();
        let input = textarea.clone();
        on_event(textarea, "input", move |_| {
            popup.borrow_mut().note.set_text(input.value());
        })?;
    }

    {
        let popup = popup.clone();
        let input = textarea.clone();
        on_event(textarea, "blur", move |_| {
            popup.borrow_mut().note.save_note(&input.value());
        })?;
    }

    Ok(())
}

fn bind_downloads(document: &Document, popup: &SharedPopup) -> Result<(), JsValue> {
    let text_button: HtmlButtonElement = get_element(document, "downloadTextButton")?;
    let canvas_button: HtmlButtonElement = get_element(document, "downloadCanvasButton")?;
    let textarea: HtmlTextAreaElement = get_element(document, "noteTextarea")?;

    {
        let popup = popup.clone();
        let document = document.clone();
        on_event(&text_button, "click", move |_| {
            let export = popup.borrow().note.export_note(&textarea.value());
            if let Err(error) = download(&document, &export) {
                log::warn!("note download failed: {}", describe_js_error(&error));
            }
        })?;
    }

    {
        let popup = popup.clone();
        let document = document.clone();
        on_event(&canvas_button, "click", move |_| {
            let Some(export) = popup.borrow().drawing.export_png() else {
                return;
            };
            if let Err(error) = download(&document, &export) {
                log::warn!("drawing download failed: {}", describe_js_error(&error));
            }
        })?;
    }

    Ok(())
}

