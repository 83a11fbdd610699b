//! End-to-end popup flows against the in-memory store and software surface.

use std::rc::Rc;

use futures::executor::block_on;

use quicknote_shared::{
    Color, ExportBody, KeyValueStore, MemoryStore, ModeController, Point, PopupConfig,
    RasterSurface, DRAWING_KEY,
};

fn open_popup(store: &Rc<MemoryStore>) -> ModeController<RasterSurface> {
    let config = PopupConfig::default();
    let surface = RasterSurface::new(config.canvas_width, config.canvas_height).unwrap();
    let mut popup = ModeController::new(surface, store.clone(), &config);
    if let Some(pending) = popup.start() {
        let decoded = block_on(pending.into_future());
        popup.drawing.finish_load(decoded);
    }
    popup
}

fn enter_drawing(popup: &mut ModeController<RasterSurface>) {
    if let Some(pending) = popup.enter_drawing_mode() {
        let decoded = block_on(pending.into_future());
        popup.drawing.finish_load(decoded);
    }
}

#[test]
fn red_segment_survives_reopening_the_popup() {
    let store = Rc::new(MemoryStore::new());
    let mut popup = open_popup(&store);
    enter_drawing(&mut popup);

    assert!(popup.drawing.set_pen_width_input("5"));
    assert!(popup.drawing.set_pen_color_input("#ff0000"));
    popup.drawing.begin_stroke(Point::new(10.0, 10.0));
    popup.drawing.extend_stroke(Point::new(10.0, 50.0));
    popup.drawing.end_stroke();
    assert!(store.contains(DRAWING_KEY));
    drop(popup);

    let mut reopened = open_popup(&store);
    enter_drawing(&mut reopened);
    let surface = reopened.drawing.surface();

    for y in 10..=50 {
        let pixel = surface.pixel(10, y).unwrap();
        assert!(
            pixel.red() > 230 && pixel.green() < 25 && pixel.blue() < 25,
            "expected red at (10, {y}), got {pixel:?}"
        );
    }
    // Background outside a tolerance box around the stroke.
    for (x, y) in [(0, 0), (20, 30), (10, 60), (2, 30), (499, 399), (250, 200)] {
        let pixel = surface.pixel(x, y).unwrap();
        assert_eq!(
            (pixel.red(), pixel.green(), pixel.blue()),
            (255, 255, 255),
            "expected background at ({x}, {y})"
        );
    }
}

#[test]
fn clear_then_reopen_is_blank() {
    let store = Rc::new(MemoryStore::new());
    let mut popup = open_popup(&store);
    enter_drawing(&mut popup);
    popup.drawing.begin_stroke(Point::new(100.0, 100.0));
    popup.drawing.extend_stroke(Point::new(300.0, 200.0));
    popup.drawing.end_stroke();
    popup.drawing.clear();
    assert!(store.get(DRAWING_KEY).unwrap().is_none());

    let mut reopened = open_popup(&store);
    assert!(reopened.enter_drawing_mode().is_none());
    assert!(reopened.drawing.surface().is_uniform(Color::WHITE));
}

#[test]
fn note_and_drawing_export_side_by_side() {
    let store = Rc::new(MemoryStore::new());
    let mut popup = open_popup(&store);
    popup.note.save_note("hello");

    enter_drawing(&mut popup);
    popup.drawing.begin_stroke(Point::new(5.0, 5.0));
    popup.drawing.extend_stroke(Point::new(50.0, 5.0));
    popup.drawing.end_stroke();
    popup.enter_text_mode();

    let note = popup.note.export_note(popup.note.text());
    assert_eq!(note.file_name, "MyNote.txt");
    assert_eq!(note.body, ExportBody::Text("hello".into()));

    let drawing = popup.drawing.export_png().unwrap();
    assert_eq!(drawing.file_name, "MyDrawing.png");
    assert_eq!(
        drawing.body,
        ExportBody::DataUrl(store.get(DRAWING_KEY).unwrap().unwrap())
    );
}
