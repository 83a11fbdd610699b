use super::*;

#[test]
fn defaults_match_the_popup() {
    let config = PopupConfig::default();
    assert_eq!(config.canvas_width, 500);
    assert_eq!(config.canvas_height, 400);
    assert_eq!(config.pen_color, Color::BLACK);
    assert_eq!(config.background_color, Color::WHITE);
    assert!((config.pen_width - 5.0).abs() < f32::EPSILON);
    assert_eq!(config.persist_policy, PersistPolicy::EverySegment);
}

#[test]
fn partial_json_keeps_other_defaults() {
    let config = PopupConfig::from_json(r##"{"pen_color": "#ff0000", "persist_policy": "stroke_end"}"##)
        .unwrap();
    assert_eq!(config.pen_color, Color::rgb(0xff, 0, 0));
    assert_eq!(config.persist_policy, PersistPolicy::StrokeEnd);
    assert_eq!(config.canvas_width, 500);
    assert_eq!(config.background_color, Color::WHITE);
}

#[test]
fn bad_color_is_an_error() {
    assert!(PopupConfig::from_json(r#"{"pen_color": "crimson"}"#).is_err());
}

#[test]
fn out_of_range_values_are_corrected() {
    let config =
        PopupConfig::from_json(r#"{"pen_width": 1000.0, "canvas_width": 0}"#).unwrap();
    assert!((config.pen_width - PenSettings::MAX_WIDTH).abs() < f32::EPSILON);
    assert_eq!(config.canvas_width, DEFAULT_CANVAS_WIDTH);
    assert_eq!(config.canvas_height, DEFAULT_CANVAS_HEIGHT);
}

#[test]
fn missing_or_broken_json_falls_back() {
    assert_eq!(PopupConfig::from_json_or_default(None), PopupConfig::default());
    assert_eq!(PopupConfig::from_json_or_default(Some("  ")), PopupConfig::default());
    assert_eq!(PopupConfig::from_json_or_default(Some("{not json")), PopupConfig::default());
}
