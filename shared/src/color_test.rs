use super::*;

#[test]
fn parses_long_hex() {
    assert_eq!(Color::parse_hex("#ff0000"), Ok(Color::rgb(0xff, 0, 0)));
    assert_eq!(Color::parse_hex("#1F2e3d"), Ok(Color::rgb(0x1f, 0x2e, 0x3d)));
}

#[test]
fn parses_short_hex() {
    assert_eq!(Color::parse_hex("#fff"), Ok(Color::WHITE));
    assert_eq!(Color::parse_hex(" #a0c "), Ok(Color::rgb(0xaa, 0x00, 0xcc)));
}

#[test]
fn rejects_garbage() {
    for value in ["", "#", "ff0000", "#ff00", "#gg0000", "red", "#ff00001"] {
        assert!(Color::parse_hex(value).is_err(), "{value:?} should not parse");
    }
}

#[test]
fn formats_as_lowercase_hex() {
    assert_eq!(Color::rgb(0xAB, 0x01, 0xFF).to_hex(), "#ab01ff");
    assert_eq!(Color::BLACK.to_string(), "#000000");
}

#[test]
fn serde_uses_hex_strings() {
    let json = serde_json::to_string(&Color::rgb(0xff, 0, 0)).unwrap();
    assert_eq!(json, "\"#ff0000\"");
    let color: Color = serde_json::from_str("\"#00f\"").unwrap();
    assert_eq!(color, Color::rgb(0, 0, 0xff));
    assert!(serde_json::from_str::<Color>("\"blue\"").is_err());
}
