use super::*;
use serde_json::json;

#[test]
fn parses_hex_forms() {
    assert_eq!(parse_color("#ff0000"), Some(Rgba8::opaque(255, 0, 0)));
    assert_eq!(parse_color("#F00"), Some(Rgba8::opaque(255, 0, 0)));
    assert_eq!(parse_color("#0000ff80"), Some(Rgba8::new(0, 0, 255, 128)));
    assert_eq!(parse_color("#0f08"), Some(Rgba8::new(0, 255, 0, 136)));
    assert_eq!(parse_color("  #FFFFFF "), Some(Rgba8::WHITE));
}

#[test]
fn rejects_malformed_text() {
    for bad in ["", "#", "#12", "#12345", "#gggggg", "rgb(1,2)", "rgb(a,b,c)", "chartreuse-ish"] {
        assert_eq!(parse_color(bad), None, "{bad:?}");
    }
}

#[test]
fn parses_functional_and_named_forms() {
    assert_eq!(parse_color("rgb(10, 20, 30)"), Some(Rgba8::opaque(10, 20, 30)));
    assert_eq!(
        parse_color("RGBA(255,0,0,0.5)"),
        Some(Rgba8::new(255, 0, 0, 128))
    );
    assert_eq!(parse_color("Black"), Some(Rgba8::BLACK));
    assert_eq!(parse_color("orange"), Some(Rgba8::opaque(255, 165, 0)));
}

#[test]
fn parses_rgba_and_hsla_objects() {
    let c: ColorInput = serde_json::from_value(json!({"r": 1.0, "g": 0.5, "b": 0.0})).unwrap();
    assert_eq!(c.resolve(), Some(Rgba8::opaque(255, 128, 0)));

    let c: ColorInput = serde_json::from_value(json!({"h": 0.0, "s": 1.0, "l": 0.5})).unwrap();
    // Pure red.
    assert_eq!(c.resolve(), Some(Rgba8::opaque(255, 0, 0)));

    let c: ColorInput = serde_json::from_value(json!("#123")).unwrap();
    assert_eq!(c, ColorInput::Text("#123".to_owned()));
    assert_eq!(c.resolve(), Some(Rgba8::opaque(0x11, 0x22, 0x33)));
}

#[test]
fn display_round_trips_through_parse() {
    let c = Rgba8::new(1, 2, 3, 4);
    assert_eq!(ColorInput::from(c).resolve(), Some(c));
}
