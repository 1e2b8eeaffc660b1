use super::*;

#[test]
fn canvas_scales_and_rounds() {
    let c = Canvas::square_scaled(170.0, 2.0).unwrap();
    assert_eq!(c, Canvas { width: 340, height: 340 });

    let c = Canvas::square_scaled(170.0, 1.5).unwrap();
    assert_eq!(c.width, 255);
    assert_eq!(c.rgba8_len(), 255 * 255 * 4);
}

#[test]
fn canvas_rejects_empty_and_oversized_surfaces() {
    for (side, scale) in [(0.0, 1.0), (170.0, 0.0), (f64::NAN, 1.0), (70_000.0, 1.0)] {
        let err = Canvas::square_scaled(side, scale).unwrap_err();
        assert!(
            matches!(err, QrPaintError::SurfaceUnavailable(_)),
            "{side} * {scale}: {err}"
        );
    }
}

#[test]
fn channels_keep_straight_order() {
    assert_eq!(Rgba8::opaque(10, 200, 30).to_array(), [10, 200, 30, 255]);
    assert_eq!(Rgba8::new(255, 0, 0, 128).to_array(), [255, 0, 0, 128]);
}

#[test]
fn display_is_hex() {
    assert_eq!(Rgba8::WHITE.to_string(), "#FFFFFF");
    assert_eq!(Rgba8::new(0, 0, 255, 128).to_string(), "#0000FF80");
}
