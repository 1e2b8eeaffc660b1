use super::*;
use serde_json::json;

fn parse(v: serde_json::Value) -> RenderParams {
    serde_json::from_value(v).unwrap()
}

#[test]
fn empty_document_is_all_absent() {
    assert_eq!(parse(json!({})), RenderParams::default());
}

#[test]
fn numbers_accept_numeric_strings_and_drop_garbage() {
    let p = parse(json!({
        "size": "200",
        "quietZone": 4,
        "logoWidth": "wide",
        "logoHeight": null,
        "logoPadding": [1, 2],
    }));
    assert_eq!(p.size, Some(200.0));
    assert_eq!(p.quiet_zone, Some(4.0));
    assert_eq!(p.logo_width, None);
    assert_eq!(p.logo_height, None);
    assert_eq!(p.logo_padding, None);
}

#[test]
fn text_and_bool_fields_are_lenient() {
    let p = parse(json!({
        "ecLevel": "h",
        "qrStyle": 7,
        "logoPaddingStyle": "",
        "removeQrCodeBehindLogo": "TRUE",
    }));
    assert_eq!(p.ec_level.as_deref(), Some("h"));
    assert_eq!(p.qr_style, None);
    assert_eq!(p.logo_padding_style, None);
    assert_eq!(p.remove_qr_code_behind_logo, Some(true));

    let p = parse(json!({ "removeQrCodeBehindLogo": "maybe" }));
    assert_eq!(p.remove_qr_code_behind_logo, None);
}

#[test]
fn colors_accept_strings_and_objects() {
    let p = parse(json!({ "fgColor": "#112233", "bgColor": {"r": 1.0, "g": 1.0, "b": 1.0} }));
    assert_eq!(p.fg_color, Some(ColorInput::Text("#112233".to_owned())));
    assert!(matches!(p.bg_color, Some(ColorInput::Rgba { .. })));

    let p = parse(json!({ "fgColor": 12 }));
    assert_eq!(p.fg_color, None);
}

#[test]
fn eye_radius_shapes_map_to_variants() {
    let p = parse(json!({ "eyeRadius": 5 }));
    assert_eq!(p.eye_radius, Some(EyeParam::Uniform(CornerRadii::Uniform(5.0))));

    let p = parse(json!({ "eyeRadius": [1, 2, 3, 4] }));
    assert_eq!(
        p.eye_radius,
        Some(EyeParam::Uniform(CornerRadii::Corners([1.0, 2.0, 3.0, 4.0])))
    );

    let p = parse(json!({ "eyeRadius": { "inner": 2, "outer": [4, 0, 4, 0] } }));
    assert_eq!(
        p.eye_radius,
        Some(EyeParam::InnerOuter {
            inner: CornerRadii::Uniform(2.0),
            outer: CornerRadii::Corners([4.0, 0.0, 4.0, 0.0]),
        })
    );

    let p = parse(json!({ "eyeRadius": [1, [2, 2, 2, 2], { "inner": 0, "outer": 9 }] }));
    let Some(EyeParam::PerEye(parts)) = p.eye_radius else {
        panic!("expected per-eye radii");
    };
    assert_eq!(parts[0], EyePart::Uniform(CornerRadii::Uniform(1.0)));
    assert_eq!(parts[1], EyePart::Uniform(CornerRadii::Corners([2.0; 4])));
    assert_eq!(
        parts[2].split(),
        (CornerRadii::Uniform(0.0), CornerRadii::Uniform(9.0))
    );
}

#[test]
fn eye_color_shapes_map_to_variants() {
    let p = parse(json!({ "eyeColor": "#ff0000" }));
    assert!(matches!(p.eye_color, Some(EyeParam::Uniform(ColorInput::Text(_)))));

    let p = parse(json!({ "eyeColor": { "inner": "red", "outer": "blue" } }));
    assert!(matches!(p.eye_color, Some(EyeParam::InnerOuter { .. })));

    let p = parse(json!({ "eyeColor": ["red", { "inner": "red", "outer": "blue" }, "#000"] }));
    let per_eye = p.eye_color.unwrap().per_eye();
    assert_eq!(per_eye[0].split().0, ColorInput::from("red"));
    assert_eq!(per_eye[1].split().1, ColorInput::from("blue"));
}

#[test]
fn wrong_eye_arity_is_rejected_while_parsing() {
    let err = RenderParams::from_json_str(r#"{ "eyeRadius": [1, 2] }"#).unwrap_err();
    assert!(matches!(err, QrPaintError::Serde(_)), "{err}");

    let err = RenderParams::from_json_str(r#"{ "eyeColor": ["red", "blue"] }"#).unwrap_err();
    assert!(matches!(err, QrPaintError::Serde(_)), "{err}");
}

#[test]
fn uniform_eye_param_expands_to_three_entries() {
    let p = EyeParam::Uniform(CornerRadii::Uniform(3.0));
    let parts = p.per_eye();
    assert!(parts.iter().all(|e| *e == EyePart::Uniform(CornerRadii::Uniform(3.0))));
}

#[test]
fn from_path_reports_missing_files() {
    let err = RenderParams::from_path("target/definitely/missing.json").unwrap_err();
    assert!(err.to_string().contains("read render params"), "{err}");
}
