use std::io::Cursor;

use super::*;

fn png_bytes(w: u32, h: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba([255, 0, 0, 255]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn parse_classifies_sources() {
    assert!(matches!(
        LogoSource::parse("data:image/png;base64,AAAA"),
        LogoSource::DataUri(_)
    ));
    assert!(matches!(
        LogoSource::parse("DATA:text/plain,hi"),
        LogoSource::DataUri(_)
    ));
    assert_eq!(
        LogoSource::parse("https://example.com/logo.png"),
        LogoSource::Url("https://example.com/logo.png".to_owned())
    );
    assert_eq!(
        LogoSource::parse("  assets/logo.png "),
        LogoSource::Path("assets/logo.png".into())
    );
    assert_eq!(LogoSource::parse("dat"), LogoSource::Path("dat".into()));
}

#[test]
fn data_uri_base64_and_plain_payloads() {
    assert_eq!(
        decode_data_uri("data:text/plain;base64,aGVs bG8=").unwrap(),
        b"hello"
    );
    assert_eq!(decode_data_uri("data:,hello").unwrap(), b"hello");

    let err = decode_data_uri("data:image/png;base64").unwrap_err();
    assert!(matches!(err, QrPaintError::LogoLoad(_)), "{err}");
    let err = decode_data_uri("data:;base64,!!!").unwrap_err();
    assert!(matches!(err, QrPaintError::LogoLoad(_)), "{err}");
}

#[tokio::test]
async fn load_png_from_data_uri() {
    let uri = format!("data:image/png;base64,{}", BASE64.encode(png_bytes(3, 2)));
    let img = load_logo(LogoSource::parse(&uri), (30.0, 30.0))
        .await
        .unwrap();
    // Raster logos keep their native resolution.
    assert_eq!((img.width, img.height), (3, 2));
    assert_eq!(&img.rgba8_premul[0..4], &[255, 0, 0, 255]);
}

#[tokio::test]
async fn load_png_from_file() {
    let path = std::env::temp_dir().join(format!("qrpaint-logo-{}.png", std::process::id()));
    std::fs::write(&path, png_bytes(4, 4)).unwrap();
    let img = load_logo(LogoSource::Path(path.clone()), (10.0, 10.0))
        .await
        .unwrap();
    let _ = std::fs::remove_file(&path);
    assert_eq!((img.width, img.height), (4, 4));
}

#[tokio::test]
async fn svg_logo_is_rasterized_at_target_size() {
    let svg = br##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10">
        <rect width="10" height="10" fill="#0000ff"/></svg>"##;
    let img = load_logo(LogoSource::from_bytes(svg.to_vec()), (40.0, 20.0))
        .await
        .unwrap();
    assert_eq!((img.width, img.height), (40, 20));
    assert_eq!(&img.rgba8_premul[0..4], &[0, 0, 255, 255]);
}

#[tokio::test]
async fn missing_file_is_logo_load_error() {
    let err = load_logo(
        LogoSource::Path("/definitely/not/here/logo.png".into()),
        (10.0, 10.0),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, QrPaintError::LogoLoad(_)), "{err}");
    assert!(err.to_string().contains("read logo"), "{err}");
}

#[tokio::test]
async fn undecodable_bytes_are_logo_load_error() {
    let err = load_logo(LogoSource::from_bytes(b"nope".to_vec()), (10.0, 10.0))
        .await
        .unwrap_err();
    assert!(matches!(err, QrPaintError::LogoLoad(_)), "{err}");
    assert!(err.to_string().contains("decode image"), "{err}");
}

#[cfg(not(feature = "http"))]
#[tokio::test]
async fn url_without_http_feature_fails() {
    let err = load_logo(LogoSource::parse("https://example.com/a.png"), (1.0, 1.0))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("`http` feature"), "{err}");
}
