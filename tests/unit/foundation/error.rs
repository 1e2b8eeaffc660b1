use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        QrPaintError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        QrPaintError::surface_unavailable("x")
            .to_string()
            .contains("surface unavailable:")
    );
    assert!(
        QrPaintError::logo_load("x")
            .to_string()
            .contains("logo load error:")
    );
    assert!(
        QrPaintError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = QrPaintError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn only_surface_failures_are_fatal() {
    assert!(QrPaintError::logo_load("404").is_recoverable());
    assert!(QrPaintError::validation("no logo").is_recoverable());
    assert!(!QrPaintError::surface_unavailable("0x0").is_recoverable());
}
