use std::sync::Arc;

use crate::assets::decode::PreparedImage;
use crate::foundation::error::{QrPaintError, QrPaintResult};

const MAX_DIM: u32 = 16_384;

/// Pick the pixel size an SVG logo is rasterized at.
///
/// `target_w`/`target_h` are the physical pixels the logo will cover on the output surface.
/// Rasterizing at that size keeps vector logos sharp at any device scale.
pub fn svg_raster_size(tree: &usvg::Tree, target_w: f64, target_h: f64) -> QrPaintResult<(u32, u32)> {
    fn to_px(v: f64) -> QrPaintResult<u32> {
        if !v.is_finite() || v <= 0.0 {
            return Err(QrPaintError::logo_load("svg has invalid width/height"));
        }
        Ok((v.ceil() as u32).max(1))
    }

    let size = tree.size();
    let (w, h) = if target_w > 0.0 && target_h > 0.0 {
        (to_px(target_w)?, to_px(target_h)?)
    } else {
        (
            to_px(f64::from(size.width()))?,
            to_px(f64::from(size.height()))?,
        )
    };

    if w > MAX_DIM || h > MAX_DIM {
        return Err(QrPaintError::logo_load(format!(
            "svg raster size too large: {w}x{h} (max {MAX_DIM}x{MAX_DIM})"
        )));
    }
    Ok((w, h))
}

/// Render `tree` stretched to `width x height` pixels.
pub fn rasterize_svg(tree: &usvg::Tree, width: u32, height: u32) -> QrPaintResult<PreparedImage> {
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| QrPaintError::logo_load("failed to allocate svg pixmap"))?;

    let sx = (width as f32) / tree.size().width();
    let sy = (height as f32) / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);

    resvg::render(tree, xform, &mut pixmap.as_mut());
    Ok(PreparedImage {
        width,
        height,
        rgba8_premul: Arc::new(pixmap.take()),
    })
}
