//! Pure `(matrix, style) -> FramePlan` builders for the two paint passes.

use std::sync::Arc;

use crate::assets::decode::PreparedImage;
use crate::foundation::core::{Canvas, Rect};
use crate::foundation::error::{QrPaintError, QrPaintResult};
use crate::matrix::ModuleMatrix;
use crate::render::eyes::paint_eyes;
use crate::render::logo::{LogoPlacement, paint_logo};
use crate::render::modules::paint_modules;
use crate::render::plan::{DrawOp, FramePlan};
use crate::style::normalize::{LogoStyle, RenderStyle};

/// Physical surface for `style` at `scale`.
pub fn surface_for(style: &RenderStyle, scale: f64) -> QrPaintResult<Canvas> {
    Canvas::square_scaled(style.canvas_side(), scale)
}

/// Background, data modules and the three eyes, in that order.
#[tracing::instrument(level = "debug", skip_all, fields(side = matrix.side(), scale = scale))]
pub fn build_base_plan(
    matrix: &ModuleMatrix,
    style: &RenderStyle,
    scale: f64,
) -> QrPaintResult<FramePlan> {
    let canvas = surface_for(style, scale)?;
    let mut plan = FramePlan::new(canvas, scale);

    let side = style.canvas_side();
    plan.push(DrawOp::FillRect {
        rect: Rect::new(0.0, 0.0, side, side),
        color: style.bg_color,
    });

    let cell = style.size / matrix.side() as f64;
    let offset = style.quiet_zone;
    let painted = paint_modules(
        &mut plan,
        matrix,
        style.module_style,
        style.size,
        offset,
        style.fg_color,
    );
    paint_eyes(&mut plan, cell, offset, &matrix.eye_zones(), &style.eyes);

    tracing::debug!(painted, ops = plan.ops.len(), "base plan built");
    Ok(plan)
}

/// Logo pass layered over an existing base frame.
pub fn build_logo_plan(
    style: &RenderStyle,
    scale: f64,
    image: Arc<PreparedImage>,
) -> QrPaintResult<FramePlan> {
    let logo = configured_logo(style)?;
    let canvas = surface_for(style, scale)?;
    let placement = LogoPlacement::compute(logo, style.size, style.quiet_zone);

    let mut plan = FramePlan::new(canvas, scale);
    paint_logo(&mut plan, logo, &placement, image, style.bg_color);
    Ok(plan)
}

/// Physical pixel size the logo covers, used to rasterize vector logos sharply.
pub fn logo_target_px(style: &RenderStyle, scale: f64) -> QrPaintResult<(f64, f64)> {
    let logo = configured_logo(style)?;
    let placement = LogoPlacement::compute(logo, style.size, style.quiet_zone);
    Ok((placement.width * scale, placement.height * scale))
}

fn configured_logo(style: &RenderStyle) -> QrPaintResult<&LogoStyle> {
    style
        .logo
        .as_ref()
        .ok_or_else(|| QrPaintError::validation("no logo source configured"))
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
