use crate::geometry::rounded_rect_path;
use crate::matrix::{EYE_SIDE, EyeZone};
use crate::render::plan::{DrawOp, FramePlan};
use crate::style::normalize::EyeStyle;

const INNER_SIDE: f64 = 3.0;
const INNER_INSET: f64 = 2.0;

/// Append the outer ring and the filled inner square of one positional eye.
///
/// Both outlines are stroked with `ceil(cell)`; the outer one is never filled.
pub fn paint_eye(plan: &mut FramePlan, cell: f64, offset: f64, zone: EyeZone, eye: &EyeStyle) {
    let line_width = cell.ceil();
    let x = zone.col as f64 * cell + offset;
    let y = zone.row as f64 * cell + offset;

    plan.push(DrawOp::RoundedSquare {
        path: rounded_rect_path(line_width, x, y, EYE_SIDE as f64 * cell, eye.outer_radii),
        line_width,
        color: eye.outer_color,
        fill: false,
    });

    let inset = INNER_INSET * cell;
    plan.push(DrawOp::RoundedSquare {
        path: rounded_rect_path(
            line_width,
            x + inset,
            y + inset,
            INNER_SIDE * cell,
            eye.inner_radii,
        ),
        line_width,
        color: eye.inner_color,
        fill: true,
    });
}

/// Paint all three eyes in zone order (top-left, top-right, bottom-left).
pub fn paint_eyes(
    plan: &mut FramePlan,
    cell: f64,
    offset: f64,
    zones: &[EyeZone; 3],
    eyes: &[EyeStyle; 3],
) {
    for (zone, eye) in zones.iter().zip(eyes) {
        paint_eye(plan, cell, offset, *zone, eye);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/eyes.rs"]
mod tests;
