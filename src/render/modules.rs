//! Data-module rasterization.

use crate::foundation::core::{Point, Rect, Rgba8};
use crate::matrix::{ModuleMatrix, in_any_eye_zone};
use crate::render::plan::{DrawOp, FramePlan};
use crate::style::normalize::ModuleStyle;

/// Dot radius as a fraction of the cell side.
pub const DOT_RADIUS_FACTOR: f64 = 0.375;

/// Pixel-snapped cell rect for module `(row, col)`.
///
/// The origin is rounded and the extent runs from `floor(idx * cell)` to `ceil((idx + 1) * cell)`,
/// so neighbours never leave a gap and overlap by at most two pixels.
pub fn square_cell(row: usize, col: usize, cell: f64, offset: f64) -> Rect {
    let x = (col as f64 * cell).round() + offset;
    let y = (row as f64 * cell).round() + offset;
    let w = snapped_extent(col, cell);
    let h = snapped_extent(row, cell);
    Rect::new(x, y, x + w, y + h)
}

fn snapped_extent(idx: usize, cell: f64) -> f64 {
    ((idx + 1) as f64 * cell).ceil() - (idx as f64 * cell).floor()
}

/// Center and radius of the dot for module `(row, col)`.
pub fn dot_cell(row: usize, col: usize, cell: f64, offset: f64) -> (Point, f64) {
    let half = cell / 2.0;
    let center = Point::new(
        (col as f64 * cell).round() + half + offset,
        (row as f64 * cell).round() + half + offset,
    );
    (center, cell * DOT_RADIUS_FACTOR)
}

/// Append one op per visible dark module, skipping the three eye zones.
///
/// Returns the number of modules painted.
pub fn paint_modules(
    plan: &mut FramePlan,
    matrix: &ModuleMatrix,
    style: ModuleStyle,
    size: f64,
    offset: f64,
    color: Rgba8,
) -> usize {
    let n = matrix.side();
    let cell = size / n as f64;
    let zones = matrix.eye_zones();

    let mut painted = 0;
    for row in 0..n {
        for col in 0..n {
            if !matrix.is_dark(row, col) || in_any_eye_zone(row, col, &zones) {
                continue;
            }
            let op = match style {
                ModuleStyle::Squares => DrawOp::FillRect {
                    rect: square_cell(row, col, cell, offset),
                    color,
                },
                ModuleStyle::Dots => {
                    let (center, radius) = dot_cell(row, col, cell, offset);
                    DrawOp::FillCircle {
                        center,
                        radius,
                        color,
                    }
                }
            };
            plan.push(op);
            painted += 1;
        }
    }
    painted
}

#[cfg(test)]
#[path = "../../tests/unit/render/modules.rs"]
mod tests;
