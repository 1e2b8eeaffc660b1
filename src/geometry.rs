//! Path primitives shared by the eye renderer.

use crate::foundation::core::{BezPath, Point};
use serde::Deserialize;

/// Corner radii of a rounded square.
///
/// Either one value for all four corners, or `[top_left, top_right, bottom_right, bottom_left]`.
/// Values are clamped into `[0, size / 2]` when a path is built, never when stored.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CornerRadii {
    /// Same radius on every corner.
    Uniform(f64),
    /// Per-corner radii, clockwise from top-left.
    Corners([f64; 4]),
}

impl Default for CornerRadii {
    fn default() -> Self {
        Self::Corners([0.0; 4])
    }
}

impl CornerRadii {
    /// Expand to `[top_left, top_right, bottom_right, bottom_left]`.
    pub fn corners(self) -> [f64; 4] {
        match self {
            Self::Uniform(r) => [r; 4],
            Self::Corners(c) => c,
        }
    }

    /// Expand and clamp every corner against a square of side `size`.
    pub fn clamped(self, size: f64) -> [f64; 4] {
        self.corners().map(|r| clamp_radius(r, size))
    }
}

impl From<f64> for CornerRadii {
    fn from(r: f64) -> Self {
        Self::Uniform(r)
    }
}

impl From<[f64; 4]> for CornerRadii {
    fn from(c: [f64; 4]) -> Self {
        Self::Corners(c)
    }
}

/// Clamp one corner radius to `[0, size / 2]`.
///
/// Negative and non-finite radii become `0`.
pub fn clamp_radius(r: f64, size: f64) -> f64 {
    let r = if r.is_finite() { r } else { 0.0 };
    let r = r.min(size / 2.0);
    if r < 0.0 { 0.0 } else { r }
}

/// Build the outline of a rounded square meant to be stroked with `line_width`.
///
/// The outline is inset by half the line width so the outer edge of the stroke lands exactly on
/// `(x, y, size)`. Corners with a zero radius stay sharp.
pub fn rounded_rect_path(
    line_width: f64,
    x: f64,
    y: f64,
    size: f64,
    radii: CornerRadii,
) -> BezPath {
    let x = x + line_width / 2.0;
    let y = y + line_width / 2.0;
    let size = size - line_width;

    let [r_tl, r_tr, r_br, r_bl] = radii.clamped(size);

    let mut p = BezPath::new();
    p.move_to(Point::new(x + r_tl, y));

    p.line_to(Point::new(x + size - r_tr, y));
    if r_tr > 0.0 {
        p.quad_to(Point::new(x + size, y), Point::new(x + size, y + r_tr));
    }

    p.line_to(Point::new(x + size, y + size - r_br));
    if r_br > 0.0 {
        p.quad_to(
            Point::new(x + size, y + size),
            Point::new(x + size - r_br, y + size),
        );
    }

    p.line_to(Point::new(x + r_bl, y + size));
    if r_bl > 0.0 {
        p.quad_to(Point::new(x, y + size), Point::new(x, y + size - r_bl));
    }

    p.line_to(Point::new(x, y + r_tl));
    if r_tl > 0.0 {
        p.quad_to(Point::new(x, y), Point::new(x + r_tl, y));
    }

    p.close_path();
    p
}

#[cfg(test)]
#[path = "../tests/unit/geometry.rs"]
mod tests;
