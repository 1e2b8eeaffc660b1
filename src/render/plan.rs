use std::sync::Arc;

use crate::assets::decode::PreparedImage;
use crate::foundation::core::{BezPath, Canvas, Point, Rect, Rgba8, Vec2};

#[derive(Clone, Debug)]
/// Backend-agnostic display list for one paint pass.
///
/// Geometry is expressed in logical units (quiet zone included); the backend maps it onto the
/// physical surface with a uniform `scale` transform.
pub struct FramePlan {
    /// Physical output surface.
    pub canvas: Canvas,
    /// Logical-to-physical scale factor (device pixel ratio).
    pub scale: f64,
    /// Draw operations in paint order.
    pub ops: Vec<DrawOp>,
}

impl FramePlan {
    /// Empty plan targeting `canvas`.
    pub fn new(canvas: Canvas, scale: f64) -> Self {
        Self {
            canvas,
            scale,
            ops: Vec::new(),
        }
    }

    /// Append an op; ops paint in push order.
    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    /// Number of ops of a given kind, mostly for diagnostics.
    pub fn count(&self, kind: DrawOpKind) -> usize {
        self.ops.iter().filter(|op| op.kind() == kind).count()
    }
}

#[derive(Clone, Debug)]
/// Draw operation emitted by the painters.
pub enum DrawOp {
    /// Fill an axis-aligned rectangle.
    FillRect {
        /// Rectangle in logical units.
        rect: Rect,
        /// Fill color.
        color: Rgba8,
    },
    /// Fill a circle.
    FillCircle {
        /// Circle center.
        center: Point,
        /// Circle radius.
        radius: f64,
        /// Fill color.
        color: Rgba8,
    },
    /// Fill an axis-aligned ellipse.
    FillEllipse {
        /// Ellipse center.
        center: Point,
        /// Semi-axes `(rx, ry)`.
        radii: Vec2,
        /// Fill color.
        color: Rgba8,
    },
    /// Stroke a rounded-square outline, optionally filling its interior.
    RoundedSquare {
        /// Outline built by [`crate::geometry::rounded_rect_path`].
        path: BezPath,
        /// Stroke width.
        line_width: f64,
        /// Stroke (and fill) color.
        color: Rgba8,
        /// Also fill the interior when `true`.
        fill: bool,
    },
    /// Draw a decoded image stretched into `rect`.
    Image {
        /// Decoded pixels.
        image: Arc<PreparedImage>,
        /// Destination rectangle in logical units.
        rect: Rect,
        /// Opacity multiplier in `[0, 1]`.
        opacity: f32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Discriminant of a [`DrawOp`].
pub enum DrawOpKind {
    /// [`DrawOp::FillRect`].
    FillRect,
    /// [`DrawOp::FillCircle`].
    FillCircle,
    /// [`DrawOp::FillEllipse`].
    FillEllipse,
    /// [`DrawOp::RoundedSquare`].
    RoundedSquare,
    /// [`DrawOp::Image`].
    Image,
}

impl DrawOp {
    /// Discriminant without the payload.
    pub fn kind(&self) -> DrawOpKind {
        match self {
            Self::FillRect { .. } => DrawOpKind::FillRect,
            Self::FillCircle { .. } => DrawOpKind::FillCircle,
            Self::FillEllipse { .. } => DrawOpKind::FillEllipse,
            Self::RoundedSquare { .. } => DrawOpKind::RoundedSquare,
            Self::Image { .. } => DrawOpKind::Image,
        }
    }

    /// Logical-space bounds covered by this op, strokes included.
    pub fn bounds(&self) -> Rect {
        use kurbo::Shape;

        match self {
            Self::FillRect { rect, .. } | Self::Image { rect, .. } => *rect,
            Self::FillCircle { center, radius, .. } => {
                Rect::from_center_size(*center, (radius * 2.0, radius * 2.0))
            }
            Self::FillEllipse { center, radii, .. } => {
                Rect::from_center_size(*center, (radii.x * 2.0, radii.y * 2.0))
            }
            Self::RoundedSquare {
                path, line_width, ..
            } => path.bounding_box().inflate(line_width / 2.0, line_width / 2.0),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/plan.rs"]
mod tests;
