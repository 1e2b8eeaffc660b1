use std::sync::Arc;

use crate::assets::decode::PreparedImage;
use crate::foundation::core::{Point, Rect, Rgba8, Vec2};
use crate::render::plan::{DrawOp, FramePlan};
use crate::style::normalize::{LogoStyle, PaddingStyle};

/// Logo width as a fraction of the code size when none is configured.
pub const AUTO_LOGO_FRACTION: f64 = 0.2;

/// Where the logo lands on the logical canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogoPlacement {
    /// Horizontal offset inside the code area (quiet zone excluded).
    pub dx: f64,
    /// Vertical offset inside the code area (quiet zone excluded).
    pub dy: f64,
    /// Logo width.
    pub width: f64,
    /// Logo height.
    pub height: f64,
    /// Quiet-zone offset added to `dx`/`dy` when drawing.
    pub offset: f64,
}

impl LogoPlacement {
    /// Center a logo of the configured (or automatic) size on a code of side `size`.
    pub fn compute(logo: &LogoStyle, size: f64, quiet_zone: f64) -> Self {
        let width = if logo.width > 0.0 {
            logo.width
        } else {
            size * AUTO_LOGO_FRACTION
        };
        let height = if logo.height > 0.0 { logo.height } else { width };
        Self {
            dx: (size - width) / 2.0,
            dy: (size - height) / 2.0,
            width,
            height,
            offset: quiet_zone,
        }
    }

    /// Logo rectangle on the logical canvas.
    pub fn rect(&self) -> Rect {
        let x = self.dx + self.offset;
        let y = self.dy + self.offset;
        Rect::new(x, y, x + self.width, y + self.height)
    }
}

/// Background pad painted under the logo.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LogoMask {
    /// Rectangular pad, the logo rect grown by the padding.
    Rect(Rect),
    /// Elliptical pad inscribed in the padded logo rect.
    Ellipse {
        /// Center of the logo.
        center: Point,
        /// Semi-axes `((w + 2p) / 2, (h + 2p) / 2)`.
        radii: Vec2,
    },
}

impl LogoMask {
    /// Pad for `placement`, or `None` when the style asks for no masking.
    pub fn for_logo(logo: &LogoStyle, placement: &LogoPlacement) -> Option<Self> {
        if !logo.needs_mask() {
            return None;
        }
        let padded = placement.rect().inflate(logo.padding, logo.padding);
        Some(match logo.padding_style {
            PaddingStyle::Square => Self::Rect(padded),
            PaddingStyle::Circle => Self::Ellipse {
                center: padded.center(),
                radii: Vec2::new(padded.width() / 2.0, padded.height() / 2.0),
            },
        })
    }

    pub fn bounding_box(&self) -> Rect {
        match self {
            Self::Rect(r) => *r,
            Self::Ellipse { center, radii } => {
                Rect::from_center_size(*center, (radii.x * 2.0, radii.y * 2.0))
            }
        }
    }

    fn into_op(self, color: Rgba8) -> DrawOp {
        match self {
            Self::Rect(rect) => DrawOp::FillRect { rect, color },
            Self::Ellipse { center, radii } => DrawOp::FillEllipse {
                center,
                radii,
                color,
            },
        }
    }
}

/// Append the optional background pad and the logo image.
pub fn paint_logo(
    plan: &mut FramePlan,
    logo: &LogoStyle,
    placement: &LogoPlacement,
    image: Arc<PreparedImage>,
    bg_color: Rgba8,
) {
    if let Some(mask) = LogoMask::for_logo(logo, placement) {
        plan.push(mask.into_op(bg_color));
    }
    plan.push(DrawOp::Image {
        image,
        rect: placement.rect(),
        opacity: logo.opacity.clamp(0.0, 1.0) as f32,
    });
}

#[cfg(test)]
#[path = "../../tests/unit/render/logo.rs"]
mod tests;
