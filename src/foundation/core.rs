use crate::foundation::error::{QrPaintError, QrPaintResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Largest surface side the CPU rasterizer can address.
pub const MAX_SURFACE_SIDE: u32 = u16::MAX as u32;

/// Output surface dimensions in physical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Physical canvas for a square logical side scaled by the device pixel scale.
    ///
    /// Fails with [`QrPaintError::SurfaceUnavailable`] when the result is empty, non-finite or
    /// exceeds [`MAX_SURFACE_SIDE`].
    pub fn square_scaled(logical_side: f64, scale: f64) -> QrPaintResult<Self> {
        let side = (logical_side * scale).round();
        if !side.is_finite() || side < 1.0 {
            return Err(QrPaintError::surface_unavailable(format!(
                "surface side must be >= 1px (got {logical_side} * {scale})"
            )));
        }
        if side > f64::from(MAX_SURFACE_SIDE) {
            return Err(QrPaintError::surface_unavailable(format!(
                "surface side {side}px exceeds {MAX_SURFACE_SIDE}px"
            )));
        }
        let side = side as u32;
        Ok(Self {
            width: side,
            height: side,
        })
    }

    /// Number of bytes in a tightly packed RGBA8 buffer of this size.
    pub fn rgba8_len(self) -> usize {
        (self.width as usize)
            .saturating_mul(self.height as usize)
            .saturating_mul(4)
    }
}

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    pub const BLACK: Self = Self::opaque(0, 0, 0);
    pub const WHITE: Self = Self::opaque(255, 255, 255);
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Channels as `[r, g, b, a]`.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl std::fmt::Display for Rgba8 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "#{:02X}{:02X}{:02X}{:02X}",
                self.r, self.g, self.b, self.a
            )
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
