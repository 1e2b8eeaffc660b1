use crate::assets::decode::unpremultiply_rgba8_in_place;
use crate::foundation::core::Canvas;
use crate::foundation::error::QrPaintResult;
use crate::render::plan::FramePlan;

/// A rendered frame as RGBA8 pixels.
///
/// Backends read back **premultiplied alpha**; the `premultiplied` flag makes this explicit at
/// API boundaries. [`FrameRGBA::into_straight`] converts for encoders that expect straight alpha.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Convert to straight alpha (no-op when already straight).
    pub fn into_straight(mut self) -> Self {
        if self.premultiplied {
            unpremultiply_rgba8_in_place(&mut self.data);
            self.premultiplied = false;
        }
        self
    }

    /// Pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Surface owner that can execute [`FramePlan`]s.
///
/// Plans executed after [`PaintBackend::reset_surface`] accumulate on the same surface, so a logo
/// pass paints on top of the base frame.
pub trait PaintBackend {
    /// Discard previous content and size the surface to `canvas`.
    fn reset_surface(&mut self, canvas: Canvas) -> QrPaintResult<()>;

    /// Paint `plan` on top of the current surface content.
    fn exec_plan(&mut self, plan: &FramePlan) -> QrPaintResult<()>;

    /// Read back the current surface.
    fn readback_rgba8(&mut self) -> QrPaintResult<FrameRGBA>;
}

/// Run one paint pass and read back the result.
///
/// With `fresh` set the surface is reset to the plan's canvas first; otherwise the plan is layered
/// over what is already there.
pub fn execute_plan<B: PaintBackend + ?Sized>(
    backend: &mut B,
    plan: &FramePlan,
    fresh: bool,
) -> QrPaintResult<FrameRGBA> {
    if fresh {
        backend.reset_surface(plan.canvas)?;
    }
    backend.exec_plan(plan)?;
    backend.readback_rgba8()
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
