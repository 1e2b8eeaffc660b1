use std::sync::Arc;

use kurbo::Shape;

use crate::assets::decode::PreparedImage;
use crate::foundation::core::{Affine, BezPath, Canvas, Rgba8};
use crate::foundation::error::{QrPaintError, QrPaintResult};
use crate::render::backend::{FrameRGBA, PaintBackend};
use crate::render::plan::{DrawOp, FramePlan};

const CURVE_TOLERANCE: f64 = 0.01;
const MITER_LIMIT: f64 = 10.0;

/// CPU raster backend powered by `vello_cpu`.
///
/// Every executed op is kept until the next reset; each pass re-rasterizes the accumulated list
/// into a fresh pixmap, so later passes always composite over earlier ones.
pub struct CpuBackend {
    canvas: Option<Canvas>,
    scale: f64,
    ops: Vec<DrawOp>,
    ctx: Option<vello_cpu::RenderContext>,
    pixmap: Option<vello_cpu::Pixmap>,
}

impl Default for CpuBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuBackend {
    pub fn new() -> Self {
        Self {
            canvas: None,
            scale: 1.0,
            ops: Vec::new(),
            ctx: None,
            pixmap: None,
        }
    }

    fn surface_dims(canvas: Canvas) -> QrPaintResult<(u16, u16)> {
        let w: u16 = canvas.width.try_into().map_err(|_| {
            QrPaintError::surface_unavailable("surface width exceeds u16")
        })?;
        let h: u16 = canvas.height.try_into().map_err(|_| {
            QrPaintError::surface_unavailable("surface height exceeds u16")
        })?;
        if w == 0 || h == 0 {
            return Err(QrPaintError::surface_unavailable(format!(
                "surface must be non-empty (got {w}x{h})"
            )));
        }
        Ok((w, h))
    }

    fn with_ctx_mut<R>(
        &mut self,
        width: u16,
        height: u16,
        f: impl FnOnce(&mut Self, &mut vello_cpu::RenderContext) -> QrPaintResult<R>,
    ) -> QrPaintResult<R> {
        let mut ctx = match self.ctx.take() {
            None => vello_cpu::RenderContext::new(width, height),
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            Some(_) => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(self, &mut ctx)?;
        self.ctx = Some(ctx);
        Ok(out)
    }

    fn repaint(&mut self) -> QrPaintResult<()> {
        let canvas = self
            .canvas
            .ok_or_else(|| QrPaintError::surface_unavailable("cpu backend has no surface"))?;
        let (w, h) = Self::surface_dims(canvas)?;
        let base = Affine::scale(self.scale);

        self.with_ctx_mut(w, h, |this, ctx| {
            for op in &this.ops {
                draw_op(ctx, base, op)?;
            }
            ctx.flush();
            let mut pixmap = vello_cpu::Pixmap::new(w, h);
            ctx.render_to_pixmap(&mut pixmap);
            this.pixmap = Some(pixmap);
            Ok(())
        })
    }
}

impl PaintBackend for CpuBackend {
    fn reset_surface(&mut self, canvas: Canvas) -> QrPaintResult<()> {
        Self::surface_dims(canvas)?;
        self.canvas = Some(canvas);
        self.ops.clear();
        self.pixmap = None;
        Ok(())
    }

    fn exec_plan(&mut self, plan: &FramePlan) -> QrPaintResult<()> {
        if self.canvas != Some(plan.canvas) {
            return Err(QrPaintError::surface_unavailable(format!(
                "plan targets {}x{} but the surface is {:?}",
                plan.canvas.width, plan.canvas.height, self.canvas
            )));
        }
        if !plan.scale.is_finite() || plan.scale <= 0.0 {
            return Err(QrPaintError::validation("plan scale must be finite and > 0"));
        }
        self.scale = plan.scale;
        self.ops.extend(plan.ops.iter().cloned());
        self.repaint()
    }

    fn readback_rgba8(&mut self) -> QrPaintResult<FrameRGBA> {
        let canvas = self
            .canvas
            .ok_or_else(|| QrPaintError::surface_unavailable("cpu backend has no surface"))?;
        let data = match self.pixmap.as_ref() {
            Some(pm) => pm.data_as_u8_slice().to_vec(),
            None => vec![0; canvas.rgba8_len()],
        };
        Ok(FrameRGBA {
            width: canvas.width,
            height: canvas.height,
            data,
            premultiplied: true,
        })
    }
}

fn draw_op(ctx: &mut vello_cpu::RenderContext, base: Affine, op: &DrawOp) -> QrPaintResult<()> {
    ctx.set_blend_mode(vello_cpu::peniko::BlendMode::default());
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_transform(affine_to_cpu(base));

    match op {
        DrawOp::FillRect { rect, color } => {
            ctx.set_paint(color_to_cpu(*color));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                rect.x0, rect.y0, rect.x1, rect.y1,
            ));
        }
        DrawOp::FillCircle {
            center,
            radius,
            color,
        } => {
            let path = kurbo::Circle::new(*center, *radius).to_path(CURVE_TOLERANCE);
            ctx.set_paint(color_to_cpu(*color));
            ctx.fill_path(&bezpath_to_cpu(&path));
        }
        DrawOp::FillEllipse {
            center,
            radii,
            color,
        } => {
            let path = kurbo::Ellipse::new(*center, *radii, 0.0).to_path(CURVE_TOLERANCE);
            ctx.set_paint(color_to_cpu(*color));
            ctx.fill_path(&bezpath_to_cpu(&path));
        }
        DrawOp::RoundedSquare {
            path,
            line_width,
            color,
            fill,
        } => {
            let cpu_path = bezpath_to_cpu(path);
            ctx.set_paint(color_to_cpu(*color));
            ctx.set_stroke(eye_stroke(*line_width));
            ctx.stroke_path(&cpu_path);
            if *fill {
                ctx.fill_path(&cpu_path);
            }
        }
        DrawOp::Image {
            image,
            rect,
            opacity,
        } => {
            if image.width == 0 || image.height == 0 || rect.width() <= 0.0 || rect.height() <= 0.0
            {
                return Ok(());
            }
            let (iw, ih) = (f64::from(image.width), f64::from(image.height));
            let tr = base
                * Affine::translate((rect.x0, rect.y0))
                * Affine::scale_non_uniform(rect.width() / iw, rect.height() / ih);

            ctx.set_transform(affine_to_cpu(tr));
            ctx.set_paint(image_to_cpu(image)?);
            let opacity = opacity.clamp(0.0, 1.0);
            if opacity < 1.0 {
                ctx.push_opacity_layer(opacity);
            }
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, iw, ih));
            if opacity < 1.0 {
                ctx.pop_layer();
            }
        }
    }
    Ok(())
}

/// Mitered stroke so zero-radius corners stay square.
fn eye_stroke(line_width: f64) -> vello_cpu::kurbo::Stroke {
    vello_cpu::kurbo::Stroke::new(line_width)
        .with_join(vello_cpu::kurbo::Join::Miter)
        .with_miter_limit(MITER_LIMIT)
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    let [r, g, b, a] = c.to_array();
    vello_cpu::peniko::Color::from_rgba8(r, g, b, a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn image_to_cpu(image: &PreparedImage) -> QrPaintResult<vello_cpu::Image> {
    let pixmap = pixmap_from_premul_bytes(&image.rgba8_premul, image.width, image.height)?;
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

fn pixmap_from_premul_bytes(
    bytes: &[u8],
    width: u32,
    height: u32,
) -> QrPaintResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| QrPaintError::logo_load("logo width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| QrPaintError::logo_load("logo height exceeds u16"))?;
    if bytes.len()
        != (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4)
    {
        return Err(QrPaintError::logo_load("logo byte len mismatch"));
    }
    let pixels = bytes
        .chunks_exact(4)
        .map(|px| vello_cpu::peniko::color::PremulRgba8::from_u8_array([px[0], px[1], px[2], px[3]]))
        .collect::<Vec<_>>();
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels, w, h, true,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
