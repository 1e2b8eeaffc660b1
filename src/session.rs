//! The canvas frame controller.

use std::io::Cursor;
use std::sync::Arc;

use anyhow::Context;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::assets::logo::{LogoSource, load_logo};
use crate::foundation::core::Canvas;
use crate::foundation::error::{QrPaintError, QrPaintResult};
use crate::matrix::ModuleMatrix;
use crate::render::backend::{FrameRGBA, PaintBackend, execute_plan};
use crate::render::cpu::CpuBackend;
use crate::render::frame::{build_base_plan, build_logo_plan, logo_target_px};
use crate::render::logo::{LogoMask, LogoPlacement};
use crate::style::normalize::{LogoStyle, RenderStyle};

/// Options for a [`QrCanvas`] that are not part of the style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasOpts {
    /// Device pixel ratio; the physical surface is the logical side times this.
    pub device_scale: f64,
}

impl Default for CanvasOpts {
    fn default() -> Self {
        Self { device_scale: 1.0 }
    }
}

impl CanvasOpts {
    /// Set the device pixel ratio. Non-finite or non-positive values fall back to 1.
    pub fn with_device_scale(mut self, scale: f64) -> Self {
        self.device_scale = scale;
        self
    }

    fn scale(&self) -> f64 {
        if self.device_scale.is_finite() && self.device_scale > 0.0 {
            self.device_scale
        } else {
            tracing::debug!(
                value = self.device_scale,
                "device scale must be finite and > 0, using 1"
            );
            1.0
        }
    }
}

/// Which pass is in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderPhase {
    /// Background, modules and eyes.
    Base,
    /// Logo mask and logo image over the base frame.
    Logo,
}

/// Lifecycle of the canvas surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameState {
    /// No usable frame (construction pending or the last repaint failed).
    Uninitialized,
    /// A pass is executing on the backend.
    Rendering(RenderPhase),
    /// Base frame (background, modules, eyes) is on the surface.
    Rendered,
    /// Base frame plus logo.
    Composited,
}

/// Result of a successful logo pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogoComposited {
    /// Where the logo was drawn.
    pub placement: LogoPlacement,
    /// Background pad painted under the logo, if any.
    pub mask: Option<LogoMask>,
    /// Decoded logo width in pixels.
    pub image_width: u32,
    /// Decoded logo height in pixels.
    pub image_height: u32,
}

type LogoHook = Box<dyn FnMut(&LogoComposited) + Send + 'static>;

/// A styled QR code painted onto an owned surface.
///
/// Construction paints the base frame synchronously. [`QrCanvas::add_logo`] is the only async
/// step; it borrows the canvas mutably, so no style change can interleave with a logo load.
pub struct QrCanvas<B: PaintBackend = CpuBackend> {
    backend: B,
    matrix: ModuleMatrix,
    style: RenderStyle,
    scale: f64,
    canvas: Option<Canvas>,
    frame: Option<FrameRGBA>,
    state: FrameState,
    on_logo_loaded: Option<LogoHook>,
}

impl QrCanvas<CpuBackend> {
    /// Paint `matrix` with `style` on the built-in CPU backend.
    pub fn new(matrix: ModuleMatrix, style: RenderStyle, opts: CanvasOpts) -> QrPaintResult<Self> {
        Self::with_backend(CpuBackend::new(), matrix, style, opts)
    }
}

impl<B: PaintBackend> QrCanvas<B> {
    /// Paint `matrix` with `style` on a caller-provided backend.
    ///
    /// Fails with [`QrPaintError::SurfaceUnavailable`] when the surface cannot be created.
    pub fn with_backend(
        backend: B,
        matrix: ModuleMatrix,
        style: RenderStyle,
        opts: CanvasOpts,
    ) -> QrPaintResult<Self> {
        let mut this = Self {
            backend,
            matrix,
            style,
            scale: opts.scale(),
            canvas: None,
            frame: None,
            state: FrameState::Uninitialized,
            on_logo_loaded: None,
        };
        this.repaint()?;
        Ok(this)
    }

    /// Register a hook invoked after each successful logo composite.
    pub fn set_on_logo_loaded(&mut self, hook: impl FnMut(&LogoComposited) + Send + 'static) {
        self.on_logo_loaded = Some(Box::new(hook));
    }

    /// Replace the style and repaint the base frame. Any composited logo is dropped.
    pub fn set_style(&mut self, style: RenderStyle) -> QrPaintResult<()> {
        self.style = style;
        self.repaint()
    }

    /// Replace the matrix and repaint the base frame. Any composited logo is dropped.
    pub fn set_matrix(&mut self, matrix: ModuleMatrix) -> QrPaintResult<()> {
        self.matrix = matrix;
        self.repaint()
    }

    pub fn state(&self) -> FrameState {
        self.state
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    pub fn matrix(&self) -> &ModuleMatrix {
        &self.matrix
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Effective device scale after fallback.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Physical surface size, `None` while no frame is available.
    pub fn canvas(&self) -> Option<Canvas> {
        self.canvas
    }

    fn transition(&mut self, next: FrameState) {
        tracing::debug!(from = ?self.state, to = ?next, "canvas state");
        self.state = next;
    }

    fn repaint(&mut self) -> QrPaintResult<()> {
        self.transition(FrameState::Rendering(RenderPhase::Base));
        let painted = build_base_plan(&self.matrix, &self.style, self.scale).and_then(|plan| {
            let frame = execute_plan(&mut self.backend, &plan, true)?;
            Ok((plan.canvas, frame))
        });
        match painted {
            Ok((canvas, frame)) => {
                self.canvas = Some(canvas);
                self.frame = Some(frame);
                self.transition(FrameState::Rendered);
                Ok(())
            }
            Err(e) => {
                self.canvas = None;
                self.frame = None;
                self.transition(FrameState::Uninitialized);
                Err(e)
            }
        }
    }

    /// Load the configured logo and composite it over the base frame.
    ///
    /// A second call replaces the previous logo rather than stacking on it. On failure the base
    /// frame stays untouched and the error is returned; the state is unchanged.
    pub async fn add_logo(&mut self) -> QrPaintResult<LogoComposited> {
        let source = self
            .style
            .logo
            .as_ref()
            .map(|logo| logo.source.clone())
            .ok_or_else(|| QrPaintError::validation("no logo source configured"))?;
        self.composite_logo(source).await
    }

    /// Set the logo source (keeping other logo options) and composite it.
    pub async fn add_logo_from(&mut self, source: LogoSource) -> QrPaintResult<LogoComposited> {
        let logo = match self.style.logo.take() {
            Some(logo) => LogoStyle {
                source: source.clone(),
                ..logo
            },
            None => LogoStyle::new(source.clone()),
        };
        self.style.logo = Some(logo);
        self.composite_logo(source).await
    }

    #[tracing::instrument(level = "debug", skip_all, fields(source = %source))]
    async fn composite_logo(&mut self, source: LogoSource) -> QrPaintResult<LogoComposited> {
        if !matches!(self.state, FrameState::Rendered | FrameState::Composited) {
            return Err(QrPaintError::validation(format!(
                "cannot add a logo in state {:?}",
                self.state
            )));
        }

        let target = logo_target_px(&self.style, self.scale)?;
        let image = match load_logo(source, target).await {
            Ok(image) => Arc::new(image),
            Err(e) => {
                tracing::warn!(error = %e, "logo failed to load, keeping base frame");
                return Err(e);
            }
        };

        if self.state == FrameState::Composited {
            self.repaint()?;
        }

        self.transition(FrameState::Rendering(RenderPhase::Logo));
        let (image_width, image_height) = (image.width, image.height);
        let drawn = build_logo_plan(&self.style, self.scale, image)
            .and_then(|plan| execute_plan(&mut self.backend, &plan, false));
        let frame = match drawn {
            Ok(frame) => frame,
            Err(e) => {
                tracing::warn!(error = %e, "logo composite failed, restoring base frame");
                self.repaint()?;
                return Err(e);
            }
        };
        self.frame = Some(frame);
        self.transition(FrameState::Composited);

        let logo = self
            .style
            .logo
            .as_ref()
            .ok_or_else(|| QrPaintError::validation("no logo source configured"))?;
        let placement = LogoPlacement::compute(logo, self.style.size, self.style.quiet_zone);
        let out = LogoComposited {
            placement,
            mask: LogoMask::for_logo(logo, &placement),
            image_width,
            image_height,
        };
        if let Some(hook) = self.on_logo_loaded.as_mut() {
            hook(&out);
        }
        Ok(out)
    }

    fn premul_frame(&self) -> QrPaintResult<&FrameRGBA> {
        self.frame
            .as_ref()
            .ok_or_else(|| QrPaintError::surface_unavailable("no rendered frame"))
    }

    /// Snapshot of the current surface in straight-alpha RGBA8.
    pub fn frame(&self) -> QrPaintResult<FrameRGBA> {
        Ok(self.premul_frame()?.clone().into_straight())
    }

    /// Snapshot as an [`image::RgbaImage`].
    pub fn to_rgba_image(&self) -> QrPaintResult<image::RgbaImage> {
        let frame = self.frame()?;
        image::RgbaImage::from_raw(frame.width, frame.height, frame.data)
            .ok_or_else(|| QrPaintError::surface_unavailable("frame buffer size mismatch"))
    }

    /// Snapshot encoded as PNG bytes.
    pub fn encode_png(&self) -> QrPaintResult<Vec<u8>> {
        let img = self.to_rgba_image()?;
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .context("encode png")?;
        Ok(buf)
    }

    /// Snapshot as a `data:image/png;base64,...` URL.
    pub fn data_url(&self) -> QrPaintResult<String> {
        let png = self.encode_png()?;
        Ok(format!("data:image/png;base64,{}", BASE64.encode(png)))
    }
}

#[cfg(test)]
#[path = "../tests/unit/session.rs"]
mod tests;
