//! qrpaint renders a QR module matrix into a styled raster image.
//!
//! The pipeline is one-way:
//!
//! 1. **Normalize**: `RenderParams -> RenderStyle` (every invalid input falls back to a default)
//! 2. **Plan**: `ModuleMatrix + RenderStyle -> FramePlan` (background, modules, eyes)
//! 3. **Paint**: `FramePlan -> FrameRGBA` on a [`PaintBackend`] (CPU backend over `vello_cpu`)
//! 4. **Logo** (optional, async): load, decode and composite a logo over the base frame
//!
//! [`QrCanvas`] drives all four steps and owns the surface.
//!
//! Symbol encoding is not part of the renderer; [`encode_matrix`] is a thin adapter over the
//! `qrcode` crate for callers that do not bring their own matrix.
#![forbid(unsafe_code)]

mod foundation;

/// Logo sources and image decoding.
pub mod assets;
/// Adapter from a payload string to a [`ModuleMatrix`].
pub mod encoder;
/// Rounded-square path construction.
pub mod geometry;
/// The module matrix input type.
pub mod matrix;
/// Display lists and paint backends.
pub mod render;
/// The canvas frame controller.
pub mod session;
/// Render parameters, colors and normalization.
pub mod style;

pub use crate::assets::decode::PreparedImage;
pub use crate::assets::logo::{LogoSource, load_logo};
pub use crate::encoder::encode_matrix;
pub use crate::foundation::core::{Affine, BezPath, Canvas, Point, Rect, Rgba8, Vec2};
pub use crate::foundation::error::{QrPaintError, QrPaintResult};
pub use crate::geometry::{CornerRadii, rounded_rect_path};
pub use crate::matrix::{EyeZone, ModuleMatrix};
pub use crate::render::backend::{FrameRGBA, PaintBackend};
pub use crate::render::cpu::CpuBackend;
pub use crate::render::plan::{DrawOp, FramePlan};
pub use crate::session::{CanvasOpts, FrameState, LogoComposited, QrCanvas, RenderPhase};
pub use crate::style::color::{ColorInput, parse_color};
pub use crate::style::normalize::{
    EcLevel, EyeStyle, LogoStyle, ModuleStyle, PaddingStyle, RenderStyle,
};
pub use crate::style::params::{EyeParam, EyePart, RenderParams};
