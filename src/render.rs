//! Display-list painters and the paint backends that execute them.
//!
//! The painters are pure: they turn a [`crate::ModuleMatrix`] and a
//! [`crate::RenderStyle`] into a [`plan::FramePlan`]. Backends own the pixels.

/// Backend trait and frame readback type.
pub mod backend;
/// CPU backend implementation.
pub mod cpu;
/// Positional eye painter.
pub mod eyes;
/// Base and logo pass builders.
pub mod frame;
/// Logo placement and background mask.
pub mod logo;
/// Data-module painter.
pub mod modules;
/// Display-list types.
pub mod plan;
