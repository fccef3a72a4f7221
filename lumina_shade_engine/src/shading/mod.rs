//! Shading module — per-shade-point state, framebuffer, executor seam.
//!
//! `ShaderGlobals` is the state handed to every shading invocation; the
//! renderer keeps a template copy rebuilt on camera changes and cloned per
//! frame. `ShadingEngine` is the boundary trait behind which the actual
//! shading-language executor lives.

mod globals;
mod framebuffer;
mod shading_engine;
#[cfg(test)]
pub mod mock_shading_engine;

pub use globals::{RayType, ShaderGlobals};
pub use framebuffer::Framebuffer;
pub use shading_engine::{ParallelOptions, Roi, ShadeMode, ShadingEngine, SplitDir};
