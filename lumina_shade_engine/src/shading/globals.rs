/// ShaderGlobals — per-shade-point state supplied to each invocation.
///
/// The renderer keeps a template built from the camera configuration; the
/// shading executor clones it per invocation and overwrites the per-pixel
/// fields (position, u/v) before shading. The template treats the image
/// plane as the shaded surface: position derivatives along the screen axes
/// are unit vectors, the surface tangents span the full resolution, and
/// both normals point along the view axis.

use std::sync::Arc;
use bitflags::bitflags;
use glam::{Mat4, Vec3};
use crate::camera::CameraConfig;
use crate::transform::TransformHandle;

bitflags! {
    /// Classification of the ray that produced a shade point.
    ///
    /// Every shade of the image plane carries the same fixed (empty)
    /// classification; the full set exists for executors that branch on it.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct RayType: u32 {
        const CAMERA = 1 << 0;
        const SHADOW = 1 << 1;
        const REFLECTION = 1 << 2;
        const REFRACTION = 1 << 3;
        const DIFFUSE = 1 << 4;
        const GLOSSY = 1 << 5;
    }
}

/// Per-shade-point state.
///
/// Cloned (not shared) from the renderer's template for every invocation.
#[derive(Debug, Clone)]
pub struct ShaderGlobals {
    /// Shade position
    pub p: Vec3,
    /// Position partials w.r.t. the screen x/y axes
    pub dpdx: Vec3,
    pub dpdy: Vec3,
    /// Position partial along depth (zero on the image plane)
    pub dpdz: Vec3,

    /// Surface parameterization and its analytic partials
    pub u: f32,
    pub dudx: f32,
    pub dudy: f32,
    pub v: f32,
    pub dvdx: f32,
    pub dvdy: f32,

    /// Position tangents w.r.t. surface u/v
    pub dpdu: Vec3,
    pub dpdv: Vec3,

    /// Shading normal and geometric normal
    pub n: Vec3,
    pub ng: Vec3,

    /// Patch surface area (used by light integrators; 1 for the plane)
    pub surface_area: f32,

    /// Classification of the ray that produced this point
    pub raytype: RayType,

    /// Shader-space transform. In a full renderer this may differ per
    /// shader group; here it is identity.
    pub shader2common: TransformHandle,
    /// Object-space transform. In a full renderer this may differ per
    /// object; here it is identity.
    pub object2common: TransformHandle,
}

impl ShaderGlobals {
    /// Build the template state for the given camera configuration.
    ///
    /// Rebuilt whenever the camera or resolution changes.
    pub fn template(camera: &CameraConfig) -> Self {
        let xres = camera.xres() as f32;
        let yres = camera.yres() as f32;
        Self {
            p: Vec3::ZERO,
            dpdx: Vec3::new(1.0, 0.0, 0.0),
            dpdy: Vec3::new(0.0, 1.0, 0.0),
            dpdz: Vec3::ZERO,
            u: 0.0,
            // uv derivatives are constant across the image
            dudx: 1.0 / xres,
            dudy: 0.0,
            v: 0.0,
            dvdx: 0.0,
            dvdy: 1.0 / yres,
            dpdu: Vec3::new(xres, 0.0, 0.0),
            dpdv: Vec3::new(0.0, yres, 0.0),
            n: Vec3::new(0.0, 0.0, 1.0),
            ng: Vec3::new(0.0, 0.0, 1.0),
            surface_area: 1.0,
            raytype: RayType::empty(),
            shader2common: Arc::new(Mat4::IDENTITY),
            object2common: Arc::new(Mat4::IDENTITY),
        }
    }
}

#[cfg(test)]
#[path = "globals_tests.rs"]
mod tests;
