/// Built-in transform pipeline — world to {camera, screen, NDC, raster}.
///
/// The four built-in spaces form a fixed composition chain derived from the
/// camera configuration, truncated at the requested stage:
///
/// ```text
/// world --world_to_camera--> camera --camera_to_screen--> screen
///       --screen_to_ndc-->   NDC    --ndc_to_raster-->    raster
/// ```
///
/// Matrices are glam column-vector convention; points are transformed as
/// `M * p` with a homogeneous divide (`Mat4::project_point3`). The
/// perspective stage carries camera-space depth into w, so the divide
/// happens at the screen stage and beyond.
///
/// Precondition (unchecked): `yon != hither`. A degenerate depth range
/// yields undefined numbers, not an error.

use glam::{Mat4, Vec3, Vec4};
use crate::camera::{CameraConfig, Projection};
use crate::strings::{known, NameHash};

/// The four built-in camera-pipeline spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinSpace {
    Camera,
    Screen,
    Ndc,
    Raster,
}

impl BuiltinSpace {
    /// Map an interned space name to its built-in space, if it is one.
    pub fn from_name(name: NameHash) -> Option<Self> {
        if name == known::CAMERA {
            Some(BuiltinSpace::Camera)
        } else if name == known::SCREEN {
            Some(BuiltinSpace::Screen)
        } else if name == known::NDC {
            Some(BuiltinSpace::Ndc)
        } else if name == known::RASTER {
            Some(BuiltinSpace::Raster)
        } else {
            None
        }
    }
}

/// Compose the world-to-space matrix for a built-in space.
///
/// Requesting `Camera` stops after the stored world-to-camera matrix;
/// `Screen` adds the projection stage; `Raster` applies all four stages.
pub fn world_to_space(camera: &CameraConfig, space: BuiltinSpace) -> Mat4 {
    let mut m = *camera.world_to_camera();
    if space == BuiltinSpace::Camera {
        return m;
    }
    m = camera_to_screen(camera) * m;
    if space == BuiltinSpace::Screen {
        return m;
    }
    m = screen_to_ndc() * m;
    if space == BuiltinSpace::Ndc {
        return m;
    }
    ndc_to_raster(camera.xres(), camera.yres()) * m
}

/// Projection stage: camera space into the canonical screen frustum.
///
/// Selected by the stored projection tag. The depth range is computed in
/// f64 so a large yon/hither spread keeps its low bits before narrowing.
fn camera_to_screen(camera: &CameraConfig) -> Mat4 {
    let hither = camera.hither();
    let yon = camera.yon();
    let depthrange = (yon as f64 - hither as f64) as f32;
    match camera.projection() {
        Projection::Perspective => {
            let tanhalffov = (0.5 * camera.fov().to_radians()).tan();
            // Maps (x, y, z) to (x/t, y/t, (z*yon - yon*hither)/range) / z
            Mat4::from_cols(
                Vec4::new(1.0 / tanhalffov, 0.0, 0.0, 0.0),
                Vec4::new(0.0, 1.0 / tanhalffov, 0.0, 0.0),
                Vec4::new(0.0, 0.0, yon / depthrange, 1.0),
                Vec4::new(0.0, 0.0, -yon * hither / depthrange, 0.0),
            )
        }
        Projection::Orthographic => {
            // Linear depth normalization: z -> (z - hither) / range
            Mat4::from_cols(
                Vec4::new(1.0, 0.0, 0.0, 0.0),
                Vec4::new(0.0, 1.0, 0.0, 0.0),
                Vec4::new(0.0, 0.0, 1.0 / depthrange, 0.0),
                Vec4::new(0.0, 0.0, -hither / depthrange, 1.0),
            )
        }
    }
}

/// Fixed affine remap from screen [-1,1]x[-1,1] to the unit square.
fn screen_to_ndc() -> Mat4 {
    let (left, width) = (-1.0, 2.0);
    let (bottom, height) = (-1.0, 2.0);
    Mat4::from_cols(
        Vec4::new(1.0 / width, 0.0, 0.0, 0.0),
        Vec4::new(0.0, 1.0 / height, 0.0, 0.0),
        Vec4::new(0.0, 0.0, 1.0, 0.0),
        Vec4::new(-left / width, -bottom / height, 0.0, 1.0),
    )
}

/// Anisotropic scale from the unit square to pixel coordinates.
fn ndc_to_raster(xres: u32, yres: u32) -> Mat4 {
    Mat4::from_scale(Vec3::new(xres as f32, yres as f32, 1.0))
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
