/// CameraConfig — camera/projection/resolution parameters.
///
/// Pure state, replaced wholesale by each configure call; there are no
/// partial updates. Pixel aspect is fixed at 1.0 and the shutter interval
/// at [0, 1] regardless of inputs — the engine does not model either.
///
/// Invariant (caller contract, not checked): `yon > hither > 0`. A
/// degenerate clip range yields undefined numbers downstream.

use glam::Mat4;
use crate::strings::{known, NameHash};

/// Projection tag selecting the camera-to-screen matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    Perspective,
    Orthographic,
}

impl Projection {
    /// Interned name of the projection, as reported by `camera:projection`.
    pub fn name(&self) -> NameHash {
        match self {
            Projection::Perspective => known::PERSPECTIVE,
            Projection::Orthographic => known::ORTHOGRAPHIC,
        }
    }
}

/// Camera state read by transform resolution and the globals template.
#[derive(Debug, Clone)]
pub struct CameraConfig {
    world_to_camera: Mat4,
    projection: Projection,
    /// Horizontal field of view in degrees
    fov: f32,
    /// Near clip distance
    hither: f32,
    /// Far clip distance
    yon: f32,
    /// Fixed at 1.0
    pixel_aspect: f32,
    /// Fixed at [0, 1]
    shutter: [f32; 2],
    /// Derived: [-aspect, -1, aspect, 1]
    screen_window: [f32; 4],
    xres: u32,
    yres: u32,
}

impl CameraConfig {
    /// Build a full camera configuration from the given parameters.
    ///
    /// The screen window is recomputed as `[-aspect, -1, aspect, 1]` where
    /// `aspect = xres/yres * pixel_aspect`; the shutter resets to `[0, 1]`
    /// unconditionally.
    pub fn new(
        world_to_camera: Mat4,
        projection: Projection,
        fov: f32,
        hither: f32,
        yon: f32,
        xres: u32,
        yres: u32,
    ) -> Self {
        let pixel_aspect = 1.0; // hard-coded
        let frame_aspect = xres as f32 / yres as f32 * pixel_aspect;
        Self {
            world_to_camera,
            projection,
            fov,
            hither,
            yon,
            pixel_aspect,
            shutter: [0.0, 1.0], // hard-coded
            screen_window: [-frame_aspect, -1.0, frame_aspect, 1.0],
            xres,
            yres,
        }
    }

    // ===== GETTERS =====

    /// World-to-camera matrix.
    pub fn world_to_camera(&self) -> &Mat4 {
        &self.world_to_camera
    }

    /// Projection tag.
    pub fn projection(&self) -> Projection {
        self.projection
    }

    /// Horizontal field of view in degrees.
    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Near clip distance.
    pub fn hither(&self) -> f32 {
        self.hither
    }

    /// Far clip distance.
    pub fn yon(&self) -> f32 {
        self.yon
    }

    /// Pixel aspect ratio (always 1.0).
    pub fn pixel_aspect(&self) -> f32 {
        self.pixel_aspect
    }

    /// Shutter open/close times (always [0, 1]).
    pub fn shutter(&self) -> [f32; 2] {
        self.shutter
    }

    /// Screen window (left, bottom, right, top).
    pub fn screen_window(&self) -> [f32; 4] {
        self.screen_window
    }

    /// Horizontal resolution in pixels.
    pub fn xres(&self) -> u32 {
        self.xres
    }

    /// Vertical resolution in pixels.
    pub fn yres(&self) -> u32 {
        self.yres
    }
}

impl Default for CameraConfig {
    /// Construction-time defaults: identity world-to-camera, perspective,
    /// 90 degree fov, clip 0.1/1000, 256x256.
    fn default() -> Self {
        Self::new(Mat4::IDENTITY, Projection::Perspective, 90.0, 0.1, 1000.0, 256, 256)
    }
}

#[cfg(test)]
#[path = "camera_config_tests.rs"]
mod tests;
