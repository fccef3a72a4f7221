//! Camera module — camera/projection/resolution configuration.
//!
//! `CameraConfig` is a passive data container: it stores the parameters a
//! configure call hands it and derives the screen window. The transform
//! pipeline and the shader-globals template read from it; nothing here
//! computes matrices.

mod camera_config;

pub use camera_config::{CameraConfig, Projection};
