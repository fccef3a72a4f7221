//! Transform module — built-in camera-space pipeline and named transforms.
//!
//! `pipeline` derives the fixed composition chain for the four built-in
//! spaces (camera, screen, NDC, raster) from the camera configuration.
//! `catalog` is the name→matrix registry for user-defined coordinate
//! frames. Time-varying transforms are not modeled: every query that
//! accepts a time ignores it.

mod catalog;
mod pipeline;

pub use catalog::{TransformCatalog, TransformHandle};
pub use pipeline::{BuiltinSpace, world_to_space};
