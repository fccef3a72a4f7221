//! Services module — the query surface the shading executor calls.
//!
//! `RenderServices` is the read-only trait the executor sees while shading;
//! `LuminaRenderer` is the concrete implementation wiring the camera,
//! transform pipeline, catalog, attribute dispatch, globals template,
//! framebuffer, and pointer tracking together.

mod render_services;
mod renderer;

pub use render_services::RenderServices;
pub use renderer::{LuminaRenderer, ENGINE_VERSION};
