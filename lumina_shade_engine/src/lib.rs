/*!
# Lumina Shade Engine

Renderer services for shader-toy style image shading.

This crate answers the scene/camera/attribute queries a shading-language
executor issues while shading pixels, and supplies the coordinate-transform
pipeline that converts points between the built-in camera spaces. The
shading executor itself is an external collaborator behind the
`ShadingEngine` trait.

## Architecture

- **RenderServices**: query surface the shading executor calls back into
- **LuminaRenderer**: concrete services implementation (camera, transforms,
  attributes, globals template, framebuffer, pointer tracking)
- **ShadingEngine**: boundary trait for the per-pixel shading executor
- **Engine**: global singleton wiring (logger + renderer instance)

The renderer is configured on one control thread before shading starts;
during shading, all query paths are read-only and safe to call from many
worker threads as long as no configuration call races them.
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod strings;
pub mod camera;
pub mod transform;
pub mod attribute;
pub mod shading;
pub mod services;

// Main lumina namespace module
pub mod lumina {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine singleton
    pub use crate::engine::Engine;

    // Render services surface
    pub use crate::services::{LuminaRenderer, RenderServices};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        // Note: shade_* macros are NOT re-exported here - they are internal only
    }

    // String interning sub-module
    pub mod strings {
        pub use crate::strings::*;
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Transform sub-module
    pub mod transform {
        pub use crate::transform::*;
    }

    // Attribute sub-module
    pub mod attribute {
        pub use crate::attribute::*;
    }

    // Shading sub-module
    pub mod shading {
        pub use crate::shading::*;
    }
}

// Re-export math library at crate root
pub use glam;
