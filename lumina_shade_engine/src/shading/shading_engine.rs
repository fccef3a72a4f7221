/// ShadingEngine trait - boundary to the shading-language executor
///
/// The executor compiles and runs shading programs per pixel; this engine
/// only answers its queries. The trait captures the one call the renderer
/// makes per frame, with the tiling and region options the executor needs
/// to parallelize the loop. Implementations call back into the renderer
/// through `RenderServices` while shading.

use crate::error::Result;
use crate::services::RenderServices;
use crate::strings::NameHash;
use super::{Framebuffer, ShaderGlobals};

/// Where each shade point samples its pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadeMode {
    /// Sample at pixel centers (x + 0.5)
    PixelCenters,
    /// Sample on the pixel grid corners
    PixelGrid,
}

/// Region of interest within the framebuffer, end-exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Roi {
    pub x_begin: u32,
    pub x_end: u32,
    pub y_begin: u32,
    pub y_end: u32,
}

impl Roi {
    /// The full image region.
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            x_begin: 0,
            x_end: width,
            y_begin: 0,
            y_end: height,
        }
    }

    /// Region width in pixels.
    pub fn width(&self) -> u32 {
        self.x_end.saturating_sub(self.x_begin)
    }

    /// Region height in pixels.
    pub fn height(&self) -> u32 {
        self.y_end.saturating_sub(self.y_begin)
    }
}

/// How the executor splits the image across worker threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitDir {
    /// Split into columns
    X,
    /// Split into rows
    Y,
    /// Split into square-ish tiles
    Tile,
}

/// Parallelization options for the per-pixel loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParallelOptions {
    /// Worker thread count; 0 means "let the executor decide"
    pub threads: u32,
    /// Split strategy
    pub split: SplitDir,
    /// Approximate pixels per work item
    pub tile_size: usize,
}

impl ParallelOptions {
    /// Tile-split options with an automatic thread count.
    pub fn tiled(tile_size: usize) -> Self {
        Self {
            threads: 0,
            split: SplitDir::Tile,
            tile_size,
        }
    }
}

/// Boundary trait for the per-pixel shading executor.
///
/// `shade_image` fills `framebuffer` by running the current shading program
/// once per pixel of `roi`, starting each invocation from a clone of
/// `template` and writing the variables named in `outputs`. The executor
/// may parallelize freely; every query it makes through `services` during
/// the call is read-only.
pub trait ShadingEngine: Send + Sync {
    /// Shade one frame into the framebuffer.
    #[allow(clippy::too_many_arguments)]
    fn shade_image(
        &self,
        services: &dyn RenderServices,
        template: &ShaderGlobals,
        framebuffer: &mut Framebuffer,
        outputs: &[NameHash],
        mode: ShadeMode,
        roi: Roi,
        options: ParallelOptions,
    ) -> Result<()>;
}
