/// Mock ShadingEngine for unit tests (no shading-language compiler required)
///
/// Records the parameters of each shade_image call and fills the region of
/// interest with a fixed color, so frame invocation can be tested without a
/// real executor.

use std::sync::Mutex;
use crate::error::{Error, Result};
use crate::services::RenderServices;
use crate::strings::NameHash;
use super::{Framebuffer, ParallelOptions, Roi, ShadeMode, ShaderGlobals, ShadingEngine};

/// Parameters seen by one recorded shade_image call.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub outputs: Vec<NameHash>,
    pub mode: ShadeMode,
    pub roi: Roi,
    pub options: ParallelOptions,
    pub template_u: f32,
    pub template_dudx: f32,
}

/// Test engine: paints the ROI with `fill` and logs every call.
pub struct MockShadingEngine {
    pub fill: [f32; 3],
    pub fail: bool,
    pub calls: Mutex<Vec<RecordedCall>>,
}

impl MockShadingEngine {
    pub fn new(fill: [f32; 3]) -> Self {
        Self {
            fill,
            fail: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// An engine that reports failure instead of shading.
    pub fn failing() -> Self {
        Self {
            fill: [0.0; 3],
            fail: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl ShadingEngine for MockShadingEngine {
    fn shade_image(
        &self,
        _services: &dyn RenderServices,
        template: &ShaderGlobals,
        framebuffer: &mut Framebuffer,
        outputs: &[NameHash],
        mode: ShadeMode,
        roi: Roi,
        options: ParallelOptions,
    ) -> Result<()> {
        if self.fail {
            return Err(Error::ShadingFailed("mock engine failure".to_string()));
        }

        self.calls.lock().unwrap().push(RecordedCall {
            outputs: outputs.to_vec(),
            mode,
            roi,
            options,
            template_u: template.u,
            template_dudx: template.dudx,
        });

        for y in roi.y_begin..roi.y_end {
            for x in roi.x_begin..roi.x_end {
                framebuffer.set_pixel(x, y, self.fill);
            }
        }
        Ok(())
    }
}
