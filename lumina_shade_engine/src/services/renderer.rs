/// LuminaRenderer — concrete renderer services for flat image-plane shading.
///
/// Owns the camera configuration, the named-transform catalog, the
/// attribute dispatch table, the shader-globals template, the lazily
/// allocated framebuffer, and the tracked pointer position.
///
/// Lifecycle: all mutation (`configure_camera`, `register_named_transform`,
/// pointer updates) happens on one control thread before a frame is shaded;
/// during `render_image` the executor's worker threads only read, through
/// `RenderServices`. That split is a caller contract — nothing here locks.

use glam::Mat4;
use winit::dpi::PhysicalPosition;
use winit::event::WindowEvent;

use crate::attribute::{
    resolve_userdata, AttrData, AttrGetterTable, AttrType, AttrValue,
};
use crate::camera::{CameraConfig, Projection};
use crate::error::Result;
use crate::shading::{
    Framebuffer, ParallelOptions, Roi, ShadeMode, ShaderGlobals, ShadingEngine,
};
use crate::strings::{known, NameHash};
use crate::transform::{world_to_space, BuiltinSpace, TransformCatalog, TransformHandle};
use crate::{shade_debug, shade_info};

use super::RenderServices;

/// Engine version reported by the `engine:version` attribute:
/// major * 10000 + minor * 100 + patch.
pub const ENGINE_VERSION: i32 = 100;

/// Fixed constant behind the reserved "options"/"blahblah" attribute; it
/// exists only so executors can exercise the generic-attribute path.
const OPTIONS_BLAHBLAH: f32 = 3.14159;

/// Sentinel for "pointer position unset".
const MOUSE_UNSET: f32 = -1.0;

/// Concrete renderer-services implementation.
pub struct LuminaRenderer {
    camera: CameraConfig,
    catalog: TransformCatalog,
    getters: AttrGetterTable<LuminaRenderer>,
    globals_template: ShaderGlobals,
    framebuffer: Option<Framebuffer>,
    mouse_x: f32,
    mouse_y: f32,
}

impl LuminaRenderer {
    /// Create a renderer with the default camera (identity view,
    /// perspective, 90 degree fov, clip 0.1/1000, 256x256).
    pub fn new() -> Self {
        known::intern_known();

        let camera = CameraConfig::default();
        let globals_template = ShaderGlobals::template(&camera);

        let mut getters: AttrGetterTable<LuminaRenderer> = AttrGetterTable::new();
        getters.register(known::ENGINE_VERSION, Self::attr_engine_version);
        getters.register(known::CAMERA_RESOLUTION, Self::attr_camera_resolution);
        getters.register(known::CAMERA_PROJECTION, Self::attr_camera_projection);
        getters.register(known::CAMERA_PIXELASPECT, Self::attr_camera_pixelaspect);
        getters.register(known::CAMERA_SCREEN_WINDOW, Self::attr_camera_screen_window);
        getters.register(known::CAMERA_FOV, Self::attr_camera_fov);
        getters.register(known::CAMERA_CLIP, Self::attr_camera_clip);
        getters.register(known::CAMERA_CLIP_NEAR, Self::attr_camera_clip_near);
        getters.register(known::CAMERA_CLIP_FAR, Self::attr_camera_clip_far);
        getters.register(known::CAMERA_SHUTTER, Self::attr_camera_shutter);
        getters.register(known::CAMERA_SHUTTER_OPEN, Self::attr_camera_shutter_open);
        getters.register(known::CAMERA_SHUTTER_CLOSE, Self::attr_camera_shutter_close);

        Self {
            camera,
            catalog: TransformCatalog::new(),
            getters,
            globals_template,
            framebuffer: None,
            mouse_x: MOUSE_UNSET,
            mouse_y: MOUSE_UNSET,
        }
    }

    // ===== SETUP PHASE (single control thread) =====

    /// Replace the camera configuration wholesale and rebuild the globals
    /// template. No state from a previous configuration persists.
    #[allow(clippy::too_many_arguments)]
    pub fn configure_camera(
        &mut self,
        world_to_camera: Mat4,
        projection: Projection,
        fov: f32,
        hither: f32,
        yon: f32,
        xres: u32,
        yres: u32,
    ) {
        self.camera = CameraConfig::new(world_to_camera, projection, fov, hither, yon, xres, yres);
        self.globals_template = ShaderGlobals::template(&self.camera);
        shade_debug!(
            "lumina::LuminaRenderer",
            "Camera configured: {}x{}, fov {}",
            xres,
            yres,
            fov
        );
    }

    /// Register (or overwrite) a named transform.
    pub fn register_named_transform(&mut self, name: &str, xform: Mat4) {
        self.catalog.register(name, xform);
        shade_debug!("lumina::LuminaRenderer", "Registered named transform '{}'", name);
    }

    /// Track a pointer position in pixel coordinates.
    pub fn set_mouse_position(&mut self, position: PhysicalPosition<f64>) {
        self.mouse_x = position.x as f32;
        self.mouse_y = position.y as f32;
    }

    /// Mark the pointer position as unset.
    pub fn clear_mouse(&mut self) {
        self.mouse_x = MOUSE_UNSET;
        self.mouse_y = MOUSE_UNSET;
    }

    /// Feed a window event into pointer tracking; other events are ignored.
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => self.set_mouse_position(*position),
            WindowEvent::CursorLeft { .. } => self.clear_mouse(),
            _ => {}
        }
    }

    // ===== FRAME INVOCATION =====

    /// Shade one frame through the given executor.
    ///
    /// Allocates the framebuffer on first use at the configured resolution,
    /// hands the executor a clone of the globals template, and requests the
    /// `Cout` output over the full image with tile-split parallelism.
    pub fn render_image(&mut self, engine: &dyn ShadingEngine) -> Result<()> {
        let mut framebuffer = match self.framebuffer.take() {
            Some(fb) => fb,
            None => {
                shade_info!(
                    "lumina::LuminaRenderer",
                    "Allocating {}x{} framebuffer",
                    self.camera.xres(),
                    self.camera.yres()
                );
                Framebuffer::new(self.camera.xres(), self.camera.yres())
            }
        };

        let template = self.globals_template.clone();
        let outputs = [known::COUT];
        let roi = Roi::full(framebuffer.width(), framebuffer.height());
        let result = engine.shade_image(
            &*self,
            &template,
            &mut framebuffer,
            &outputs,
            ShadeMode::PixelCenters,
            roi,
            ParallelOptions::tiled(4096),
        );

        self.framebuffer = Some(framebuffer);
        result
    }

    // ===== ACCESSORS =====

    /// Current camera configuration.
    pub fn camera(&self) -> &CameraConfig {
        &self.camera
    }

    /// Named-transform catalog.
    pub fn catalog(&self) -> &TransformCatalog {
        &self.catalog
    }

    /// The prototype per-shade-point state.
    pub fn globals_template(&self) -> &ShaderGlobals {
        &self.globals_template
    }

    /// The framebuffer, once the first render has allocated it.
    pub fn framebuffer(&self) -> Option<&Framebuffer> {
        self.framebuffer.as_ref()
    }

    // ===== ATTRIBUTE GETTERS (dispatch-table entries) =====

    fn attr_engine_version(
        &self,
        _sg: Option<&ShaderGlobals>,
        _derivatives: bool,
        ty: AttrType,
    ) -> Option<AttrValue> {
        (ty == AttrType::Int).then(|| AttrValue::value(AttrData::Int(ENGINE_VERSION)))
    }

    fn attr_camera_resolution(
        &self,
        _sg: Option<&ShaderGlobals>,
        derivatives: bool,
        ty: AttrType,
    ) -> Option<AttrValue> {
        (ty == AttrType::Int2).then(|| {
            AttrValue::uniform(
                AttrData::Int2([self.camera.xres() as i32, self.camera.yres() as i32]),
                derivatives,
            )
        })
    }

    fn attr_camera_projection(
        &self,
        _sg: Option<&ShaderGlobals>,
        _derivatives: bool,
        ty: AttrType,
    ) -> Option<AttrValue> {
        (ty == AttrType::Str)
            .then(|| AttrValue::value(AttrData::Str(self.camera.projection().name())))
    }

    fn attr_camera_pixelaspect(
        &self,
        _sg: Option<&ShaderGlobals>,
        derivatives: bool,
        ty: AttrType,
    ) -> Option<AttrValue> {
        (ty == AttrType::Float)
            .then(|| AttrValue::uniform(AttrData::Float(self.camera.pixel_aspect()), derivatives))
    }

    fn attr_camera_screen_window(
        &self,
        _sg: Option<&ShaderGlobals>,
        derivatives: bool,
        ty: AttrType,
    ) -> Option<AttrValue> {
        (ty == AttrType::Float4)
            .then(|| AttrValue::uniform(AttrData::Float4(self.camera.screen_window()), derivatives))
    }

    fn attr_camera_fov(
        &self,
        _sg: Option<&ShaderGlobals>,
        derivatives: bool,
        ty: AttrType,
    ) -> Option<AttrValue> {
        (ty == AttrType::Float)
            .then(|| AttrValue::uniform(AttrData::Float(self.camera.fov()), derivatives))
    }

    fn attr_camera_clip(
        &self,
        _sg: Option<&ShaderGlobals>,
        derivatives: bool,
        ty: AttrType,
    ) -> Option<AttrValue> {
        (ty == AttrType::Float2).then(|| {
            AttrValue::uniform(
                AttrData::Float2([self.camera.hither(), self.camera.yon()]),
                derivatives,
            )
        })
    }

    fn attr_camera_clip_near(
        &self,
        _sg: Option<&ShaderGlobals>,
        derivatives: bool,
        ty: AttrType,
    ) -> Option<AttrValue> {
        (ty == AttrType::Float)
            .then(|| AttrValue::uniform(AttrData::Float(self.camera.hither()), derivatives))
    }

    fn attr_camera_clip_far(
        &self,
        _sg: Option<&ShaderGlobals>,
        derivatives: bool,
        ty: AttrType,
    ) -> Option<AttrValue> {
        (ty == AttrType::Float)
            .then(|| AttrValue::uniform(AttrData::Float(self.camera.yon()), derivatives))
    }

    fn attr_camera_shutter(
        &self,
        _sg: Option<&ShaderGlobals>,
        derivatives: bool,
        ty: AttrType,
    ) -> Option<AttrValue> {
        (ty == AttrType::Float2)
            .then(|| AttrValue::uniform(AttrData::Float2(self.camera.shutter()), derivatives))
    }

    fn attr_camera_shutter_open(
        &self,
        _sg: Option<&ShaderGlobals>,
        derivatives: bool,
        ty: AttrType,
    ) -> Option<AttrValue> {
        (ty == AttrType::Float)
            .then(|| AttrValue::uniform(AttrData::Float(self.camera.shutter()[0]), derivatives))
    }

    fn attr_camera_shutter_close(
        &self,
        _sg: Option<&ShaderGlobals>,
        derivatives: bool,
        ty: AttrType,
    ) -> Option<AttrValue> {
        (ty == AttrType::Float)
            .then(|| AttrValue::uniform(AttrData::Float(self.camera.shutter()[1]), derivatives))
    }
}

impl Default for LuminaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderServices for LuminaRenderer {
    fn get_matrix(&self, xform: &TransformHandle, _time: f32) -> Option<Mat4> {
        // Transforms are plain 4x4 matrices; no motion blur, so the time
        // argument never matters.
        Some(**xform)
    }

    fn get_named_matrix(&self, from: NameHash, _time: f32) -> Option<Mat4> {
        if let Some(space) = BuiltinSpace::from_name(from) {
            return Some(world_to_space(&self.camera, space));
        }
        self.catalog.forward(from)
    }

    fn get_inverse_matrix(&self, to: NameHash, _time: f32) -> Option<Mat4> {
        if let Some(space) = BuiltinSpace::from_name(to) {
            return Some(world_to_space(&self.camera, space));
        }
        self.catalog.inverse(to)
    }

    fn get_array_attribute(
        &self,
        sg: Option<&ShaderGlobals>,
        derivatives: bool,
        scope: NameHash,
        ty: AttrType,
        name: NameHash,
        index: i32,
    ) -> Option<AttrValue> {
        // 1. Dispatch table (scope-independent); a decline falls through.
        if let Some(value) = self.getters.dispatch(self, sg, derivatives, ty, name) {
            return Some(value);
        }

        // 2. Reserved "mouse" scope: normalized pointer coordinates, valid
        //    only while the raw coordinate is set.
        if scope == known::MOUSE && ty == AttrType::Float {
            if name == known::S && self.mouse_x >= 0.0 {
                let s = (self.mouse_x + 0.5) / self.camera.xres() as f32;
                return Some(AttrValue::value(AttrData::Float(s)));
            }
            if name == known::T && self.mouse_y >= 0.0 {
                let t = (self.mouse_y + 0.5) / self.camera.yres() as f32;
                return Some(AttrValue::value(AttrData::Float(t)));
            }
        }

        // 3. Reserved "options"/"blahblah" constant.
        if scope == known::OPTIONS && name == known::BLAHBLAH && ty == AttrType::Float {
            return Some(AttrValue::value(AttrData::Float(OPTIONS_BLAHBLAH)));
        }

        // 4. No scope and not an array-element request: userdata fallback.
        if scope == NameHash::EMPTY && index == -1 {
            if let Some(sg) = sg {
                return resolve_userdata(sg, derivatives, name, ty);
            }
        }

        None
    }
}

#[cfg(test)]
#[path = "renderer_tests.rs"]
mod tests;
