/// RenderServices trait - scene/camera/attribute queries for shading
///
/// This is the surface the shading executor calls back into during per-pixel
/// shading. All methods are read-only, synchronous, and safe to call from
/// many worker threads as long as no setup-phase mutation races them (a
/// caller contract). Failures are `None` — "value unavailable here" — for
/// the executor to handle with a default or a local shading failure; this
/// service never retries or recovers on the caller's behalf.
///
/// Motion blur is not modeled: every `time` argument is accepted and
/// ignored.

use glam::Mat4;
use crate::attribute::{AttrType, AttrValue};
use crate::shading::ShaderGlobals;
use crate::strings::NameHash;
use crate::transform::TransformHandle;

/// Query surface consumed by the shading executor.
pub trait RenderServices: Send + Sync {
    /// Optional-capability probe. No optional capabilities are implemented.
    fn supports(&self, _feature: &str) -> bool {
        false
    }

    /// Resolve a direct matrix handle to its stored value, unchanged.
    fn get_matrix(&self, xform: &TransformHandle, time: f32) -> Option<Mat4>;

    /// Resolve a space name to a matrix.
    ///
    /// Built-in spaces (camera, screen, NDC, raster) resolve via the fixed
    /// composition chain; any other name is looked up in the transform
    /// catalog and returned as-is. `None` means the space is unknown in the
    /// current context.
    fn get_named_matrix(&self, from: NameHash, time: f32) -> Option<Mat4>;

    /// Resolve a space name to its inverse matrix.
    ///
    /// Built-in spaces resolve via the composition chain; any other name
    /// resolves to the numeric inverse of its catalog matrix.
    fn get_inverse_matrix(&self, to: NameHash, time: f32) -> Option<Mat4>;

    /// Resolve a non-array attribute (index -1).
    fn get_attribute(
        &self,
        sg: Option<&ShaderGlobals>,
        derivatives: bool,
        scope: NameHash,
        ty: AttrType,
        name: NameHash,
    ) -> Option<AttrValue> {
        self.get_array_attribute(sg, derivatives, scope, ty, name, -1)
    }

    /// Resolve an attribute, possibly one element of an array.
    ///
    /// Resolution order, first match wins: getter dispatch table, reserved
    /// scopes, userdata fallback (empty scope, index -1), then `None`.
    fn get_array_attribute(
        &self,
        sg: Option<&ShaderGlobals>,
        derivatives: bool,
        scope: NameHash,
        ty: AttrType,
        name: NameHash,
        index: i32,
    ) -> Option<AttrValue>;
}
