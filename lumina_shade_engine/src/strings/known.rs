//! Fixed names understood by the renderer services.
//!
//! Mirrors the renderer's built-in vocabulary: transform spaces, projection
//! tags, reserved attribute scopes, attribute names, and the output
//! variable. `intern_known()` records all of them in the reverse table so
//! hashes coming back from the shading executor can be printed.

use super::NameHash;

// Built-in transform spaces
pub const CAMERA: NameHash = NameHash::of("camera");
pub const SCREEN: NameHash = NameHash::of("screen");
pub const NDC: NameHash = NameHash::of("NDC");
pub const RASTER: NameHash = NameHash::of("raster");

// Projection tags
pub const PERSPECTIVE: NameHash = NameHash::of("perspective");
pub const ORTHOGRAPHIC: NameHash = NameHash::of("orthographic");

// Reserved attribute scopes
pub const MOUSE: NameHash = NameHash::of("mouse");
pub const OPTIONS: NameHash = NameHash::of("options");

// Attribute names
pub const S: NameHash = NameHash::of("s");
pub const T: NameHash = NameHash::of("t");
pub const BLAHBLAH: NameHash = NameHash::of("blahblah");
pub const ENGINE_VERSION: NameHash = NameHash::of("engine:version");
pub const CAMERA_RESOLUTION: NameHash = NameHash::of("camera:resolution");
pub const CAMERA_PROJECTION: NameHash = NameHash::of("camera:projection");
pub const CAMERA_PIXELASPECT: NameHash = NameHash::of("camera:pixelaspect");
pub const CAMERA_SCREEN_WINDOW: NameHash = NameHash::of("camera:screen_window");
pub const CAMERA_FOV: NameHash = NameHash::of("camera:fov");
pub const CAMERA_CLIP: NameHash = NameHash::of("camera:clip");
pub const CAMERA_CLIP_NEAR: NameHash = NameHash::of("camera:clip_near");
pub const CAMERA_CLIP_FAR: NameHash = NameHash::of("camera:clip_far");
pub const CAMERA_SHUTTER: NameHash = NameHash::of("camera:shutter");
pub const CAMERA_SHUTTER_OPEN: NameHash = NameHash::of("camera:shutter_open");
pub const CAMERA_SHUTTER_CLOSE: NameHash = NameHash::of("camera:shutter_close");

// Renderer output variable
pub const COUT: NameHash = NameHash::of("Cout");

/// Every fixed name with its hash constant, for interning and for tests.
pub const ALL: &[(&str, NameHash)] = &[
    ("camera", CAMERA),
    ("screen", SCREEN),
    ("NDC", NDC),
    ("raster", RASTER),
    ("perspective", PERSPECTIVE),
    ("orthographic", ORTHOGRAPHIC),
    ("mouse", MOUSE),
    ("options", OPTIONS),
    ("s", S),
    ("t", T),
    ("blahblah", BLAHBLAH),
    ("engine:version", ENGINE_VERSION),
    ("camera:resolution", CAMERA_RESOLUTION),
    ("camera:projection", CAMERA_PROJECTION),
    ("camera:pixelaspect", CAMERA_PIXELASPECT),
    ("camera:screen_window", CAMERA_SCREEN_WINDOW),
    ("camera:fov", CAMERA_FOV),
    ("camera:clip", CAMERA_CLIP),
    ("camera:clip_near", CAMERA_CLIP_NEAR),
    ("camera:clip_far", CAMERA_CLIP_FAR),
    ("camera:shutter", CAMERA_SHUTTER),
    ("camera:shutter_open", CAMERA_SHUTTER_OPEN),
    ("camera:shutter_close", CAMERA_SHUTTER_CLOSE),
    ("Cout", COUT),
];

/// Intern the full fixed-name list into the reverse table.
///
/// Idempotent; called once at renderer construction.
pub fn intern_known() {
    for (text, _) in ALL {
        super::intern(text);
    }
}
