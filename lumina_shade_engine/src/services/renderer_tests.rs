use std::sync::Arc;
use glam::{Mat4, Vec3};
use winit::dpi::PhysicalPosition;

use crate::attribute::{AttrData, AttrType};
use crate::camera::Projection;
use crate::shading::mock_shading_engine::MockShadingEngine;
use crate::shading::{ShadeMode, SplitDir};
use crate::strings::{known, NameHash};
use super::*;
use crate::services::RenderServices;

fn renderer() -> LuminaRenderer {
    LuminaRenderer::new()
}

// ============================================================================
// Matrix resolution — built-in spaces
// ============================================================================

#[test]
fn test_named_matrix_camera_is_world_to_camera() {
    let mut r = renderer();
    let view = Mat4::from_translation(Vec3::new(0.0, 1.0, 0.0));
    r.configure_camera(view, Projection::Perspective, 90.0, 0.1, 1000.0, 256, 256);

    assert_eq!(r.get_named_matrix(known::CAMERA, 0.0), Some(view));
}

#[test]
fn test_raster_maps_view_axis_to_image_center() {
    // identity view, perspective, fov 90, clip 0.1/1000, 256x256: the
    // camera-space point at unit distance on the view axis lands on pixel
    // (128, 128) within half a pixel.
    let r = renderer();
    let raster = r.get_named_matrix(known::RASTER, 0.0).unwrap();

    let p = raster.project_point3(Vec3::new(0.0, 0.0, 1.0));
    assert!((p.x - 128.0).abs() < 0.5);
    assert!((p.y - 128.0).abs() < 0.5);
}

#[test]
fn test_screen_maps_view_axis_to_origin() {
    let r = renderer();
    let screen = r.get_named_matrix(known::SCREEN, 0.0).unwrap();

    let p = screen.project_point3(Vec3::new(0.0, 0.0, -1.0));
    assert!(p.x.abs() < 1e-5);
    assert!(p.y.abs() < 1e-5);
}

#[test]
fn test_inverse_matrix_builtin_uses_same_chain() {
    let r = renderer();
    assert_eq!(
        r.get_named_matrix(known::NDC, 0.0),
        r.get_inverse_matrix(known::NDC, 0.0)
    );
}

#[test]
fn test_time_is_ignored() {
    let r = renderer();
    assert_eq!(
        r.get_named_matrix(known::RASTER, 0.0),
        r.get_named_matrix(known::RASTER, 0.73)
    );
}

// ============================================================================
// Matrix resolution — named transforms and handles
// ============================================================================

#[test]
fn test_named_transform_forward_and_inverse() {
    let mut r = renderer();
    let m = Mat4::from_translation(Vec3::new(5.0, -2.0, 1.0));
    r.register_named_transform("prop", m);

    let name = NameHash::of("prop");
    assert_eq!(r.get_named_matrix(name, 0.0), Some(m));

    let inv = r.get_inverse_matrix(name, 0.0).unwrap();
    let product = m * inv;
    for (a, b) in product
        .to_cols_array()
        .iter()
        .zip(Mat4::IDENTITY.to_cols_array().iter())
    {
        assert!((a - b).abs() < 1e-5);
    }
}

#[test]
fn test_reregister_replaces_named_transform() {
    let mut r = renderer();
    r.register_named_transform("prop", Mat4::from_translation(Vec3::X));
    r.register_named_transform("prop", Mat4::from_scale(Vec3::splat(2.0)));

    assert_eq!(
        r.get_named_matrix(NameHash::of("prop"), 0.0),
        Some(Mat4::from_scale(Vec3::splat(2.0)))
    );
}

#[test]
fn test_unknown_space_is_unavailable() {
    let r = renderer();
    assert!(r.get_named_matrix(NameHash::of("ghost"), 0.0).is_none());
    assert!(r.get_inverse_matrix(NameHash::of("ghost"), 0.0).is_none());
}

#[test]
fn test_direct_handle_resolves_unchanged() {
    let r = renderer();
    let handle: Arc<Mat4> = Arc::new(Mat4::from_translation(Vec3::new(9.0, 9.0, 9.0)));
    assert_eq!(r.get_matrix(&handle, 0.5), Some(*handle));
}

// ============================================================================
// Capability probe
// ============================================================================

#[test]
fn test_supports_nothing() {
    let r = renderer();
    assert!(!r.supports("texture"));
    assert!(!r.supports("pointclouds"));
    assert!(!r.supports(""));
}

// ============================================================================
// Camera/system attributes
// ============================================================================

#[test]
fn test_camera_resolution_exact_type() {
    let r = renderer();

    let ok = r.get_attribute(None, false, NameHash::EMPTY, AttrType::Int2, known::CAMERA_RESOLUTION);
    assert_eq!(ok.unwrap().value, AttrData::Int2([256, 256]));

    // A scalar int request must not match int[2]
    let bad = r.get_attribute(None, false, NameHash::EMPTY, AttrType::Int, known::CAMERA_RESOLUTION);
    assert!(bad.is_none());
}

#[test]
fn test_camera_attributes_ignore_scope() {
    let r = renderer();
    // Dispatch-table lookup is scope-independent
    let scoped = r.get_attribute(None, false, NameHash::of("whatever"), AttrType::Float, known::CAMERA_FOV);
    assert_eq!(scoped.unwrap().value, AttrData::Float(90.0));
}

#[test]
fn test_camera_clip_pair_and_scalars() {
    let r = renderer();

    let clip = r.get_attribute(None, false, NameHash::EMPTY, AttrType::Float2, known::CAMERA_CLIP);
    assert_eq!(clip.unwrap().value, AttrData::Float2([0.1, 1000.0]));

    let near = r.get_attribute(None, false, NameHash::EMPTY, AttrType::Float, known::CAMERA_CLIP_NEAR);
    assert_eq!(near.unwrap().value, AttrData::Float(0.1));

    let far = r.get_attribute(None, false, NameHash::EMPTY, AttrType::Float, known::CAMERA_CLIP_FAR);
    assert_eq!(far.unwrap().value, AttrData::Float(1000.0));
}

#[test]
fn test_camera_attributes_zero_derivatives() {
    let r = renderer();
    let fov = r
        .get_attribute(None, true, NameHash::EMPTY, AttrType::Float, known::CAMERA_FOV)
        .unwrap();
    assert_eq!(fov.dx, Some(AttrData::Float(0.0)));
    assert_eq!(fov.dy, Some(AttrData::Float(0.0)));
}

#[test]
fn test_camera_projection_and_screen_window() {
    let r = renderer();

    let proj = r.get_attribute(None, false, NameHash::EMPTY, AttrType::Str, known::CAMERA_PROJECTION);
    assert_eq!(proj.unwrap().value, AttrData::Str(known::PERSPECTIVE));

    let window = r.get_attribute(None, false, NameHash::EMPTY, AttrType::Float4, known::CAMERA_SCREEN_WINDOW);
    assert_eq!(window.unwrap().value, AttrData::Float4([-1.0, -1.0, 1.0, 1.0]));
}

#[test]
fn test_shutter_is_fixed_interval() {
    let r = renderer();

    let shutter = r.get_attribute(None, false, NameHash::EMPTY, AttrType::Float2, known::CAMERA_SHUTTER);
    assert_eq!(shutter.unwrap().value, AttrData::Float2([0.0, 1.0]));

    let open = r.get_attribute(None, false, NameHash::EMPTY, AttrType::Float, known::CAMERA_SHUTTER_OPEN);
    assert_eq!(open.unwrap().value, AttrData::Float(0.0));

    let close = r.get_attribute(None, false, NameHash::EMPTY, AttrType::Float, known::CAMERA_SHUTTER_CLOSE);
    assert_eq!(close.unwrap().value, AttrData::Float(1.0));
}

#[test]
fn test_engine_version_attribute() {
    let r = renderer();
    let version = r.get_attribute(None, false, NameHash::EMPTY, AttrType::Int, known::ENGINE_VERSION);
    assert_eq!(version.unwrap().value, AttrData::Int(ENGINE_VERSION));
}

// ============================================================================
// Mouse scope
// ============================================================================

#[test]
fn test_mouse_unset_by_default() {
    let r = renderer();
    assert!(r
        .get_attribute(None, false, known::MOUSE, AttrType::Float, known::S)
        .is_none());
    assert!(r
        .get_attribute(None, false, known::MOUSE, AttrType::Float, known::T)
        .is_none());
}

#[test]
fn test_mouse_normalized_when_set() {
    let mut r = renderer();
    r.set_mouse_position(PhysicalPosition::new(127.5, 63.5));

    let s = r
        .get_attribute(None, false, known::MOUSE, AttrType::Float, known::S)
        .unwrap();
    let t = r
        .get_attribute(None, false, known::MOUSE, AttrType::Float, known::T)
        .unwrap();

    assert_eq!(s.value, AttrData::Float(128.0 / 256.0));
    assert_eq!(t.value, AttrData::Float(64.0 / 256.0));
}

#[test]
fn test_mouse_values_stay_in_unit_range() {
    let mut r = renderer();
    r.set_mouse_position(PhysicalPosition::new(0.0, 255.0));

    for name in [known::S, known::T] {
        let v = r
            .get_attribute(None, false, known::MOUSE, AttrType::Float, name)
            .unwrap();
        if let AttrData::Float(f) = v.value {
            assert!((0.0..=1.0).contains(&f));
        } else {
            panic!("mouse attribute must be float");
        }
    }
}

#[test]
fn test_mouse_cleared_declines_again() {
    let mut r = renderer();
    r.set_mouse_position(PhysicalPosition::new(10.0, 10.0));
    r.clear_mouse();

    assert!(r
        .get_attribute(None, false, known::MOUSE, AttrType::Float, known::S)
        .is_none());
}

#[test]
fn test_cursor_events_drive_mouse_state() {
    use winit::event::WindowEvent;

    let mut r = renderer();
    r.handle_window_event(&WindowEvent::CursorMoved {
        device_id: winit::event::DeviceId::dummy(),
        position: PhysicalPosition::new(12.0, 34.0),
    });
    assert!(r
        .get_attribute(None, false, known::MOUSE, AttrType::Float, known::S)
        .is_some());

    r.handle_window_event(&WindowEvent::CursorLeft {
        device_id: winit::event::DeviceId::dummy(),
    });
    assert!(r
        .get_attribute(None, false, known::MOUSE, AttrType::Float, known::S)
        .is_none());
}

#[test]
fn test_mouse_wrong_type_declines() {
    let mut r = renderer();
    r.set_mouse_position(PhysicalPosition::new(10.0, 10.0));
    assert!(r
        .get_attribute(None, false, known::MOUSE, AttrType::Int, known::S)
        .is_none());
}

// ============================================================================
// Options scope
// ============================================================================

#[test]
fn test_options_blahblah_constant() {
    let r = renderer();
    let v = r
        .get_attribute(None, false, known::OPTIONS, AttrType::Float, known::BLAHBLAH)
        .unwrap();
    assert_eq!(v.value, AttrData::Float(3.14159));

    // Wrong type or wrong name declines
    assert!(r
        .get_attribute(None, false, known::OPTIONS, AttrType::Int, known::BLAHBLAH)
        .is_none());
    assert!(r
        .get_attribute(None, false, known::OPTIONS, AttrType::Float, NameHash::of("blah"))
        .is_none());
}

// ============================================================================
// Userdata fallback
// ============================================================================

#[test]
fn test_userdata_via_empty_scope() {
    let r = renderer();
    let mut sg = r.globals_template().clone();
    sg.u = 0.3;
    sg.v = 0.6;

    let s = r
        .get_attribute(Some(&sg), false, NameHash::EMPTY, AttrType::Float, known::S)
        .unwrap();
    let t = r
        .get_attribute(Some(&sg), false, NameHash::EMPTY, AttrType::Float, known::T)
        .unwrap();

    assert_eq!(s.value, AttrData::Float(0.3));
    assert_eq!(t.value, AttrData::Float(0.6));
}

#[test]
fn test_userdata_derivatives_are_template_partials() {
    let r = renderer();
    let sg = r.globals_template().clone();

    let s = r
        .get_attribute(Some(&sg), true, NameHash::EMPTY, AttrType::Float, known::S)
        .unwrap();
    assert_eq!(s.dx, Some(AttrData::Float(1.0 / 256.0)));
    assert_eq!(s.dy, Some(AttrData::Float(0.0)));
}

#[test]
fn test_userdata_skipped_for_scoped_queries() {
    let r = renderer();
    let sg = r.globals_template().clone();

    // A non-empty scope never reaches the userdata fallback
    assert!(r
        .get_attribute(Some(&sg), false, NameHash::of("geom"), AttrType::Float, known::S)
        .is_none());
}

#[test]
fn test_userdata_skipped_for_array_element_requests() {
    let r = renderer();
    let sg = r.globals_template().clone();

    assert!(r
        .get_array_attribute(Some(&sg), false, NameHash::EMPTY, AttrType::Float, known::S, 0)
        .is_none());
}

#[test]
fn test_unknown_attribute_fails() {
    let r = renderer();
    let sg = r.globals_template().clone();
    assert!(r
        .get_attribute(Some(&sg), false, NameHash::EMPTY, AttrType::Float, NameHash::of("albedo"))
        .is_none());
}

// ============================================================================
// Reconfiguration
// ============================================================================

#[test]
fn test_reconfigure_replaces_camera_state() {
    let mut r = renderer();
    r.configure_camera(Mat4::IDENTITY, Projection::Perspective, 90.0, 0.1, 1000.0, 256, 256);
    r.configure_camera(Mat4::IDENTITY, Projection::Orthographic, 45.0, 1.0, 10.0, 512, 256);

    // Screen window and shutter come entirely from the second call
    let window = r
        .get_attribute(None, false, NameHash::EMPTY, AttrType::Float4, known::CAMERA_SCREEN_WINDOW)
        .unwrap();
    assert_eq!(window.value, AttrData::Float4([-2.0, -1.0, 2.0, 1.0]));

    let shutter = r
        .get_attribute(None, false, NameHash::EMPTY, AttrType::Float2, known::CAMERA_SHUTTER)
        .unwrap();
    assert_eq!(shutter.value, AttrData::Float2([0.0, 1.0]));

    let resolution = r
        .get_attribute(None, false, NameHash::EMPTY, AttrType::Int2, known::CAMERA_RESOLUTION)
        .unwrap();
    assert_eq!(resolution.value, AttrData::Int2([512, 256]));
}

#[test]
fn test_reconfigure_rebuilds_globals_template() {
    let mut r = renderer();
    r.configure_camera(Mat4::IDENTITY, Projection::Perspective, 90.0, 0.1, 1000.0, 512, 128);

    let sg = r.globals_template();
    assert_eq!(sg.dudx, 1.0 / 512.0);
    assert_eq!(sg.dvdy, 1.0 / 128.0);
    assert_eq!(sg.dpdu, Vec3::new(512.0, 0.0, 0.0));
}

// ============================================================================
// Frame invocation
// ============================================================================

#[test]
fn test_render_image_allocates_and_fills() {
    let mut r = renderer();
    assert!(r.framebuffer().is_none());

    let engine = MockShadingEngine::new([0.25, 0.5, 0.75]);
    r.render_image(&engine).unwrap();

    let fb = r.framebuffer().unwrap();
    assert_eq!((fb.width(), fb.height()), (256, 256));
    assert_eq!(fb.pixel(0, 0), &[0.25, 0.5, 0.75]);
    assert_eq!(fb.pixel(255, 255), &[0.25, 0.5, 0.75]);
}

#[test]
fn test_render_image_invocation_parameters() {
    let mut r = renderer();
    let engine = MockShadingEngine::new([1.0, 0.0, 0.0]);
    r.render_image(&engine).unwrap();

    let calls = engine.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    let call = &calls[0];

    assert_eq!(call.outputs, vec![known::COUT]);
    assert_eq!(call.mode, ShadeMode::PixelCenters);
    assert_eq!((call.roi.width(), call.roi.height()), (256, 256));
    assert_eq!(call.options.split, SplitDir::Tile);
    assert_eq!(call.options.tile_size, 4096);
    assert_eq!(call.options.threads, 0);
    // The engine receives a copy of the current template
    assert_eq!(call.template_dudx, 1.0 / 256.0);
}

#[test]
fn test_render_image_reuses_framebuffer() {
    let mut r = renderer();
    let engine = MockShadingEngine::new([0.0, 1.0, 0.0]);

    r.render_image(&engine).unwrap();
    r.render_image(&engine).unwrap();

    assert_eq!(engine.call_count(), 2);
    // Still a single 256x256 buffer
    let fb = r.framebuffer().unwrap();
    assert_eq!((fb.width(), fb.height()), (256, 256));
}

#[test]
fn test_render_image_propagates_engine_failure() {
    let mut r = renderer();
    let engine = MockShadingEngine::failing();

    let result = r.render_image(&engine);
    assert!(result.is_err());
    // The buffer survives the failed frame
    assert!(r.framebuffer().is_some());
}
