use eframe::egui::{pos2, vec2};
use scatterview::config::ZoomConfig;
use scatterview::{sample_datasets, PlotRenderer, ScatterConfig, ViewTransform, ZoomGesture};

fn renderer() -> PlotRenderer {
    PlotRenderer::initialize(&sample_datasets(), &ScatterConfig::default()).unwrap()
}

#[test]
fn starts_at_identity() {
    assert!(renderer().transform().is_identity());
}

#[test]
fn wheel_zoom_in_is_clamped_to_ten() {
    let mut r = renderer();
    r.on_zoom(ZoomGesture::Wheel {
        pointer: pos2(400.0, 300.0),
        delta_y: -2_000.0,
    });
    assert_eq!(r.transform().k, 10.0);
}

#[test]
fn wheel_zoom_out_is_clamped_to_one() {
    let mut r = renderer();
    r.on_zoom(ZoomGesture::Wheel {
        pointer: pos2(400.0, 300.0),
        delta_y: -500.0,
    });
    assert!(r.transform().k > 1.0);
    r.on_zoom(ZoomGesture::Wheel {
        pointer: pos2(400.0, 300.0),
        delta_y: 3_000.0,
    });
    assert_eq!(r.transform().k, 1.0);
}

#[test]
fn scale_stays_in_extent_for_any_gesture_sequence() {
    let mut r = renderer();
    let gestures = [
        ZoomGesture::Pinch { pointer: pos2(10.0, 10.0), factor: 50.0 },
        ZoomGesture::Wheel { pointer: pos2(700.0, 20.0), delta_y: 3_000.0 },
        ZoomGesture::DoubleClick { pointer: pos2(100.0, 500.0), zoom_out: false },
        ZoomGesture::Drag { delta: vec2(-250.0, 80.0) },
        ZoomGesture::Pinch { pointer: pos2(400.0, 300.0), factor: 0.001 },
        ZoomGesture::DoubleClick { pointer: pos2(0.0, 0.0), zoom_out: true },
    ];
    for g in gestures {
        r.on_zoom(g);
        let k = r.transform().k;
        assert!((1.0..=10.0).contains(&k), "k = {k} after {g:?}");
    }
}

#[test]
fn zoom_keeps_point_under_pointer_fixed() {
    let mut t = ViewTransform::IDENTITY;
    t.translate(vec2(30.0, -20.0));
    let pointer = pos2(420.0, 310.0);
    let before = t.invert(pointer);
    t.scale_about(pointer, 3.0, (1.0, 10.0));
    let after = t.invert(pointer);
    assert!((before - after).length() < 1e-3);
    assert_eq!(t.k, 3.0);
}

#[test]
fn double_click_doubles_then_shift_halves() {
    let mut r = renderer();
    assert!(r.on_zoom(ZoomGesture::DoubleClick {
        pointer: pos2(400.0, 300.0),
        zoom_out: false,
    }));
    assert_eq!(r.transform(), ViewTransform { x: -400.0, y: -300.0, k: 2.0 });
    r.on_zoom(ZoomGesture::DoubleClick {
        pointer: pos2(400.0, 300.0),
        zoom_out: true,
    });
    assert!(r.transform().is_identity());
}

#[test]
fn zoom_out_at_minimum_changes_nothing() {
    let mut r = renderer();
    let changed = r.on_zoom(ZoomGesture::DoubleClick {
        pointer: pos2(123.0, 456.0),
        zoom_out: true,
    });
    assert!(!changed);
    assert!(r.transform().is_identity());
}

#[test]
fn drag_pans_without_scaling() {
    let mut r = renderer();
    r.on_zoom(ZoomGesture::Drag { delta: vec2(15.0, -5.0) });
    r.on_zoom(ZoomGesture::Drag { delta: vec2(5.0, -5.0) });
    assert_eq!(r.transform(), ViewTransform { x: 20.0, y: -10.0, k: 1.0 });
}

#[test]
fn invalid_pinch_factor_is_ignored() {
    let mut t = ViewTransform::IDENTITY;
    let cfg = ZoomConfig::default();
    assert!(!t.apply_gesture(ZoomGesture::Pinch { pointer: pos2(1.0, 1.0), factor: f32::NAN }, &cfg));
    assert!(!t.apply_gesture(ZoomGesture::Pinch { pointer: pos2(1.0, 1.0), factor: 0.0 }, &cfg));
    assert!(t.is_identity());
}

#[test]
fn custom_extent_is_respected() {
    let mut cfg = ScatterConfig::default();
    cfg.zoom.scale_extent = (0.5, 4.0);
    let mut r = PlotRenderer::initialize(&sample_datasets(), &cfg).unwrap();
    r.on_zoom(ZoomGesture::Pinch { pointer: pos2(0.0, 0.0), factor: 100.0 });
    assert_eq!(r.transform().k, 4.0);
    r.on_zoom(ZoomGesture::Pinch { pointer: pos2(0.0, 0.0), factor: 0.0001 });
    assert_eq!(r.transform().k, 0.5);
}

#[test]
fn reset_view_restores_identity() {
    let mut r = renderer();
    r.on_zoom(ZoomGesture::Pinch { pointer: pos2(200.0, 200.0), factor: 4.0 });
    r.on_zoom(ZoomGesture::Drag { delta: vec2(7.0, 7.0) });
    r.reset_view();
    assert!(r.transform().is_identity());
}
