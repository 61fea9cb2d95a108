use eframe::egui::{pos2, Color32};
use scatterview::error::PointField;
use scatterview::scene::{AxisOrient, Shape};
use scatterview::{
    sample_datasets, AxisZoomMode, DataPoint, Dataset, PlotRenderer, ScatterConfig, ScatterError,
    ZoomGesture,
};

fn renderer() -> PlotRenderer {
    PlotRenderer::initialize(&sample_datasets(), &ScatterConfig::default()).unwrap()
}

fn rescaling() -> PlotRenderer {
    let mut cfg = ScatterConfig::default();
    cfg.zoom.axis_zoom_mode = AxisZoomMode::Rescale;
    PlotRenderer::initialize(&sample_datasets(), &cfg).unwrap()
}

#[test]
fn one_marker_per_point_in_dataset_order() {
    let r = renderer();
    assert_eq!(r.markers().len(), 6);
    for (i, m) in r.markers().iter().enumerate() {
        assert_eq!(m.index, i);
        assert_eq!(m.radius, 5.0);
        assert!(m.visible);
    }
    assert_eq!(r.points()[3], DataPoint::new(5.0, 15.0, "A"));
}

#[test]
fn marker_centers_come_from_the_scales() {
    let r = renderer();
    for (p, m) in r.points().iter().zip(r.markers()) {
        assert!((m.center.x as f64 - r.x_scale().apply(p.x)).abs() < 1e-3);
        assert!((m.center.y as f64 - r.y_scale().apply(p.y)).abs() < 1e-3);
    }
    let first = r.markers()[0].center;
    assert!((first.x - 330.0).abs() < 1e-3);
    assert!((first.y - 95.454_544).abs() < 1e-3);
    // largest x sits on the right edge of the plot area
    assert!((r.markers()[2].center.x - 750.0).abs() < 1e-3);
}

#[test]
fn marker_colors_follow_category() {
    let r = renderer();
    let colors: Vec<Color32> = r.markers().iter().map(|m| m.color).collect();
    let red = Color32::from_rgb(255, 0, 0);
    let green = Color32::from_rgb(0, 255, 0);
    let blue = Color32::from_rgb(0, 0, 255);
    assert_eq!(colors, vec![red, green, blue, red, green, blue]);
}

#[test]
fn unknown_category_uses_fallback_color() {
    let data = vec![Dataset::new(
        "mixed",
        vec![DataPoint::new(1.0, 1.0, "A"), DataPoint::new(2.0, 2.0, "D")],
    )];
    let cfg = ScatterConfig::default();
    let r = PlotRenderer::initialize(&data, &cfg).unwrap();
    assert_eq!(r.markers()[1].color, cfg.markers.unknown_color);
    assert_ne!(r.markers()[1].color, r.markers()[0].color);
}

#[test]
fn single_point_at_origin_lands_mid_surface() {
    let data = vec![Dataset::new("one", vec![DataPoint::new(0.0, 0.0, "B")])];
    let r = PlotRenderer::initialize(&data, &ScatterConfig::default()).unwrap();
    assert_eq!(r.markers()[0].center, pos2(400.0, 300.0));
}

#[test]
fn empty_input_is_rejected() {
    let cfg = ScatterConfig::default();
    let err = PlotRenderer::initialize(&[], &cfg).err().unwrap();
    assert!(matches!(err, ScatterError::EmptyDataset));
    assert_eq!(err.to_string(), "empty dataset: cannot compute axis domain");

    let empty_sets = vec![Dataset::new("a", vec![]), Dataset::new("b", vec![])];
    let err = PlotRenderer::initialize(&empty_sets, &cfg).err().unwrap();
    assert!(matches!(err, ScatterError::EmptyDataset));
}

#[test]
fn non_finite_values_are_rejected() {
    let cfg = ScatterConfig::default();
    let data = vec![Dataset::new(
        "bad",
        vec![DataPoint::new(1.0, 1.0, "A"), DataPoint::new(2.0, f64::NAN, "B")],
    )];
    let err = PlotRenderer::initialize(&data, &cfg).err().unwrap();
    assert!(matches!(
        err,
        ScatterError::NonFiniteValue {
            index: 1,
            field: PointField::Y
        }
    ));

    let data = vec![
        Dataset::new("ok", vec![DataPoint::new(1.0, 1.0, "A")]),
        Dataset::new("bad", vec![DataPoint::new(f64::INFINITY, 1.0, "C")]),
    ];
    let err = PlotRenderer::initialize(&data, &cfg).err().unwrap();
    assert!(matches!(
        err,
        ScatterError::NonFiniteValue {
            index: 1,
            field: PointField::X
        }
    ));
}

#[test]
fn surface_without_room_inside_margins_is_rejected() {
    let mut cfg = ScatterConfig::default();
    cfg.surface.width = 100.0;
    let err = PlotRenderer::initialize(&sample_datasets(), &cfg).err().unwrap();
    assert!(matches!(err, ScatterError::InvalidSurface { .. }));
}

#[test]
fn axes_sit_on_the_margins() {
    let r = renderer();
    let [bottom, left] = r.axes();
    assert_eq!(bottom.orient, AxisOrient::Bottom);
    assert_eq!(bottom.offset, 550.0);
    assert_eq!(bottom.extent, (50.0, 750.0));
    assert_eq!(bottom.ticks.len(), 13);
    assert_eq!(bottom.ticks[0].label, "0");
    assert_eq!(bottom.ticks[12].label, "24");

    assert_eq!(left.orient, AxisOrient::Left);
    assert_eq!(left.offset, 50.0);
    assert_eq!(left.ticks.len(), 12);
    assert_eq!(left.ticks[0].position, 550.0);
    assert_eq!(left.ticks[11].label, "22");
}

#[test]
fn fixed_mode_zooms_the_whole_surface() {
    let mut r = renderer();
    let before = r.axes();
    r.on_zoom(ZoomGesture::DoubleClick {
        pointer: pos2(400.0, 300.0),
        zoom_out: false,
    });
    assert_eq!(r.axes(), before);

    let scene = r.scene(0.0);
    assert_eq!(scene.layers.len(), 1);
    assert_eq!(scene.layers[0].transform.k, 2.0);
    let circles = scene.layers[0]
        .shapes
        .iter()
        .filter(|s| matches!(s, Shape::Circle(_)))
        .count();
    assert_eq!(circles, 6);
    assert_eq!(scene.markers().count(), 6);
}

#[test]
fn rescale_mode_updates_ticks_and_clips_markers() {
    let mut r = rescaling();
    r.on_zoom(ZoomGesture::DoubleClick {
        pointer: pos2(400.0, 300.0),
        zoom_out: false,
    });
    let [bottom, _] = r.axes();
    assert_eq!(bottom.ticks.first().map(|t| t.value), Some(7.0));
    assert_eq!(bottom.ticks.last().map(|t| t.value), Some(18.0));
    for t in &bottom.ticks {
        assert!((50.0..=750.0).contains(&t.position));
    }

    let scene = r.scene(0.0);
    assert_eq!(scene.layers.len(), 2);
    assert!(scene.layers.iter().all(|l| l.transform.is_identity()));
    assert_eq!(scene.layers[1].clip, Some(r.plot_rect()));
}

#[test]
fn rescale_mode_hit_test_ignores_markers_outside_plot_area() {
    let mut r = rescaling();
    r.on_zoom(ZoomGesture::Pinch {
        pointer: pos2(400.0, 300.0),
        factor: 1.5,
    });
    let inside = r.transform().apply(r.markers()[1].center);
    assert_eq!(r.hit_test(inside), Some(1));
    let outside = r.transform().apply(r.markers()[0].center);
    assert!(!r.plot_rect().contains(outside));
    assert_eq!(r.hit_test(outside), None);
}

#[test]
fn reset_view_restores_original_axes() {
    let mut r = rescaling();
    let before = r.axes();
    r.on_zoom(ZoomGesture::Pinch {
        pointer: pos2(100.0, 100.0),
        factor: 3.0,
    });
    assert_ne!(r.axes(), before);
    r.reset_view();
    assert_eq!(r.axes(), before);
}

#[test]
fn scene_reports_surface_size_and_tooltip() {
    let mut r = renderer();
    let scene = r.scene(0.0);
    assert_eq!((scene.width, scene.height), (800.0, 600.0));
    assert!(scene.tooltip.is_none());

    r.on_pointer_enter(2, pos2(750.0, 320.0), 0.0);
    let tip = r.scene(1.0).tooltip.unwrap();
    assert_eq!(tip.lines, vec!["X: 25", "Y: 10", "Category: C"]);
    assert!((tip.opacity - 0.9).abs() < 1e-6);
}
