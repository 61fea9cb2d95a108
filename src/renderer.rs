//! PlotRenderer: owns scales, markers and interaction state.
//!
//! All handlers take their event payload explicitly (pointer position in
//! view coordinates, wheel delta, input text, time in seconds), so the whole
//! interaction contract can be driven without a window.
//!
//! Coordinates:
//! * **surface**: the untransformed `width × height` drawing surface the
//!   scales map into;
//! * **view**: what the user sees, i.e. surface coordinates after the
//!   [`ViewTransform`]. Pointer positions are in view coordinates relative to
//!   the surface's top-left corner.

use std::collections::BTreeSet;

use eframe::egui::{pos2, Pos2, Rect};

use crate::config::{AxisConfig, AxisZoomMode, ScatterConfig, SurfaceConfig, TooltipConfig, ZoomConfig};
use crate::data::filter::FilterState;
use crate::data::point::{combine, DataPoint, Dataset};
use crate::data::scale::{CategoryScale, LinearScale};
use crate::data::tooltip::TooltipState;
use crate::data::view_transform::{ViewTransform, ZoomGesture};
use crate::error::{PointField, Result, ScatterError};
use crate::scene::{axis_shapes, AxisGuide, AxisOrient, Layer, Marker, Scene, Shape, Tick, TooltipOverlay};

/// Tooltip body for a point, one field per line.
pub fn tooltip_text(p: &DataPoint) -> String {
    format!(
        "X: {}\nY: {}\nCategory: {}",
        format_value(p.x),
        format_value(p.y),
        p.category
    )
}

/// Shortest round-trip form of a value. Negative zero prints as `0`, and
/// magnitudes from `1e21` up or below `1e-6` use exponent notation (`1e+21`,
/// `1.5e-7`).
pub fn format_value(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    let abs = v.abs();
    if abs.is_finite() && (abs >= 1e21 || abs < 1e-6) {
        let s = format!("{v:e}");
        match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => s,
        }
    } else {
        v.to_string()
    }
}

pub struct PlotRenderer {
    surface: SurfaceConfig,
    zoom_cfg: ZoomConfig,
    tooltip_cfg: TooltipConfig,
    axis_cfg: AxisConfig,

    points: Vec<DataPoint>,
    x_scale: LinearScale,
    y_scale: LinearScale,
    color_scale: CategoryScale,
    markers: Vec<Marker>,

    transform: ViewTransform,
    filter: FilterState,
    tooltip: TooltipState,
    hovered: Option<usize>,
}

impl PlotRenderer {
    /// Build scales from the combined extents and create one marker per point.
    pub fn initialize(datasets: &[Dataset], cfg: &ScatterConfig) -> Result<Self> {
        let surface = cfg.surface.clone();
        if !(surface.width > 2.0 * surface.margin && surface.height > 2.0 * surface.margin) {
            return Err(ScatterError::InvalidSurface {
                width: surface.width,
                height: surface.height,
                margin: surface.margin,
            });
        }

        let points = combine(datasets);
        if points.is_empty() {
            return Err(ScatterError::EmptyDataset);
        }
        for (index, p) in points.iter().enumerate() {
            if !p.x.is_finite() {
                return Err(ScatterError::NonFiniteValue {
                    index,
                    field: PointField::X,
                });
            }
            if !p.y.is_finite() {
                return Err(ScatterError::NonFiniteValue {
                    index,
                    field: PointField::Y,
                });
            }
        }

        let max_x = points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
        let max_y = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
        let (w, h, m) = (
            surface.width as f64,
            surface.height as f64,
            surface.margin as f64,
        );
        let x_scale = LinearScale::new((0.0, max_x), (m, w - m));
        let y_scale = LinearScale::new((0.0, max_y), (h - m, m));
        let color_scale = cfg.markers.category_scale();

        let unknown: BTreeSet<&str> = points
            .iter()
            .map(|p| p.category.as_str())
            .filter(|c| !color_scale.is_known(c))
            .collect();
        for c in &unknown {
            log::warn!("unknown category {c:?}: drawn with the fallback color");
        }

        let mut markers = Vec::with_capacity(points.len());
        for (index, p) in points.iter().enumerate() {
            markers.push(Marker {
                index,
                center: pos2(x_scale.apply(p.x) as f32, y_scale.apply(p.y) as f32),
                radius: cfg.markers.radius,
                color: color_scale.color(&p.category),
                visible: true,
            });
        }

        log::debug!(
            "initialized {} markers, x domain [0, {max_x}], y domain [0, {max_y}]",
            markers.len()
        );

        Ok(Self {
            surface,
            zoom_cfg: cfg.zoom.clone(),
            tooltip_cfg: cfg.tooltip.clone(),
            axis_cfg: cfg.axes.clone(),
            points,
            x_scale,
            y_scale,
            color_scale,
            markers,
            transform: ViewTransform::IDENTITY,
            filter: FilterState::default(),
            tooltip: TooltipState::default(),
            hovered: None,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn width(&self) -> f32 {
        self.surface.width
    }

    pub fn height(&self) -> f32 {
        self.surface.height
    }

    /// Area between the margins, in surface coordinates.
    pub fn plot_rect(&self) -> Rect {
        let m = self.surface.margin;
        Rect::from_min_max(
            pos2(m, m),
            pos2(self.surface.width - m, self.surface.height - m),
        )
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn x_scale(&self) -> &LinearScale {
        &self.x_scale
    }

    pub fn y_scale(&self) -> &LinearScale {
        &self.y_scale
    }

    pub fn color_scale(&self) -> &CategoryScale {
        &self.color_scale
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn visible_count(&self) -> usize {
        self.markers.iter().filter(|m| m.visible).count()
    }

    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn tooltip(&self) -> &TooltipState {
        &self.tooltip
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Axes
    // ─────────────────────────────────────────────────────────────────────────

    /// Bottom and left axis guides.
    ///
    /// With [`AxisZoomMode::Fixed`] the guides describe the unzoomed surface
    /// (the whole surface, axes included, is then transformed). With
    /// [`AxisZoomMode::Rescale`] the ticks follow the currently visible range.
    pub fn axes(&self) -> [AxisGuide; 2] {
        let (xs, ys) = match self.zoom_cfg.axis_zoom_mode {
            AxisZoomMode::Fixed => (self.x_scale, self.y_scale),
            AxisZoomMode::Rescale => (
                self.x_scale
                    .rescaled(self.transform.x as f64, self.transform.k as f64),
                self.y_scale
                    .rescaled(self.transform.y as f64, self.transform.k as f64),
            ),
        };
        let m = self.surface.margin;
        [
            AxisGuide {
                orient: AxisOrient::Bottom,
                offset: self.surface.height - m,
                extent: (xs.range.0 as f32, xs.range.1 as f32),
                ticks: self.ticks_for(&xs),
            },
            AxisGuide {
                orient: AxisOrient::Left,
                offset: m,
                extent: (ys.range.1 as f32, ys.range.0 as f32),
                ticks: self.ticks_for(&ys),
            },
        ]
    }

    fn ticks_for(&self, scale: &LinearScale) -> Vec<Tick> {
        let count = self.axis_cfg.tick_count;
        scale
            .ticks(count)
            .into_iter()
            .map(|value| Tick {
                value,
                position: scale.apply(value) as f32,
                label: scale.tick_format(count, value),
            })
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Hit testing
    // ─────────────────────────────────────────────────────────────────────────

    /// Marker under a view-space pointer. Hidden markers are ignored and the
    /// topmost (last drawn) marker wins.
    pub fn hit_test(&self, pointer: Pos2) -> Option<usize> {
        match self.zoom_cfg.axis_zoom_mode {
            AxisZoomMode::Fixed => {
                let p = self.transform.invert(pointer);
                self.markers
                    .iter()
                    .rev()
                    .find(|m| m.visible && m.center.distance(p) <= m.radius)
                    .map(|m| m.index)
            }
            AxisZoomMode::Rescale => {
                if !self.plot_rect().contains(pointer) {
                    return None;
                }
                self.markers
                    .iter()
                    .rev()
                    .find(|m| m.visible && self.transform.apply(m.center).distance(pointer) <= m.radius)
                    .map(|m| m.index)
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Hover
    // ─────────────────────────────────────────────────────────────────────────

    /// Pointer entered marker `index`: fill the tooltip and fade it in.
    pub fn on_pointer_enter(&mut self, index: usize, pointer: Pos2, now: f64) {
        let Some(point) = self.points.get(index) else {
            return;
        };
        let text = tooltip_text(point);
        let [dx, dy] = self.tooltip_cfg.offset;
        self.tooltip.show(
            text,
            pos2(pointer.x + dx, pointer.y + dy),
            now,
            self.tooltip_cfg.fade_in_secs(),
            self.tooltip_cfg.opacity,
        );
        self.hovered = Some(index);
    }

    /// Pointer left the hovered marker: fade the tooltip out.
    pub fn on_pointer_leave(&mut self, now: f64) {
        self.tooltip.hide(now, self.tooltip_cfg.fade_out_secs());
        self.hovered = None;
    }

    /// Translate a raw pointer position into enter/leave events.
    /// `None` means the pointer left the surface.
    pub fn on_pointer_move(&mut self, pointer: Option<Pos2>, now: f64) {
        let hit = pointer.and_then(|p| self.hit_test(p));
        if hit == self.hovered {
            return;
        }
        if self.hovered.is_some() {
            self.on_pointer_leave(now);
        }
        if let (Some(index), Some(p)) = (hit, pointer) {
            self.on_pointer_enter(index, p, now);
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Zoom
    // ─────────────────────────────────────────────────────────────────────────

    /// Apply a zoom/pan gesture. Returns `true` if the view changed.
    pub fn on_zoom(&mut self, gesture: ZoomGesture) -> bool {
        let changed = self.transform.apply_gesture(gesture, &self.zoom_cfg);
        if changed {
            log::debug!(
                "view transform: translate({:.1}, {:.1}) scale({:.3})",
                self.transform.x,
                self.transform.y,
                self.transform.k
            );
        }
        changed
    }

    pub fn reset_view(&mut self) {
        self.transform = ViewTransform::IDENTITY;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Filter
    // ─────────────────────────────────────────────────────────────────────────

    /// Show only markers whose category contains `text`, ignoring case.
    pub fn on_filter_input(&mut self, text: &str) {
        self.filter.set_text(text);
        for m in &mut self.markers {
            m.visible = self.filter.matches(&self.points[m.index].category);
        }
        log::debug!(
            "filter {:?}: {} of {} markers visible",
            self.filter.text(),
            self.visible_count(),
            self.markers.len()
        );
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Scene
    // ─────────────────────────────────────────────────────────────────────────

    /// Everything to draw at time `now`.
    pub fn scene(&self, now: f64) -> Scene {
        let axis_shapes: Vec<Shape> = self
            .axes()
            .iter()
            .flat_map(|g| {
                axis_shapes(
                    g,
                    self.axis_cfg.tick_size,
                    self.axis_cfg.tick_padding,
                    self.axis_cfg.font_size,
                )
            })
            .collect();

        let layers = match self.zoom_cfg.axis_zoom_mode {
            AxisZoomMode::Fixed => {
                let mut shapes = axis_shapes;
                shapes.extend(self.markers.iter().cloned().map(Shape::Circle));
                vec![Layer {
                    transform: self.transform,
                    clip: None,
                    shapes,
                }]
            }
            AxisZoomMode::Rescale => {
                let markers = self
                    .markers
                    .iter()
                    .map(|m| {
                        Shape::Circle(Marker {
                            center: self.transform.apply(m.center),
                            ..m.clone()
                        })
                    })
                    .collect();
                vec![
                    Layer {
                        transform: ViewTransform::IDENTITY,
                        clip: None,
                        shapes: axis_shapes,
                    },
                    Layer {
                        transform: ViewTransform::IDENTITY,
                        clip: Some(self.plot_rect()),
                        shapes: markers,
                    },
                ]
            }
        };

        let tooltip = self.tooltip.is_visible(now).then(|| TooltipOverlay {
            anchor: self.tooltip.anchor(),
            lines: self.tooltip.text().lines().map(str::to_string).collect(),
            opacity: self.tooltip.opacity(now),
        });

        Scene {
            width: self.surface.width,
            height: self.surface.height,
            layers,
            tooltip,
        }
    }
}
