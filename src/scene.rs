//! Scene: a flat, backend-independent description of one frame.
//!
//! The egui painter and the SVG exporter both consume the same [`Scene`], so
//! what is exported is exactly what is on screen.

use egui::{Align2, Color32, Pos2, Rect};

use crate::data::view_transform::ViewTransform;

/// One circle per data point.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Position in the combined dataset.
    pub index: usize,
    /// Center in surface coordinates.
    pub center: Pos2,
    pub radius: f32,
    pub color: Color32,
    pub visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrient {
    Bottom,
    Left,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub value: f64,
    /// Offset along the axis in surface pixels.
    pub position: f32,
    pub label: String,
}

/// An axis line with its ticks, positioned at `offset` across the axis
/// (y for a bottom axis, x for a left axis).
#[derive(Debug, Clone, PartialEq)]
pub struct AxisGuide {
    pub orient: AxisOrient,
    pub offset: f32,
    /// Start and end of the axis line along the axis.
    pub extent: (f32, f32),
    pub ticks: Vec<Tick>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line {
        from: Pos2,
        to: Pos2,
        width: f32,
        color: Color32,
    },
    Text {
        pos: Pos2,
        text: String,
        align: Align2,
        size: f32,
        color: Color32,
    },
    Circle(Marker),
}

/// Shapes sharing one transform and optional clip rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub transform: ViewTransform,
    /// Clip in untransformed view coordinates.
    pub clip: Option<Rect>,
    pub shapes: Vec<Shape>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipOverlay {
    /// Top-left corner in view coordinates.
    pub anchor: Pos2,
    pub lines: Vec<String>,
    pub opacity: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    pub layers: Vec<Layer>,
    pub tooltip: Option<TooltipOverlay>,
}

impl Scene {
    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.layers.iter().flat_map(|l| {
            l.shapes.iter().filter_map(|s| match s {
                Shape::Circle(m) => Some(m),
                _ => None,
            })
        })
    }
}

pub const AXIS_COLOR: Color32 = Color32::BLACK;

/// Expand an axis guide into lines and labels, in the layout of a classic
/// SVG chart axis: a domain line with outer ticks, inner ticks, and labels
/// centered below (bottom) or right-aligned to the left (left).
pub fn axis_shapes(guide: &AxisGuide, tick_size: f32, tick_padding: f32, font_size: f32) -> Vec<Shape> {
    let mut shapes = Vec::with_capacity(guide.ticks.len() * 2 + 3);
    let (a0, a1) = guide.extent;
    let o = guide.offset;
    let line = |from: Pos2, to: Pos2| Shape::Line {
        from,
        to,
        width: 1.0,
        color: AXIS_COLOR,
    };
    match guide.orient {
        AxisOrient::Bottom => {
            shapes.push(line(Pos2::new(a0, o), Pos2::new(a1, o)));
            shapes.push(line(Pos2::new(a0, o), Pos2::new(a0, o + tick_size)));
            shapes.push(line(Pos2::new(a1, o), Pos2::new(a1, o + tick_size)));
            for t in &guide.ticks {
                shapes.push(line(
                    Pos2::new(t.position, o),
                    Pos2::new(t.position, o + tick_size),
                ));
                shapes.push(Shape::Text {
                    pos: Pos2::new(t.position, o + tick_size + tick_padding),
                    text: t.label.clone(),
                    align: Align2::CENTER_TOP,
                    size: font_size,
                    color: AXIS_COLOR,
                });
            }
        }
        AxisOrient::Left => {
            shapes.push(line(Pos2::new(o, a0), Pos2::new(o, a1)));
            shapes.push(line(Pos2::new(o, a0), Pos2::new(o - tick_size, a0)));
            shapes.push(line(Pos2::new(o, a1), Pos2::new(o - tick_size, a1)));
            for t in &guide.ticks {
                shapes.push(line(
                    Pos2::new(o, t.position),
                    Pos2::new(o - tick_size, t.position),
                ));
                shapes.push(Shape::Text {
                    pos: Pos2::new(o - tick_size - tick_padding, t.position),
                    text: t.label.clone(),
                    align: Align2::RIGHT_CENTER,
                    size: font_size,
                    color: AXIS_COLOR,
                });
            }
        }
    }
    shapes
}
