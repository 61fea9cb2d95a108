//! Paint a [`Scene`] with an egui [`Painter`].

use eframe::egui::{self, Color32, CornerRadius, FontId, Painter, Pos2, Rect, Stroke, StrokeKind};

use crate::export::{TOOLTIP_FONT_SIZE, TOOLTIP_PADDING};
use crate::scene::{Layer, Scene, Shape, TooltipOverlay};

/// Draw every layer of `scene` with the surface's top-left corner at `origin`.
pub(crate) fn paint_scene(painter: &Painter, origin: Pos2, scene: &Scene) {
    let surface = Rect::from_min_size(origin, egui::vec2(scene.width, scene.height));
    painter.rect_filled(surface, CornerRadius::ZERO, Color32::WHITE);
    let painter = painter.with_clip_rect(surface.intersect(painter.clip_rect()));
    for layer in &scene.layers {
        paint_layer(&painter, origin, layer);
    }
}

fn paint_layer(painter: &Painter, origin: Pos2, layer: &Layer) {
    let painter = match layer.clip {
        Some(clip) => {
            painter.with_clip_rect(clip.translate(origin.to_vec2()).intersect(painter.clip_rect()))
        }
        None => painter.clone(),
    };
    let t = layer.transform;
    let to_screen = |p: Pos2| origin + t.apply(p).to_vec2();
    for shape in &layer.shapes {
        match shape {
            Shape::Line {
                from,
                to,
                width,
                color,
            } => {
                painter.line_segment([to_screen(*from), to_screen(*to)], Stroke::new(width * t.k, *color));
            }
            Shape::Text {
                pos,
                text,
                align,
                size,
                color,
            } => {
                painter.text(
                    to_screen(*pos),
                    *align,
                    text,
                    FontId::proportional(size * t.k),
                    *color,
                );
            }
            Shape::Circle(m) => {
                if m.visible {
                    painter.circle_filled(to_screen(m.center), m.radius * t.k, m.color);
                }
            }
        }
    }
}

/// Draw the tooltip box; `painter` should sit on a tooltip-order layer so it
/// is not clipped by the surface.
pub(crate) fn paint_tooltip(painter: &Painter, origin: Pos2, tip: &TooltipOverlay) {
    let alpha = tip.opacity.clamp(0.0, 1.0);
    let text = tip.lines.join("\n");
    let galley = painter.layout_no_wrap(
        text,
        FontId::proportional(TOOLTIP_FONT_SIZE),
        Color32::BLACK.gamma_multiply(alpha),
    );
    let pad = egui::vec2(TOOLTIP_PADDING, TOOLTIP_PADDING);
    let rect = Rect::from_min_size(origin + tip.anchor.to_vec2(), galley.size() + 2.0 * pad);
    painter.rect_filled(rect, CornerRadius::same(3), Color32::WHITE.gamma_multiply(alpha));
    painter.rect_stroke(
        rect,
        CornerRadius::same(3),
        Stroke::new(0.5, Color32::BLACK.gamma_multiply(alpha)),
        StrokeKind::Inside,
    );
    painter.galley(rect.min + pad, galley, Color32::BLACK);
}
