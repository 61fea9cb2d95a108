//! Export the current scene as SVG or PNG.
//!
//! The SVG mirrors the on-screen surface: one `<g>` per layer carrying the
//! view transform, axis lines and labels, one `<circle>` per marker (hidden
//! markers keep their element with `visibility="hidden"`), and the tooltip
//! when it is at least partly visible. PNG export rasterizes that SVG with
//! `usvg` + `resvg`.

use std::fmt::Write as _;
use std::path::Path;

use eframe::egui::{Align, Align2, Color32};

use crate::error::{Result, ScatterError};
use crate::scene::{Layer, Scene, Shape, TooltipOverlay};

pub const TOOLTIP_FONT_SIZE: f32 = 12.0;
pub const TOOLTIP_LINE_HEIGHT: f32 = 14.0;
pub const TOOLTIP_PADDING: f32 = 4.0;

fn svg_color(c: Color32) -> String {
    format!("#{:02X}{:02X}{:02X}", c.r(), c.g(), c.b())
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

fn text_anchor(align: Align2) -> &'static str {
    match align.x() {
        Align::Min => "start",
        Align::Center => "middle",
        Align::Max => "end",
    }
}

fn text_dy(align: Align2) -> &'static str {
    match align.y() {
        Align::Min => "0.71em",
        Align::Center => "0.32em",
        Align::Max => "0",
    }
}

/// Rough text width for tooltip box sizing; the SVG renderer does the real layout.
pub fn approx_text_width(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * font_size * 0.6
}

fn write_shape(out: &mut String, shape: &Shape) {
    // Writing into a String cannot fail.
    let _ = match shape {
        Shape::Line {
            from,
            to,
            width,
            color,
        } => writeln!(
            out,
            r#"    <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
            from.x,
            from.y,
            to.x,
            to.y,
            svg_color(*color),
            width
        ),
        Shape::Text {
            pos,
            text,
            align,
            size,
            color,
        } => writeln!(
            out,
            r#"    <text x="{}" y="{}" dy="{}" font-family="sans-serif" font-size="{}" text-anchor="{}" fill="{}">{}</text>"#,
            pos.x,
            pos.y,
            text_dy(*align),
            size,
            text_anchor(*align),
            svg_color(*color),
            escape(text)
        ),
        Shape::Circle(m) => {
            let hidden = if m.visible {
                ""
            } else {
                r#" visibility="hidden""#
            };
            writeln!(
                out,
                r#"    <circle cx="{}" cy="{}" r="{}" fill="{}" data-index="{}"{}/>"#,
                m.center.x,
                m.center.y,
                m.radius,
                svg_color(m.color),
                m.index,
                hidden
            )
        }
    };
}

fn write_layer(out: &mut String, defs: &mut String, layer: &Layer, id: usize) {
    let t = layer.transform;
    let mut attrs = String::new();
    if !t.is_identity() {
        let _ = write!(
            attrs,
            r#" transform="translate({},{}) scale({})""#,
            t.x, t.y, t.k
        );
    }
    if let Some(clip) = layer.clip {
        let _ = writeln!(
            defs,
            r#"    <clipPath id="clip{id}"><rect x="{}" y="{}" width="{}" height="{}"/></clipPath>"#,
            clip.min.x,
            clip.min.y,
            clip.width(),
            clip.height()
        );
        let _ = write!(attrs, r#" clip-path="url(#clip{id})""#);
    }
    let _ = writeln!(out, "  <g{attrs}>");
    for shape in &layer.shapes {
        write_shape(out, shape);
    }
    let _ = writeln!(out, "  </g>");
}

fn write_tooltip(out: &mut String, tip: &TooltipOverlay) {
    let width = tip
        .lines
        .iter()
        .map(|l| approx_text_width(l, TOOLTIP_FONT_SIZE))
        .fold(0.0, f32::max)
        + 2.0 * TOOLTIP_PADDING;
    let height = tip.lines.len() as f32 * TOOLTIP_LINE_HEIGHT + 2.0 * TOOLTIP_PADDING;
    let _ = writeln!(
        out,
        r#"  <g class="tooltip" opacity="{}" transform="translate({},{})">"#,
        tip.opacity, tip.anchor.x, tip.anchor.y
    );
    let _ = writeln!(
        out,
        r##"    <rect width="{width}" height="{height}" rx="3" fill="#FFFFFF" stroke="#000000" stroke-width="0.5"/>"##
    );
    let _ = writeln!(
        out,
        r#"    <text font-family="sans-serif" font-size="{TOOLTIP_FONT_SIZE}" fill="{}">"#,
        svg_color(Color32::BLACK)
    );
    for (i, line) in tip.lines.iter().enumerate() {
        let _ = writeln!(
            out,
            r#"      <tspan x="{TOOLTIP_PADDING}" y="{}" dy="0.71em">{}</tspan>"#,
            TOOLTIP_PADDING + i as f32 * TOOLTIP_LINE_HEIGHT,
            escape(line)
        );
    }
    let _ = writeln!(out, "    </text>");
    let _ = writeln!(out, "  </g>");
}

/// Serialize a scene as a standalone SVG document.
pub fn scene_to_svg(scene: &Scene) -> String {
    let mut body = String::new();
    let mut defs = String::new();
    for (id, layer) in scene.layers.iter().enumerate() {
        write_layer(&mut body, &mut defs, layer, id);
    }
    if let Some(tip) = &scene.tooltip {
        write_tooltip(&mut body, tip);
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = scene.width,
        h = scene.height
    );
    if !defs.is_empty() {
        let _ = writeln!(out, "  <defs>\n{defs}  </defs>");
    }
    let _ = writeln!(out, r##"  <rect width="100%" height="100%" fill="#FFFFFF"/>"##);
    out.push_str(&body);
    out.push_str("</svg>\n");
    out
}

pub fn save_svg(scene: &Scene, path: &Path) -> Result<()> {
    std::fs::write(path, scene_to_svg(scene))?;
    log::info!("saved SVG to {}", path.display());
    Ok(())
}

/// Rasterize SVG text into PNG bytes. `scale` multiplies the output resolution.
pub fn svg_to_png(svg: &str, scale: f32) -> Result<Vec<u8>> {
    let mut opt = usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();
    let tree = usvg::Tree::from_str(svg, &opt).map_err(|e| ScatterError::Svg(e.to_string()))?;
    let size = tree.size().to_int_size();
    let width = (size.width() as f32 * scale).ceil() as u32;
    let height = (size.height() as f32 * scale).ceil() as u32;
    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| ScatterError::Png(format!("cannot allocate {width}x{height} pixmap")))?;
    let mut canvas = pixmap.as_mut();
    resvg::render(&tree, tiny_skia::Transform::from_scale(scale, scale), &mut canvas);
    pixmap
        .encode_png()
        .map_err(|e| ScatterError::Png(e.to_string()))
}

pub fn save_png(scene: &Scene, path: &Path, scale: f32) -> Result<()> {
    let png = svg_to_png(&scene_to_svg(scene), scale)?;
    std::fs::write(path, png)?;
    log::info!("saved PNG to {}", path.display());
    Ok(())
}

/// Default export file name, e.g. `scatter_1700000000000.svg`.
pub fn default_file_name(extension: &str) -> String {
    format!(
        "scatter_{}.{extension}",
        chrono::Local::now().timestamp_millis()
    )
}
