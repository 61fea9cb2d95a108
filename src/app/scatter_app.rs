//! Standalone application wrapper for the scatter plot.
//!
//! [`ScatterApp`] owns a [`PlotRenderer`] and implements [`eframe::App`]. Each
//! frame it draws the filter input and toolbar, paints the renderer's scene,
//! and converts egui input into renderer handler calls.

use eframe::egui;

use crate::data::view_transform::ZoomGesture;
use crate::export;
use crate::renderer::PlotRenderer;

use super::paint::{paint_scene, paint_tooltip};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExportKind {
    Svg,
    Png,
}

impl ExportKind {
    fn extension(self) -> &'static str {
        match self {
            ExportKind::Svg => "svg",
            ExportKind::Png => "png",
        }
    }
}

pub struct ScatterApp {
    /// Scales, markers and interaction state.
    pub renderer: PlotRenderer,
    /// Backing string for the filter input.
    filter_text: String,
    /// Last export failure, shown next to the toolbar until the next export.
    export_error: Option<String>,
    /// Screen rect of the plot surface in the last frame.
    plot_rect: egui::Rect,
}

fn filter_id() -> egui::Id {
    egui::Id::new("scatter_filter")
}

impl ScatterApp {
    pub fn new(renderer: PlotRenderer) -> Self {
        Self {
            renderer,
            filter_text: String::new(),
            export_error: None,
            plot_rect: egui::Rect::NOTHING,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Toolbar
    // ─────────────────────────────────────────────────────────────────────────

    fn render_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let resp = ui.add(egui::TextEdit::singleline(&mut self.filter_text).id(filter_id()));
            if resp.changed() {
                self.renderer.on_filter_input(&self.filter_text);
            }
            ui.separator();
            if ui
                .add_enabled(
                    !self.renderer.transform().is_identity(),
                    egui::Button::new("Reset zoom"),
                )
                .on_hover_text("Restore the original view [Esc]")
                .clicked()
            {
                self.renderer.reset_view();
            }
            ui.menu_button("Export", |ui| {
                if ui.button("SVG").on_hover_text("Save the plot as SVG").clicked() {
                    ui.close();
                    self.prompt_and_export(ExportKind::Svg, ui.input(|i| i.time));
                }
                if ui.button("PNG").on_hover_text("Save the plot as PNG").clicked() {
                    ui.close();
                    self.prompt_and_export(ExportKind::Png, ui.input(|i| i.time));
                }
            });
            if let Some(err) = &self.export_error {
                ui.colored_label(ui.visuals().error_fg_color, err);
            }
        });
    }

    /// Show a save dialog and write the current scene in the chosen format.
    fn prompt_and_export(&mut self, kind: ExportKind, now: f64) {
        let ext = kind.extension();
        let Some(path) = rfd::FileDialog::new()
            .add_filter(ext.to_uppercase(), &[ext])
            .set_file_name(export::default_file_name(ext))
            .save_file()
        else {
            return;
        };
        let scene = self.renderer.scene(now);
        let result = match kind {
            ExportKind::Svg => export::save_svg(&scene, &path),
            ExportKind::Png => export::save_png(&scene, &path, 1.0),
        };
        match result {
            Ok(()) => self.export_error = None,
            Err(e) => {
                log::error!("failed to export {}: {e}", path.display());
                self.export_error = Some(format!("Export failed: {e}"));
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Plot surface
    // ─────────────────────────────────────────────────────────────────────────

    fn render_plot(&mut self, ui: &mut egui::Ui) {
        let size = egui::vec2(self.renderer.width(), self.renderer.height());
        let (response, painter) = ui.allocate_painter(size, egui::Sense::click_and_drag());
        let origin = response.rect.min;
        self.plot_rect = response.rect;
        let now = ui.input(|i| i.time);

        self.handle_input(ui, &response, origin, now);

        let scene = self.renderer.scene(now);
        paint_scene(&painter, origin, &scene);
        if let Some(tip) = &scene.tooltip {
            let layer = egui::LayerId::new(egui::Order::Tooltip, egui::Id::new("scatter_tooltip"));
            paint_tooltip(&ui.ctx().layer_painter(layer), origin, tip);
        }

        if self.renderer.tooltip().is_animating(now) {
            ui.ctx().request_repaint();
        }
    }

    fn handle_input(&mut self, ui: &egui::Ui, response: &egui::Response, origin: egui::Pos2, now: f64) {
        let pointer = response.hover_pos().map(|p| (p - origin).to_pos2());

        if response.dragged_by(egui::PointerButton::Primary) {
            let delta = response.drag_delta();
            if delta != egui::Vec2::ZERO {
                self.renderer.on_zoom(ZoomGesture::Drag { delta });
            }
        }

        if let Some(p) = pointer {
            let line_height = ui.ctx().options(|o| o.input_options.line_scroll_speed);
            let (gestures, shift) = ui.input(|i| {
                let mut gestures = zoom_gestures(&i.events, p, line_height, i.viewport_rect().height());
                if let Some(touch) = i.multi_touch() {
                    gestures.push(ZoomGesture::Pinch {
                        pointer: p,
                        factor: touch.zoom_delta,
                    });
                }
                (gestures, i.modifiers.shift)
            });
            for g in gestures {
                self.renderer.on_zoom(g);
            }
            if response.double_clicked() {
                self.renderer.on_zoom(ZoomGesture::DoubleClick {
                    pointer: p,
                    zoom_out: shift,
                });
            }
        }

        if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.renderer.reset_view();
        }

        // hover after zooming so the hit test sees the current transform
        self.renderer.on_pointer_move(pointer, now);
    }

    /// Screen rect of the plot surface as laid out in the last frame.
    pub fn plot_rect(&self) -> egui::Rect {
        self.plot_rect
    }

    /// Toolbar on top, plot surface below.
    pub fn show(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("scatter_controls").show(ctx, |ui| {
            self.render_controls(ui);
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_plot(ui);
        });
    }
}

/// One zoom gesture per raw wheel or pinch event of this frame. Every wheel
/// event zooms exactly once, whatever modifiers are held.
fn zoom_gestures(
    events: &[egui::Event],
    pointer: egui::Pos2,
    line_height: f32,
    page_height: f32,
) -> Vec<ZoomGesture> {
    events
        .iter()
        .filter_map(|e| match e {
            egui::Event::MouseWheel { unit, delta, .. } => {
                let delta = match unit {
                    egui::MouseWheelUnit::Point => *delta,
                    egui::MouseWheelUnit::Line => *delta * line_height,
                    egui::MouseWheelUnit::Page => *delta * page_height,
                };
                // egui reports scrolling up as positive, the wheel convention is the opposite
                Some(ZoomGesture::Wheel {
                    pointer,
                    delta_y: -(delta.x + delta.y),
                })
            }
            egui::Event::Zoom(factor) => Some(ZoomGesture::Pinch {
                pointer,
                factor: *factor,
            }),
            _ => None,
        })
        .collect()
}

impl eframe::App for ScatterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}
