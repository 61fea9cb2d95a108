//! Top-level entry point for running the scatter plot as a native window.
//!
//! [`run_scatter`] builds the [`PlotRenderer`] from the datasets and
//! configuration, sizes the window around the drawing surface, and enters the
//! eframe event loop.

use eframe::egui;

use crate::config::ScatterConfig;
use crate::data::point::Dataset;
use crate::error::Result;
use crate::renderer::PlotRenderer;

use super::scatter_app::ScatterApp;

/// Extra room around the surface for the toolbar and panel frames.
const WINDOW_CHROME: egui::Vec2 = egui::vec2(32.0, 80.0);

/// Launch the scatter plot in a native window. Blocks until the window is closed.
pub fn run_scatter(datasets: Vec<Dataset>, mut cfg: ScatterConfig) -> Result<()> {
    let renderer = PlotRenderer::initialize(&datasets, &cfg)?;
    let app = ScatterApp::new(renderer);

    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);
    if opts.viewport.inner_size.is_none() {
        let surface = egui::vec2(cfg.surface.width, cfg.surface.height);
        opts.viewport = opts.viewport.clone().with_inner_size(surface + WINDOW_CHROME);
    }

    log::info!(
        "opening {:?} with {} point(s)",
        cfg.title,
        datasets.iter().map(Dataset::len).sum::<usize>()
    );
    eframe::run_native(&cfg.title, opts, Box::new(|_cc| Ok(Box::new(app))))?;
    Ok(())
}
