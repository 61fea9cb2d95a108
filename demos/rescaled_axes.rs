//! Example: axes that follow the zoom
//!
//! What it demonstrates
//! - `AxisZoomMode::Rescale`: axes stay in place and relabel their ticks while
//!   zooming, instead of being scaled together with the markers.
//! - A larger marker radius and a custom category palette.
//!
//! How to run
//! ```bash
//! cargo run --example rescaled_axes
//! ```

use eframe::egui::Color32;
use scatterview::{run_scatter, sample_datasets, AxisZoomMode, ScatterConfig};

fn main() -> scatterview::Result<()> {
    env_logger::init();

    let mut cfg = ScatterConfig::default();
    cfg.title = "Scatter Plot: rescaled axes".to_string();
    cfg.zoom.axis_zoom_mode = AxisZoomMode::Rescale;
    cfg.markers.radius = 7.0;
    cfg.markers.category_colors = vec![
        ("A".to_string(), Color32::from_rgb(31, 119, 180)),
        ("B".to_string(), Color32::from_rgb(255, 127, 14)),
        ("C".to_string(), Color32::from_rgb(44, 160, 44)),
    ];

    run_scatter(sample_datasets(), cfg)
}
