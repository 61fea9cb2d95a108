//! Configuration types for the scatter plot.

use egui::Color32;

use crate::data::scale::CategoryScale;

// ─────────────────────────────────────────────────────────────────────────────
// Drawing surface
// ─────────────────────────────────────────────────────────────────────────────

/// Size of the drawing surface in logical pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceConfig {
    /// Default: `800.0`.
    pub width: f32,
    /// Default: `600.0`.
    pub height: f32,
    /// Inset on all four sides; axes sit on the bottom and left margin lines. Default: `50.0`.
    pub margin: f32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            margin: 50.0,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Markers
// ─────────────────────────────────────────────────────────────────────────────

/// Marker geometry and the category → color mapping.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerConfig {
    /// Circle radius in surface pixels. Default: `5.0`.
    pub radius: f32,
    /// Known categories in legend order with their fill color.
    pub category_colors: Vec<(String, Color32)>,
    /// Fill for categories not listed in `category_colors`.
    pub unknown_color: Color32,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            radius: 5.0,
            category_colors: vec![
                ("A".to_string(), Color32::from_rgb(0xFF, 0x00, 0x00)),
                ("B".to_string(), Color32::from_rgb(0x00, 0xFF, 0x00)),
                ("C".to_string(), Color32::from_rgb(0x00, 0x00, 0xFF)),
            ],
            unknown_color: Color32::from_rgb(0x80, 0x80, 0x80),
        }
    }
}

impl MarkerConfig {
    pub fn category_scale(&self) -> CategoryScale {
        CategoryScale::new(self.category_colors.clone(), self.unknown_color)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Zoom
// ─────────────────────────────────────────────────────────────────────────────

/// How the axes react to zooming.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AxisZoomMode {
    /// Axes are part of the zoomed surface and keep their original ticks.
    #[default]
    Fixed,
    /// Axes stay in place and their ticks follow the visible data range.
    Rescale,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ZoomConfig {
    /// Allowed range of the scale factor. Default: `(1.0, 10.0)`.
    pub scale_extent: (f32, f32),
    /// Wheel zoom is `2^(-delta_y * wheel_sensitivity)`. Default: `0.002`.
    pub wheel_sensitivity: f32,
    pub axis_zoom_mode: AxisZoomMode,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            scale_extent: (1.0, 10.0),
            wheel_sensitivity: 0.002,
            axis_zoom_mode: AxisZoomMode::Fixed,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tooltip
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipConfig {
    /// Fade-in duration. Default: `200`.
    pub fade_in_ms: u64,
    /// Fade-out duration. Default: `500`.
    pub fade_out_ms: u64,
    /// Opacity once fully faded in. Default: `0.9`.
    pub opacity: f32,
    /// Offset from the pointer to the tooltip's top-left corner. Default: `(10, -10)`.
    pub offset: [f32; 2],
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            fade_in_ms: 200,
            fade_out_ms: 500,
            opacity: 0.9,
            offset: [10.0, -10.0],
        }
    }
}

impl TooltipConfig {
    pub fn fade_in_secs(&self) -> f64 {
        self.fade_in_ms as f64 / 1000.0
    }

    pub fn fade_out_secs(&self) -> f64 {
        self.fade_out_ms as f64 / 1000.0
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Axes
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct AxisConfig {
    /// Requested number of ticks; the actual count depends on the domain. Default: `10`.
    pub tick_count: usize,
    /// Tick mark length in surface pixels. Default: `6.0`.
    pub tick_size: f32,
    /// Gap between tick mark and label. Default: `3.0`.
    pub tick_padding: f32,
    /// Default: `10.0`.
    pub font_size: f32,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            tick_count: 10,
            tick_size: 6.0,
            tick_padding: 3.0,
            font_size: 10.0,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ScatterConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration.
///
/// | Field       | Purpose |
/// |-------------|---------|
/// | `surface`   | Drawing surface size and margins |
/// | `markers`   | Marker radius and category colors |
/// | `zoom`      | Scale limits, wheel speed, axis behaviour |
/// | `tooltip`   | Fade timings, opacity, pointer offset |
/// | `axes`      | Tick count and tick geometry |
#[derive(Clone)]
pub struct ScatterConfig {
    pub surface: SurfaceConfig,
    pub markers: MarkerConfig,
    pub zoom: ZoomConfig,
    pub tooltip: TooltipConfig,
    pub axes: AxisConfig,

    // ── Window / chrome ──────────────────────────────────────────────────────
    /// Native window title.
    pub title: String,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            surface: SurfaceConfig::default(),
            markers: MarkerConfig::default(),
            zoom: ZoomConfig::default(),
            tooltip: TooltipConfig::default(),
            axes: AxisConfig::default(),
            title: "Scatter Plot".to_string(),
            native_options: None,
        }
    }
}
