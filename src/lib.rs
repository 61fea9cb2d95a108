//! scatterview crate root: re-exports and module wiring.
//!
//! An interactive scatter plot built on egui/eframe: linear axes, category
//! colors, hover tooltips with fades, a clamped zoom over the whole drawing
//! surface, and a case-insensitive category filter.
//!
//! Modules:
//! - `data`: points, scales, filter, view transform, tooltip state, JSON loading
//! - `renderer`: [`PlotRenderer`], which owns all plot state and event handlers
//! - `scene`: backend-independent draw primitives
//! - `export`: SVG and PNG export of a scene
//! - `config`: [`ScatterConfig`] and its sub-configs
//! - `app`: the native window ([`run_scatter`])

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod export;
pub mod renderer;
pub mod scene;

// Public re-exports for a compact external API
pub use app::{run_scatter, ScatterApp};
pub use config::{AxisZoomMode, ScatterConfig};
pub use data::point::{sample_datasets, DataPoint, Dataset};
pub use data::view_transform::{ViewTransform, ZoomGesture};
pub use error::{Result, ScatterError};
pub use renderer::PlotRenderer;
