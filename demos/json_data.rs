//! Example: load datasets from a JSON file
//!
//! What it demonstrates
//! - Reading points with `load_datasets_from_path` instead of the built-in sample data.
//! - A category outside A/B/C ("D") drawn with the fallback color; a warning is logged.
//!
//! How to run
//! ```bash
//! RUST_LOG=debug cargo run --example json_data
//! ```

use std::path::Path;

use scatterview::data::loader::load_datasets_from_path;
use scatterview::{run_scatter, ScatterConfig};

fn main() -> scatterview::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/data/points.json");
    let datasets = load_datasets_from_path(&path)?;

    let mut cfg = ScatterConfig::default();
    cfg.title = "Scatter Plot: JSON data".to_string();
    run_scatter(datasets, cfg)
}
