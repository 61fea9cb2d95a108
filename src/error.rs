//! Error types for scatterview.

use thiserror::Error;

/// Coordinate of a [`DataPoint`](crate::data::point::DataPoint) that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointField {
    X,
    Y,
}

impl std::fmt::Display for PointField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PointField::X => write!(f, "x"),
            PointField::Y => write!(f, "y"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ScatterError {
    #[error("empty dataset: cannot compute axis domain")]
    EmptyDataset,

    #[error("point {index} has a non-finite {field} value")]
    NonFiniteValue { index: usize, field: PointField },

    #[error("invalid drawing surface {width}x{height} with margin {margin}: no plot area left")]
    InvalidSurface { width: f32, height: f32, margin: f32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("SVG error: {0}")]
    Svg(String),

    #[error("PNG error: {0}")]
    Png(String),

    #[error("UI error: {0}")]
    Ui(#[from] eframe::Error),
}

pub type Result<T> = std::result::Result<T, ScatterError>;
