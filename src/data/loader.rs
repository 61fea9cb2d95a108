//! Dataset loading: read and write scatter data as JSON.
//!
//! Accepted layouts:
//!
//! ```json
//! { "datasets": [ { "name": "a", "points": [ { "x": 1, "y": 2, "category": "A" } ] } ] }
//! ```
//!
//! or just the array of datasets. `name` is optional and defaults to
//! `dataset<N>` (1-based).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::point::{DataPoint, Dataset};
use crate::error::Result;

// ---------- Serializable mirror types ----------

/// On-disk form of a [`Dataset`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSerde {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub points: Vec<DataPoint>,
}

impl From<&Dataset> for DatasetSerde {
    fn from(d: &Dataset) -> Self {
        Self {
            name: Some(d.name.clone()),
            points: d.points.clone(),
        }
    }
}

impl DatasetSerde {
    fn into_dataset(self, position: usize) -> Dataset {
        let name = self
            .name
            .unwrap_or_else(|| format!("dataset{}", position + 1));
        Dataset::new(name, self.points)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataFileSerde {
    pub datasets: Vec<DatasetSerde>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AnyDataFile {
    Wrapped(DataFileSerde),
    Bare(Vec<DatasetSerde>),
}

// ---------- Public API ----------

/// Parse datasets from JSON text.
pub fn datasets_from_json(json: &str) -> Result<Vec<Dataset>> {
    let raw: Vec<DatasetSerde> = match serde_json::from_str::<AnyDataFile>(json) {
        Ok(AnyDataFile::Wrapped(f)) => f.datasets,
        Ok(AnyDataFile::Bare(v)) => v,
        // re-parse as the canonical layout so the error names the actual problem
        Err(_) => serde_json::from_str::<DataFileSerde>(json)?.datasets,
    };
    Ok(raw
        .into_iter()
        .enumerate()
        .map(|(i, d)| d.into_dataset(i))
        .collect())
}

/// Serialize datasets as pretty JSON in the canonical `{ "datasets": [...] }` layout.
pub fn datasets_to_json(datasets: &[Dataset]) -> Result<String> {
    let file = DataFileSerde {
        datasets: datasets.iter().map(DatasetSerde::from).collect(),
    };
    Ok(serde_json::to_string_pretty(&file)?)
}

/// Load datasets from a JSON file.
pub fn load_datasets_from_path(path: &Path) -> Result<Vec<Dataset>> {
    let txt = std::fs::read_to_string(path)?;
    let datasets = datasets_from_json(&txt)?;
    log::info!(
        "loaded {} dataset(s) with {} point(s) from {}",
        datasets.len(),
        datasets.iter().map(Dataset::len).sum::<usize>(),
        path.display()
    );
    Ok(datasets)
}

/// Save datasets to a JSON file.
pub fn save_datasets_to_path(datasets: &[Dataset], path: &Path) -> Result<()> {
    let txt = datasets_to_json(datasets)?;
    std::fs::write(path, txt)?;
    Ok(())
}
