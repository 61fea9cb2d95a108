//! DataPoint and Dataset: the immutable input of the scatter plot.

use serde::{Deserialize, Serialize};

/// A single observation drawn as one marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
    pub category: String,
}

impl DataPoint {
    pub fn new(x: f64, y: f64, category: impl Into<String>) -> Self {
        Self {
            x,
            y,
            category: category.into(),
        }
    }
}

/// Named, ordered sequence of points. Never mutated after loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub name: String,
    pub points: Vec<DataPoint>,
}

impl Dataset {
    pub fn new(name: impl Into<String>, points: Vec<DataPoint>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Concatenate all datasets in order. Marker indices refer to positions in this sequence.
pub fn combine(datasets: &[Dataset]) -> Vec<DataPoint> {
    datasets
        .iter()
        .flat_map(|d| d.points.iter().cloned())
        .collect()
}

/// The two built-in datasets shown when no data file is given.
pub fn sample_datasets() -> Vec<Dataset> {
    vec![
        Dataset::new(
            "dataset1",
            vec![
                DataPoint::new(10.0, 20.0, "A"),
                DataPoint::new(15.0, 5.0, "B"),
                DataPoint::new(25.0, 10.0, "C"),
            ],
        ),
        Dataset::new(
            "dataset2",
            vec![
                DataPoint::new(5.0, 15.0, "A"),
                DataPoint::new(20.0, 10.0, "B"),
                DataPoint::new(12.0, 22.0, "C"),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine_keeps_dataset_order() {
        let all = combine(&sample_datasets());
        assert_eq!(all.len(), 6);
        assert_eq!(all[0], DataPoint::new(10.0, 20.0, "A"));
        assert_eq!(all[3], DataPoint::new(5.0, 15.0, "A"));
        assert_eq!(all[5].category, "C");
    }
}
