//! Loader for the `lines-points` dataset.
//!
//! ```json
//! {
//!   "points": [{ "obj_id": 1, "lon": 37.60, "lat": 55.70, "score": 4 }],
//!   "lines": [{ "from_obj": 1, "to_obj": 2 }]
//! }
//! ```
//!
//! Line numbers in errors are 1-based, in file order.

use geo::Point;
use log::info;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::store::{MemoryStore, StoreError};
use crate::{Line, Node, PointId};

#[derive(Debug, Deserialize)]
struct Dataset {
    points: Vec<PointRecord>,
    #[serde(default)]
    lines: Vec<LineRecord>,
}

#[derive(Debug, Deserialize)]
struct PointRecord {
    obj_id: i64,
    lon: f64,
    lat: f64,
    #[serde(default)]
    score: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct LineRecord {
    from_obj: i64,
    to_obj: i64,
}

impl From<PointRecord> for Node<PointId> {
    fn from(record: PointRecord) -> Self {
        Node {
            id: PointId(record.obj_id),
            position: Point::new(record.lon, record.lat),
            score: record.score,
        }
    }
}

impl From<LineRecord> for Line<PointId> {
    fn from(record: LineRecord) -> Self {
        Line::new(PointId(record.from_obj), PointId(record.to_obj))
    }
}

impl MemoryStore<PointId> {
    /// Reads a dataset from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, StoreError> {
        let dataset: Dataset = serde_json::from_reader(reader)?;
        Self::from_dataset(dataset)
    }

    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let dataset: Dataset = serde_json::from_str(json)?;
        Self::from_dataset(dataset)
    }

    /// Reads a dataset file from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        info!("Importing dataset from {}", path.display());

        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    fn from_dataset(dataset: Dataset) -> Result<Self, StoreError> {
        let nodes = dataset.points.into_iter().map(Node::from).collect();
        let lines = dataset.lines.into_iter().map(Line::from).collect();

        let store = Self::from_parts(nodes, lines)?;
        info!(
            "Imported {} points and {} lines",
            store.size(),
            store.lines().len()
        );
        Ok(store)
    }
}
