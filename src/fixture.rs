//! Shared fixtures for unit tests.

use rustc_hash::FxHashMap;
use std::path::PathBuf;

use crate::{CostModel, Entry, GraphIndex};

/// JSON dataset with the [`CYCLE_WITH_CHORDS`] topology, coordinates and scores.
pub const LINES_POINTS: &str = "lines-points.json";

/// The thirteen-position cycle-with-chords reference graph.
pub const CYCLE_WITH_CHORDS: &[(u32, &[u32])] = &[
    (1, &[2, 8, 9]),
    (2, &[1, 10, 3]),
    (8, &[1, 7, 12, 9]),
    (9, &[1, 8, 12, 10]),
    (10, &[2, 3, 4, 12, 11, 9]),
    (3, &[2, 10, 4]),
    (4, &[3, 10, 5, 11]),
    (5, &[4, 6]),
    (11, &[4, 6, 10]),
    (6, &[5, 11, 13, 7]),
    (13, &[6, 7, 12]),
    (7, &[6, 13, 8]),
    (12, &[8, 13, 9, 10]),
];

pub fn fixture_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(file)
}

/// Each undirected edge of [`CYCLE_WITH_CHORDS`] once, lower id first.
pub fn cycle_with_chords_edges() -> Vec<(u32, u32)> {
    CYCLE_WITH_CHORDS
        .iter()
        .flat_map(|(from, to)| to.iter().map(move |to| (*from, *to)))
        .filter(|(from, to)| from < to)
        .collect()
}

pub fn cycle_with_chords() -> GraphIndex<u32> {
    GraphIndex::from_edges(cycle_with_chords_edges())
}

/// Every edge costs one, and the heuristic is zero.
pub struct UnitCost;

impl<E: Entry> CostModel<E> for UnitCost {
    fn edge_cost(&self, _: E, _: E) -> f64 {
        1.0
    }

    fn heuristic(&self, _: E) -> f64 {
        0.0
    }
}

/// Edge weights and heuristic values read from explicit tables.
/// Missing weights cost one, missing estimates are zero.
#[derive(Default)]
pub struct TableCost {
    weights: FxHashMap<(u32, u32), f64>,
    estimates: FxHashMap<u32, f64>,
}

impl TableCost {
    pub fn weight(mut self, a: u32, b: u32, weight: f64) -> Self {
        self.weights.insert((a.min(b), a.max(b)), weight);
        self
    }

    pub fn estimate(mut self, position: u32, estimate: f64) -> Self {
        self.estimates.insert(position, estimate);
        self
    }

    pub fn edges(&self) -> Vec<(u32, u32)> {
        let mut edges = self.weights.keys().copied().collect::<Vec<_>>();
        edges.sort_unstable();
        edges
    }
}

impl CostModel<u32> for TableCost {
    fn edge_cost(&self, a: u32, b: u32) -> f64 {
        self.weights
            .get(&(a.min(b), a.max(b)))
            .copied()
            .unwrap_or(1.0)
    }

    fn heuristic(&self, position: u32) -> f64 {
        self.estimates.get(&position).copied().unwrap_or(0.0)
    }
}

/// Reference shortest-path cost, computed with `pathfinding`'s Dijkstra over
/// fixed-point weights so that floating costs can be ordered.
pub fn reference_cost<E, C>(graph: &GraphIndex<E>, cost: &C, start: E, goal: E) -> Option<f64>
where
    E: Entry,
    C: CostModel<E>,
{
    const FIXED: f64 = 1e9;

    pathfinding::prelude::dijkstra(
        &start,
        |position| {
            graph
                .neighbors(*position)
                .iter()
                .map(|n| (*n, (cost.edge_cost(*position, *n) * FIXED).round() as u64))
                .collect::<Vec<_>>()
        },
        |position| *position == goal,
    )
    .map(|(_, total)| total as f64 / FIXED)
}

/// Asserts that consecutive positions of `path` are adjacent in `graph`.
pub fn assert_connected<E: Entry>(graph: &GraphIndex<E>, path: &[E]) {
    for pair in path.windows(2) {
        assert!(
            graph.neighbors(pair[0]).contains(&pair[1]),
            "{:?} and {:?} are not adjacent",
            pair[0],
            pair[1]
        );
    }
}
