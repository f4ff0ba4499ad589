use itertools::Itertools;

use crate::{CostModel, Entry};

/// Sums the edge cost of every consecutive pair on the path.
/// Paths with fewer than two positions cost nothing.
pub fn sum_edges<E, C>(cost: &C, path: &[E]) -> f64
where
    E: Entry,
    C: CostModel<E> + ?Sized,
{
    path.iter()
        .tuple_windows()
        .map(|(a, b)| cost.edge_cost(*a, *b))
        .sum()
}

/// Sums a per-position metric over every position on the path.
pub fn sum_nodes<E, F>(path: &[E], metric: F) -> f64
where
    E: Entry,
    F: Fn(E) -> f64,
{
    path.iter().map(|position| metric(*position)).sum()
}
