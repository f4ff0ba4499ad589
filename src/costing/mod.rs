//! Cost models supplied to the search.
//!
//! A [`CostModel`] answers two questions for the search engine: what it
//! costs to step between two adjacent positions, and how far a position
//! is estimated to be from the goal captured when the model was built.
//! The engine never knows which model is active.
//!
//! ## Policies
//! - [`DistanceCost`] (`by_distance`): planar distance between stored
//!   coordinates, scaled by [`DEFAULT_DISTANCE_SCALE`] to read as kilometres.
//! - [`ScoreCost`] (`by_score`): the sum of both endpoint scores, paired
//!   with the distance heuristic.
//!
//! The distance heuristic only never overestimates when every edge costs
//! at least the straight-line distance between its endpoints. Under
//! `by_score` the heuristic is measured in a different unit than the
//! cost, so neither policy promises an optimal route on arbitrary data.
//!
//! ## Aggregation
//! The cost reported for a finished path comes from [`CostModel::aggregate`].
//! By default it sums [`CostModel::edge_cost`] over consecutive positions;
//! [`ScoreCost`] instead sums the score of every position on the path.
#[doc(hidden)]
pub mod aggregate;
#[doc(hidden)]
pub mod distance;
#[doc(hidden)]
pub mod score;

#[cfg(test)]
mod test;

#[doc(inline)]
pub use distance::{DistanceCost, DEFAULT_DISTANCE_SCALE};
#[doc(inline)]
pub use score::ScoreCost;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::Entry;

/// Pairwise edge cost and single-position heuristic used by the search.
pub trait CostModel<E>
where
    E: Entry,
{
    /// Non-negative cost of moving directly between adjacent positions.
    fn edge_cost(&self, from: E, to: E) -> f64;

    /// Estimated remaining cost from `position` to the goal.
    fn heuristic(&self, position: E) -> f64;

    /// Total cost reported for a finished path.
    fn aggregate(&self, path: &[E]) -> f64 {
        aggregate::sum_edges(self, path)
    }
}

impl<E, C> CostModel<E> for &C
where
    E: Entry,
    C: CostModel<E> + ?Sized,
{
    #[inline]
    fn edge_cost(&self, from: E, to: E) -> f64 {
        (**self).edge_cost(from, to)
    }

    #[inline]
    fn heuristic(&self, position: E) -> f64 {
        (**self).heuristic(position)
    }

    fn aggregate(&self, path: &[E]) -> f64 {
        (**self).aggregate(path)
    }
}

/// The cost model selected by a caller.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum CostPolicy {
    /// Shortest route by distance, reported in kilometres.
    #[default]
    ByDistance,
    /// Cheapest route by point score, reported in score points.
    ByScore,
}
