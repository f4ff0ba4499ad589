use geo::{Distance, Euclidean, Point};
use log::warn;

use crate::store::PointStore;
use crate::{CostModel, Entry};

/// Scales a planar coordinate distance into kilometres.
pub const DEFAULT_DISTANCE_SCALE: f64 = 100.0;

/// Costs an edge by the planar distance between its endpoints.
///
/// The heuristic is the distance from a position to the goal, in the same
/// scale. Positions without a stored coordinate cost `f64::INFINITY`.
pub struct DistanceCost<'a, S> {
    store: &'a S,
    goal: Option<Point>,
    scale: f64,
}

impl<'a, S> DistanceCost<'a, S> {
    /// Captures the goal coordinate used by the heuristic.
    pub fn new<E>(store: &'a S, goal: E, scale: f64) -> Self
    where
        E: Entry,
        S: PointStore<E>,
    {
        let goal_position = store.coordinate(goal);
        if goal_position.is_none() {
            warn!("Goal {goal:?} has no stored coordinate, heuristic is unbounded");
        }

        Self {
            store,
            goal: goal_position,
            scale,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Scaled distance between two coordinates.
    #[inline]
    pub fn between(&self, a: Point, b: Point) -> f64 {
        Euclidean.distance(a, b) * self.scale
    }

    fn resolve<E>(&self, position: E) -> Option<Point>
    where
        E: Entry,
        S: PointStore<E>,
    {
        let coordinate = self.store.coordinate(position);
        if coordinate.is_none() {
            warn!("Position {position:?} has no stored coordinate");
        }
        coordinate
    }
}

impl<E, S> CostModel<E> for DistanceCost<'_, S>
where
    E: Entry,
    S: PointStore<E>,
{
    fn edge_cost(&self, from: E, to: E) -> f64 {
        match (self.resolve(from), self.resolve(to)) {
            (Some(a), Some(b)) => self.between(a, b),
            _ => f64::INFINITY,
        }
    }

    fn heuristic(&self, position: E) -> f64 {
        match (self.resolve(position), self.goal) {
            (Some(a), Some(goal)) => self.between(a, goal),
            _ => f64::INFINITY,
        }
    }
}
