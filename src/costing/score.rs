use crate::costing::aggregate;
use crate::store::PointStore;
use crate::{CostModel, DistanceCost, Entry};

/// Costs an edge by the sum of the scores at both endpoints.
///
/// The heuristic is borrowed unchanged from [`DistanceCost`], so it is
/// expressed in kilometres while costs are in score points. Routes found
/// under this model are therefore not guaranteed to be the cheapest.
/// Points without a score count as zero.
pub struct ScoreCost<'a, S> {
    store: &'a S,
    distance: DistanceCost<'a, S>,
}

impl<'a, S> ScoreCost<'a, S> {
    pub fn new<E>(store: &'a S, goal: E, scale: f64) -> Self
    where
        E: Entry,
        S: PointStore<E>,
    {
        Self {
            store,
            distance: DistanceCost::new(store, goal, scale),
        }
    }

    #[inline]
    fn score<E>(&self, position: E) -> f64
    where
        E: Entry,
        S: PointStore<E>,
    {
        self.store.score(position).unwrap_or(0.0)
    }
}

impl<E, S> CostModel<E> for ScoreCost<'_, S>
where
    E: Entry,
    S: PointStore<E>,
{
    fn edge_cost(&self, from: E, to: E) -> f64 {
        self.score(from) + self.score(to)
    }

    fn heuristic(&self, position: E) -> f64 {
        self.distance.heuristic(position)
    }

    /// Sums the score of every point on the path, each counted once.
    fn aggregate(&self, path: &[E]) -> f64 {
        aggregate::sum_nodes(path, |position| self.score(position))
    }
}
