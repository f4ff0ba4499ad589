use log::{debug, info};
use serde::Serialize;

use crate::route::RouteError;
use crate::search::AStar;
use crate::{CostModel, Entry, GraphIndex};

/// A finished route.
///
/// When `reached_goal` is false the path leads to the position that looked
/// closest to the goal by heuristic, not to the goal itself, and its cost
/// is not guaranteed minimal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route<E>
where
    E: Entry,
{
    pub start: E,
    pub goal: E,
    /// Start to terminal position, both inclusive.
    pub path: Vec<E>,
    /// The path cost as reported by the cost model's aggregate.
    pub cost: f64,
    pub reached_goal: bool,
}

impl<E> Route<E>
where
    E: Entry,
{
    /// The cost rounded to two decimal places, halves to even.
    pub fn rounded_cost(&self) -> f64 {
        (self.cost * 100.0).round_ties_even() / 100.0
    }

    pub fn terminal(&self) -> Option<E> {
        self.path.last().copied()
    }

    /// Number of edges on the path.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Finds a route from `start` to `goal` over `graph` under `cost`.
///
/// Fails with [`RouteError::UnknownPosition`] before searching if either
/// endpoint is absent from the graph. `node_limit` caps how many positions
/// the search may reach; `None` leaves it unbounded.
pub fn find_path<E, C>(
    graph: &GraphIndex<E>,
    start: E,
    goal: E,
    cost: &C,
    node_limit: Option<usize>,
) -> Result<Route<E>, RouteError>
where
    E: Entry,
    C: CostModel<E> + ?Sized,
{
    for position in [start, goal] {
        if !graph.contains(position) {
            return Err(RouteError::UnknownPosition(position.identifier()));
        }
    }

    debug!("Routing {start:?} -> {goal:?}");

    let engine = node_limit.map_or_else(AStar::new, AStar::with_node_limit);
    let outcome = engine.search(
        start,
        goal,
        |position| graph.neighbors(*position).iter().copied(),
        cost,
    );

    let path = outcome.reconstruct()?;
    let reached_goal = outcome.reached_goal();
    if !reached_goal {
        info!(
            "Goal {goal:?} unreached from {start:?} (limited={}), falling back to {:?}",
            outcome.limited(),
            path.last()
        );
    }

    Ok(Route {
        start,
        goal,
        cost: cost.aggregate(&path),
        path,
        reached_goal,
    })
}
