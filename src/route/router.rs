use geo::Point;
use log::debug;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
#[cfg(feature = "tracing")]
use tracing::Level;

use crate::config::{check_distance_scale, ConfigError};
use crate::costing::DEFAULT_DISTANCE_SCALE;
use crate::route::{find_path, Route, RouteError};
use crate::store::{EdgeStore, Locate, PointStore};
use crate::{Config, CostPolicy, DistanceCost, Entry, GraphIndex, ScoreCost};

/// Routes between stored points.
///
/// The graph is rebuilt from the store's edge snapshot on every call.
/// Nothing is kept between searches.
#[derive(Debug)]
pub struct Router<S> {
    store: S,
    node_limit: Option<usize>,
    distance_scale: f64,
}

impl<S> Router<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            node_limit: None,
            distance_scale: DEFAULT_DISTANCE_SCALE,
        }
    }

    /// A router using the node limit and distance scale from `config`.
    pub fn from_config(store: S, config: &Config) -> Result<Self, ConfigError> {
        Ok(Self {
            store,
            node_limit: config.node_limit,
            distance_scale: check_distance_scale(config.distance_scale)?,
        })
    }

    pub fn with_node_limit(mut self, node_limit: usize) -> Self {
        self.node_limit = Some(node_limit);
        self
    }

    /// Fails unless `scale` is finite and positive.
    pub fn with_distance_scale(mut self, scale: f64) -> Result<Self, ConfigError> {
        self.distance_scale = check_distance_scale(scale)?;
        Ok(self)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Finds the route between two stored points under `policy`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), level = Level::INFO))]
    pub fn route<E>(&self, start: E, goal: E, policy: CostPolicy) -> Result<Route<E>, RouteError>
    where
        E: Entry,
        S: PointStore<E> + EdgeStore<E>,
    {
        let graph = GraphIndex::from_edges(self.store.edges());
        self.route_in(&graph, start, goal, policy)
    }

    fn route_in<E>(
        &self,
        graph: &GraphIndex<E>,
        start: E,
        goal: E,
        policy: CostPolicy,
    ) -> Result<Route<E>, RouteError>
    where
        E: Entry,
        S: PointStore<E>,
    {
        match policy {
            CostPolicy::ByDistance => {
                let cost = DistanceCost::new(&self.store, goal, self.distance_scale);
                find_path(graph, start, goal, &cost, self.node_limit)
            }
            CostPolicy::ByScore => {
                let cost = ScoreCost::new(&self.store, goal, self.distance_scale);
                find_path(graph, start, goal, &cost, self.node_limit)
            }
        }
    }

    /// Snaps both coordinates to their nearest stored point, then routes
    /// between those points. Returns `None` if the store is empty.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), level = Level::INFO))]
    pub fn route_points<E>(
        &self,
        start: Point,
        goal: Point,
        policy: CostPolicy,
    ) -> Option<Result<Route<E>, RouteError>>
    where
        E: Entry,
        S: PointStore<E> + EdgeStore<E> + Locate<E>,
    {
        let start_node = self.store.nearest(&start)?;
        let goal_node = self.store.nearest(&goal)?;
        debug!("Snapped {start:?} -> {start_node:?}, {goal:?} -> {goal_node:?}");

        Some(self.route(start_node, goal_node, policy))
    }

    /// Runs independent searches in parallel over one edge snapshot.
    /// Results are returned in request order.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, level = Level::INFO))]
    pub fn route_many<E>(
        &self,
        requests: &[(E, E)],
        policy: CostPolicy,
    ) -> Vec<Result<Route<E>, RouteError>>
    where
        E: Entry,
        S: PointStore<E> + EdgeStore<E> + Sync,
    {
        let graph = GraphIndex::from_edges(self.store.edges());

        requests
            .par_iter()
            .map(|(start, goal)| self.route_in(&graph, *start, *goal, policy))
            .collect()
    }
}
