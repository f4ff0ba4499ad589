//! A* search with lazy frontier invalidation.
//!
//! ```rust
//! use geopoints::{AStar, CostModel, GraphIndex};
//!
//! struct Hops;
//!
//! impl CostModel<u32> for Hops {
//!     fn edge_cost(&self, _: u32, _: u32) -> f64 { 1.0 }
//!     fn heuristic(&self, _: u32) -> f64 { 0.0 }
//! }
//!
//! let graph = GraphIndex::from_edges([(1u32, 2u32), (2, 3), (1, 4), (4, 3)]);
//! let outcome = AStar::new().search(1, 3, |p| graph.neighbors(*p).iter().copied(), &Hops);
//!
//! assert!(outcome.reached_goal());
//! assert_eq!(outcome.reconstruct().unwrap().len(), 3);
//! ```
#[doc(hidden)]
pub mod astar;
#[doc(hidden)]
pub(crate) mod frontier;
#[doc(hidden)]
pub mod node;
#[doc(hidden)]
pub mod outcome;


#[doc(inline)]
pub use astar::AStar;
#[doc(inline)]
pub use node::SearchNode;
#[doc(inline)]
pub use outcome::SearchOutcome;
