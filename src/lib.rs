#![doc = include_str!("../README.md")]

#[cfg(feature = "mimalloc")]
use mimalloc::MiMalloc;
#[cfg_attr(feature = "mimalloc", global_allocator)]
#[cfg(feature = "mimalloc")]
static GLOBAL: MiMalloc = MiMalloc;

pub mod config;
pub mod costing;
pub mod error;
pub mod graph;
pub mod primitive;
pub mod route;
pub mod search;
pub mod store;
pub mod util;

#[cfg(test)]
pub(crate) mod fixture;

#[doc(inline)]
pub use config::Config;
#[doc(inline)]
pub use costing::{CostModel, CostPolicy, DistanceCost, ScoreCost};
#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use graph::GraphIndex;
#[doc(inline)]
pub use primitive::{Entry, Line, Node, PointId};
#[doc(inline)]
pub use route::{find_path, Route, RouteError, Router};
#[doc(inline)]
pub use search::{AStar, SearchNode, SearchOutcome};
#[doc(inline)]
pub use store::{EdgeStore, Locate, MemoryStore, PointStore, StoreError};
