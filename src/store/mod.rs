//! Collaborators consumed by the router.
//!
//! The search itself only sees positions; coordinates, scores and the
//! edge list are read from a store implementing [`PointStore`] and
//! [`EdgeStore`]. [`MemoryStore`] is the in-memory implementation, which
//! can be filled from the `lines-points` JSON dataset (see [`import`]).
#[doc(hidden)]
pub mod error;
#[doc(hidden)]
pub mod import;
#[doc(hidden)]
pub mod memory;


#[doc(inline)]
pub use error::StoreError;
#[doc(inline)]
pub use memory::MemoryStore;

use geo::Point;

use crate::Entry;

/// Source of per-point data for the cost models.
pub trait PointStore<E>
where
    E: Entry,
{
    fn coordinate(&self, id: E) -> Option<Point>;

    /// The point score, `None` if the point is unknown or unscored.
    fn score(&self, id: E) -> Option<f64>;
}

/// Source of the edge list the routing graph is built from.
///
/// Each call returns an owned snapshot; a search never observes
/// edges added after it started.
pub trait EdgeStore<E>
where
    E: Entry,
{
    fn edges(&self) -> Vec<(E, E)>;
}

/// Nearest stored point to an arbitrary coordinate.
pub trait Locate<E>
where
    E: Entry,
{
    fn nearest(&self, point: &Point) -> Option<E>;
}
