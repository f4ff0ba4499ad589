use std::fmt::Debug;
use std::hash::Hash;

pub mod line;
pub mod node;

#[cfg(test)]
mod test;

pub use line::Line;
pub use node::Node;

use serde::{Deserialize, Serialize};

/// An opaque, cheaply copied handle for a graph position.
///
/// The search never inspects the handle itself; geometry and score
/// are resolved through a [`PointStore`](crate::store::PointStore).
pub trait Entry:
    Default + Copy + Clone + PartialEq + Eq + Ord + Hash + Debug + Send + Sync
{
    fn identifier(&self) -> i64;
}

/// The identifier of a stored point, as found in the `obj_id`
/// column of the imported dataset.
#[derive(
    Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PointId(pub i64);

impl PointId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }
}

impl From<i64> for PointId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for PointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Entry for PointId {
    #[inline]
    fn identifier(&self) -> i64 {
        self.0
    }
}

// Identifiers beyond `i64::MAX` saturate.
macro_rules! impl_entry {
    ($($ty:ty),*) => {
        $(
            impl Entry for $ty {
                #[inline]
                fn identifier(&self) -> i64 {
                    i64::try_from(*self).unwrap_or(i64::MAX)
                }
            }
        )*
    };
}

impl_entry!(u32, u64, i32, i64, usize);
