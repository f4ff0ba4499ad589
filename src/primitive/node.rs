use geo::{Distance, Euclidean, Point};
use rstar::{Envelope, AABB};

use crate::Entry;

/// A stored point: an identifier, its coordinate (`x` is longitude,
/// `y` is latitude) and an optional integer score.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Node<E>
where
    E: Entry,
{
    pub id: E,
    pub position: Point,
    pub score: Option<i64>,
}

impl<E> Node<E>
where
    E: Entry,
{
    /// Constructs a `Node` from a given position and `id`, without a score.
    pub fn new(position: Point, id: E) -> Self {
        Self {
            id,
            position,
            score: None,
        }
    }

    pub fn with_score(mut self, score: i64) -> Self {
        self.score = Some(score);
        self
    }
}

impl<E> rstar::PointDistance for Node<E>
where
    E: Entry,
{
    fn distance_2(
        &self,
        point: &<Self::Envelope as Envelope>::Point,
    ) -> <<Self::Envelope as Envelope>::Point as rstar::Point>::Scalar {
        Euclidean.distance(self.position, *point).powi(2)
    }
}

impl<E> rstar::RTreeObject for Node<E>
where
    E: Entry,
{
    type Envelope = AABB<Point>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.position)
    }
}
