use geo::Point;
use log::debug;
use rstar::RTree;
use rustc_hash::FxHashMap;
use std::fmt::{Debug, Formatter};

use crate::store::{EdgeStore, Locate, PointStore, StoreError};
use crate::{Entry, Line, Node};

/// In-memory point and line storage.
///
/// Points are keyed by identifier and spatially indexed for nearest-point
/// lookups. Lines are kept in insertion order; each is checked to
/// reference stored points when added.
pub struct MemoryStore<E>
where
    E: Entry,
{
    pub(crate) hash: FxHashMap<E, Node<E>>,
    pub(crate) index: RTree<Node<E>>,
    pub(crate) lines: Vec<Line<E>>,
}

impl<E> Debug for MemoryStore<E>
where
    E: Entry,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MemoryStore with Points: {}, Lines: {}",
            self.hash.len(),
            self.lines.len()
        )
    }
}

impl<E> Default for MemoryStore<E>
where
    E: Entry,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E> MemoryStore<E>
where
    E: Entry,
{
    pub fn new() -> Self {
        Self {
            hash: FxHashMap::default(),
            index: RTree::new(),
            lines: Vec::new(),
        }
    }

    /// Bulk-loads points and lines, validating both.
    pub fn from_parts(
        nodes: Vec<Node<E>>,
        lines: Vec<Line<E>>,
    ) -> Result<Self, StoreError> {
        let mut hash = FxHashMap::with_capacity_and_hasher(nodes.len(), Default::default());
        for node in &nodes {
            check_score(node)?;
            if hash.insert(node.id, *node).is_some() {
                return Err(StoreError::DuplicatePoint(node.id.identifier()));
            }
        }

        let mut store = Self {
            hash,
            index: RTree::bulk_load(nodes),
            lines: Vec::with_capacity(lines.len()),
        };

        for line in lines {
            store.insert_line(line)?;
        }

        debug!("Loaded {store:?}");
        Ok(store)
    }

    pub fn insert_point(&mut self, node: Node<E>) -> Result<(), StoreError> {
        check_score(&node)?;
        if self.hash.contains_key(&node.id) {
            return Err(StoreError::DuplicatePoint(node.id.identifier()));
        }

        self.hash.insert(node.id, node);
        self.index.insert(node);
        Ok(())
    }

    pub fn insert_line(&mut self, line: Line<E>) -> Result<(), StoreError> {
        let number = self.lines.len() + 1;
        for endpoint in [line.source, line.target] {
            if !self.hash.contains_key(&endpoint) {
                return Err(StoreError::DanglingLine {
                    line: number,
                    point: endpoint.identifier(),
                });
            }
        }

        self.lines.push(line);
        Ok(())
    }

    pub fn node(&self, id: E) -> Option<&Node<E>> {
        self.hash.get(&id)
    }

    pub fn lines(&self) -> &[Line<E>] {
        &self.lines
    }

    pub fn size(&self) -> usize {
        self.hash.len()
    }
}

/// Scores become edge costs, which must not be negative.
fn check_score<E: Entry>(node: &Node<E>) -> Result<(), StoreError> {
    match node.score {
        Some(score) if score < 0 => Err(StoreError::NegativeScore {
            point: node.id.identifier(),
            score,
        }),
        _ => Ok(()),
    }
}

impl<E> PointStore<E> for MemoryStore<E>
where
    E: Entry,
{
    #[inline]
    fn coordinate(&self, id: E) -> Option<Point> {
        self.hash.get(&id).map(|node| node.position)
    }

    #[inline]
    fn score(&self, id: E) -> Option<f64> {
        self.hash
            .get(&id)
            .and_then(|node| node.score)
            .map(|score| score as f64)
    }
}

impl<E> EdgeStore<E> for MemoryStore<E>
where
    E: Entry,
{
    fn edges(&self) -> Vec<(E, E)> {
        self.lines.iter().map(Line::endpoints).collect()
    }
}

impl<E> Locate<E> for MemoryStore<E>
where
    E: Entry,
{
    fn nearest(&self, point: &Point) -> Option<E> {
        self.index.nearest_neighbor(point).map(|node| node.id)
    }
}
