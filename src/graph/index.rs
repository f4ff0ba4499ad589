use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::fmt::{Debug, Formatter};

use crate::{Entry, Line};

type Adjacent<E> = SmallVec<[E; 4]>;

/// Undirected adjacency index over a snapshot of lines.
///
/// Every line is indexed from both endpoints, so the index is symmetric.
/// Duplicate lines and self-loops are kept as-is: a repeated neighbour
/// is simply expanded twice by the search.
#[derive(Clone, Default)]
pub struct GraphIndex<E>
where
    E: Entry,
{
    adjacency: FxHashMap<E, Adjacent<E>>,
    edges: usize,
}

impl<E> Debug for GraphIndex<E>
where
    E: Entry,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "GraphIndex with Positions: {}, Edges: {}",
            self.adjacency.len(),
            self.edges
        )
    }
}

impl<E> GraphIndex<E>
where
    E: Entry,
{
    pub fn new() -> Self {
        Self {
            adjacency: FxHashMap::default(),
            edges: 0,
        }
    }

    /// Builds the index from an ordered sequence of `(from, to)` pairs.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (E, E)>,
    {
        let mut index = Self::new();
        edges
            .into_iter()
            .for_each(|(from, to)| index.insert(from, to));
        index
    }

    /// Builds the index from stored lines.
    pub fn from_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a Line<E>>,
        E: 'a,
    {
        Self::from_edges(lines.into_iter().map(Line::endpoints))
    }

    /// Indexes one undirected edge from both endpoints.
    pub fn insert(&mut self, from: E, to: E) {
        self.adjacency.entry(from).or_default().push(to);
        self.adjacency.entry(to).or_default().push(from);
        self.edges += 1;
    }

    /// Positions directly reachable from `position` by one edge,
    /// in insertion order. Unknown positions have no neighbours.
    #[inline]
    pub fn neighbors(&self, position: E) -> &[E] {
        self.adjacency
            .get(&position)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Whether `position` is an endpoint of at least one edge.
    #[inline]
    pub fn contains(&self, position: E) -> bool {
        self.adjacency.contains_key(&position)
    }

    pub fn positions(&self) -> impl Iterator<Item = &E> {
        self.adjacency.keys()
    }

    pub fn position_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges
    }
}
