use crate::Entry;

/// An undirected connection between two stored points.
///
/// The orientation of `source` and `target` is kept only as it was
/// imported; the routing graph indexes every line from both ends.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Line<E>
where
    E: Entry,
{
    pub source: E,
    pub target: E,
}

impl<E> Line<E>
where
    E: Entry,
{
    pub fn new(source: E, target: E) -> Self {
        Self { source, target }
    }

    /// The line as an unordered `(from, to)` pair.
    #[inline]
    pub fn endpoints(&self) -> (E, E) {
        (self.source, self.target)
    }
}

impl<E> From<(E, E)> for Line<E>
where
    E: Entry,
{
    fn from((source, target): (E, E)) -> Self {
        Self::new(source, target)
    }
}
