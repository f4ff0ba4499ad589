use crate::Entry;

/// One record per position reached during a single search.
///
/// Records are ordered on the frontier by `total_estimate`, then
/// `heuristic`, then `sequence`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SearchNode<E>
where
    E: Entry,
{
    /// `cost_so_far + heuristic`.
    pub total_estimate: f64,
    pub heuristic: f64,
    /// Assigned when the record is created or replaced; unique per search.
    pub sequence: u64,
    pub cost_so_far: f64,
    pub position: E,
    /// Neighbours not yet expanded.
    pub open: bool,
    /// The authoritative record for its position.
    pub valid: bool,
    pub parent: Option<E>,
}

impl<E> SearchNode<E>
where
    E: Entry,
{
    pub(crate) fn start(position: E, heuristic: f64) -> Self {
        Self {
            total_estimate: heuristic,
            heuristic,
            sequence: 0,
            cost_so_far: 0.0,
            position,
            open: true,
            valid: true,
            parent: None,
        }
    }

    pub(crate) fn discovered(
        position: E,
        cost_so_far: f64,
        heuristic: f64,
        sequence: u64,
        parent: E,
    ) -> Self {
        Self {
            total_estimate: cost_so_far + heuristic,
            heuristic,
            sequence,
            cost_so_far,
            position,
            open: true,
            valid: true,
            parent: Some(parent),
        }
    }

    /// A fresh copy of an open record, reached more cheaply through `parent`.
    pub(crate) fn replacement(&self, cost_so_far: f64, sequence: u64, parent: E) -> Self {
        Self {
            total_estimate: cost_so_far + self.heuristic,
            sequence,
            cost_so_far,
            valid: true,
            parent: Some(parent),
            ..*self
        }
    }

    /// Reopens a closed record in place. The sequence is kept.
    pub(crate) fn reopen(&mut self, cost_so_far: f64, parent: E) {
        self.total_estimate = cost_so_far + self.heuristic;
        self.cost_so_far = cost_so_far;
        self.parent = Some(parent);
        self.open = true;
    }
}
