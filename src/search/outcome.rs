use rustc_hash::FxHashMap;

use crate::route::RouteError;
use crate::search::SearchNode;
use crate::Entry;

/// Everything a finished search leaves behind: every record it created,
/// the authoritative record per position, and the terminal record.
#[derive(Debug)]
pub struct SearchOutcome<E>
where
    E: Entry,
{
    pub(crate) start: E,
    pub(crate) goal: E,
    pub(crate) terminal: usize,
    pub(crate) nodes: Vec<SearchNode<E>>,
    pub(crate) visited: FxHashMap<E, usize>,
    pub(crate) limited: bool,
    pub(crate) expanded: usize,
}

impl<E> SearchOutcome<E>
where
    E: Entry,
{
    /// The goal record, or the record with the smallest heuristic
    /// seen if the goal was never reached.
    pub fn terminal(&self) -> &SearchNode<E> {
        &self.nodes[self.terminal]
    }

    pub fn reached_goal(&self) -> bool {
        self.terminal().position == self.goal
    }

    /// Whether neighbours were skipped because the node limit was hit.
    pub fn limited(&self) -> bool {
        self.limited
    }

    /// Number of positions whose neighbours were expanded.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Number of distinct positions reached.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// The authoritative record for `position`, if it was reached.
    pub fn visited(&self, position: E) -> Option<&SearchNode<E>> {
        self.visited.get(&position).map(|slot| &self.nodes[*slot])
    }

    /// Walks parent links from the terminal record back to the start,
    /// returning the positions in start-to-terminal order.
    ///
    /// A parent missing from the visited table, a chain that does not end
    /// at the start, or a chain longer than the number of visited positions
    /// all mean the bookkeeping is broken, and are reported as
    /// [`RouteError::InvariantViolation`].
    pub fn reconstruct(&self) -> Result<Vec<E>, RouteError> {
        let mut path = Vec::new();
        let mut current = self.terminal();

        while let Some(parent) = current.parent {
            path.push(current.position);

            if path.len() > self.visited.len() {
                return Err(RouteError::InvariantViolation {
                    position: current.position.identifier(),
                    reason: "parent chain does not terminate",
                });
            }

            current = self
                .visited(parent)
                .ok_or(RouteError::InvariantViolation {
                    position: parent.identifier(),
                    reason: "parent was never visited",
                })?;
        }

        if current.position != self.start {
            return Err(RouteError::InvariantViolation {
                position: current.position.identifier(),
                reason: "parent chain ends away from the start",
            });
        }

        path.push(self.start);
        path.reverse();
        Ok(path)
    }
}
