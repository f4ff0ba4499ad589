use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::search::SearchNode;
use crate::Entry;

/// A frontier entry: the ordering key of a record at push time,
/// and the slot of that record in the search arena.
#[derive(Debug, Copy, Clone)]
pub(crate) struct FrontierEntry {
    total_estimate: f64,
    heuristic: f64,
    sequence: u64,
    pub(crate) slot: usize,
}

impl PartialEq for FrontierEntry {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    /// Reversed, so the max-heap yields the smallest key first.
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .total_estimate
            .total_cmp(&self.total_estimate)
            .then_with(|| other.heuristic.total_cmp(&self.heuristic))
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Min-priority frontier with lazy invalidation.
///
/// Superseded records are never removed when they are replaced; they stay
/// in the heap and are discarded once they surface at the front.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
}

impl Frontier {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    pub(crate) fn push<E: Entry>(&mut self, slot: usize, node: &SearchNode<E>) {
        self.heap.push(FrontierEntry {
            total_estimate: node.total_estimate,
            heuristic: node.heuristic,
            sequence: node.sequence,
            slot,
        });
    }

    #[inline]
    pub(crate) fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|entry| entry.slot)
    }

    /// Drops leading entries whose record is no longer valid,
    /// returning how many were dropped.
    pub(crate) fn discard_invalid<E: Entry>(&mut self, nodes: &[SearchNode<E>]) -> usize {
        let mut discarded = 0;
        while self
            .heap
            .peek()
            .is_some_and(|entry| !nodes[entry.slot].valid)
        {
            self.heap.pop();
            discarded += 1;
        }
        discarded
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
