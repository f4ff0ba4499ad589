use log::{debug, trace};
use rustc_hash::FxHashMap;

use crate::search::frontier::Frontier;
use crate::search::{SearchNode, SearchOutcome};
use crate::{CostModel, Entry};

/// Best-first search from a start position toward a goal position.
///
/// The frontier is ordered by estimated total cost. When a cheaper route
/// to an already reached position is found, an open record is replaced
/// by a fresh copy and the old one invalidated in place, while a closed
/// record is updated and reopened. Invalid entries are dropped from the
/// frontier only when they reach its front.
///
/// If the goal is never taken from the frontier, the search ends on the
/// record with the smallest heuristic seen so far.
#[derive(Debug, Copy, Clone)]
pub struct AStar {
    node_limit: usize,
}

impl Default for AStar {
    fn default() -> Self {
        Self {
            node_limit: usize::MAX,
        }
    }
}

impl AStar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the number of positions a search may reach. Neighbours found
    /// once the cap is hit are skipped; this is not an error.
    pub fn with_node_limit(node_limit: usize) -> Self {
        Self { node_limit }
    }

    /// Searches from `start` to `goal`.
    ///
    /// The `neighbors` function receives a position and returns every
    /// position adjacent to it; repeated neighbours are allowed.
    pub fn search<E, C, FN, IN>(
        &self,
        start: E,
        goal: E,
        mut neighbors: FN,
        cost: &C,
    ) -> SearchOutcome<E>
    where
        E: Entry,
        C: CostModel<E> + ?Sized,
        FN: FnMut(&E) -> IN,
        IN: IntoIterator<Item = E>,
    {
        let mut sequence: u64 = 0;

        let mut nodes: Vec<SearchNode<E>> = Vec::with_capacity(64);
        let mut visited: FxHashMap<E, usize> = FxHashMap::default();
        let mut frontier = Frontier::with_capacity(256);

        nodes.push(SearchNode::start(start, cost.heuristic(start)));
        visited.insert(start, 0);
        frontier.push(0, &nodes[0]);

        let mut best = 0;
        let mut limited = false;
        let mut expanded = 0;
        let mut discarded = 0;

        while let Some(slot) = frontier.pop() {
            nodes[slot].open = false;
            let current = nodes[slot];

            if current.position == goal {
                best = slot;
                break;
            }

            expanded += 1;
            trace!(
                "Expanding {:?} (g={}, f={})",
                current.position,
                current.cost_so_far,
                current.total_estimate
            );

            for neighbor in neighbors(&current.position) {
                let tentative = current.cost_so_far + cost.edge_cost(current.position, neighbor);

                match visited.get(&neighbor).copied() {
                    None => {
                        if visited.len() >= self.node_limit {
                            limited = true;
                            continue;
                        }

                        sequence += 1;
                        let node = SearchNode::discovered(
                            neighbor,
                            tentative,
                            cost.heuristic(neighbor),
                            sequence,
                            current.position,
                        );

                        let next = nodes.len();
                        nodes.push(node);
                        visited.insert(neighbor, next);
                        frontier.push(next, &node);

                        if node.heuristic < nodes[best].heuristic {
                            best = next;
                        }
                    }
                    Some(existing) if tentative < nodes[existing].cost_so_far => {
                        if nodes[existing].open {
                            nodes[existing].valid = false;

                            sequence += 1;
                            let replacement =
                                nodes[existing].replacement(tentative, sequence, current.position);

                            let next = nodes.len();
                            nodes.push(replacement);
                            visited.insert(neighbor, next);
                            frontier.push(next, &replacement);
                        } else {
                            nodes[existing].reopen(tentative, current.position);
                            frontier.push(existing, &nodes[existing]);
                        }
                    }
                    Some(_) => {}
                }
            }

            discarded += frontier.discard_invalid(&nodes);
        }

        debug!(
            "Searched {start:?} -> {goal:?}: expanded={expanded}, visited={}, records={}, discarded={discarded}, pending={}, limited={limited}",
            visited.len(),
            nodes.len(),
            frontier.len(),
        );

        SearchOutcome {
            start,
            goal,
            terminal: best,
            nodes,
            visited,
            limited,
            expanded,
        }
    }
}
