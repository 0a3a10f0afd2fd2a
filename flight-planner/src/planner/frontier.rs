//! Search frontiers: FIFO queue or min-priority queue.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use super::rank::{CostKey, Objective};
use super::search::SearchState;

/// A heap entry ordered by cost, then by insertion order.
pub(crate) struct Queued {
    cost: CostKey,
    seq: u64,
    state: SearchState,
}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.seq == other.seq
    }
}

impl Eq for Queued {}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Queued {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; invert for lowest cost, then oldest, first
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// States waiting to be expanded.
pub(crate) enum Frontier {
    /// Breadth-first: states come out in the order they went in.
    Fifo(VecDeque<SearchState>),
    /// Lowest cost first; equal costs come out in insertion order.
    Priority {
        heap: BinaryHeap<Queued>,
        objective: Objective,
        next_seq: u64,
    },
}

impl Frontier {
    /// Create the frontier an objective explores with.
    pub(crate) fn for_objective(objective: Objective) -> Self {
        if objective.explores_breadth_first() {
            Frontier::Fifo(VecDeque::new())
        } else {
            Frontier::Priority {
                heap: BinaryHeap::new(),
                objective,
                next_seq: 0,
            }
        }
    }

    pub(crate) fn push(&mut self, state: SearchState) {
        match self {
            Frontier::Fifo(queue) => queue.push_back(state),
            Frontier::Priority {
                heap,
                objective,
                next_seq,
            } => {
                let cost = objective.cost(&state.score());
                heap.push(Queued {
                    cost,
                    seq: *next_seq,
                    state,
                });
                *next_seq += 1;
            }
        }
    }

    pub(crate) fn pop(&mut self) -> Option<SearchState> {
        match self {
            Frontier::Fifo(queue) => queue.pop_front(),
            Frontier::Priority { heap, .. } => heap.pop().map(|queued| queued.state),
        }
    }

    pub(crate) fn len(&self) -> usize {
        match self {
            Frontier::Fifo(queue) => queue.len(),
            Frontier::Priority { heap, .. } => heap.len(),
        }
    }
}
