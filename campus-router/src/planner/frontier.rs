//! Min-priority frontier shared by both solvers.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::domain::NodeId;

#[derive(Debug, Clone, Copy)]
struct Entry {
    key: f64,
    seq: u64,
    node: NodeId,
}

// Min-heap by key, then by push order (reversed from standard Rust BinaryHeap)
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .key
            .total_cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// Priority queue of nodes keyed by the cost at push time.
///
/// A node may be queued several times; older entries simply come out later.
/// Equal keys pop in the order they were pushed.
#[derive(Debug, Default)]
pub(super) struct Frontier {
    heap: BinaryHeap<Entry>,
    pushed: u64,
}

impl Frontier {
    pub(super) fn new() -> Self {
        Self::default()
    }

    pub(super) fn push(&mut self, node: NodeId, key: f64) {
        self.heap.push(Entry {
            key,
            seq: self.pushed,
            node,
        });
        self.pushed += 1;
    }

    pub(super) fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|entry| entry.node)
    }

    pub(super) fn pushed(&self) -> u64 {
        self.pushed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_smallest_key_first() {
        let mut frontier = Frontier::new();
        frontier.push(NodeId(1), 5.0);
        frontier.push(NodeId(2), 1.0);
        frontier.push(NodeId(3), 3.0);

        assert_eq!(frontier.pop(), Some(NodeId(2)));
        assert_eq!(frontier.pop(), Some(NodeId(3)));
        assert_eq!(frontier.pop(), Some(NodeId(1)));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn ties_pop_in_push_order() {
        let mut frontier = Frontier::new();
        frontier.push(NodeId(9), 2.0);
        frontier.push(NodeId(4), 2.0);
        frontier.push(NodeId(7), 2.0);

        assert_eq!(frontier.pop(), Some(NodeId(9)));
        assert_eq!(frontier.pop(), Some(NodeId(4)));
        assert_eq!(frontier.pop(), Some(NodeId(7)));
        assert_eq!(frontier.pushed(), 3);
    }

    #[test]
    fn duplicate_entries_are_kept() {
        let mut frontier = Frontier::new();
        frontier.push(NodeId(1), 10.0);
        frontier.push(NodeId(1), 4.0);

        assert_eq!(frontier.pop(), Some(NodeId(1)));
        assert_eq!(frontier.pop(), Some(NodeId(1)));
        assert_eq!(frontier.pop(), None);
    }
}
