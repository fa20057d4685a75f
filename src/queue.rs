//! Min-ordered queue of tree nodes.
//!
//! Entries are ordered by frequency, then by insertion sequence, so the
//! extraction order among equal frequencies is first-in first-out and every
//! build over the same frequency table yields the same tree.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::tree::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    frequency: u64,
    seq: u64,
    node: NodeId,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-priority queue
        other
            .frequency
            .cmp(&self.frequency)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority queue of node handles keyed by frequency.
#[derive(Debug, Default)]
pub struct NodeQueue {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl NodeQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `node` with weight `frequency`.
    pub fn push(&mut self, node: NodeId, frequency: u64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            frequency,
            seq,
            node,
        });
    }

    /// Remove the node of smallest frequency (earliest inserted on ties).
    pub fn pop_min(&mut self) -> Option<(NodeId, u64)> {
        self.heap.pop().map(|e| (e.node, e.frequency))
    }

    /// Number of queued nodes.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_pop_min_order() {
        let mut q = NodeQueue::new();
        q.push(NodeId(0), 5);
        q.push(NodeId(1), 1);
        q.push(NodeId(2), 3);
        assert_eq!(q.len(), 3);
        assert_eq!(q.pop_min(), Some((NodeId(1), 1)));
        assert_eq!(q.pop_min(), Some((NodeId(2), 3)));
        assert_eq!(q.pop_min(), Some((NodeId(0), 5)));
        assert_eq!(q.pop_min(), None);
        assert!(q.is_empty());
    }

    #[test]
    fn test_ties_are_fifo() {
        let mut q = NodeQueue::new();
        for i in 0..4 {
            q.push(NodeId(i), 7);
        }
        let order: Vec<usize> = std::iter::from_fn(|| q.pop_min()).map(|(n, _)| n.0).collect();
        assert_eq!(order, vec![0, 1, 2, 3]);
    }

    proptest! {
        #[test]
        fn prop_pops_sorted(freqs in prop::collection::vec(0u64..50, 0..64)) {
            let mut q = NodeQueue::new();
            for (i, &f) in freqs.iter().enumerate() {
                q.push(NodeId(i), f);
            }
            let popped: Vec<u64> = std::iter::from_fn(|| q.pop_min()).map(|(_, f)| f).collect();
            let mut expected = freqs.clone();
            expected.sort_unstable();
            prop_assert_eq!(popped, expected);
        }
    }
}
