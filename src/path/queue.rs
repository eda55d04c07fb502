use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::graph::{NodeId, Weight};
use crate::path::Path;

/// Entry in the candidate queue: ordered by weight, then by arrival
#[derive(Debug)]
struct QueuedPath<N, W> {
    weight: W,
    sequence: u64,
    path: Path<N, W>,
}

impl<N, W: Ord> Ord for QueuedPath<N, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl<N, W: Ord> PartialOrd for QueuedPath<N, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N, W: Ord> PartialEq for QueuedPath<N, W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N, W: Ord> Eq for QueuedPath<N, W> {}

/// Min-priority queue of complete paths. Paths of equal weight come out in the
/// order they went in.
#[derive(Debug)]
pub struct PathQueue<N, W> {
    heap: BinaryHeap<QueuedPath<N, W>>,
    pushed: u64,
}

impl<N, W> Default for PathQueue<N, W>
where
    N: NodeId,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, W> PathQueue<N, W>
where
    N: NodeId,
    W: Weight,
{
    pub fn new() -> Self {
        PathQueue {
            heap: BinaryHeap::new(),
            pushed: 0,
        }
    }

    pub fn push(&mut self, path: Path<N, W>) {
        self.heap.push(QueuedPath {
            weight: path.weight(),
            sequence: self.pushed,
            path,
        });
        self.pushed += 1;
    }

    /// Removes the lightest path
    pub fn pop(&mut self) -> Option<Path<N, W>> {
        self.heap.pop().map(|queued| queued.path)
    }

    pub fn peek_weight(&self) -> Option<W> {
        self.heap.peek().map(|queued| queued.weight)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
