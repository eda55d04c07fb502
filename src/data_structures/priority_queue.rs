use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

use crate::data_structures::candidate::CandidateId;

/// Min-priority queue of search candidates keyed by accumulated weight.
///
/// Entries are never updated in place: a node relaxed twice is pushed twice and the
/// search skips whichever copy is popped after the node is settled.
#[derive(Debug)]
pub struct Frontier<W>
where
    W: Ord + Copy + Debug,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(W, CandidateId)>>,
}

impl<W> Default for Frontier<W>
where
    W: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Frontier<W>
where
    W: Ord + Copy + Debug,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if the frontier is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a candidate with its accumulated weight
    pub fn push(&mut self, candidate: CandidateId, weight: W) {
        self.heap.push(Reverse((weight, candidate)));
    }

    /// Removes the lowest-weight candidate
    pub fn pop(&mut self) -> Option<(CandidateId, W)> {
        self.heap.pop().map(|Reverse((weight, candidate))| (candidate, weight))
    }

    /// Returns the lowest weight currently queued
    pub fn peek_weight(&self) -> Option<W> {
        self.heap.peek().map(|Reverse((weight, _))| *weight)
    }
}
