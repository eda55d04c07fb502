//! Paths produced by the search engines and the algebra the deviation
//! enumerator needs on them: prefixes, prefix tests and splicing.

pub mod iter;
pub mod queue;

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::data_structures::{CandidateArena, SearchSolution};
use crate::graph::{NodeId, Weight};
use crate::{Error, Result};

pub use iter::RootPaths;
pub use queue::PathQueue;

/// A node of a path with the weight accumulated from the path's own start
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathElement<N, W> {
    pub node: N,
    pub weight: W,
}

impl<N, W> PathElement<N, W> {
    pub fn new(node: N, weight: W) -> Self {
        PathElement { node, weight }
    }
}

/// A loopless walk through the graph.
///
/// Elements are root first, the first one has weight zero and weights never decrease.
/// `start` and `end` label the query the path answers; a root path keeps the labels
/// of the path it was cut from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Path<N, W> {
    elements: Vec<PathElement<N, W>>,
    weight: W,
    start: N,
    end: N,
}

impl<N, W> Path<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Builds a path from explicit elements, checking the weight invariants
    pub fn from_elements(elements: Vec<PathElement<N, W>>, start: N, end: N) -> Result<Self> {
        let first = elements.first().ok_or(Error::EmptyPath)?;
        if first.weight != W::zero() {
            return Err(Error::NonZeroStart);
        }
        if let Some(index) = elements
            .windows(2)
            .position(|pair| pair[1].weight < pair[0].weight)
        {
            return Err(Error::NonMonotonicWeight { index: index + 1 });
        }
        Ok(Self::from_valid_elements(elements, start, end))
    }

    fn from_valid_elements(elements: Vec<PathElement<N, W>>, start: N, end: N) -> Self {
        let weight = elements
            .last()
            .map_or_else(W::zero, |element| element.weight);
        Path {
            elements,
            weight,
            start,
            end,
        }
    }

    /// Rebuilds the flat path described by a bidirectional solution.
    ///
    /// The forward chain is emitted root first. The backward chain stores distances to
    /// `end`, so each of its nodes is re-weighted from the join node onwards; the join
    /// node itself is only emitted once.
    pub fn from_solution(
        arena: &CandidateArena<N, W>,
        solution: &SearchSolution<W>,
        start: N,
        end: N,
    ) -> Self {
        let mut elements: Vec<PathElement<N, W>> = arena
            .ancestors(solution.forward)
            .map(|candidate| PathElement::new(candidate.node.clone(), candidate.weight))
            .collect();
        elements.reverse();

        let mut absolute = arena.get(solution.forward).weight;
        let mut remaining = arena.get(solution.backward).weight;
        for candidate in arena.ancestors(solution.backward).skip(1) {
            absolute = absolute + (remaining - candidate.weight);
            remaining = candidate.weight;
            elements.push(PathElement::new(candidate.node.clone(), absolute));
        }

        Self::from_valid_elements(elements, start, end)
    }

    pub fn elements(&self) -> &[PathElement<N, W>] {
        &self.elements
    }

    /// Total weight, always the weight of the last element
    pub fn weight(&self) -> W {
        self.weight
    }

    pub fn start(&self) -> &N {
        &self.start
    }

    pub fn end(&self) -> &N {
        &self.end
    }

    /// Number of nodes on the path
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.elements.iter().map(|element| &element.node)
    }

    pub fn node_sequence(&self) -> Vec<N> {
        self.nodes().cloned().collect()
    }

    pub fn last_node(&self) -> &PathElement<N, W> {
        &self.elements[self.elements.len() - 1]
    }

    /// True when no node appears twice
    pub fn is_loopless(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.elements.len());
        self.nodes().all(|node| seen.insert(node))
    }

    /// The path made of the first `len` elements
    pub(crate) fn prefix(&self, len: usize) -> Self {
        Self::from_valid_elements(
            self.elements[..len].to_vec(),
            self.start.clone(),
            self.end.clone(),
        )
    }

    /// Every proper non-empty prefix, shortest first
    pub fn root_paths(&self) -> Vec<Self> {
        self.root_path_iter().collect()
    }

    /// Lazy version of [`Path::root_paths`]
    pub fn root_path_iter(&self) -> RootPaths<'_, N, W> {
        RootPaths::new(self)
    }

    /// True if `other`'s node sequence is a prefix of this path's (a path includes itself)
    pub fn includes_path(&self, other: &Self) -> bool {
        other.len() <= self.len()
            && self
                .nodes()
                .zip(other.nodes())
                .all(|(mine, theirs)| mine == theirs)
    }

    /// The edge this path takes right after `prefix`, if it starts with `prefix` and goes on
    pub fn outgoing_edge_for_sub_path(&self, prefix: &Self) -> Option<(N, N)> {
        let cut = prefix.len();
        if cut == 0 || cut >= self.len() || !self.includes_path(prefix) {
            return None;
        }
        Some((
            self.elements[cut - 1].node.clone(),
            self.elements[cut].node.clone(),
        ))
    }

    /// Appends `suffix` to this path.
    ///
    /// Suffix weights are shifted so that its first node lands on this path's last weight;
    /// when the suffix starts on this path's last node that node is not repeated.
    pub fn merge_with(&self, suffix: &Self) -> Self {
        let mut elements = Vec::with_capacity(self.len() + suffix.len());
        elements.extend(self.elements.iter().cloned());

        let junction = self.last_node();
        let skip = usize::from(junction.node == suffix.elements[0].node);

        let mut merged = junction.weight;
        let mut original = suffix.elements[0].weight;
        for element in suffix.elements.iter().skip(skip) {
            merged = merged + (element.weight - original);
            original = element.weight;
            elements.push(PathElement::new(element.node.clone(), merged));
        }

        Self::from_valid_elements(elements, self.start.clone(), suffix.end.clone())
    }
}

impl<N, W> fmt::Display for Path<N, W>
where
    N: fmt::Display,
    W: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, "-")?;
            }
            write!(f, "{}", element.node)?;
        }
        write!(f, " ({})", self.weight)
    }
}
