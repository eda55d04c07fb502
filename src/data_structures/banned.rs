use std::collections::{HashMap, HashSet};

use crate::graph::NodeId;

/// Edges that a single search run must not traverse, keyed by source node.
///
/// The backward direction checks an incoming edge `u -> v` as `(u, v)`, so one set
/// serves both directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannedEdges<N>
where
    N: NodeId,
{
    edges: HashMap<N, HashSet<N>>,
}

impl<N> Default for BannedEdges<N>
where
    N: NodeId,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N> BannedEdges<N>
where
    N: NodeId,
{
    /// Creates an empty set
    pub fn new() -> Self {
        BannedEdges {
            edges: HashMap::new(),
        }
    }

    /// Bans the edge `from -> to`. Returns false if it was already banned.
    pub fn ban(&mut self, from: N, to: N) -> bool {
        self.edges.entry(from).or_default().insert(to)
    }

    /// Returns true if `from -> to` must not be traversed
    pub fn is_banned(&self, from: &N, to: &N) -> bool {
        self.edges
            .get(from)
            .map_or(false, |targets| targets.contains(to))
    }

    /// Number of banned edges
    pub fn len(&self) -> usize {
        self.edges.values().map(|targets| targets.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.values().all(|targets| targets.is_empty())
    }
}

impl<N> FromIterator<(N, N)> for BannedEdges<N>
where
    N: NodeId,
{
    fn from_iter<I: IntoIterator<Item = (N, N)>>(iter: I) -> Self {
        let mut banned = BannedEdges::new();
        for (from, to) in iter {
            banned.ban(from, to);
        }
        banned
    }
}
