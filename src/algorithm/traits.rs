use serde::{Deserialize, Serialize};

use crate::data_structures::BannedEdges;
use crate::graph::{Graph, NodeId, Weight};
use crate::path::Path;

/// Trait for point-to-point shortest path searches
///
/// A search returns `None` when `end` cannot be reached from `start` without
/// crossing a banned edge.
pub trait PathSearch<N, W, G>
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
{
    /// Find the lightest path from `start` to `end` that avoids every banned edge
    fn search(&self, graph: &G, start: &N, end: &N, banned: &BannedEdges<N>) -> Option<Path<N, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Find the lightest path with nothing banned
    fn shortest_path(&self, graph: &G, start: &N, end: &N) -> Option<Path<N, W>> {
        self.search(graph, start, end, &BannedEdges::new())
    }
}

/// Which engine answers a point-to-point query. Both return paths of the same weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchMode {
    /// Forward-only Dijkstra, stops when the destination is popped
    Vanilla,
    /// Forward and backward Dijkstra meeting in the middle
    #[default]
    Bidirectional,
}
