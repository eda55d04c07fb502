pub mod traits;
pub mod dijkstra;
pub mod bidirectional;
pub mod yen;
pub mod batch;

pub use traits::{PathSearch, SearchMode};
pub use batch::shortest_paths_batch;
pub use bidirectional::{bidirectional_dijkstra, BidirectionalDijkstra};
pub use dijkstra::{dijkstra, Dijkstra};
pub use yen::{k_shortest_paths, Yen};

use crate::data_structures::BannedEdges;
use crate::graph::{Graph, NodeId, Weight};
use crate::path::Path;

/// Lightest path from `start` to `end` using the engine selected by `mode`
pub fn shortest_path<N, W, G>(graph: &G, start: &N, end: &N, mode: SearchMode) -> Option<Path<N, W>>
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
{
    mode.search(graph, start, end, &BannedEdges::new())
}

impl<N, W, G> PathSearch<N, W, G> for SearchMode
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        match self {
            SearchMode::Vanilla => "Dijkstra",
            SearchMode::Bidirectional => "Bidirectional Dijkstra",
        }
    }

    fn search(&self, graph: &G, start: &N, end: &N, banned: &BannedEdges<N>) -> Option<Path<N, W>> {
        match self {
            SearchMode::Vanilla => dijkstra(graph, start, end, banned),
            SearchMode::Bidirectional => bidirectional_dijkstra(graph, start, end, banned),
        }
    }
}
