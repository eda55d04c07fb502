use log::debug;
use rayon::prelude::*;

use crate::algorithm::{shortest_path, SearchMode};
use crate::graph::{Graph, NodeId, Weight};
use crate::path::Path;

/// Answers many independent point-to-point queries against one graph in parallel.
///
/// The graph is only read, so it is shared across the rayon workers as-is. Results come
/// back in query order.
pub fn shortest_paths_batch<N, W, G>(graph: &G, queries: &[(N, N)], mode: SearchMode) -> Vec<Option<Path<N, W>>>
where
    N: NodeId + Send + Sync,
    W: Weight + Send + Sync,
    G: Graph<N, W> + Sync,
{
    debug!("running {} {:?} queries in parallel", queries.len(), mode);
    queries
        .par_iter()
        .map(|(start, end)| shortest_path(graph, start, end, mode))
        .collect()
}
