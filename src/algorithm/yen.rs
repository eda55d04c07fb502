use std::collections::HashSet;

use log::{debug, trace};

use crate::algorithm::PathSearch;
use crate::data_structures::BannedEdges;
use crate::graph::{Graph, NodeId, Weight};
use crate::path::{Path, PathQueue};

/// Yen's k-shortest loopless paths on top of any point-to-point search
#[derive(Debug, Clone, Copy)]
pub struct Yen<S> {
    search: S,
}

impl<S> Yen<S> {
    /// Creates an enumerator driven by `search`
    pub fn new(search: S) -> Self {
        Yen { search }
    }

    /// Returns the underlying search
    pub fn search(&self) -> &S {
        &self.search
    }

    /// Returns up to `k` loopless paths from `start` to `end`, lightest first
    pub fn k_shortest_paths<N, W, G>(&self, graph: &G, start: &N, end: &N, k: usize) -> Vec<Path<N, W>>
    where
        N: NodeId,
        W: Weight,
        G: Graph<N, W>,
        S: PathSearch<N, W, G>,
    {
        k_shortest_paths(graph, start, end, k, |graph, from, to, banned| {
            self.search.search(graph, from, to, banned)
        })
    }
}

/// Enumerates up to `k` loopless paths from `start` to `end` in non-decreasing weight order.
///
/// `search` answers the deviation sub-problems: lightest path between two nodes that
/// avoids a set of banned edges. Fewer than `k` paths means the graph has no more.
/// With `k == 0` the search is never called.
pub fn k_shortest_paths<N, W, G, F>(graph: &G, start: &N, end: &N, k: usize, mut search: F) -> Vec<Path<N, W>>
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
    F: FnMut(&G, &N, &N, &BannedEdges<N>) -> Option<Path<N, W>>,
{
    if k == 0 {
        return Vec::new();
    }

    let first = match search(graph, start, end, &BannedEdges::new()) {
        Some(path) => path,
        None => {
            debug!("no path from {:?} to {:?}", start, end);
            return Vec::new();
        }
    };

    let mut accepted: Vec<Path<N, W>> = Vec::with_capacity(k);
    let mut known: HashSet<Vec<N>> = HashSet::new();
    let mut candidates = PathQueue::new();

    known.insert(first.node_sequence());
    candidates.push(first);

    while let Some(path) = candidates.pop() {
        debug!("accepted path #{} with weight {:?}", accepted.len() + 1, path.weight());
        let roots = path.root_paths();
        accepted.push(path);
        if accepted.len() >= k {
            break;
        }

        for root in roots {
            let banned = deviation_bans(graph, &accepted, &root);
            let spur = &root.last_node().node;

            let suffix = match search(graph, spur, end, &banned) {
                Some(suffix) => suffix,
                None => continue,
            };

            let candidate = root.merge_with(&suffix);
            if known.insert(candidate.node_sequence()) {
                trace!("deviation at {:?} gives weight {:?}", spur, candidate.weight());
                candidates.push(candidate);
            } else {
                trace!("deviation at {:?} repeats a known path", spur);
            }
        }
    }

    accepted
}

/// Edges the search from `root`'s last node must avoid.
///
/// Every accepted path sharing `root` has its next edge banned, and every edge entering
/// a node of `root` other than its last is banned too, so the suffix cannot loop back
/// into the prefix.
fn deviation_bans<N, W, G>(graph: &G, accepted: &[Path<N, W>], root: &Path<N, W>) -> BannedEdges<N>
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
{
    let mut banned: BannedEdges<N> = accepted
        .iter()
        .filter_map(|path| path.outgoing_edge_for_sub_path(root))
        .collect();

    let spur = root.len() - 1;
    for element in &root.elements()[..spur] {
        for connection in graph.predecessors(&element.node) {
            banned.ban(connection.destination, element.node.clone());
        }
    }

    banned
}
