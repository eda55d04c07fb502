use std::collections::HashMap;

use log::trace;

use crate::algorithm::PathSearch;
use crate::data_structures::{BannedEdges, CandidateArena, Frontier, SearchSolution};
use crate::graph::{Graph, NodeId, Weight};
use crate::path::Path;

/// Classic single-direction Dijkstra search
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<N, W, G> PathSearch<N, W, G> for Dijkstra
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn search(&self, graph: &G, start: &N, end: &N, banned: &BannedEdges<N>) -> Option<Path<N, W>> {
        dijkstra(graph, start, end, banned)
    }
}

/// Forward-only search from `start`, finished the first time `end` is popped
pub fn dijkstra<N, W, G>(graph: &G, start: &N, end: &N, banned: &BannedEdges<N>) -> Option<Path<N, W>>
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
{
    let mut arena: CandidateArena<N, W> = CandidateArena::new();
    let mut frontier = Frontier::new();
    let mut settled = HashMap::new();

    let root = arena.root(start.clone());
    frontier.push(root, W::zero());

    while let Some((current, weight)) = frontier.pop() {
        let node = arena.get(current).node.clone();

        if node == *end {
            // The backward side of a one-way solution is a bare root on `end`
            let backward = arena.root(end.clone());
            let solution = SearchSolution {
                weight,
                forward: current,
                backward,
            };
            trace!(
                "dijkstra reached {:?} at weight {:?} after settling {} nodes",
                end,
                weight,
                settled.len()
            );
            return Some(Path::from_solution(&arena, &solution, start.clone(), end.clone()));
        }

        // Stale entry
        if settled.contains_key(&node) {
            continue;
        }
        settled.insert(node.clone(), current);

        for connection in graph.successors(&node) {
            if banned.is_banned(&node, &connection.destination)
                || settled.contains_key(&connection.destination)
            {
                continue;
            }
            let next_weight = weight + connection.weight;
            let next = arena.push(connection.destination, Some(current), next_weight);
            frontier.push(next, next_weight);
        }
    }

    trace!("dijkstra exhausted the frontier without reaching {:?}", end);
    None
}
