use std::collections::HashMap;

use log::trace;

use crate::algorithm::PathSearch;
use crate::data_structures::{BannedEdges, CandidateArena, CandidateId, Frontier, SearchSolution};
use crate::graph::{Connection, Graph, NodeId, Weight};
use crate::path::Path;

/// Dijkstra search run simultaneously from both endpoints
#[derive(Debug, Default, Clone, Copy)]
pub struct BidirectionalDijkstra;

impl BidirectionalDijkstra {
    pub fn new() -> Self {
        BidirectionalDijkstra
    }
}

impl<N, W, G> PathSearch<N, W, G> for BidirectionalDijkstra
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        "Bidirectional Dijkstra"
    }

    fn search(&self, graph: &G, start: &N, end: &N, banned: &BannedEdges<N>) -> Option<Path<N, W>> {
        bidirectional_dijkstra(graph, start, end, banned)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

impl Direction {
    fn neighbours<N, W, G>(self, graph: &G, node: &N) -> Vec<Connection<N, W>>
    where
        N: NodeId,
        W: Weight,
        G: Graph<N, W>,
    {
        match self {
            Direction::Forward => graph.successors(node),
            Direction::Backward => graph.predecessors(node),
        }
    }

    /// Banned edges are stored in graph orientation, whichever side walks them
    fn is_banned<N: NodeId>(self, banned: &BannedEdges<N>, node: &N, neighbour: &N) -> bool {
        match self {
            Direction::Forward => banned.is_banned(node, neighbour),
            Direction::Backward => banned.is_banned(neighbour, node),
        }
    }
}

/// State of one of the two searches
struct SearchSide<N, W>
where
    W: Weight,
{
    direction: Direction,
    frontier: Frontier<W>,
    settled: HashMap<N, CandidateId>,
}

impl<N, W> SearchSide<N, W>
where
    N: NodeId,
    W: Weight,
{
    fn new(direction: Direction, root: CandidateId) -> Self {
        let mut frontier = Frontier::new();
        frontier.push(root, W::zero());
        SearchSide {
            direction,
            frontier,
            settled: HashMap::new(),
        }
    }

    /// Settles a popped candidate and relaxes its edges.
    ///
    /// Meetings with the opposite search are recorded both when the candidate's own node
    /// is settled on the other side and when a relaxed edge leads into such a node.
    fn expand<G>(
        &mut self,
        current: CandidateId,
        arena: &mut CandidateArena<N, W>,
        opposite: &HashMap<N, CandidateId>,
        graph: &G,
        banned: &BannedEdges<N>,
        best: &mut Option<SearchSolution<W>>,
    ) where
        G: Graph<N, W>,
    {
        let (node, weight) = {
            let candidate = arena.get(current);
            (candidate.node.clone(), candidate.weight)
        };

        if self.settled.contains_key(&node) {
            return;
        }
        self.settled.insert(node.clone(), current);

        if let Some(&other) = opposite.get(&node) {
            self.offer(current, other, arena, best);
        }

        for connection in self.direction.neighbours(graph, &node) {
            if self.direction.is_banned(banned, &node, &connection.destination)
                || self.settled.contains_key(&connection.destination)
            {
                continue;
            }
            let next_weight = weight + connection.weight;
            let met = opposite.get(&connection.destination).copied();
            let next = arena.push(connection.destination, Some(current), next_weight);
            if let Some(other) = met {
                self.offer(next, other, arena, best);
            }
            self.frontier.push(next, next_weight);
        }
    }

    /// Records the join of `own` with the opposite side's `other` if it beats `best`
    fn offer(
        &self,
        own: CandidateId,
        other: CandidateId,
        arena: &CandidateArena<N, W>,
        best: &mut Option<SearchSolution<W>>,
    ) {
        let (forward, backward) = match self.direction {
            Direction::Forward => (own, other),
            Direction::Backward => (other, own),
        };
        let weight = arena.get(forward).weight + arena.get(backward).weight;

        if best.as_ref().map_or(true, |solution| solution.is_improved_by(weight)) {
            trace!(
                "{:?} search met the other side on {:?}, total weight {:?}",
                self.direction,
                arena.get(own).node,
                weight
            );
            *best = Some(SearchSolution {
                weight,
                forward,
                backward,
            });
        }
    }
}

/// Meet-in-the-middle Dijkstra.
///
/// Each iteration pops the lightest candidate of both frontiers and stops as soon as
/// their weights add up to at least the best join found so far.
pub fn bidirectional_dijkstra<N, W, G>(
    graph: &G,
    start: &N,
    end: &N,
    banned: &BannedEdges<N>,
) -> Option<Path<N, W>>
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
{
    let mut arena: CandidateArena<N, W> = CandidateArena::new();
    let mut forward = SearchSide::new(Direction::Forward, arena.root(start.clone()));
    let mut backward = SearchSide::new(Direction::Backward, arena.root(end.clone()));
    let mut best: Option<SearchSolution<W>> = None;

    loop {
        let (forward_top, backward_top) = match (forward.frontier.pop(), backward.frontier.pop()) {
            (Some(f), Some(b)) => (f, b),
            _ => break,
        };

        if let Some(solution) = &best {
            if forward_top.1 + backward_top.1 >= solution.weight {
                break;
            }
        }

        forward.expand(forward_top.0, &mut arena, &backward.settled, graph, banned, &mut best);
        backward.expand(backward_top.0, &mut arena, &forward.settled, graph, banned, &mut best);
    }

    trace!(
        "bidirectional search settled {} forward and {} backward nodes, {} candidates",
        forward.settled.len(),
        backward.settled.len(),
        arena.len()
    );

    best.map(|solution| Path::from_solution(&arena, &solution, start.clone(), end.clone()))
}
