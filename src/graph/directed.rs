use crate::graph::traits::{Connection, Graph, MutableGraph, NodeId, Weight};
use std::collections::HashMap;

/// A directed graph implementation using adjacency lists keyed by node identifier
#[derive(Debug, Clone)]
pub struct DirectedGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Outgoing edges for each node: node -> [(target, weight)]
    outgoing_edges: HashMap<N, Vec<(N, W)>>,

    /// Incoming edges for each node: node -> [(source, weight)]
    incoming_edges: HashMap<N, Vec<(N, W)>>,
}

impl<N, W> Default for DirectedGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, W> DirectedGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            outgoing_edges: HashMap::new(),
            incoming_edges: HashMap::new(),
        }
    }

    /// Creates a new directed graph with room for the specified number of nodes
    pub fn with_capacity(nodes: usize) -> Self {
        DirectedGraph {
            outgoing_edges: HashMap::with_capacity(nodes),
            incoming_edges: HashMap::with_capacity(nodes),
        }
    }

    /// Builds a graph from `(from, to, weight)` triples. Negative-weight edges are skipped.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N, W)>,
    {
        let mut graph = DirectedGraph::new();
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight);
        }
        graph
    }

    /// Iterates over every node identifier
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.outgoing_edges.keys()
    }

    /// Iterates over every edge as (from, to, weight)
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N, W)> + '_ {
        self.outgoing_edges
            .iter()
            .flat_map(|(from, targets)| targets.iter().map(move |(to, w)| (from, to, *w)))
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.edges().all(|(_, _, weight)| weight >= W::zero())
    }
}

impl<N, W> Graph<N, W> for DirectedGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    fn successors(&self, node: &N) -> Vec<Connection<N, W>> {
        self.outgoing_edges
            .get(node)
            .map(|edges| {
                edges
                    .iter()
                    .map(|(to, w)| Connection::new(to.clone(), *w))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn predecessors(&self, node: &N) -> Vec<Connection<N, W>> {
        self.incoming_edges
            .get(node)
            .map(|edges| {
                edges
                    .iter()
                    .map(|(from, w)| Connection::new(from.clone(), *w))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn edge_weight(&self, from: &N, to: &N) -> Option<W> {
        self.outgoing_edges
            .get(from)?
            .iter()
            .find(|(target, _)| target == to)
            .map(|(_, weight)| *weight)
    }

    fn has_node(&self, node: &N) -> bool {
        self.outgoing_edges.contains_key(node)
    }

    fn node_count(&self) -> usize {
        self.outgoing_edges.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing_edges.values().map(|edges| edges.len()).sum()
    }
}

impl<N, W> MutableGraph<N, W> for DirectedGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    fn add_node(&mut self, node: N) -> bool {
        if self.outgoing_edges.contains_key(&node) {
            return false;
        }
        self.outgoing_edges.insert(node.clone(), Vec::new());
        self.incoming_edges.insert(node, Vec::new());
        true
    }

    fn add_edge(&mut self, from: N, to: N, weight: W) -> bool {
        if weight < W::zero() {
            return false;
        }

        if self.update_edge_weight(&from, &to, weight) {
            return true;
        }

        self.add_node(from.clone());
        self.add_node(to.clone());

        if let Some(outgoing) = self.outgoing_edges.get_mut(&from) {
            outgoing.push((to.clone(), weight));
        }
        if let Some(incoming) = self.incoming_edges.get_mut(&to) {
            incoming.push((from, weight));
        }

        true
    }

    fn remove_edge(&mut self, from: &N, to: &N) -> bool {
        let mut removed = false;

        // Remove from outgoing edges
        if let Some(outgoing) = self.outgoing_edges.get_mut(from) {
            let len_before = outgoing.len();
            outgoing.retain(|(target, _)| target != to);
            removed = len_before > outgoing.len();
        }

        // Remove from incoming edges
        if let Some(incoming) = self.incoming_edges.get_mut(to) {
            incoming.retain(|(source, _)| source != from);
        }

        removed
    }

    fn update_edge_weight(&mut self, from: &N, to: &N, weight: W) -> bool {
        if weight < W::zero() {
            return false;
        }

        let mut updated = false;

        if let Some(outgoing) = self.outgoing_edges.get_mut(from) {
            if let Some(edge) = outgoing.iter_mut().find(|(target, _)| target == to) {
                edge.1 = weight;
                updated = true;
            }
        }

        if let Some(incoming) = self.incoming_edges.get_mut(to) {
            if let Some(edge) = incoming.iter_mut().find(|(source, _)| source == from) {
                edge.1 = weight;
            }
        }

        updated
    }
}
