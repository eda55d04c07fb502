use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Sub;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

/// Identifier of a node in a caller-supplied graph
pub trait NodeId: Clone + Eq + Hash + Debug {}

impl<T> NodeId for T where T: Clone + Eq + Hash + Debug {}

/// Non-negative, totally ordered edge weight
///
/// Floating point weights go through `ordered_float::OrderedFloat`.
pub trait Weight: Copy + Ord + Zero + Sub<Output = Self> + Debug {}

impl<T> Weight for T where T: Copy + Ord + Zero + Sub<Output = T> + Debug {}

/// An edge seen from one of its endpoints: the node on the other side and the edge weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Connection<N, W> {
    /// Node on the other end of the edge
    pub destination: N,
    /// Edge weight
    pub weight: W,
}

impl<N, W> Connection<N, W> {
    pub fn new(destination: N, weight: W) -> Self {
        Connection { destination, weight }
    }
}

/// Read-only view of a weighted directed graph, as consumed by the search engines
///
/// Implementations must never report negative weights. The engines never mutate
/// the graph, so a `Sync` implementation can be searched from many threads at once.
pub trait Graph<N, W>: Debug
where
    N: NodeId,
    W: Weight,
{
    /// Returns the outgoing edges of a node
    fn successors(&self, node: &N) -> Vec<Connection<N, W>>;

    /// Returns the incoming edges of a node, each one expressed as (source, weight)
    fn predecessors(&self, node: &N) -> Vec<Connection<N, W>>;

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, from: &N, to: &N) -> Option<W>;

    /// Returns true if the node exists in the graph
    fn has_node(&self, node: &N) -> bool;

    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;
}

/// Trait for mutable graph operations
pub trait MutableGraph<N, W>: Graph<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Adds a node, returns false if it was already present
    fn add_node(&mut self, node: N) -> bool;

    /// Adds a directed edge between nodes with the given weight, creating missing endpoints.
    /// An existing edge gets its weight replaced.
    fn add_edge(&mut self, from: N, to: N, weight: W) -> bool;

    /// Removes an edge from the graph
    fn remove_edge(&mut self, from: &N, to: &N) -> bool;

    /// Updates the weight of an existing edge
    fn update_edge_weight(&mut self, from: &N, to: &N, weight: W) -> bool;
}
