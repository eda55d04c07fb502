//! kshortest - shortest and k-shortest loopless paths over caller-supplied graphs
//!
//! The graph is consumed through the read-only [`Graph`] trait: successors, predecessors
//! and edge weights. On top of it the crate offers a single-direction and a bidirectional
//! Dijkstra search, and Yen's algorithm, which enumerates the k lightest loopless paths
//! by repeatedly deviating from the ones already found.
//!
//! Edge weights must be non-negative.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod path;
pub mod web;

pub use algorithm::{
    bidirectional_dijkstra, dijkstra, k_shortest_paths, shortest_path, shortest_paths_batch,
    BidirectionalDijkstra, Dijkstra, PathSearch, SearchMode, Yen,
};
pub use data_structures::BannedEdges;
/// Re-export main types for convenient use
pub use graph::{Connection, DirectedGraph, Graph, MutableGraph};
pub use path::{Path, PathElement};

/// Error types for the library
///
/// A missing path is not an error: searches return `Option` for that.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("A path needs at least one element")]
    EmptyPath,

    #[error("The first element of a path must have zero weight")]
    NonZeroStart,

    #[error("Path weight decreases at element {index}")]
    NonMonotonicWeight { index: usize },

    #[error("Negative edge weight: {0}")]
    NegativeWeight(f64),

    #[error("Unknown node: {0}")]
    UnknownNode(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
