pub mod traits;
pub mod directed;
pub mod generators;

pub use traits::{Connection, Graph, MutableGraph, NodeId, Weight};
pub use directed::DirectedGraph;
