pub mod banned;
pub mod candidate;
pub mod priority_queue;

pub use banned::BannedEdges;
pub use candidate::{CandidateArena, CandidateId, SearchCandidate, SearchSolution};
pub use priority_queue::Frontier;
