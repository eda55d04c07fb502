use std::fmt::Debug;

/// Stable index of a candidate inside a `CandidateArena`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CandidateId(usize);

/// A node reached during a search, with the weight accumulated from the search root
/// and the candidate it was reached from
#[derive(Debug, Clone)]
pub struct SearchCandidate<N, W> {
    pub node: N,
    pub weight: W,
    pub parent: Option<CandidateId>,
}

/// Append-only storage for the candidates of one search run.
///
/// Forward and backward search trees live side by side in the same arena; parent
/// links are indices, so a candidate stays valid for as long as the arena does.
#[derive(Debug)]
pub struct CandidateArena<N, W> {
    candidates: Vec<SearchCandidate<N, W>>,
}

impl<N, W> Default for CandidateArena<N, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, W> CandidateArena<N, W> {
    pub fn new() -> Self {
        CandidateArena {
            candidates: Vec::new(),
        }
    }

    /// Stores a new candidate and returns its index
    pub fn push(&mut self, node: N, parent: Option<CandidateId>, weight: W) -> CandidateId {
        let id = CandidateId(self.candidates.len());
        self.candidates.push(SearchCandidate { node, weight, parent });
        id
    }

    /// Creates a search root (no parent, zero weight)
    pub fn root(&mut self, node: N) -> CandidateId
    where
        W: num_traits::Zero,
    {
        self.push(node, None, W::zero())
    }

    pub fn get(&self, id: CandidateId) -> &SearchCandidate<N, W> {
        &self.candidates[id.0]
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Walks from a candidate up to its search root, the candidate itself first
    pub fn ancestors(&self, id: CandidateId) -> Ancestors<'_, N, W> {
        Ancestors {
            arena: self,
            next: Some(id),
        }
    }
}

/// Iterator over a candidate and its parents, ending at the search root
pub struct Ancestors<'a, N, W> {
    arena: &'a CandidateArena<N, W>,
    next: Option<CandidateId>,
}

impl<'a, N, W> Iterator for Ancestors<'a, N, W> {
    type Item = &'a SearchCandidate<N, W>;

    fn next(&mut self) -> Option<Self::Item> {
        let candidate = self.arena.get(self.next?);
        self.next = candidate.parent;
        Some(candidate)
    }
}

/// A complete start-to-end solution: a forward candidate and a backward candidate
/// sitting on the same node.
///
/// `weight` is the forward terminal's weight plus the backward terminal's weight.
#[derive(Debug, Clone, Copy)]
pub struct SearchSolution<W> {
    pub weight: W,
    pub forward: CandidateId,
    pub backward: CandidateId,
}

impl<W> SearchSolution<W>
where
    W: Copy + PartialOrd + Debug,
{
    /// Returns true if `weight` beats this solution
    pub fn is_improved_by(&self, weight: W) -> bool {
        weight < self.weight
    }
}
