use crate::graph::{NodeId, Weight};
use crate::path::Path;

/// Iterator over the proper prefixes of a path, from the single start node up to
/// the path minus its last node
#[derive(Debug)]
pub struct RootPaths<'a, N, W> {
    path: &'a Path<N, W>,
    next_len: usize,
}

impl<'a, N, W> RootPaths<'a, N, W> {
    pub(crate) fn new(path: &'a Path<N, W>) -> Self {
        RootPaths { path, next_len: 1 }
    }
}

impl<'a, N, W> Iterator for RootPaths<'a, N, W>
where
    N: NodeId,
    W: Weight,
{
    type Item = Path<N, W>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_len >= self.path.len() {
            return None;
        }
        let root = self.path.prefix(self.next_len);
        self.next_len += 1;
        Some(root)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.path.len().saturating_sub(self.next_len);
        (remaining, Some(remaining))
    }
}

impl<'a, N, W> ExactSizeIterator for RootPaths<'a, N, W>
where
    N: NodeId,
    W: Weight,
{
}
